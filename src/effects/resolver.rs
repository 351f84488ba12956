//! Space resolution - applying a tile's effect to the player on it.
//!
//! `SpaceResolver` is the single place where landing on a tile turns into
//! coin changes, event draws and offers. It never advances the turn; the
//! engine reads the returned [`SpaceOutcome`] and picks the next phase.

use crate::board::{TileId, TileKind};
use crate::core::{GameState, PlayerId, RandomSource};

use super::events::EventKind;
use super::outcome::SpaceOutcome;
use super::shop::ShopItem;

/// Resolves tile effects on game state.
pub struct SpaceResolver;

impl SpaceResolver {
    /// Apply the effect of the tile `player` is standing on.
    pub fn resolve(state: &mut GameState, player: PlayerId) -> SpaceOutcome {
        let tile = state.players[player].position;
        let kind = state.board.kind(tile);
        let rules = &state.config.rules;

        let outcome = match kind {
            TileKind::Blue => {
                let amount = rules.blue_reward;
                state.players[player].add_coins(amount as i32);
                SpaceOutcome::CoinsGained { amount }
            }

            TileKind::Red => {
                let applied = state.players[player].add_coins(-(rules.red_penalty as i32));
                SpaceOutcome::CoinsLost { amount: applied.unsigned_abs() }
            }

            TileKind::Event => {
                state.players[player].stats.events_triggered += 1;
                let kind = EventKind::draw(&mut state.rng);
                let outcome = kind.apply(&mut state.players, player, &mut state.rng);
                SpaceOutcome::Event { kind, outcome }
            }

            TileKind::Shop => {
                let items = ShopItem::affordable(state.players[player].coins);
                if items.is_empty() {
                    SpaceOutcome::ShopUnaffordable
                } else {
                    SpaceOutcome::ShopOffer { items }
                }
            }

            TileKind::Chance => {
                let rolled = state.rng.roll_in(rules.chance_min..=rules.chance_max);
                let applied = state.players[player].add_coins(rolled);
                SpaceOutcome::Chance { rolled, applied }
            }

            TileKind::Star => {
                let cost = rules.star_cost;
                let coins = state.players[player].coins;
                if coins >= cost {
                    SpaceOutcome::StarOffer { cost }
                } else {
                    SpaceOutcome::StarUnaffordable { cost, coins }
                }
            }

            TileKind::Start => SpaceOutcome::Nothing,
        };

        log::debug!("{} landed on {tile} ({}): {outcome}", player, kind.label());
        outcome
    }

    /// Pay for a star and move the star elsewhere.
    ///
    /// Returns the tile the star moved to, or `None` (with nothing changed)
    /// if the player cannot afford it.
    pub fn buy_star(state: &mut GameState, player: PlayerId) -> Option<TileId> {
        let cost = state.config.rules.star_cost;
        if !state.players[player].spend(cost) {
            return None;
        }

        state.players[player].stars += 1;
        let relocated = state.board.relocate_star(&mut state.rng);
        log::info!("{} bought a star for {cost} coins, star moved to {relocated}", player);
        Some(relocated)
    }

    /// Buy a shop item for `player`. Returns whether the purchase happened.
    pub fn buy_item(state: &mut GameState, player: PlayerId, item: ShopItem) -> bool {
        let bought = item.purchase(&mut state.players[player]);
        if bought {
            log::debug!("{} bought {}", player, item.name());
        }
        bought
    }
}
