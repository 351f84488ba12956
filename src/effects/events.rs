//! Event-tile catalog.
//!
//! Landing on an Event tile draws one entry uniformly. Each entry mutates
//! the players and reports what happened.

use serde::{Deserialize, Serialize};

use crate::core::{Player, PlayerId, PlayerMap, RandomSource};

/// Coins taken by a heist, capped by the victim's balance.
const HEIST_AMOUNT: u32 = 5;

/// Coins given to every player by a party.
const PARTY_AMOUNT: u32 = 3;

/// The event catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// Gain 5-10 coins.
    LuckyFind,
    /// Lose 1-5 coins.
    Oops,
    /// Steal up to 5 coins from a random rival.
    Heist,
    /// Everyone gains 3 coins.
    Party,
    /// Swap balances with a random rival.
    CoinSwap,
}

/// What an event did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventOutcome {
    Bonus { amount: u32 },
    Loss { amount: u32 },
    Stole { from: PlayerId, from_name: String, amount: u32 },
    Party { amount: u32 },
    Swapped { with: PlayerId, with_name: String },
    /// A rival-targeting event with no rival to target.
    NothingHappened,
}

impl std::fmt::Display for EventOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventOutcome::Bonus { amount } => write!(f, "+{amount} Coins! Lucky find!"),
            EventOutcome::Loss { amount } => write!(f, "-{amount} Coins! Oops!"),
            EventOutcome::Stole { from_name, amount, .. } => {
                write!(f, "Stole {amount} coins from {from_name}!")
            }
            EventOutcome::Party { amount } => write!(f, "Everyone +{amount} Coins! Party time!"),
            EventOutcome::Swapped { with_name, .. } => write!(f, "Coin Swap! Swapped coins with {with_name}"),
            EventOutcome::NothingHappened => write!(f, "Nothing happened"),
        }
    }
}

impl EventKind {
    /// Every event, in draw order.
    pub const ALL: [EventKind; 5] = [
        EventKind::LuckyFind,
        EventKind::Oops,
        EventKind::Heist,
        EventKind::Party,
        EventKind::CoinSwap,
    ];

    /// Uniformly draw an event.
    pub fn draw(rng: &mut impl RandomSource) -> Self {
        Self::ALL[rng.pick_index(Self::ALL.len())]
    }

    /// Apply the event for `actor`.
    pub fn apply(
        self,
        players: &mut PlayerMap<Player>,
        actor: PlayerId,
        rng: &mut impl RandomSource,
    ) -> EventOutcome {
        match self {
            EventKind::LuckyFind => {
                let amount = rng.roll_in(5..=10);
                players[actor].add_coins(amount);
                EventOutcome::Bonus { amount: amount as u32 }
            }

            EventKind::Oops => {
                let rolled = rng.roll_in(1..=5);
                let applied = players[actor].add_coins(-rolled);
                EventOutcome::Loss { amount: applied.unsigned_abs() }
            }

            EventKind::Heist => match pick_rival(players, actor, rng) {
                Some(victim) => {
                    let (thief, target) = players.pair_mut(actor, victim);
                    let amount = HEIST_AMOUNT.min(target.coins);
                    target.coins -= amount;
                    thief.add_coins(amount as i32);
                    EventOutcome::Stole {
                        from: victim,
                        from_name: target.name.clone(),
                        amount,
                    }
                }
                None => EventOutcome::NothingHappened,
            },

            EventKind::Party => {
                for player in players.values_mut() {
                    player.add_coins(PARTY_AMOUNT as i32);
                }
                EventOutcome::Party { amount: PARTY_AMOUNT }
            }

            EventKind::CoinSwap => match pick_rival(players, actor, rng) {
                Some(other) => {
                    let (me, them) = players.pair_mut(actor, other);
                    std::mem::swap(&mut me.coins, &mut them.coins);
                    EventOutcome::Swapped {
                        with: other,
                        with_name: them.name.clone(),
                    }
                }
                None => EventOutcome::NothingHappened,
            },
        }
    }
}

/// Uniformly pick a player other than `actor`.
fn pick_rival(players: &PlayerMap<Player>, actor: PlayerId, rng: &mut impl RandomSource) -> Option<PlayerId> {
    let rivals: Vec<PlayerId> = players.player_ids().filter(|&p| p != actor).collect();
    if rivals.is_empty() {
        None
    } else {
        Some(rivals[rng.pick_index(rivals.len())])
    }
}
