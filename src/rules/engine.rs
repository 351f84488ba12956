//! The turn state machine.
//!
//! A turn runs `Waiting -> Rolling -> Moving -> SpaceEvent` and back to
//! `Waiting` for the next player. Automatic steps happen in
//! [`TurnEngine::advance`]; every wait for the outside world is a
//! [`Phase`] that only [`TurnEngine::apply`] can leave:
//!
//! - `Waiting`: `Roll`
//! - `BranchChoice`: `ChooseBranch`
//! - `StarDecision`: `BuyStar` / `DeclineStar`
//! - `ShopDecision`: `BuyItem` / `LeaveShop`
//! - `Minigame`: `FinishMinigame`
//!
//! Tiles passed through mid-move never resolve, the star included. Only
//! the tile a move ends on does.

use smallvec::SmallVec;

use crate::board::TileId;
use crate::core::{Decision, GameState, RandomSource, RulesError};
use crate::effects::{SpaceOutcome, SpaceResolver};

use super::event::GameEvent;
use super::phase::Phase;
use super::round::RoundController;

/// The single authoritative dice roll: uniform in `1..=sides`.
pub fn roll_dice(rng: &mut impl RandomSource, sides: u8) -> u8 {
    rng.roll_in(1..=i32::from(sides)) as u8
}

/// Drives one game's turns.
pub struct TurnEngine;

impl TurnEngine {
    /// Feed an external decision to the machine.
    ///
    /// Rejected decisions leave the state untouched.
    pub fn apply(state: &mut GameState, decision: Decision) -> Result<(), RulesError> {
        log::debug!("{} in {}: {:?}", state.current_player, state.phase.name(), decision);

        match (state.phase.clone(), decision) {
            (Phase::GameOver, _) => Err(RulesError::GameOver),

            (Phase::Waiting, Decision::Roll) => {
                let value = roll_dice(&mut state.rng, state.config.rules.dice_sides);
                state.dice_value = Some(value);
                state.phase = Phase::Rolling { value };
                state.record(GameEvent::DiceRolled { value });
                Ok(())
            }

            (Phase::BranchChoice { options }, Decision::ChooseBranch(target)) => {
                if !options.contains(&target) {
                    return Err(RulesError::BranchNotOffered(target));
                }
                Self::step_to(state, target);
                state.phase = Phase::Moving;
                Ok(())
            }

            (Phase::StarDecision, Decision::BuyStar) => {
                let player = state.current_player;
                let cost = state.config.rules.star_cost;
                match SpaceResolver::buy_star(state, player) {
                    Some(relocated_to) => state.record(GameEvent::StarPurchased { cost, relocated_to }),
                    None => log::warn!("{player} could no longer afford the star"),
                }
                Self::end_turn(state);
                Ok(())
            }

            (Phase::StarDecision, Decision::DeclineStar) => {
                state.record(GameEvent::StarDeclined);
                Self::end_turn(state);
                Ok(())
            }

            (Phase::ShopDecision { offers }, Decision::BuyItem(item)) => {
                if !offers.contains(&item) {
                    return Err(RulesError::ItemNotOffered(item));
                }
                let player = state.current_player;
                if SpaceResolver::buy_item(state, player, item) {
                    state.record(GameEvent::ItemBought { item });
                }
                Self::end_turn(state);
                Ok(())
            }

            (Phase::ShopDecision { .. }, Decision::LeaveShop) => {
                Self::end_turn(state);
                Ok(())
            }

            (Phase::Minigame { .. }, Decision::FinishMinigame(ranking)) => {
                RoundController::apply_minigame_results(state, &ranking)?;
                if RoundController::end_round(state) {
                    log::info!("round {} of {}", state.round, state.config.total_rounds);
                    state.record(GameEvent::RoundStarted { round: state.round });
                    Self::start_turn(state);
                } else {
                    RoundController::finish_game(state);
                }
                Ok(())
            }

            (phase, decision) => Err(RulesError::WrongPhase {
                decision: decision.name(),
                phase: phase.name(),
            }),
        }
    }

    /// Take one automatic step.
    ///
    /// Fails without touching state if the machine is waiting for a
    /// decision or the game is over.
    pub fn advance(state: &mut GameState) -> Result<(), RulesError> {
        match state.phase {
            Phase::GameOver => return Err(RulesError::GameOver),
            ref phase if phase.needs_input() => {
                return Err(RulesError::AwaitingDecision { phase: phase.name() });
            }
            _ => {}
        }

        match state.phase {
            Phase::Rolling { value } => {
                state.moves_left = u32::from(value);
                state.phase = Phase::Moving;
            }
            Phase::Moving => Self::step(state),
            Phase::SpaceEvent => Self::land(state),
            _ => unreachable!("input phases are rejected above"),
        }
        Ok(())
    }

    /// Advance until a decision is needed or the game ends.
    ///
    /// Returns the number of automatic steps taken.
    pub fn run_until_blocked(state: &mut GameState) -> usize {
        let mut steps = 0;
        while Self::advance(state).is_ok() {
            steps += 1;
        }
        steps
    }

    /// Decisions the current phase accepts.
    ///
    /// In `Minigame` this is empty: the ranking comes from the minigame
    /// itself and any permutation of the players is accepted.
    #[must_use]
    pub fn legal_decisions(state: &GameState) -> Vec<Decision> {
        match &state.phase {
            Phase::Waiting => vec![Decision::Roll],
            Phase::BranchChoice { options } => options.iter().copied().map(Decision::ChooseBranch).collect(),
            Phase::StarDecision => vec![Decision::BuyStar, Decision::DeclineStar],
            Phase::ShopDecision { offers } => offers
                .iter()
                .copied()
                .map(Decision::BuyItem)
                .chain(std::iter::once(Decision::LeaveShop))
                .collect(),
            _ => Vec::new(),
        }
    }

    fn step(state: &mut GameState) {
        if state.moves_left == 0 {
            state.phase = Phase::SpaceEvent;
            return;
        }

        let here = state.current_tile();
        let options: SmallVec<[TileId; 2]> = state.board.successors(here).iter().copied().collect();
        if let [next] = options[..] {
            Self::step_to(state, next);
        } else {
            state.record(GameEvent::BranchOffered {
                at: here,
                options: options.to_vec(),
            });
            state.phase = Phase::BranchChoice { options };
        }
    }

    fn step_to(state: &mut GameState, to: TileId) {
        state.current_mut().position = to;
        state.moves_left -= 1;
        state.record(GameEvent::Stepped {
            to,
            moves_left: state.moves_left,
        });
    }

    fn land(state: &mut GameState) {
        let player = state.current_player;
        let tile = state.current_tile();
        let outcome = SpaceResolver::resolve(state, player);

        state.record(GameEvent::Landed {
            tile,
            outcome: outcome.clone(),
        });
        state.phase = match &outcome {
            SpaceOutcome::StarOffer { .. } => Phase::StarDecision,
            SpaceOutcome::ShopOffer { items } => Phase::ShopDecision { offers: items.clone() },
            _ => Phase::SpaceEvent,
        };
        state.last_outcome = Some(outcome);

        if state.phase == Phase::SpaceEvent {
            Self::end_turn(state);
        }
    }

    fn end_turn(state: &mut GameState) {
        state.moves_left = 0;
        if RoundController::next_player_turn(state) {
            Self::start_turn(state);
        } else {
            RoundController::start_minigame(state);
        }
    }

    fn start_turn(state: &mut GameState) {
        state.phase = Phase::Waiting;
        state.record(GameEvent::TurnStarted);
        log::debug!("round {}: {}'s turn", state.round, state.current().name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::TileKind;
    use crate::core::{BoardLayout, GameConfig, GameRng, PlayerId};
    use crate::effects::ShopItem;

    /// Starlight Island: 0 Start, 1 Blue, 2 Blue, 3 Red, 4 Event, 5 Blue,
    /// 6 Chance fork -> [7, 14], 8 Shop, 10 Star.
    fn island(players: usize) -> GameState {
        let config = GameConfig::new(players).with_board(BoardLayout::StarlightIsland);
        GameState::new(config, 99).unwrap()
    }

    /// Put the current player mid-move.
    fn moving(state: &mut GameState, at: u16, moves: u32) {
        state.current_mut().position = TileId::new(at);
        state.moves_left = moves;
        state.phase = Phase::Moving;
    }

    #[test]
    fn test_roll_dice_range() {
        let mut rng = GameRng::new(0);
        let mut seen = [false; 10];
        for _ in 0..500 {
            let value = roll_dice(&mut rng, 10);
            assert!((1..=10).contains(&value));
            seen[usize::from(value) - 1] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_roll_then_move() {
        let mut state = island(2);
        TurnEngine::apply(&mut state, Decision::Roll).unwrap();

        let Phase::Rolling { value } = state.phase else {
            panic!("expected Rolling, got {:?}", state.phase);
        };
        assert_eq!(state.dice_value, Some(value));

        TurnEngine::advance(&mut state).unwrap();
        assert_eq!(state.phase, Phase::Moving);
        assert_eq!(state.moves_left, u32::from(value));
    }

    #[test]
    fn test_single_successor_steps() {
        let mut state = island(2);
        moving(&mut state, 0, 3);

        TurnEngine::advance(&mut state).unwrap();
        assert_eq!(state.current_tile(), TileId::new(1));
        assert_eq!(state.moves_left, 2);
        assert_eq!(state.phase, Phase::Moving);
    }

    #[test]
    fn test_branch_choice() {
        let mut state = island(2);
        moving(&mut state, 6, 2);

        TurnEngine::advance(&mut state).unwrap();
        assert_eq!(state.pending_branch_choice(), Some(&[TileId::new(7), TileId::new(14)][..]));
        assert_eq!(state.moves_left, 2);
        assert_eq!(
            TurnEngine::legal_decisions(&state),
            vec![Decision::ChooseBranch(TileId::new(7)), Decision::ChooseBranch(TileId::new(14))]
        );

        let before = state.clone();
        assert_eq!(
            TurnEngine::apply(&mut state, Decision::ChooseBranch(TileId::new(8))),
            Err(RulesError::BranchNotOffered(TileId::new(8)))
        );
        assert_eq!(state.phase, before.phase);
        assert_eq!(state.current_tile(), TileId::new(6));

        TurnEngine::apply(&mut state, Decision::ChooseBranch(TileId::new(14))).unwrap();
        assert_eq!(state.current_tile(), TileId::new(14));
        assert_eq!(state.moves_left, 1);
        assert_eq!(state.phase, Phase::Moving);
    }

    #[test]
    fn test_landing_on_fork_with_no_moves_does_not_branch() {
        let mut state = island(2);
        moving(&mut state, 6, 0);

        TurnEngine::advance(&mut state).unwrap();
        assert_eq!(state.phase, Phase::SpaceEvent);
    }

    #[test]
    fn test_passing_star_is_noop() {
        let mut state = island(2);
        state.current_mut().coins = 50;
        moving(&mut state, 9, 2);

        TurnEngine::run_until_blocked(&mut state);

        // 9 -> 10 (star, passed) -> 11 (Red, landed)
        assert_eq!(state.players[PlayerId(0)].position, TileId::new(11));
        assert_eq!(state.players[PlayerId(0)].stars, 0);
        assert_eq!(state.players[PlayerId(0)].coins, 47);
        assert_eq!(state.current_player, PlayerId(1));
        assert_eq!(state.phase, Phase::Waiting);
    }

    #[test]
    fn test_star_purchase() {
        let mut state = island(2);
        state.current_mut().coins = 30;
        moving(&mut state, 9, 1);

        TurnEngine::run_until_blocked(&mut state);
        assert!(state.pending_star_decision());
        assert_eq!(state.last_outcome, Some(SpaceOutcome::StarOffer { cost: 20 }));

        TurnEngine::apply(&mut state, Decision::BuyStar).unwrap();

        let p0 = &state.players[PlayerId(0)];
        assert_eq!(p0.coins, 10);
        assert_eq!(p0.stars, 1);
        assert_ne!(state.board.star_tile(), Some(TileId::new(10)));
        assert_eq!(state.board.kind(TileId::new(10)), TileKind::Blue);
        assert_eq!(state.current_player, PlayerId(1));
        assert_eq!(state.phase, Phase::Waiting);
    }

    #[test]
    fn test_star_decline() {
        let mut state = island(2);
        state.current_mut().coins = 30;
        moving(&mut state, 9, 1);
        TurnEngine::run_until_blocked(&mut state);

        TurnEngine::apply(&mut state, Decision::DeclineStar).unwrap();
        assert_eq!(state.players[PlayerId(0)].coins, 30);
        assert_eq!(state.board.star_tile(), Some(TileId::new(10)));
    }

    #[test]
    fn test_shop_decision() {
        let mut state = island(2);
        state.current_mut().coins = 6;
        moving(&mut state, 7, 1);
        TurnEngine::run_until_blocked(&mut state);

        assert_eq!(
            state.phase,
            Phase::ShopDecision { offers: vec![ShopItem::DoubleDice, ShopItem::Shield] }
        );
        assert_eq!(TurnEngine::legal_decisions(&state).last(), Some(&Decision::LeaveShop));
        assert_eq!(
            TurnEngine::apply(&mut state, Decision::BuyItem(ShopItem::Warp)),
            Err(RulesError::ItemNotOffered(ShopItem::Warp))
        );

        TurnEngine::apply(&mut state, Decision::BuyItem(ShopItem::Shield)).unwrap();
        assert_eq!(state.players[PlayerId(0)].coins, 3);
        assert_eq!(state.players[PlayerId(0)].items, vec![ShopItem::Shield]);
        assert_eq!(state.current_player, PlayerId(1));
    }

    #[test]
    fn test_wrong_phase_rejected() {
        let mut state = island(2);

        assert_eq!(
            TurnEngine::apply(&mut state, Decision::BuyStar),
            Err(RulesError::WrongPhase { decision: "BuyStar", phase: "Waiting" })
        );
        assert_eq!(
            TurnEngine::advance(&mut state),
            Err(RulesError::AwaitingDecision { phase: "Waiting" })
        );
        assert_eq!(state.phase, Phase::Waiting);
        assert!(state.history.is_empty());
    }

    #[test]
    fn test_last_player_triggers_minigame() {
        let mut state = island(2);
        state.current_player = PlayerId(1);
        moving(&mut state, 0, 1);

        TurnEngine::run_until_blocked(&mut state);

        assert!(matches!(state.phase, Phase::Minigame { .. }));
        assert_eq!(state.current_player, PlayerId(0));
        assert!(TurnEngine::legal_decisions(&state).is_empty());
    }

    #[test]
    fn test_minigame_finishes_round() {
        let mut state = island(2);
        RoundController::start_minigame(&mut state);

        TurnEngine::apply(&mut state, Decision::FinishMinigame(vec![PlayerId(1), PlayerId(0)])).unwrap();

        assert_eq!(state.round, 2);
        assert_eq!(state.phase, Phase::Waiting);
        assert_eq!(state.players[PlayerId(1)].coins, 20);
        assert_eq!(state.players[PlayerId(0)].coins, 16);
    }

    #[test]
    fn test_last_minigame_ends_game() {
        let config = GameConfig::new(2).with_rounds(1).with_board(BoardLayout::StarlightIsland);
        let mut state = GameState::new(config, 3).unwrap();
        RoundController::start_minigame(&mut state);

        TurnEngine::apply(&mut state, Decision::FinishMinigame(vec![PlayerId(0), PlayerId(1)])).unwrap();

        assert!(state.is_game_over());
        let results = state.results.as_ref().unwrap();
        assert_eq!(results.standings[0], PlayerId(0));
        assert_eq!(TurnEngine::apply(&mut state, Decision::Roll), Err(RulesError::GameOver));
        assert_eq!(TurnEngine::advance(&mut state), Err(RulesError::GameOver));
    }
}
