//! Round and game progression.
//!
//! `RoundController` owns the player cursor, the round counter, the
//! minigame interstitial and the end of the game. The turn engine calls
//! into it whenever a turn or a minigame finishes.

use rustc_hash::FxHashSet;

use crate::core::{GameState, PlayerId, RulesError};
use crate::minigames::{MinigameKind, MinigameReward};

use super::event::GameEvent;
use super::phase::Phase;
use super::standings::{bonus_awards, standings, FinalResults, GameResult};

/// Round/game controller.
pub struct RoundController;

impl RoundController {
    /// Move the cursor to the next player.
    ///
    /// Returns `false` (with the cursor wrapped to player 0) once every
    /// player has taken their turn this round.
    pub fn next_player_turn(state: &mut GameState) -> bool {
        let next = state.current_player.index() + 1;
        if next >= state.player_count() {
            state.current_player = PlayerId::new(0);
            false
        } else {
            state.current_player = PlayerId::new(next as u8);
            true
        }
    }

    /// Pick the round's minigame and hand control to it.
    pub fn start_minigame(state: &mut GameState) -> MinigameKind {
        let kind = MinigameKind::pick(&mut state.rng);
        state.phase = Phase::Minigame { kind };
        state.record(GameEvent::MinigameStarted { kind });
        log::info!("round {} minigame: {}", state.round, kind.title());
        kind
    }

    /// Pay out a minigame ranking (best to worst).
    ///
    /// The ranking must list every player exactly once. The winner's
    /// `minigame_wins` goes up by one.
    pub fn apply_minigame_results(
        state: &mut GameState,
        ranking: &[PlayerId],
    ) -> Result<Vec<MinigameReward>, RulesError> {
        Self::check_ranking(state, ranking)?;

        let rewards = state.config.rules.minigame_rewards.apply(&mut state.players, ranking);
        state.players[ranking[0]].stats.minigame_wins += 1;

        log::debug!("minigame rewards: {rewards:?}");
        state.record(GameEvent::RewardsApplied { rewards: rewards.clone() });
        Ok(rewards)
    }

    fn check_ranking(state: &GameState, ranking: &[PlayerId]) -> Result<(), RulesError> {
        if ranking.len() != state.player_count() {
            return Err(RulesError::InvalidRanking);
        }

        let mut seen = FxHashSet::default();
        for &player in ranking {
            if !state.players.contains(player) || !seen.insert(player) {
                return Err(RulesError::InvalidRanking);
            }
        }
        Ok(())
    }

    /// Close the round: round +1, cursor back to player 0.
    ///
    /// Returns `false` when that was the last round.
    pub fn end_round(state: &mut GameState) -> bool {
        state.round += 1;
        state.current_player = PlayerId::new(0);
        !Self::is_game_over(state)
    }

    /// Whether every round has been played.
    #[must_use]
    pub fn is_game_over(state: &GameState) -> bool {
        state.round > state.config.total_rounds
    }

    /// Award bonus stars, rank the players and end the game.
    pub fn finish_game(state: &mut GameState) -> &FinalResults {
        let bonuses = bonus_awards(&state.players);
        for award in &bonuses {
            state.players[award.player].stars += 1;
            log::info!("{} goes to {} ({})", award.title.label(), award.player, award.score);
            state.record(GameEvent::BonusAwarded(*award));
        }

        let standings = standings(&state.players);
        let result = GameResult::from_standings(&state.players, &standings);
        log::info!("game over: {result:?}");

        state.record(GameEvent::GameOver { result: result.clone() });
        state.phase = Phase::GameOver;
        state.results.insert(FinalResults {
            bonuses,
            standings,
            result,
        })
    }
}
