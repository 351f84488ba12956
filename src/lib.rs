//! # party-board
//!
//! The rules core of a local-multiplayer party board game.
//!
//! ## Design Principles
//!
//! 1. **Rules Only**: Rendering, audio, input and the minigames' own play
//!    loops live outside. They read [`GameState`] or a [`PublicView`] and
//!    talk back through [`Decision`]s.
//!
//! 2. **Suspension as Data**: Every wait (roll, fork, star, shop, minigame)
//!    is a [`Phase`]. There are no callbacks and no timers.
//!
//! 3. **Injectable Randomness**: Board generation, dice and events draw
//!    from a [`RandomSource`]. Same seed, same game.
//!
//! ## Flow
//!
//! ```text
//! Waiting -Roll-> Rolling -> Moving <-> BranchChoice
//!                              |
//!                          SpaceEvent -> StarDecision / ShopDecision
//!                              |
//!              next player (Waiting) or Minigame -> next round / GameOver
//! ```
//!
//! ## Modules
//!
//! - `core`: players, state, decisions, RNG, configuration, errors
//! - `board`: tile graph, generator, preset boards
//! - `effects`: what landing on each tile kind does
//! - `rules`: turn machine, round controller, standings
//! - `minigames`: minigame selection and rank rewards
//!
//! ## Example
//!
//! ```
//! use party_board::{Decision, GameConfig, GameState, PlayerId, TurnEngine};
//!
//! let mut state = GameState::new(GameConfig::new(2).with_rounds(1), 7).unwrap();
//!
//! while !state.is_game_over() {
//!     TurnEngine::run_until_blocked(&mut state);
//!     let decision = match TurnEngine::legal_decisions(&state).first() {
//!         Some(decision) => decision.clone(),
//!         None if state.is_game_over() => break,
//!         None => Decision::FinishMinigame(vec![PlayerId::new(1), PlayerId::new(0)]),
//!     };
//!     TurnEngine::apply(&mut state, decision).unwrap();
//! }
//!
//! assert!(state.results.is_some());
//! ```

pub mod board;
pub mod core;
pub mod effects;
pub mod minigames;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Avatar, BoardLayout, BoardError, ConfigError, Decision, GameConfig, GameRng, GameState, HistoryEntry, Player,
    PlayerId, PlayerMap, PlayerStats, PublicView, RandomSource, RuleConstants, RulesError, SetupError,
};

pub use crate::board::{Board, BoardGenerator, BranchConfig, Position, Tile, TileId, TileKind, TileWeights};

pub use crate::effects::{EventKind, EventOutcome, ShopItem, SpaceOutcome, SpaceResolver};

pub use crate::minigames::{MinigameKind, MinigameReward, RewardTable};

pub use crate::rules::{
    roll_dice, standings, BonusAward, BonusTitle, FinalResults, GameEvent, GameResult, Phase, RoundController,
    TurnEngine,
};
