//! Core engine types: players, state, decisions, RNG, configuration, errors.
//!
//! Everything else in the crate builds on these. Games are set up through
//! `GameConfig` and driven through `GameState`.

pub mod action;
pub mod avatar;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Decision, HistoryEntry};
pub use avatar::Avatar;
pub use config::{BoardLayout, GameConfig, RuleConstants};
pub use error::{BoardError, ConfigError, RulesError, SetupError};
pub use player::{Player, PlayerId, PlayerMap, PlayerStats};
pub use rng::{GameRng, RandomSource};
pub use state::{GameState, PublicView};
