//! Game rules: the turn machine, round progression and final standings.
//!
//! - `TurnEngine`: roll, move, branch, land, decide
//! - `RoundController`: player cursor, minigame interstitial, game over
//! - `standings`: ranking, bonus stars and the final result
//!
//! Everything operates on a `&mut GameState`; the only way in from outside
//! is a [`Decision`](crate::core::Decision).

pub mod engine;
pub mod event;
pub mod phase;
pub mod round;
pub mod standings;

pub use engine::{roll_dice, TurnEngine};
pub use event::GameEvent;
pub use phase::Phase;
pub use round::RoundController;
pub use standings::{bonus_awards, standings, BonusAward, BonusTitle, FinalResults, GameResult};
