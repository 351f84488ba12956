//! Error types.
//!
//! Business-rule rejections (not enough coins, nothing affordable in the
//! shop, nobody to steal from) are ordinary outcomes and never show up
//! here. These types cover malformed setup and callers driving the turn
//! machine out of contract.

use thiserror::Error;

use super::avatar::Avatar;
use crate::board::TileId;
use crate::effects::ShopItem;

/// Invalid game configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("player count must be 2-4, got {0}")]
    PlayerCount(usize),

    #[error("total rounds must be positive")]
    ZeroRounds,

    #[error("expected {expected} player names, got {found}")]
    NameCount { expected: usize, found: usize },

    #[error("expected {expected} avatars, got {found}")]
    AvatarCount { expected: usize, found: usize },

    #[error("{0} was picked by more than one player")]
    DuplicateAvatar(Avatar),

    #[error("board needs at least {min} tiles, got {found}")]
    BoardTooSmall { min: usize, found: usize },

    #[error("board holds at most {max} tiles, got {found}")]
    BoardTooLarge { max: usize, found: usize },

    #[error("tile weights must total 1..={max}, got {total}")]
    TileWeightTotal { total: u64, max: u64 },

    #[error("branch {start} -> {end} does not fit a {tile_count}-tile loop")]
    BranchOutOfRange {
        start: usize,
        end: usize,
        tile_count: usize,
    },

    #[error("dice must have at least one side")]
    NoDiceSides,

    #[error("chance range {min}..={max} is empty")]
    EmptyChanceRange { min: i32, max: i32 },
}

/// A board graph that breaks a structural invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("board has no tiles")]
    Empty,

    #[error("expected exactly one start tile, found {0}")]
    StartCount(usize),

    #[error("expected exactly one star tile, found {0}")]
    StarCount(usize),

    #[error("{tile} has id out of sequence")]
    IdMismatch { tile: TileId },

    #[error("{tile} has no successors")]
    NoSuccessors { tile: TileId },

    #[error("{tile} points at missing {target}")]
    DanglingSuccessor { tile: TileId, target: TileId },

    #[error("{tile} is not reachable from the start tile")]
    Unreachable { tile: TileId },
}

/// Failure to build a game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Board(#[from] BoardError),
}

/// A decision or step the turn machine cannot accept in its current phase.
///
/// State is left untouched whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RulesError {
    #[error("{decision} is not accepted during {phase}")]
    WrongPhase {
        decision: &'static str,
        phase: &'static str,
    },

    #[error("{phase} is waiting for a decision and cannot advance on its own")]
    AwaitingDecision { phase: &'static str },

    #[error("{0} is not one of the offered paths")]
    BranchNotOffered(TileId),

    #[error("{0:?} is not on offer")]
    ItemNotOffered(ShopItem),

    #[error("minigame ranking must list every player exactly once")]
    InvalidRanking,

    #[error("the game is over")]
    GameOver,
}
