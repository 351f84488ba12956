//! Turn phases.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::TileId;
use crate::effects::ShopItem;
use crate::minigames::MinigameKind;

/// Where the turn machine is.
///
/// Exactly one phase is active, so at most one external decision can be
/// pending at any time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Ready for the current player to roll.
    Waiting,
    /// Dice settled on `value`; movement has not started.
    Rolling { value: u8 },
    /// Consuming `moves_left` one step at a time.
    Moving,
    /// Standing on a fork with moves left.
    BranchChoice { options: SmallVec<[TileId; 2]> },
    /// Moves exhausted; the landing tile resolves next.
    SpaceEvent,
    /// Landed on the star with enough coins.
    StarDecision,
    /// Landed on a shop with something affordable.
    ShopDecision { offers: Vec<ShopItem> },
    /// Every player has moved; waiting for the minigame ranking.
    Minigame { kind: MinigameKind },
    /// All rounds played.
    GameOver,
}

impl Phase {
    /// Variant name for errors and logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Phase::Waiting => "Waiting",
            Phase::Rolling { .. } => "Rolling",
            Phase::Moving => "Moving",
            Phase::BranchChoice { .. } => "BranchChoice",
            Phase::SpaceEvent => "SpaceEvent",
            Phase::StarDecision => "StarDecision",
            Phase::ShopDecision { .. } => "ShopDecision",
            Phase::Minigame { .. } => "Minigame",
            Phase::GameOver => "GameOver",
        }
    }

    /// Whether the machine is blocked on a [`Decision`](crate::core::Decision).
    #[must_use]
    pub const fn needs_input(&self) -> bool {
        matches!(
            self,
            Phase::Waiting
                | Phase::BranchChoice { .. }
                | Phase::StarDecision
                | Phase::ShopDecision { .. }
                | Phase::Minigame { .. }
        )
    }
}
