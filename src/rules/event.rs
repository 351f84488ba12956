//! Game events - what the turn machine reports as it runs.
//!
//! Every transition appends one or more events to `GameState::history`.
//! Render and audio collaborators replay them to drive animation and
//! sound; the core never reads them back.

use serde::{Deserialize, Serialize};

use crate::board::TileId;
use crate::effects::{ShopItem, SpaceOutcome};
use crate::minigames::{MinigameKind, MinigameReward};

use super::standings::{BonusAward, GameResult};

/// Something that happened during play.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new player's turn began.
    TurnStarted,
    /// The dice settled.
    DiceRolled { value: u8 },
    /// A fork was reached with moves left.
    BranchOffered { at: TileId, options: Vec<TileId> },
    /// One step taken.
    Stepped { to: TileId, moves_left: u32 },
    /// Moves ran out and the tile resolved.
    Landed { tile: TileId, outcome: SpaceOutcome },
    /// A star was bought.
    StarPurchased { cost: u32, relocated_to: TileId },
    /// A star offer was turned down.
    StarDeclined,
    /// A shop item was bought.
    ItemBought { item: ShopItem },
    /// Every player moved; a minigame was chosen.
    MinigameStarted { kind: MinigameKind },
    /// Minigame payout.
    RewardsApplied { rewards: Vec<MinigameReward> },
    /// A new round began.
    RoundStarted { round: u32 },
    /// An end-of-game bonus star.
    BonusAwarded(BonusAward),
    /// Final result.
    GameOver { result: GameResult },
}
