//! External decisions and the history log.
//!
//! The turn machine only ever blocks on one thing at a time. Whatever the
//! UI or a minigame collaborator decides comes back as a `Decision`, fed
//! through `TurnEngine::apply`.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::board::TileId;
use crate::effects::ShopItem;
use crate::rules::GameEvent;

/// Input from outside the core.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Decision {
    /// Current player starts their roll.
    Roll,
    /// Pick one of the offered successors at a fork.
    ChooseBranch(TileId),
    /// Accept the star offer.
    BuyStar,
    /// Turn the star offer down.
    DeclineStar,
    /// Buy one of the offered shop items.
    BuyItem(ShopItem),
    /// Leave the shop without buying.
    LeaveShop,
    /// Minigame finished; best-to-worst ranking of every player.
    FinishMinigame(Vec<PlayerId>),
}

impl Decision {
    /// Short name for errors and logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Decision::Roll => "Roll",
            Decision::ChooseBranch(_) => "ChooseBranch",
            Decision::BuyStar => "BuyStar",
            Decision::DeclineStar => "DeclineStar",
            Decision::BuyItem(_) => "BuyItem",
            Decision::LeaveShop => "LeaveShop",
            Decision::FinishMinigame(_) => "FinishMinigame",
        }
    }
}

/// A logged event with the context it happened in.
///
/// Used for:
/// - Replay/debugging
/// - Event feeds in the UI
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Round the event happened in.
    pub round: u32,

    /// Player whose turn it was.
    pub player: PlayerId,

    /// What happened.
    pub event: GameEvent,
}
