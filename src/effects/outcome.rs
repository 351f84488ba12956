//! Results of landing on a tile.

use serde::{Deserialize, Serialize};

use super::events::{EventKind, EventOutcome};
use super::shop::ShopItem;

/// What a landing produced.
///
/// Refusals (too poor for the star, nothing affordable in the shop) are
/// ordinary variants here; they never mutate state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpaceOutcome {
    /// Blue tile.
    CoinsGained { amount: u32 },
    /// Red tile. `amount` is what was actually taken after the floor.
    CoinsLost { amount: u32 },
    /// Event tile.
    Event { kind: EventKind, outcome: EventOutcome },
    /// Shop tile with something affordable. The turn waits for a choice.
    ShopOffer { items: Vec<ShopItem> },
    /// Shop tile, nothing affordable.
    ShopUnaffordable,
    /// Chance tile. `rolled` is the roulette value, `applied` the change
    /// after the floor.
    Chance { rolled: i32, applied: i32 },
    /// Star tile with enough coins. The turn waits for buy/decline.
    StarOffer { cost: u32 },
    /// Star tile without enough coins.
    StarUnaffordable { cost: u32, coins: u32 },
    /// Start tile.
    Nothing,
}

impl SpaceOutcome {
    /// Whether the turn must wait for an external decision.
    #[must_use]
    pub fn needs_decision(&self) -> bool {
        matches!(self, SpaceOutcome::ShopOffer { .. } | SpaceOutcome::StarOffer { .. })
    }
}

impl std::fmt::Display for SpaceOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpaceOutcome::CoinsGained { amount } => write!(f, "+{amount} Coins!"),
            SpaceOutcome::CoinsLost { amount } => write!(f, "-{amount} Coins..."),
            SpaceOutcome::Event { outcome, .. } => write!(f, "Event! {outcome}"),
            SpaceOutcome::ShopOffer { items } => write!(f, "Shop! {} item(s) on offer", items.len()),
            SpaceOutcome::ShopUnaffordable => write!(f, "Shop! Not enough coins for any item"),
            SpaceOutcome::Chance { rolled, .. } => write!(f, "Chance! Roulette says {rolled:+} coins"),
            SpaceOutcome::StarOffer { cost } => write!(f, "Star Space! Buy a star for {cost} coins?"),
            SpaceOutcome::StarUnaffordable { cost, coins } => {
                write!(f, "Not enough coins! Need {cost} (have {coins})")
            }
            SpaceOutcome::Nothing => write!(f, "Nothing here"),
        }
    }
}
