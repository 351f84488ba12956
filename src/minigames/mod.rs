//! Minigame interstitial.
//!
//! Minigames are played by external collaborators. The core only picks
//! which one runs and consumes its result: a best-to-worst ranking of
//! player ids, paid out through a [`RewardTable`].

mod rewards;

pub use rewards::{MinigameReward, RewardTable};

use serde::{Deserialize, Serialize};

use crate::core::RandomSource;

/// The minigames a round can end with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MinigameKind {
    CoinCatch,
    MemoryMatch,
    LuckyRoulette,
}

impl MinigameKind {
    /// Every minigame, in selection order.
    pub const ALL: [MinigameKind; 3] = [
        MinigameKind::CoinCatch,
        MinigameKind::MemoryMatch,
        MinigameKind::LuckyRoulette,
    ];

    /// Uniformly pick the next minigame.
    pub fn pick(rng: &mut impl RandomSource) -> Self {
        Self::ALL[rng.pick_index(Self::ALL.len())]
    }

    /// Title shown on the intro card.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            MinigameKind::CoinCatch => "Coin Catch",
            MinigameKind::MemoryMatch => "Memory Match",
            MinigameKind::LuckyRoulette => "Lucky Roulette",
        }
    }

    /// One-line rules shown on the intro card.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            MinigameKind::CoinCatch => "Catch the falling coins. Most coins caught wins!",
            MinigameKind::MemoryMatch => "Take turns flipping cards to find pairs. Most pairs wins!",
            MinigameKind::LuckyRoulette => "Stop the wheel on the biggest number. Highest spin wins!",
        }
    }
}
