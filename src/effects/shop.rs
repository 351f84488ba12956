//! Shop catalog.
//!
//! Items are bought on Shop tiles and kept; nothing in the core consumes
//! them.

use serde::{Deserialize, Serialize};

use crate::core::Player;

/// A purchasable item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShopItem {
    DoubleDice,
    Shield,
    CoinThief,
    Warp,
}

impl ShopItem {
    /// Everything the shop sells, in display order.
    pub const CATALOG: [ShopItem; 4] = [
        ShopItem::DoubleDice,
        ShopItem::Shield,
        ShopItem::CoinThief,
        ShopItem::Warp,
    ];

    #[must_use]
    pub const fn cost(self) -> u32 {
        match self {
            ShopItem::DoubleDice => 5,
            ShopItem::Shield => 3,
            ShopItem::CoinThief => 8,
            ShopItem::Warp => 10,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ShopItem::DoubleDice => "Double Dice",
            ShopItem::Shield => "Shield",
            ShopItem::CoinThief => "Coin Thief",
            ShopItem::Warp => "Warp",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            ShopItem::DoubleDice => "Roll two dice",
            ShopItem::Shield => "Blocks a Red Space",
            ShopItem::CoinThief => "Steal 5 coins from a rival",
            ShopItem::Warp => "Jump straight to the star",
        }
    }

    /// Catalog items a player with `coins` can pay for.
    #[must_use]
    pub fn affordable(coins: u32) -> Vec<ShopItem> {
        Self::CATALOG.into_iter().filter(|item| item.cost() <= coins).collect()
    }

    /// Charge the player and hand over the item.
    ///
    /// Returns `false` and leaves the player untouched if they cannot pay.
    pub fn purchase(self, player: &mut Player) -> bool {
        if player.spend(self.cost()) {
            player.items.push(self);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::TileId;
    use crate::core::PlayerId;

    #[test]
    fn test_affordable() {
        assert!(ShopItem::affordable(2).is_empty());
        assert_eq!(ShopItem::affordable(3), vec![ShopItem::Shield]);
        assert_eq!(
            ShopItem::affordable(8),
            vec![ShopItem::DoubleDice, ShopItem::Shield, ShopItem::CoinThief]
        );
        assert_eq!(ShopItem::affordable(50).len(), 4);
    }

    #[test]
    fn test_purchase() {
        let mut player = Player::new(PlayerId::new(0), "Fox", 9, TileId::new(0));

        assert!(ShopItem::CoinThief.purchase(&mut player));
        assert_eq!(player.coins, 1);
        assert_eq!(player.items, vec![ShopItem::CoinThief]);

        assert!(!ShopItem::Shield.purchase(&mut player));
        assert_eq!(player.coins, 1);
        assert_eq!(player.items.len(), 1);
    }
}
