//! Players and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe player identifier; also the player's seat in turn order.
//!
//! ## PlayerMap
//!
//! Per-player storage backed by `Vec` for O(1) access, indexed by `PlayerId`.
//!
//! ## Player
//!
//! The mutable record the turn machine works on: coins, stars, position,
//! items and the running stats used for end-of-game bonus awards.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::avatar::Avatar;
use crate::board::TileId;
use crate::effects::ShopItem;

/// Player identifier.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use party_board::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> + Clone {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// ```
/// use party_board::core::{PlayerId, PlayerMap};
///
/// let mut wins: PlayerMap<u32> = PlayerMap::new(3, |_| 0);
/// wins[PlayerId::new(1)] += 1;
/// assert_eq!(wins[PlayerId::new(1)], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        Self {
            data: PlayerId::all(player_count).map(factory).collect(),
        }
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Check whether an id belongs to this map.
    #[must_use]
    pub fn contains(&self, player: PlayerId) -> bool {
        player.index() < self.data.len()
    }

    /// Iterate over (PlayerId, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Iterate mutably over values in seat order.
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.data.iter_mut()
    }

    /// Iterate over all player IDs.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        PlayerId::all(self.data.len())
    }

    /// Borrow two different players mutably at once.
    ///
    /// # Panics
    ///
    /// Panics if `a == b`.
    pub fn pair_mut(&mut self, a: PlayerId, b: PlayerId) -> (&mut T, &mut T) {
        assert_ne!(a, b, "pair_mut needs two different players");
        if a.index() < b.index() {
            let (left, right) = self.data.split_at_mut(b.index());
            (&mut left[a.index()], &mut right[0])
        } else {
            let (left, right) = self.data.split_at_mut(a.index());
            (&mut right[0], &mut left[b.index()])
        }
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}

/// Running totals feeding the bonus-star awards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    /// Minigames finished in first place.
    pub minigame_wins: u32,
    /// Sum of every positive coin change.
    pub coins_earned: u32,
    /// Event tiles landed on.
    pub events_triggered: u32,
}

/// One participant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub avatar: Avatar,
    /// Rendering only. Follows the avatar.
    pub color: String,
    /// Never negative; every decrease is floored at 0.
    pub coins: u32,
    /// Only ever increases.
    pub stars: u32,
    /// Tile the player stands on.
    pub position: TileId,
    /// Bought items. Accumulate-only.
    pub items: Vec<ShopItem>,
    pub stats: PlayerStats,
}

impl Player {
    /// Default display names, by seat.
    pub const DEFAULT_NAMES: [&'static str; 4] = ["Fox", "Frog", "Cat", "Octo"];

    /// Create a player at `start` with `coins` coins and no stars, playing
    /// the seat's default avatar.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>, coins: u32, start: TileId) -> Self {
        let avatar = Avatar::for_seat(id.index());
        Self {
            id,
            name: name.into(),
            avatar,
            color: avatar.color().to_string(),
            coins,
            stars: 0,
            position: start,
            items: Vec::new(),
            stats: PlayerStats::default(),
        }
    }

    /// Switch avatar; the colour follows.
    #[must_use]
    pub fn with_avatar(mut self, avatar: Avatar) -> Self {
        self.avatar = avatar;
        self.color = avatar.color().to_string();
        self
    }

    /// Apply a signed coin change, flooring at 0.
    ///
    /// Returns the change actually applied, so a loss larger than the
    /// balance reports only what was taken.
    pub fn add_coins(&mut self, delta: i32) -> i32 {
        let before = self.coins;
        self.coins = (i64::from(self.coins) + i64::from(delta)).max(0) as u32;
        if delta > 0 {
            self.stats.coins_earned += delta as u32;
        }
        self.coins as i32 - before as i32
    }

    /// Pay `cost` if affordable. Returns whether the payment happened.
    pub fn spend(&mut self, cost: u32) -> bool {
        if self.coins >= cost {
            self.coins -= cost;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(coins: u32) -> Player {
        Player::new(PlayerId::new(0), "Fox", coins, TileId::new(0))
    }

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        assert_eq!(p0.index(), 0);
        assert_eq!(format!("{}", p0), "Player 0");
    }

    #[test]
    fn test_player_map_new() {
        let map: PlayerMap<i32> = PlayerMap::new(4, |p| p.index() as i32 * 10);

        assert_eq!(map[PlayerId::new(0)], 0);
        assert_eq!(map[PlayerId::new(3)], 30);
        assert_eq!(map.player_count(), 4);
        assert!(map.contains(PlayerId::new(3)));
        assert!(!map.contains(PlayerId::new(4)));
    }

    #[test]
    fn test_player_map_iter() {
        let map: PlayerMap<i32> = PlayerMap::new(3, |p| p.index() as i32);

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs[0], (PlayerId::new(0), &0));
        assert_eq!(pairs[2], (PlayerId::new(2), &2));
    }

    #[test]
    fn test_player_map_pair_mut() {
        let mut map: PlayerMap<i32> = PlayerMap::new(3, |p| p.index() as i32);

        let (a, b) = map.pair_mut(PlayerId::new(2), PlayerId::new(0));
        std::mem::swap(a, b);

        assert_eq!(map[PlayerId::new(0)], 2);
        assert_eq!(map[PlayerId::new(2)], 0);
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 player")]
    fn test_player_map_zero_players() {
        let _: PlayerMap<i32> = PlayerMap::new(0, |_| 0);
    }

    #[test]
    fn test_new_player() {
        let p = Player::new(PlayerId::new(2), "Cat", 10, TileId::new(0));
        assert_eq!(p.coins, 10);
        assert_eq!(p.stars, 0);
        assert_eq!(p.color, "#ffd93d");
        assert!(p.items.is_empty());
    }

    #[test]
    fn test_avatar_sets_color() {
        let p = player(0);
        assert_eq!(p.avatar, Avatar::Fox);
        assert_eq!(p.color, "#ff6b9d");

        let p = p.with_avatar(Avatar::Sapphire);
        assert_eq!(p.avatar, Avatar::Sapphire);
        assert_eq!(p.color, "#3742FA");
    }

    #[test]
    fn test_add_coins_floor() {
        let mut p = player(2);
        assert_eq!(p.add_coins(-3), -2);
        assert_eq!(p.coins, 0);

        assert_eq!(p.add_coins(-100), 0);
        assert_eq!(p.coins, 0);
    }

    #[test]
    fn test_add_coins_tracks_earned() {
        let mut p = player(10);
        p.add_coins(5);
        p.add_coins(-4);
        p.add_coins(3);

        assert_eq!(p.coins, 14);
        assert_eq!(p.stats.coins_earned, 8);
    }

    #[test]
    fn test_spend() {
        let mut p = player(20);
        assert!(p.spend(20));
        assert_eq!(p.coins, 0);
        assert!(!p.spend(1));
        assert_eq!(p.coins, 0);
    }

    #[test]
    fn test_player_serialization() {
        let p = player(7);
        let json = serde_json::to_string(&p).unwrap();
        let back: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
