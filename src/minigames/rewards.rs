//! Minigame rank rewards.

use serde::{Deserialize, Serialize};

use crate::core::{Player, PlayerId, PlayerMap};

/// Coins paid by finishing rank (0 = first place).
///
/// Ranks past the end of the table receive `default_reward`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardTable {
    pub rewards: Vec<u32>,
    pub default_reward: u32,
}

impl Default for RewardTable {
    fn default() -> Self {
        Self {
            rewards: vec![10, 6, 3, 1],
            default_reward: 1,
        }
    }
}

/// One row of a minigame payout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinigameReward {
    pub player: PlayerId,
    /// 1-based finishing place.
    pub place: usize,
    pub coins: u32,
}

impl RewardTable {
    /// Create a table with an explicit fallback reward.
    #[must_use]
    pub fn new(rewards: Vec<u32>, default_reward: u32) -> Self {
        Self {
            rewards,
            default_reward,
        }
    }

    /// Reward for a 0-based rank.
    #[must_use]
    pub fn reward_for(&self, rank: usize) -> u32 {
        self.rewards.get(rank).copied().unwrap_or(self.default_reward)
    }

    /// Payout rows for a best-to-worst ranking.
    #[must_use]
    pub fn rewards_for(&self, ranking: &[PlayerId]) -> Vec<MinigameReward> {
        ranking
            .iter()
            .enumerate()
            .map(|(rank, &player)| MinigameReward {
                player,
                place: rank + 1,
                coins: self.reward_for(rank),
            })
            .collect()
    }

    /// Pay out a ranking. Ids not in `players` are skipped.
    pub fn apply(&self, players: &mut PlayerMap<Player>, ranking: &[PlayerId]) -> Vec<MinigameReward> {
        let rows = self.rewards_for(ranking);
        for row in &rows {
            if players.contains(row.player) {
                players[row.player].add_coins(row.coins as i32);
            }
        }
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::TileId;

    fn players(n: usize) -> PlayerMap<Player> {
        PlayerMap::new(n, |id| Player::new(id, format!("P{}", id.0), 0, TileId::new(0)))
    }

    #[test]
    fn test_reward_for() {
        let table = RewardTable::default();
        assert_eq!(table.reward_for(0), 10);
        assert_eq!(table.reward_for(1), 6);
        assert_eq!(table.reward_for(3), 1);
        assert_eq!(table.reward_for(4), 1);
        assert_eq!(table.reward_for(100), 1);
    }

    #[test]
    fn test_apply_two_players() {
        let table = RewardTable::default();
        let mut map = players(2);
        let (a, b) = (PlayerId::new(0), PlayerId::new(1));

        table.apply(&mut map, &[b, a]);

        assert_eq!(map[b].coins, 10);
        assert_eq!(map[a].coins, 6);
    }

    #[test]
    fn test_overflow_rank_gets_default() {
        let table = RewardTable::new(vec![10, 6, 3, 1], 1);
        let ranking: Vec<_> = (0..5).map(PlayerId::new).collect();

        let rows = table.rewards_for(&ranking);
        assert_eq!(rows[4], MinigameReward { player: PlayerId::new(4), place: 5, coins: 1 });
    }

    #[test]
    fn test_custom_default() {
        let table = RewardTable::new(vec![5], 2);
        let mut map = players(3);
        table.apply(&mut map, &[PlayerId::new(2), PlayerId::new(0), PlayerId::new(1)]);

        assert_eq!(map[PlayerId::new(2)].coins, 5);
        assert_eq!(map[PlayerId::new(0)].coins, 2);
        assert_eq!(map[PlayerId::new(1)].coins, 2);
    }

    #[test]
    fn test_rewards_count_as_earned() {
        let table = RewardTable::default();
        let mut map = players(2);
        table.apply(&mut map, &[PlayerId::new(0), PlayerId::new(1)]);
        assert_eq!(map[PlayerId::new(0)].stats.coins_earned, 10);
    }
}
