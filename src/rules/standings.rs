//! Final standings, bonus stars and the game result.

use serde::{Deserialize, Serialize};

use crate::core::{Player, PlayerId, PlayerMap, PlayerStats};

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Several players tied on both stars and coins.
    Winners(Vec<PlayerId>),
}

impl GameResult {
    /// Result from a standings order: everyone level with the leader wins.
    ///
    /// # Panics
    ///
    /// Panics if `standings` is empty.
    #[must_use]
    pub fn from_standings(players: &PlayerMap<Player>, standings: &[PlayerId]) -> Self {
        let leader = &players[standings[0]];
        let tied: Vec<PlayerId> = standings
            .iter()
            .copied()
            .take_while(|&p| players[p].stars == leader.stars && players[p].coins == leader.coins)
            .collect();

        if tied.len() == 1 {
            GameResult::Winner(tied[0])
        } else {
            GameResult::Winners(tied)
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Winners(ps) => ps.contains(&player),
        }
    }
}

/// Final ranking: stars descending, then coins descending.
///
/// The sort is stable, so players level on both keep seat order.
#[must_use]
pub fn standings(players: &PlayerMap<Player>) -> Vec<PlayerId> {
    let mut order: Vec<PlayerId> = players.player_ids().collect();
    order.sort_by(|&a, &b| {
        let (a, b) = (&players[a], &players[b]);
        b.stars.cmp(&a.stars).then(b.coins.cmp(&a.coins))
    });
    order
}

/// End-of-game bonus star categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BonusTitle {
    /// Most minigame wins.
    MinigameKing,
    /// Most coins earned over the game.
    CoinTycoon,
    /// Most event tiles landed on.
    EventKing,
}

impl BonusTitle {
    pub const ALL: [BonusTitle; 3] = [BonusTitle::MinigameKing, BonusTitle::CoinTycoon, BonusTitle::EventKing];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            BonusTitle::MinigameKing => "Minigame King",
            BonusTitle::CoinTycoon => "Coin Tycoon",
            BonusTitle::EventKing => "Event King",
        }
    }

    /// The stat this title is judged on.
    #[must_use]
    pub const fn score(self, stats: &PlayerStats) -> u32 {
        match self {
            BonusTitle::MinigameKing => stats.minigame_wins,
            BonusTitle::CoinTycoon => stats.coins_earned,
            BonusTitle::EventKing => stats.events_triggered,
        }
    }
}

/// One bonus star.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusAward {
    pub title: BonusTitle,
    pub player: PlayerId,
    /// The winning stat value.
    pub score: u32,
}

/// Work out who earns each bonus star.
///
/// A title goes to the highest non-zero score; ties go to the earliest
/// seat. Titles nobody scored on are skipped.
#[must_use]
pub fn bonus_awards(players: &PlayerMap<Player>) -> Vec<BonusAward> {
    BonusTitle::ALL
        .into_iter()
        .filter_map(|title| {
            let mut best: Option<(PlayerId, u32)> = None;
            for (id, player) in players.iter() {
                let score = title.score(&player.stats);
                if score > best.map_or(0, |(_, s)| s) {
                    best = Some((id, score));
                }
            }
            best.map(|(player, score)| BonusAward { title, player, score })
        })
        .collect()
}

/// Everything the results screen needs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalResults {
    /// Bonus stars, already added to the players.
    pub bonuses: Vec<BonusAward>,
    /// Best to worst, after bonuses.
    pub standings: Vec<PlayerId>,
    pub result: GameResult,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::TileId;

    fn players(stars: &[u32], coins: &[u32]) -> PlayerMap<Player> {
        PlayerMap::new(stars.len(), |id| {
            let mut p = Player::new(id, format!("P{}", id.0), coins[id.index()], TileId::new(0));
            p.stars = stars[id.index()];
            p
        })
    }

    #[test]
    fn test_standings_stars_then_coins() {
        let map = players(&[1, 2, 1], &[5, 3, 10]);
        assert_eq!(standings(&map), vec![PlayerId(1), PlayerId(2), PlayerId(0)]);
    }

    #[test]
    fn test_standings_stable_on_full_tie() {
        let map = players(&[2, 2, 2, 2], &[7, 7, 9, 7]);
        assert_eq!(standings(&map), vec![PlayerId(2), PlayerId(0), PlayerId(1), PlayerId(3)]);
    }

    #[test]
    fn test_game_result() {
        let map = players(&[1, 2, 1], &[5, 3, 10]);
        let result = GameResult::from_standings(&map, &standings(&map));
        assert_eq!(result, GameResult::Winner(PlayerId(1)));
        assert!(result.is_winner(PlayerId(1)));
        assert!(!result.is_winner(PlayerId(0)));

        let map = players(&[3, 3, 0], &[4, 4, 50]);
        let result = GameResult::from_standings(&map, &standings(&map));
        assert_eq!(result, GameResult::Winners(vec![PlayerId(0), PlayerId(1)]));
        assert!(result.is_winner(PlayerId(1)));
        assert!(!result.is_winner(PlayerId(2)));
    }

    #[test]
    fn test_bonus_awards() {
        let mut map = players(&[0, 0, 0], &[0, 0, 0]);
        map[PlayerId(1)].stats.minigame_wins = 3;
        map[PlayerId(2)].stats.minigame_wins = 3;
        map[PlayerId(0)].stats.coins_earned = 40;
        map[PlayerId(2)].stats.coins_earned = 41;

        let awards = bonus_awards(&map);
        assert_eq!(
            awards,
            vec![
                BonusAward { title: BonusTitle::MinigameKing, player: PlayerId(1), score: 3 },
                BonusAward { title: BonusTitle::CoinTycoon, player: PlayerId(2), score: 41 },
            ]
        );
    }

    #[test]
    fn test_no_bonus_for_zero_scores() {
        let map = players(&[0, 0], &[10, 10]);
        assert!(bonus_awards(&map).is_empty());
    }
}
