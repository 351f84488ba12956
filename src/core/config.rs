//! Game configuration.
//!
//! Everything the engine reads at setup lives here:
//! - `GameConfig`: players, avatars, rounds, board choice, rule constants
//! - `RuleConstants`: coin amounts, star cost, dice, minigame rewards
//! - `BoardLayout`: generated board or a fixed preset
//!
//! All types are serde-friendly so an embedding app can load them from
//! whatever format it already uses.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::avatar::Avatar;
use super::error::ConfigError;
use super::player::Player;
use crate::board::BoardGenerator;
use crate::minigames::RewardTable;

/// Which board a game is played on.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum BoardLayout {
    /// Randomized loop with a shortcut.
    Generated(BoardGenerator),
    /// The fixed Starlight Island course.
    StarlightIsland,
}

impl Default for BoardLayout {
    fn default() -> Self {
        BoardLayout::Generated(BoardGenerator::default())
    }
}

/// Rule constants.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConstants {
    /// Coins every player starts with.
    pub starting_coins: u32,

    /// Price of one star.
    pub star_cost: u32,

    /// Coins gained on a Blue tile.
    pub blue_reward: u32,

    /// Coins lost on a Red tile (floored at 0).
    pub red_penalty: u32,

    /// Dice faces; rolls are uniform in `1..=dice_sides`.
    pub dice_sides: u8,

    /// Lowest Chance roulette result.
    pub chance_min: i32,

    /// Highest Chance roulette result.
    pub chance_max: i32,

    /// Coins paid per minigame rank.
    pub minigame_rewards: RewardTable,
}

impl Default for RuleConstants {
    fn default() -> Self {
        Self {
            starting_coins: 10,
            star_cost: 20,
            blue_reward: 3,
            red_penalty: 3,
            dice_sides: 10,
            chance_min: -10,
            chance_max: 15,
            minigame_rewards: RewardTable::default(),
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of players (2-4).
    pub player_count: usize,

    /// Rounds before the game ends.
    pub total_rounds: u32,

    /// Display names, one per seat.
    pub player_names: Vec<String>,

    /// Avatar per seat. No two seats share one.
    pub avatars: Vec<Avatar>,

    /// Board to play on.
    pub board: BoardLayout,

    /// Coin and dice constants.
    pub rules: RuleConstants,
}

impl GameConfig {
    /// Fewest players in a game.
    pub const MIN_PLAYERS: usize = 2;
    /// Most players in a game.
    pub const MAX_PLAYERS: usize = 4;

    /// Configuration for `player_count` players with default names and
    /// avatars, 10 rounds, a generated 24-tile board and default rules.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            total_rounds: 10,
            player_names: Player::DEFAULT_NAMES
                .iter()
                .cycle()
                .take(player_count)
                .map(|n| (*n).to_string())
                .collect(),
            avatars: (0..player_count).map(Avatar::for_seat).collect(),
            board: BoardLayout::default(),
            rules: RuleConstants::default(),
        }
    }

    /// Configuration from a list of names; player count follows the list.
    pub fn with_players<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let mut config = Self::new(names.len());
        config.player_names = names;
        config
    }

    /// Choose avatars, one per seat in seat order.
    #[must_use]
    pub fn with_avatars<I>(mut self, avatars: I) -> Self
    where
        I: IntoIterator<Item = Avatar>,
    {
        self.avatars = avatars.into_iter().collect();
        self
    }

    /// Set the number of rounds.
    #[must_use]
    pub fn with_rounds(mut self, rounds: u32) -> Self {
        self.total_rounds = rounds;
        self
    }

    /// Set the board.
    #[must_use]
    pub fn with_board(mut self, board: BoardLayout) -> Self {
        self.board = board;
        self
    }

    /// Set the rule constants.
    #[must_use]
    pub fn with_rules(mut self, rules: RuleConstants) -> Self {
        self.rules = rules;
        self
    }

    /// Check every setup constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(Self::MIN_PLAYERS..=Self::MAX_PLAYERS).contains(&self.player_count) {
            return Err(ConfigError::PlayerCount(self.player_count));
        }
        if self.player_names.len() != self.player_count {
            return Err(ConfigError::NameCount {
                expected: self.player_count,
                found: self.player_names.len(),
            });
        }
        if self.avatars.len() != self.player_count {
            return Err(ConfigError::AvatarCount {
                expected: self.player_count,
                found: self.avatars.len(),
            });
        }
        let mut taken = FxHashSet::default();
        if let Some(dup) = self.avatars.iter().find(|a| !taken.insert(**a)) {
            return Err(ConfigError::DuplicateAvatar(*dup));
        }
        if self.total_rounds == 0 {
            return Err(ConfigError::ZeroRounds);
        }
        if self.rules.dice_sides == 0 {
            return Err(ConfigError::NoDiceSides);
        }
        if self.rules.chance_min > self.rules.chance_max {
            return Err(ConfigError::EmptyChanceRange {
                min: self.rules.chance_min,
                max: self.rules.chance_max,
            });
        }
        if let BoardLayout::Generated(generator) = &self.board {
            generator.validate()?;
        }
        Ok(())
    }
}
