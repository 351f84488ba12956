//! Game state.
//!
//! ## GameState
//!
//! The single owned record for one game: board, players, turn phase,
//! counters, history and the play RNG. Every core operation takes it by
//! `&mut` and nothing else holds game data.
//!
//! ## PublicView
//!
//! A serializable read-only snapshot for render and audio collaborators.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::HistoryEntry;
use super::config::{BoardLayout, GameConfig};
use super::error::SetupError;
use super::player::{Player, PlayerId, PlayerMap};
use super::rng::GameRng;
use crate::board::{Board, TileId};
use crate::effects::SpaceOutcome;
use crate::rules::{FinalResults, GameEvent, Phase};

/// Full game state.
///
/// Uses an `im` vector for the history so cloning a snapshot stays cheap
/// however long the game runs.
#[derive(Clone, Debug)]
pub struct GameState {
    /// Setup this game was built from.
    pub config: GameConfig,

    /// Tile graph. Only the star designation changes during play.
    pub board: Board,

    /// Every player, indexed by seat.
    pub players: PlayerMap<Player>,

    /// Where the turn machine is.
    pub phase: Phase,

    /// Whose turn it is.
    pub current_player: PlayerId,

    /// Round number (starts at 1).
    pub round: u32,

    /// Last dice value, kept for display until the next roll.
    pub dice_value: Option<u8>,

    /// Steps left in the current move.
    pub moves_left: u32,

    /// Result of the most recent landing.
    pub last_outcome: Option<SpaceOutcome>,

    /// Everything that happened, oldest first.
    pub history: Vector<HistoryEntry>,

    /// Filled in when the game ends.
    pub results: Option<FinalResults>,

    /// Play RNG (dice, events, star relocation, minigame pick).
    pub rng: GameRng,
}

impl GameState {
    /// Build a game from a validated config and a seed.
    ///
    /// Board generation and play use separate streams derived from `seed`,
    /// so the same seed always yields the same board.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, SetupError> {
        Self::with_rng(config, GameRng::new(seed))
    }

    /// Build a game seeded from the operating system.
    pub fn new_random(config: GameConfig) -> Result<Self, SetupError> {
        Self::with_rng(config, GameRng::from_entropy())
    }

    /// Build a game from an explicit RNG.
    pub fn with_rng(config: GameConfig, rng: GameRng) -> Result<Self, SetupError> {
        config.validate()?;

        let board = match &config.board {
            BoardLayout::Generated(generator) => generator.generate(&mut rng.for_context("board")),
            BoardLayout::StarlightIsland => Board::starlight_island(),
        };
        board.validate()?;

        let start = board.start();
        let coins = config.rules.starting_coins;
        let players = PlayerMap::new(config.player_count, |id| {
            Player::new(id, config.player_names[id.index()].clone(), coins, start)
                .with_avatar(config.avatars[id.index()])
        });

        log::info!(
            "new game (seed {}): {} players, {} rounds, {} tiles, star on {:?}",
            rng.seed(),
            config.player_count,
            config.total_rounds,
            board.len(),
            board.star_tile()
        );

        Ok(Self {
            config,
            board,
            players,
            phase: Phase::Waiting,
            current_player: PlayerId::new(0),
            round: 1,
            dice_value: None,
            moves_left: 0,
            last_outcome: None,
            history: Vector::new(),
            results: None,
            rng: rng.for_context("play"),
        })
    }

    /// Get player count.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// Player whose turn it is.
    #[must_use]
    pub fn current(&self) -> &Player {
        &self.players[self.current_player]
    }

    /// Mutable access to the player whose turn it is.
    pub fn current_mut(&mut self) -> &mut Player {
        &mut self.players[self.current_player]
    }

    /// Tile the current player stands on.
    #[must_use]
    pub fn current_tile(&self) -> TileId {
        self.current().position
    }

    /// Offered successors while a branch choice is pending.
    #[must_use]
    pub fn pending_branch_choice(&self) -> Option<&[TileId]> {
        match &self.phase {
            Phase::BranchChoice { options } => Some(options),
            _ => None,
        }
    }

    /// Whether a star purchase is waiting for buy/decline.
    #[must_use]
    pub fn pending_star_decision(&self) -> bool {
        matches!(self.phase, Phase::StarDecision)
    }

    /// Whether the last round has been played.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver)
    }

    /// Append an event to the history, attributed to the current player.
    pub fn record(&mut self, event: GameEvent) {
        self.history.push_back(HistoryEntry {
            round: self.round,
            player: self.current_player,
            event,
        });
    }

    /// Snapshot for collaborators that only read.
    #[must_use]
    pub fn public_view(&self) -> PublicView {
        PublicView {
            round: self.round,
            total_rounds: self.config.total_rounds,
            current_player: self.current_player,
            phase: self.phase.clone(),
            dice_value: self.dice_value,
            moves_left: self.moves_left,
            message: self.last_outcome.as_ref().map(ToString::to_string),
            star_tile: self.board.star_tile(),
            players: self.players.values().cloned().collect(),
            board: self.board.clone(),
        }
    }
}

/// Read-only snapshot of a game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PublicView {
    pub round: u32,
    pub total_rounds: u32,
    pub current_player: PlayerId,
    pub phase: Phase,
    pub dice_value: Option<u8>,
    pub moves_left: u32,
    /// Text of the last landing outcome.
    pub message: Option<String>,
    pub star_tile: Option<TileId>,
    pub players: Vec<Player>,
    pub board: Board,
}
