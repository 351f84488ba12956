//! Randomized board generation.
//!
//! A generated board is a loop of `tile_count` tiles laid out on an
//! ellipse, tile 0 being the start, plus a three-tile shortcut that leaves
//! the loop at the branch start and rejoins it at the branch end.

use serde::{Deserialize, Serialize};
use smallvec::smallvec;
use std::f32::consts::{FRAC_PI_2, TAU};

use super::graph::Board;
use super::tile::{Position, Tile, TileId, TileKind};
use crate::core::{ConfigError, RandomSource};

/// Kinds of the shortcut tiles, in path order.
const SHORTCUT_KINDS: [TileKind; 3] = [TileKind::Event, TileKind::Red, TileKind::Blue];

/// Relative weights for typing main-loop tiles.
///
/// Start and Star are never drawn; the start is fixed and the star is
/// placed afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileWeights {
    pub blue: u32,
    pub red: u32,
    pub event: u32,
    pub shop: u32,
    pub chance: u32,
}

impl Default for TileWeights {
    fn default() -> Self {
        Self {
            blue: 40,
            red: 20,
            event: 20,
            shop: 10,
            chance: 0,
        }
    }
}

impl TileWeights {
    /// Largest total the draw accepts.
    pub const MAX_TOTAL: u64 = u32::MAX as u64;

    /// Sum of all weights, without overflow.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.table().iter().map(|(_, w)| u64::from(*w)).sum()
    }

    fn table(&self) -> [(TileKind, u32); 5] {
        [
            (TileKind::Blue, self.blue),
            (TileKind::Red, self.red),
            (TileKind::Event, self.event),
            (TileKind::Shop, self.shop),
            (TileKind::Chance, self.chance),
        ]
    }
}

/// Where the shortcut leaves and rejoins the main loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchConfig {
    pub start: usize,
    pub end: usize,
}

impl Default for BranchConfig {
    fn default() -> Self {
        Self { start: 6, end: 12 }
    }
}

/// Ellipse the main loop is laid out on.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EllipseLayout {
    pub center: Position,
    pub radius_x: f32,
    pub radius_y: f32,
}

impl Default for EllipseLayout {
    fn default() -> Self {
        Self {
            center: Position::new(640.0, 380.0),
            radius_x: 380.0,
            radius_y: 240.0,
        }
    }
}

impl EllipseLayout {
    /// Position of loop tile `i` of `count`, starting at the top.
    #[must_use]
    pub fn point(&self, i: usize, count: usize) -> Position {
        let angle = (i as f32 / count as f32) * TAU - FRAC_PI_2;
        Position::new(
            self.center.x + angle.cos() * self.radius_x,
            self.center.y + angle.sin() * self.radius_y,
        )
    }
}

/// Board generator configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardGenerator {
    /// Number of main-loop tiles (shortcut tiles come on top).
    pub tile_count: usize,

    /// Weighted draw for non-start loop tiles.
    pub weights: TileWeights,

    /// Shortcut path. `None` for a plain loop.
    pub branch: Option<BranchConfig>,

    /// Presentation layout.
    pub layout: EllipseLayout,
}

impl Default for BoardGenerator {
    fn default() -> Self {
        Self {
            tile_count: 24,
            weights: TileWeights::default(),
            branch: Some(BranchConfig::default()),
            layout: EllipseLayout::default(),
        }
    }
}

impl BoardGenerator {
    /// Smallest loop that still has a star candidate.
    pub const MIN_TILES: usize = 2;

    /// Tiles addressable by a [`TileId`], shortcut included.
    pub const MAX_TILES: usize = u16::MAX as usize + 1;

    /// Generator for a loop of `tile_count` tiles with default settings.
    #[must_use]
    pub fn new(tile_count: usize) -> Self {
        Self {
            tile_count,
            ..Self::default()
        }
    }

    /// Set the tile-type weights.
    #[must_use]
    pub fn with_weights(mut self, weights: TileWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Set or remove the shortcut.
    #[must_use]
    pub fn with_branch(mut self, branch: Option<BranchConfig>) -> Self {
        self.branch = branch;
        self
    }

    /// Check that the configuration can produce a valid board.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tile_count < Self::MIN_TILES {
            return Err(ConfigError::BoardTooSmall {
                min: Self::MIN_TILES,
                found: self.tile_count,
            });
        }
        let max = match self.branch {
            Some(_) => Self::MAX_TILES - SHORTCUT_KINDS.len(),
            None => Self::MAX_TILES,
        };
        if self.tile_count > max {
            return Err(ConfigError::BoardTooLarge {
                max,
                found: self.tile_count,
            });
        }
        let total = self.weights.total();
        if total == 0 || total > TileWeights::MAX_TOTAL {
            return Err(ConfigError::TileWeightTotal {
                total,
                max: TileWeights::MAX_TOTAL,
            });
        }
        self.check_branch()
    }

    fn check_branch(&self) -> Result<(), ConfigError> {
        if let Some(branch) = self.branch {
            if branch.start >= self.tile_count || branch.end >= self.tile_count || branch.start == branch.end {
                return Err(ConfigError::BranchOutOfRange {
                    start: branch.start,
                    end: branch.end,
                    tile_count: self.tile_count,
                });
            }
        }
        Ok(())
    }

    /// Generate a board.
    ///
    /// # Panics
    ///
    /// Panics if `tile_count` is below [`Self::MIN_TILES`]. A branch that
    /// does not fit the loop is skipped; [`Self::validate`] reports it,
    /// along with weight totals and sizes the id space cannot hold.
    pub fn generate(&self, rng: &mut impl RandomSource) -> Board {
        assert!(
            self.tile_count >= Self::MIN_TILES,
            "Board needs at least {} tiles",
            Self::MIN_TILES
        );

        let table = self.weights.table();
        let weights: Vec<u32> = table.iter().map(|(_, w)| *w).collect();

        let mut tiles = Vec::with_capacity(self.tile_count + SHORTCUT_KINDS.len());
        for i in 0..self.tile_count {
            let kind = if i == 0 {
                TileKind::Start
            } else {
                // All-zero weights fall back to the first kind
                rng.pick_weighted(&weights).map_or(table[0].0, |idx| table[idx].0)
            };
            log::trace!("tile {i} typed {kind:?}");
            tiles.push(Tile::new(
                TileId::new(i as u16),
                kind,
                self.layout.point(i, self.tile_count),
                TileId::new(((i + 1) % self.tile_count) as u16),
            ));
        }

        let mut board = Board::from_tiles(tiles, TileId::new(0));
        board.place_star_tile(rng);

        match self.branch {
            Some(branch) if self.check_branch().is_ok() => {
                board = add_shortcut(board, branch);
            }
            Some(branch) => {
                log::warn!(
                    "skipping branch {} -> {} on a {}-tile board",
                    branch.start,
                    branch.end,
                    self.tile_count
                );
            }
            None => {}
        }

        board
    }
}

/// Append the shortcut chain and hook it into the branch start.
fn add_shortcut(board: Board, branch: BranchConfig) -> Board {
    let start = TileId::new(branch.start as u16);
    let end = TileId::new(branch.end as u16);
    let from = board.tile(start).position;
    let to = board.tile(end).position;

    let mid = Position::new((from.x + to.x) / 2.0, (from.y + to.y) / 2.0 - 80.0);
    let positions = [
        Position::new((from.x + mid.x) / 2.0, (from.y + mid.y) / 2.0 - 20.0),
        mid,
        Position::new((mid.x + to.x) / 2.0, (mid.y + to.y) / 2.0 - 20.0),
    ];

    let first = board.len() as u16;
    let mut tiles = board.tiles().to_vec();
    for (offset, (kind, position)) in SHORTCUT_KINDS.iter().zip(positions).enumerate() {
        let id = TileId::new(first + offset as u16);
        let next = if offset + 1 == SHORTCUT_KINDS.len() {
            end
        } else {
            TileId::new(id.0 + 1)
        };
        tiles.push(Tile {
            id,
            kind: *kind,
            position,
            successors: smallvec![next],
        });
    }
    tiles[start.index()].successors.push(TileId::new(first));

    Board::from_tiles(tiles, board.start())
}
