//! Board tiles: identifiers, kinds and layout positions.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Tile identifier. Sequential from 0, stable for the whole game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileId(pub u16);

impl TileId {
    /// Create a new tile ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw index into the board's tile list.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}

/// What happens when a player lands on a tile.
///
/// A closed set: the resolver matches on it exhaustively.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TileKind {
    /// Ordinary positive space: gain coins.
    Blue,
    /// Ordinary negative space: lose coins (floored at 0).
    Red,
    /// Random event from the event catalog.
    Event,
    /// Item shop.
    Shop,
    /// Coin roulette with a signed delta.
    Chance,
    /// The single tile where a star can be bought. Moves over time.
    Star,
    /// Where every player begins. Exactly one per board.
    Start,
}

impl TileKind {
    /// All kinds, in declaration order.
    pub const ALL: [TileKind; 7] = [
        TileKind::Blue,
        TileKind::Red,
        TileKind::Event,
        TileKind::Shop,
        TileKind::Chance,
        TileKind::Star,
        TileKind::Start,
    ];

    /// Short label drawn on the tile.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            TileKind::Blue => "+3",
            TileKind::Red => "-3",
            TileKind::Event => "!",
            TileKind::Shop => "$",
            TileKind::Chance => "?",
            TileKind::Star => "★",
            TileKind::Start => "S",
        }
    }

    /// Display colour as a CSS hex string.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            TileKind::Blue => "#4ECDC4",
            TileKind::Red => "#FF6B6B",
            TileKind::Event => "#6C5CE7",
            TileKind::Shop => "#A8E6CF",
            TileKind::Chance => "#FDA7DF",
            TileKind::Star => "#FFD93D",
            TileKind::Start => "#FFFFFF",
        }
    }
}

/// Layout coordinate. Presentation only; no rule reads it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A node of the board graph.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    /// Stable identifier, equal to the tile's index on the board.
    pub id: TileId,

    /// Current kind. Only star relocation changes it during play.
    pub kind: TileKind,

    /// Where to draw the tile.
    pub position: Position,

    /// Ordered successors. Order drives "Path 1" / "Path 2" labelling.
    /// SmallVec keeps the common 1-2 successor case inline.
    pub successors: SmallVec<[TileId; 2]>,
}

impl Tile {
    /// Create a tile with a single successor.
    #[must_use]
    pub fn new(id: TileId, kind: TileKind, position: Position, next: TileId) -> Self {
        let mut successors = SmallVec::new();
        successors.push(next);
        Self {
            id,
            kind,
            position,
            successors,
        }
    }

    /// True when a player passing through must pick a path.
    #[must_use]
    pub fn is_branch(&self) -> bool {
        self.successors.len() > 1
    }
}
