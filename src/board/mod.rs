//! Board topology.
//!
//! The board is a directed graph of tiles:
//! - `Tile`: one space, with a kind and an ordered successor list
//! - `Board`: the tile collection plus star placement and validation
//! - `BoardGenerator`: randomized loop-with-shortcut boards
//! - `Board::starlight_island`: a fixed hand-built board
//!
//! Every tile is reachable from the start, every tile has at least one
//! successor, and exactly one tile holds the star at any instant.

mod tile;
mod graph;
mod generator;
mod preset;

pub use tile::{Position, Tile, TileId, TileKind};
pub use graph::Board;
pub use generator::{BoardGenerator, BranchConfig, EllipseLayout, TileWeights};
