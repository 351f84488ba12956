//! Hand-built boards.

use smallvec::SmallVec;

use super::graph::Board;
use super::tile::{Position, Tile, TileId, TileKind};

use TileKind::{Blue, Chance, Event, Red, Shop, Star, Start};

/// (x, y, kind, successors)
type NodeSpec = (f32, f32, TileKind, &'static [u16]);

/// Starlight Island: a 26-node course with a fork at node 6.
///
/// The upper path (7-13) runs past the shop and the star; the lower path
/// (14-19) is shorter. Both rejoin at node 20, which loops back to start.
const STARLIGHT_ISLAND: [NodeSpec; 26] = [
    (200.0, 500.0, Start, &[1]),
    (280.0, 440.0, Blue, &[2]),
    (370.0, 400.0, Blue, &[3]),
    (460.0, 370.0, Red, &[4]),
    (550.0, 340.0, Event, &[5]),
    (640.0, 310.0, Blue, &[6]),
    (730.0, 280.0, Chance, &[7, 14]),
    (820.0, 240.0, Blue, &[8]),
    (900.0, 200.0, Shop, &[9]),
    (960.0, 280.0, Blue, &[10]),
    (1000.0, 370.0, Star, &[11]),
    (960.0, 460.0, Red, &[12]),
    (890.0, 520.0, Blue, &[13]),
    (800.0, 560.0, Event, &[20]),
    (730.0, 370.0, Blue, &[15]),
    (720.0, 460.0, Red, &[16]),
    (680.0, 540.0, Chance, &[17]),
    (610.0, 590.0, Blue, &[18]),
    (520.0, 600.0, Blue, &[19]),
    (430.0, 580.0, Blue, &[20]),
    (700.0, 620.0, Shop, &[21]),
    (600.0, 660.0, Blue, &[22]),
    (490.0, 670.0, Red, &[23]),
    (380.0, 660.0, Event, &[24]),
    (280.0, 620.0, Blue, &[25]),
    (210.0, 560.0, Chance, &[0]),
];

impl Board {
    /// The fixed Starlight Island board, star on node 10.
    #[must_use]
    pub fn starlight_island() -> Self {
        let tiles = STARLIGHT_ISLAND
            .iter()
            .enumerate()
            .map(|(i, &(x, y, kind, next))| Tile {
                id: TileId::new(i as u16),
                kind,
                position: Position::new(x, y),
                successors: next.iter().copied().map(TileId::new).collect::<SmallVec<_>>(),
            })
            .collect();

        Board::from_tiles(tiles, TileId::new(0))
    }
}
