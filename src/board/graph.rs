//! The board graph and star placement.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::tile::{Tile, TileId, TileKind};
use crate::core::{BoardError, RandomSource};

/// A closed, traversable graph of tiles.
///
/// Successor lists never change after construction. Tile kinds only change
/// through star placement and relocation, which keep exactly one star.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    tiles: Vec<Tile>,
    start: TileId,
}

impl Board {
    /// Wrap a tile list. Tile `i` must have id `i`.
    ///
    /// Call [`Board::validate`] before handing the board to a game.
    #[must_use]
    pub fn from_tiles(tiles: Vec<Tile>, start: TileId) -> Self {
        Self { tiles, start }
    }

    /// Number of tiles, including shortcut tiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// The start tile every player begins on.
    #[must_use]
    pub fn start(&self) -> TileId {
        self.start
    }

    /// All tiles in id order.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Get a tile. Panics on an id this board never issued.
    #[must_use]
    pub fn tile(&self, id: TileId) -> &Tile {
        &self.tiles[id.index()]
    }

    /// Get a tile if the id exists.
    #[must_use]
    pub fn get(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(id.index())
    }

    /// Kind of a tile.
    #[must_use]
    pub fn kind(&self, id: TileId) -> TileKind {
        self.tile(id).kind
    }

    /// Successors of a tile, in path order.
    #[must_use]
    pub fn successors(&self, id: TileId) -> &[TileId] {
        &self.tile(id).successors
    }

    /// Overwrite a tile's kind.
    ///
    /// For presets and scenario setup. Placing a second star or start this
    /// way breaks the board invariants; use [`Board::place_star_tile`] to
    /// move the star.
    pub fn set_kind(&mut self, id: TileId, kind: TileKind) {
        self.tiles[id.index()].kind = kind;
    }

    /// The tile currently holding the star, if any.
    #[must_use]
    pub fn star_tile(&self) -> Option<TileId> {
        self.tiles.iter().find(|t| t.kind == TileKind::Star).map(|t| t.id)
    }

    /// Re-roll the star onto a uniformly random tile.
    ///
    /// Candidates are every tile that is neither the start nor the current
    /// star. The old star reverts to [`TileKind::Blue`].
    ///
    /// # Panics
    ///
    /// Panics if there is no candidate tile (a board of one tile).
    pub fn place_star_tile(&mut self, rng: &mut impl RandomSource) -> TileId {
        let candidates: Vec<TileId> = self
            .tiles
            .iter()
            .filter(|t| !matches!(t.kind, TileKind::Start | TileKind::Star))
            .map(|t| t.id)
            .collect();
        assert!(!candidates.is_empty(), "No tile can hold the star");

        let chosen = candidates[rng.pick_index(candidates.len())];
        self.move_star_to(chosen);
        chosen
    }

    /// Move the star after it has been bought.
    ///
    /// Prefers a random Blue tile; if the board has none, falls back to
    /// [`Board::place_star_tile`].
    pub fn relocate_star(&mut self, rng: &mut impl RandomSource) -> TileId {
        let blues: Vec<TileId> = self
            .tiles
            .iter()
            .filter(|t| t.kind == TileKind::Blue)
            .map(|t| t.id)
            .collect();

        if blues.is_empty() {
            return self.place_star_tile(rng);
        }

        let chosen = blues[rng.pick_index(blues.len())];
        self.move_star_to(chosen);
        chosen
    }

    fn move_star_to(&mut self, chosen: TileId) {
        for tile in &mut self.tiles {
            if tile.kind == TileKind::Star {
                tile.kind = TileKind::Blue;
            }
        }
        self.tiles[chosen.index()].kind = TileKind::Star;
        log::debug!("star placed on {chosen}");
    }

    /// Check the structural invariants.
    ///
    /// - ids are sequential
    /// - exactly one start tile (the designated one) and exactly one star
    /// - every tile has at least one successor, all of which exist
    /// - every tile is reachable from the start
    pub fn validate(&self) -> Result<(), BoardError> {
        if self.tiles.is_empty() {
            return Err(BoardError::Empty);
        }

        let mut starts = 0;
        let mut stars = 0;
        for (i, tile) in self.tiles.iter().enumerate() {
            if tile.id.index() != i {
                return Err(BoardError::IdMismatch { tile: tile.id });
            }
            match tile.kind {
                TileKind::Start => starts += 1,
                TileKind::Star => stars += 1,
                _ => {}
            }
            if tile.successors.is_empty() {
                return Err(BoardError::NoSuccessors { tile: tile.id });
            }
            if let Some(&target) = tile.successors.iter().find(|s| s.index() >= self.tiles.len()) {
                return Err(BoardError::DanglingSuccessor { tile: tile.id, target });
            }
        }

        if starts != 1 || self.get(self.start).map(|t| t.kind) != Some(TileKind::Start) {
            return Err(BoardError::StartCount(starts));
        }
        if stars != 1 {
            return Err(BoardError::StarCount(stars));
        }

        let mut seen = FxHashSet::default();
        let mut frontier = vec![self.start];
        while let Some(id) = frontier.pop() {
            if seen.insert(id) {
                frontier.extend(self.successors(id).iter().copied());
            }
        }
        if let Some(missing) = self.tiles.iter().find(|t| !seen.contains(&t.id)) {
            return Err(BoardError::Unreachable { tile: missing.id });
        }

        Ok(())
    }
}
