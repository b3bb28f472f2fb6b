//! Square grid of tiles with row/column and id addressing.
//!
//! Tiles are stored row-major, so a tile's id is also its index:
//! `id = row * size + col`.

use serde::{Deserialize, Serialize};

use super::tile::{Tile, TileId};

/// A (row, col) grid coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// The `size × size` arrangement of tiles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    tiles: Vec<Tile>,
}

impl Grid {
    /// Build a grid, asking `letter_at` for each tile's letter in id order.
    pub(crate) fn new(size: usize, mut letter_at: impl FnMut(TileId) -> char) -> Self {
        let tiles = (0..size * size)
            .map(|i| {
                let id = TileId::new(i as u32);
                Tile::new(id, letter_at(id))
            })
            .collect();

        Self { size, tiles }
    }

    /// Edge length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of tiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the grid has no tiles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Whether `id` names a tile on this grid.
    #[must_use]
    pub fn contains(&self, id: TileId) -> bool {
        id.index() < self.tiles.len()
    }

    /// Look up a tile by id.
    #[must_use]
    pub fn get(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(id.index())
    }

    pub(crate) fn get_mut(&mut self, id: TileId) -> Option<&mut Tile> {
        self.tiles.get_mut(id.index())
    }

    /// Look up a tile by coordinate.
    #[must_use]
    pub fn at(&self, pos: Position) -> Option<&Tile> {
        self.id_at(pos).and_then(|id| self.get(id))
    }

    /// Id of the tile at `pos`, if in bounds.
    #[must_use]
    pub fn id_at(&self, pos: Position) -> Option<TileId> {
        (pos.row < self.size && pos.col < self.size)
            .then(|| TileId::new((pos.row * self.size + pos.col) as u32))
    }

    /// Coordinate of tile `id`, if on the grid.
    #[must_use]
    pub fn position_of(&self, id: TileId) -> Option<Position> {
        self.contains(id)
            .then(|| Position::new(id.index() / self.size, id.index() % self.size))
    }

    /// The in-bounds north, south, west and east neighbors of `pos`.
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = &Tile> + '_ {
        let Position { row, col } = pos;
        let candidates = [
            row.checked_sub(1).map(|r| Position::new(r, col)),
            Some(Position::new(row + 1, col)),
            col.checked_sub(1).map(|c| Position::new(row, c)),
            Some(Position::new(row, col + 1)),
        ];

        candidates.into_iter().flatten().filter_map(move |p| self.at(p))
    }

    /// All tiles in id order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.tiles.iter()
    }

    pub(crate) fn tiles_mut(&mut self) -> impl Iterator<Item = &mut Tile> + '_ {
        self.tiles.iter_mut()
    }

    /// Rows of tiles, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> + '_ {
        self.tiles.chunks(self.size.max(1))
    }

    /// Whether every tile has an owner.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.tiles.iter().all(|t| t.owner().is_some())
    }
}
