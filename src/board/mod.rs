//! The board: tiles, grid addressing, and the game state that owns them.

pub mod tile;
pub mod grid;
pub mod state;

pub use tile::{Tile, TileId};
pub use grid::{Grid, Position};
pub use state::Board;
