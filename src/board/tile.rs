//! Tiles: single grid cells carrying a letter and an owner.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Stable identifier of a tile, `row * size + col`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileId(pub u32);

impl TileId {
    /// Create a new tile ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID as an index into the row-major grid.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One board cell.
///
/// The letter and id never change. Owner and fortification are only
/// written by the board while resolving a submitted word.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    id: TileId,
    letter: char,
    owner: Option<PlayerId>,
    fortified: bool,
}

impl Tile {
    /// Create an unowned tile.
    #[must_use]
    pub(crate) fn new(id: TileId, letter: char) -> Self {
        Self {
            id,
            letter,
            owner: None,
            fortified: false,
        }
    }

    /// Tile identifier.
    #[must_use]
    pub fn id(&self) -> TileId {
        self.id
    }

    /// Uppercase letter shown on the tile.
    #[must_use]
    pub fn letter(&self) -> char {
        self.letter
    }

    /// Player who last claimed this tile.
    #[must_use]
    pub fn owner(&self) -> Option<PlayerId> {
        self.owner
    }

    /// Whether the tile is currently immune to being claimed.
    #[must_use]
    pub fn is_fortified(&self) -> bool {
        self.fortified
    }

    /// Whether `player` owns this tile.
    #[must_use]
    pub fn is_owned_by(&self, player: PlayerId) -> bool {
        self.owner == Some(player)
    }

    /// Whether a word played by `player` would take this tile.
    ///
    /// Fortified tiles never change hands; a player's own tiles are free.
    #[must_use]
    pub fn is_claimable_by(&self, player: PlayerId) -> bool {
        !self.fortified && self.owner != Some(player)
    }

    pub(crate) fn set_owner(&mut self, owner: PlayerId) {
        self.owner = Some(owner);
    }

    pub(crate) fn set_fortified(&mut self, fortified: bool) {
        debug_assert!(!fortified || self.owner.is_some(), "unowned tile fortified");
        self.fortified = fortified;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tile_is_unowned() {
        let tile = Tile::new(TileId::new(4), 'Q');
        assert_eq!(tile.id(), TileId::new(4));
        assert_eq!(tile.letter(), 'Q');
        assert_eq!(tile.owner(), None);
        assert!(!tile.is_fortified());
    }

    #[test]
    fn test_claimable() {
        let mut tile = Tile::new(TileId::new(0), 'A');
        assert!(tile.is_claimable_by(PlayerId::First));

        tile.set_owner(PlayerId::First);
        assert!(!tile.is_claimable_by(PlayerId::First));
        assert!(tile.is_claimable_by(PlayerId::Second));

        tile.set_fortified(true);
        assert!(!tile.is_claimable_by(PlayerId::Second));
    }
}
