//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! The two fixed seats of a game: `First` always opens.
//!
//! ## PlayerMap
//!
//! Two-slot per-player storage with O(1) access, indexable by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two seats at the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    /// Opens every game.
    First,
    /// Moves second.
    Second,
}

impl PlayerId {
    /// Both seats, in turn order.
    pub const ALL: [PlayerId; 2] = [PlayerId::First, PlayerId::Second];

    /// Get the 0-based seat index.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PlayerId::First => 0,
            PlayerId::Second => 1,
        }
    }

    /// The opposing seat.
    ///
    /// ```
    /// use tile_press::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::First.other(), PlayerId::Second);
    /// assert_eq!(PlayerId::Second.other(), PlayerId::First);
    /// ```
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            PlayerId::First => PlayerId::Second,
            PlayerId::Second => PlayerId::First,
        }
    }

    /// Iterate over both seats in turn order.
    pub fn all() -> impl Iterator<Item = PlayerId> {
        Self::ALL.into_iter()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.index() + 1)
    }
}

/// A player's standing in the current game.
///
/// Tiles are not stored here; ownership lives on each tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Which seat this player occupies.
    pub id: PlayerId,
    /// Score locked in at the end of the last completed turn.
    pub committed_score: u32,
}

impl Player {
    /// Create a player with no score.
    #[must_use]
    pub const fn new(id: PlayerId) -> Self {
        Self {
            id,
            committed_score: 0,
        }
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use tile_press::core::{PlayerId, PlayerMap};
///
/// let mut tiles: PlayerMap<u32> = PlayerMap::new(|_| 0);
/// tiles[PlayerId::Second] += 3;
///
/// assert_eq!(tiles[PlayerId::First], 0);
/// assert_eq!(tiles[PlayerId::Second], 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::First), factory(PlayerId::Second)],
        }
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::all().zip(self.data.iter())
    }

    /// Iterate over (PlayerId, &mut T) pairs in turn order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        PlayerId::all().zip(self.data.iter_mut())
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        assert_eq!(PlayerId::First.index(), 0);
        assert_eq!(PlayerId::Second.index(), 1);
        assert_eq!(format!("{}", PlayerId::First), "Player 1");
        assert_eq!(format!("{}", PlayerId::Second), "Player 2");
    }

    #[test]
    fn test_player_id_other_is_involution() {
        for player in PlayerId::all() {
            assert_ne!(player.other(), player);
            assert_eq!(player.other().other(), player);
        }
    }

    #[test]
    fn test_new_player_has_no_score() {
        let player = Player::new(PlayerId::Second);
        assert_eq!(player.id, PlayerId::Second);
        assert_eq!(player.committed_score, 0);
    }

    #[test]
    fn test_player_map_new() {
        let map = PlayerMap::new(|p| p.index() * 10);

        assert_eq!(map[PlayerId::First], 0);
        assert_eq!(map[PlayerId::Second], 10);
    }

    #[test]
    fn test_player_map_mutation() {
        let mut map: PlayerMap<u32> = PlayerMap::new(|_| 0);

        map[PlayerId::First] = 10;
        *map.get_mut(PlayerId::Second) += 20;

        assert_eq!(map[PlayerId::First], 10);
        assert_eq!(map[PlayerId::Second], 20);
    }

    #[test]
    fn test_player_map_iter() {
        let mut map = PlayerMap::new(Player::new);
        for (_, player) in map.iter_mut() {
            player.committed_score += 1;
        }

        let pairs: Vec<_> = map.iter().map(|(id, p)| (id, p.committed_score)).collect();
        assert_eq!(pairs, vec![(PlayerId::First, 1), (PlayerId::Second, 1)]);
    }

    #[test]
    fn test_player_id_serialization() {
        let json = serde_json::to_string(&PlayerId::Second).unwrap();
        let deserialized: PlayerId = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, PlayerId::Second);
    }
}
