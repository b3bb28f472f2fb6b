//! Score arithmetic for the word in progress.
//!
//! A selected tile is worth a point to the player moving when it is neither
//! theirs nor fortified. If it belonged to the opponent, the opponent loses
//! that point.

use crate::board::{Grid, Tile, TileId};
use crate::core::PlayerId;

fn selected<'a>(grid: &'a Grid, word: &'a [TileId]) -> impl Iterator<Item = &'a Tile> + 'a {
    word.iter().filter_map(move |&id| grid.get(id))
}

/// Points `mover` would gain by playing `word`.
#[must_use]
pub fn turn_gain(grid: &Grid, word: &[TileId], mover: PlayerId) -> u32 {
    selected(grid, word).filter(|t| t.is_claimable_by(mover)).count() as u32
}

/// Points `victim` would lose if the opponent played `word`.
#[must_use]
pub fn stolen_count(grid: &Grid, word: &[TileId], victim: PlayerId) -> u32 {
    selected(grid, word)
        .filter(|t| t.is_owned_by(victim) && !t.is_fortified())
        .count() as u32
}

/// Score `player` would hold if `word` were submitted by `mover` now.
#[must_use]
pub fn projected_score(
    grid: &Grid,
    word: &[TileId],
    mover: PlayerId,
    player: PlayerId,
    committed: u32,
) -> u32 {
    if player == mover {
        committed + turn_gain(grid, word, mover)
    } else {
        committed.saturating_sub(stolen_count(grid, word, player))
    }
}
