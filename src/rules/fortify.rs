//! Tile fortification.
//!
//! An owned tile is fortified when every in-bounds orthogonal neighbor has
//! the same owner. Off-board neighbors always match, so edge and corner
//! tiles fortify with fewer allies.

use crate::board::{Grid, Tile};

/// Whether `tile` would be fortified given the current ownership on `grid`.
#[must_use]
pub fn is_fortified(grid: &Grid, tile: &Tile) -> bool {
    let Some(owner) = tile.owner() else {
        return false;
    };
    let Some(pos) = grid.position_of(tile.id()) else {
        return false;
    };

    grid.neighbors(pos).all(|n| n.is_owned_by(owner))
}

/// Recompute every tile's fortification from scratch.
///
/// Single pass, no fixpoint: flags depend only on ownership. Returns
/// whether every tile has an owner.
pub fn refortify(grid: &mut Grid) -> bool {
    let view: &Grid = grid;
    let flags: Vec<bool> = view.tiles().map(|t| is_fortified(view, t)).collect();
    let mut full = true;

    for (tile, fortified) in grid.tiles_mut().zip(flags) {
        if tile.owner().is_none() {
            full = false;
        }
        tile.set_fortified(fortified);
    }

    full
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Position, TileId};
    use crate::core::PlayerId;

    fn claim(grid: &mut Grid, ids: &[u32], player: PlayerId) {
        for &id in ids {
            grid.get_mut(TileId::new(id)).unwrap().set_owner(player);
        }
    }

    fn fortified_ids(grid: &Grid) -> Vec<u32> {
        grid.tiles().filter(|t| t.is_fortified()).map(|t| t.id().0).collect()
    }

    #[test]
    fn test_empty_grid_not_full_nothing_fortified() {
        let mut grid = Grid::new(5, |_| 'A');
        assert!(!refortify(&mut grid));
        assert!(fortified_ids(&grid).is_empty());
    }

    #[test]
    fn test_center_plus_fortifies_center_only() {
        let mut grid = Grid::new(5, |_| 'A');
        claim(&mut grid, &[7, 11, 12, 13, 17], PlayerId::First);

        assert!(!refortify(&mut grid));
        assert_eq!(fortified_ids(&grid), vec![12]);
    }

    #[test]
    fn test_corner_needs_two_neighbors() {
        let mut grid = Grid::new(5, |_| 'A');
        claim(&mut grid, &[0, 1, 5], PlayerId::Second);

        refortify(&mut grid);
        assert_eq!(fortified_ids(&grid), vec![0]);
    }

    #[test]
    fn test_mixed_owners_break_fortification() {
        let mut grid = Grid::new(5, |_| 'A');
        claim(&mut grid, &[0, 1, 5], PlayerId::First);
        refortify(&mut grid);
        assert_eq!(fortified_ids(&grid), vec![0]);

        claim(&mut grid, &[1], PlayerId::Second);
        refortify(&mut grid);
        assert!(fortified_ids(&grid).is_empty());
    }

    #[test]
    fn test_full_board_detected() {
        let mut grid = Grid::new(2, |_| 'A');
        claim(&mut grid, &[0, 1], PlayerId::First);
        claim(&mut grid, &[2, 3], PlayerId::Second);

        assert!(refortify(&mut grid));
        // Each tile has one foreign neighbor.
        assert!(fortified_ids(&grid).is_empty());
    }

    #[test]
    fn test_single_tile_board_fortifies_alone() {
        let mut grid = Grid::new(1, |_| 'A');
        claim(&mut grid, &[0], PlayerId::First);

        assert!(refortify(&mut grid));
        assert!(grid.at(Position::new(0, 0)).unwrap().is_fortified());
    }
}
