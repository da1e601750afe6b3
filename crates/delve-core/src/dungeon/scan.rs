//! Placement scanning: the strict empty-canvas collision test.

use super::direction::Direction;
use super::grid::Grid;
use super::rect::Rect;
use super::tile::Tile;

/// True when every cell of the footprint grown from the anchor along `dir`
/// is still unclaimed. `height` and `width` are the footprint's row and
/// column extents.
///
/// Stamping never overwrites existing geometry, so a single wall, floor, or
/// corridor cell inside the footprint fails the scan. Cells outside the grid
/// read as the out-of-bounds sentinel and fail it too.
pub fn can_place(
    grid: &Grid,
    anchor_row: i32,
    anchor_col: i32,
    dir: Direction,
    height: i32,
    width: i32,
) -> bool {
    fits(grid, Rect::oriented(anchor_row, anchor_col, dir, height, width))
}

/// Rect-level form of the scan, shared with the room stamper.
pub(crate) fn fits(grid: &Grid, footprint: Rect) -> bool {
    footprint
        .cells()
        .all(|(row, col)| grid.get(row, col) == Some(Tile::Unused))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_ground_scans_clean() {
        let grid = Grid::new(20, 40);
        for dir in Direction::ALL {
            assert!(can_place(&grid, 10, 20, dir, 5, 5), "{dir} should fit");
        }
    }

    #[test]
    fn test_single_claimed_cell_fails_the_scan() {
        let mut grid = Grid::new(20, 40);
        // South footprint from (10, 20) covers rows 10..=14, cols 18..=22.
        grid.set(12, 19, Tile::Floor);
        assert!(!can_place(&grid, 10, 20, Direction::South, 5, 5));
        // A footprint elsewhere is unaffected.
        assert!(can_place(&grid, 3, 30, Direction::South, 5, 5));
    }

    #[test]
    fn test_border_walls_fail_the_scan() {
        let grid = Grid::new(20, 40);
        assert!(!can_place(&grid, 2, 20, Direction::North, 5, 5));
    }

    #[test]
    fn test_out_of_bounds_footprint_fails_the_scan() {
        let grid = Grid::new(20, 40);
        assert!(!can_place(&grid, 10, 38, Direction::East, 5, 8));
    }
}
