//! Inclusive cell rectangles and oriented footprints.
//!
//! `Rect::oriented` is the single source of truth for how a footprint hangs
//! off its anchor; the placement scanner and the room stamper both go through
//! it, so the two can never disagree about which cells a footprint covers.

use serde::{Deserialize, Serialize};

use super::direction::Direction;

/// Inclusive rectangle of grid cells: rows `top..=bottom`, columns
/// `left..=right`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub top: i32,
    pub left: i32,
    pub bottom: i32,
    pub right: i32,
}

impl Rect {
    pub const fn new(top: i32, left: i32, bottom: i32, right: i32) -> Rect {
        Rect {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Footprint of `height` x `width` cells grown from an anchor along a
    /// direction of travel.
    ///
    /// The footprint extends away from the anchor along the travel axis and
    /// is centered on the anchor across it, so the anchor always lies on the
    /// anchor-adjacent edge (where a door would go). East and West center
    /// vertically with the half-height offset below the anchor row.
    pub fn oriented(
        anchor_row: i32,
        anchor_col: i32,
        dir: Direction,
        height: i32,
        width: i32,
    ) -> Rect {
        match dir {
            Direction::North => {
                let left = anchor_col - width / 2;
                Rect::new(anchor_row - height + 1, left, anchor_row, left + width - 1)
            }
            Direction::South => {
                let left = anchor_col - width / 2;
                Rect::new(anchor_row, left, anchor_row + height - 1, left + width - 1)
            }
            Direction::East => {
                let bottom = anchor_row + height / 2;
                Rect::new(bottom - height + 1, anchor_col, bottom, anchor_col + width - 1)
            }
            Direction::West => {
                let bottom = anchor_row + height / 2;
                Rect::new(bottom - height + 1, anchor_col - width + 1, bottom, anchor_col)
            }
        }
    }

    pub const fn height(&self) -> i32 {
        self.bottom - self.top + 1
    }

    pub const fn width(&self) -> i32 {
        self.right - self.left + 1
    }

    pub const fn contains(&self, row: i32, col: i32) -> bool {
        row >= self.top && row <= self.bottom && col >= self.left && col <= self.right
    }

    /// True when the cell lies on the rectangle's perimeter.
    pub const fn on_edge(&self, row: i32, col: i32) -> bool {
        row == self.top || row == self.bottom || col == self.left || col == self.right
    }

    /// True when the two rectangles share at least one cell.
    pub const fn intersects(&self, other: &Rect) -> bool {
        !(self.bottom < other.top
            || self.top > other.bottom
            || self.right < other.left
            || self.left > other.right)
    }

    /// Center cell, biased toward the bottom-right on even extents.
    pub const fn center(&self) -> (i32, i32) {
        (self.top + self.height() / 2, self.left + self.width() / 2)
    }

    /// Row-major iterator over every cell in the rectangle.
    pub fn cells(self) -> impl Iterator<Item = (i32, i32)> {
        (self.top..=self.bottom).flat_map(move |row| (self.left..=self.right).map(move |col| (row, col)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions() {
        let r = Rect::new(10, 20, 15, 25);
        assert_eq!(r.height(), 6);
        assert_eq!(r.width(), 6);
    }

    #[test]
    fn test_oriented_north_grows_upward() {
        let r = Rect::oriented(10, 10, Direction::North, 5, 4);
        assert_eq!(r, Rect::new(6, 8, 10, 11));
        // The anchor sits on the bottom (anchor-adjacent) edge.
        assert!(r.on_edge(10, 10));
    }

    #[test]
    fn test_oriented_south_grows_downward() {
        let r = Rect::oriented(10, 10, Direction::South, 5, 4);
        assert_eq!(r, Rect::new(10, 8, 14, 11));
        assert!(r.on_edge(10, 10));
    }

    #[test]
    fn test_oriented_east_grows_rightward() {
        let r = Rect::oriented(10, 10, Direction::East, 4, 6);
        // Half the height hangs below the anchor row.
        assert_eq!(r, Rect::new(9, 10, 12, 15));
        assert!(r.on_edge(10, 10));
    }

    #[test]
    fn test_oriented_west_grows_leftward() {
        let r = Rect::oriented(10, 10, Direction::West, 4, 6);
        assert_eq!(r, Rect::new(9, 5, 12, 10));
        assert!(r.on_edge(10, 10));
    }

    #[test]
    fn test_cells_cover_the_area() {
        let r = Rect::new(2, 3, 4, 6);
        let cells: Vec<_> = r.cells().collect();
        assert_eq!(cells.len(), (r.height() * r.width()) as usize);
        assert_eq!(cells.first(), Some(&(2, 3)));
        assert_eq!(cells.last(), Some(&(4, 6)));
    }

    #[test]
    fn test_on_edge_and_interior() {
        let r = Rect::new(0, 0, 3, 3);
        assert!(r.on_edge(0, 2));
        assert!(r.on_edge(3, 0));
        assert!(!r.on_edge(1, 1));
        assert!(!r.on_edge(2, 2));
    }

    #[test]
    fn test_intersects() {
        let a = Rect::new(0, 0, 5, 5);
        let b = Rect::new(5, 5, 8, 8);
        let c = Rect::new(6, 6, 9, 9);
        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_center_is_interior_for_rooms() {
        // Rooms are never smaller than 4x4, so the center can never land on
        // the perimeter.
        for height in 4..=11 {
            for width in 4..=12 {
                let r = Rect::new(0, 0, height - 1, width - 1);
                let (row, col) = r.center();
                assert!(!r.on_edge(row, col), "{height}x{width} center on edge");
            }
        }
    }
}
