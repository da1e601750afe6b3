//! The tile buffer.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::tile::Tile;

/// Fixed-size 2-D tile buffer addressed by `(row, col)`.
///
/// Created with every interior cell `Unused` and the full border `Wall`; the
/// border stays walled for the grid's lifetime. All access is bounds-checked:
/// reads outside the grid return the `None` sentinel and writes outside it
/// are no-ops. The grid is never resized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    height: i32,
    width: i32,
    tiles: Vec<Tile>,
}

impl Grid {
    /// A walled, otherwise unclaimed grid.
    pub fn new(height: usize, width: usize) -> Grid {
        let mut grid = Grid {
            height: height as i32,
            width: width as i32,
            tiles: vec![Tile::Unused; height * width],
        };
        for row in 0..grid.height {
            for col in 0..grid.width {
                if row == 0 || row == grid.height - 1 || col == 0 || col == grid.width - 1 {
                    grid.set(row, col, Tile::Wall);
                }
            }
        }
        grid
    }

    pub const fn height(&self) -> i32 {
        self.height
    }

    pub const fn width(&self) -> i32 {
        self.width
    }

    pub const fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && row < self.height && col >= 0 && col < self.width
    }

    fn index(&self, row: i32, col: i32) -> Option<usize> {
        if self.in_bounds(row, col) {
            Some((row * self.width + col) as usize)
        } else {
            None
        }
    }

    /// Tile at `(row, col)`; `None` is the out-of-bounds sentinel. Never
    /// panics, never reads adjacent memory.
    pub fn get(&self, row: i32, col: i32) -> Option<Tile> {
        self.index(row, col).map(|i| self.tiles[i])
    }

    /// Write a tile at `(row, col)`. No-op outside the grid.
    pub fn set(&mut self, row: i32, col: i32, tile: Tile) {
        if let Some(i) = self.index(row, col) {
            self.tiles[i] = tile;
        }
    }

    /// True when the rectangle lies strictly inside the walled border.
    pub const fn interior_contains(&self, rect: &Rect) -> bool {
        rect.top >= 1
            && rect.left >= 1
            && rect.bottom <= self.height - 2
            && rect.right <= self.width - 2
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                // Row and column are in range by construction.
                let tile = self.get(row, col).unwrap_or_default();
                write!(f, "{}", tile.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
