//! Room records and the room stamper.

use serde::{Deserialize, Serialize};

use crate::rng::LevelRng;

use super::direction::Direction;
use super::grid::Grid;
use super::rect::Rect;
use super::scan;
use super::tile::Tile;

/// Rooms are never carved smaller than this along either axis.
pub const MIN_ROOM_EDGE: i32 = 4;

/// Room identifier: the 1-based count of rooms created so far at creation
/// time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomId(pub u32);

/// A successfully stamped room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    /// Footprint including the perimeter walls.
    pub rect: Rect,
    /// Interior cell carrying the `StairsUp` marker.
    pub centroid: (i32, i32),
    /// Set once the room has been joined to the corridor network.
    pub connected: bool,
}

/// Carve a bordered room grown from the anchor along `dir`, with each
/// dimension drawn independently from `[MIN_ROOM_EDGE, max]`.
///
/// Fails (returning `None`) on an out-of-grid anchor, a `max` below the
/// minimum edge, a footprint that collides with existing geometry, or one
/// that would reach the grid border. A failed attempt may leave cells it
/// already wrote in place; callers must not rely on atomic placement.
#[allow(clippy::too_many_arguments)]
pub fn stamp_room(
    grid: &mut Grid,
    rooms: &mut Vec<Room>,
    rng: &mut LevelRng,
    anchor_row: i32,
    anchor_col: i32,
    max_height: i32,
    max_width: i32,
    dir: Direction,
) -> Option<RoomId> {
    if !grid.in_bounds(anchor_row, anchor_col) {
        return None;
    }
    if max_height < MIN_ROOM_EDGE || max_width < MIN_ROOM_EDGE {
        return None;
    }

    let height = rng.between(MIN_ROOM_EDGE as u32, max_height as u32) as i32;
    let width = rng.between(MIN_ROOM_EDGE as u32, max_width as u32) as i32;
    let rect = Rect::oriented(anchor_row, anchor_col, dir, height, width);

    if !scan::fits(grid, rect) {
        return None;
    }
    // The footprint must stop short of the far border.
    if !grid.interior_contains(&rect) {
        return None;
    }

    for (row, col) in rect.cells() {
        // Occupancy is re-checked during the write; on a foreign tile the
        // stamp stops where it is and the attempt fails, leaving the cells
        // already written in place.
        if grid.get(row, col) != Some(Tile::Unused) {
            return None;
        }
        let tile = if rect.on_edge(row, col) {
            Tile::Wall
        } else {
            Tile::Floor
        };
        grid.set(row, col, tile);
    }

    let centroid = rect.center();
    grid.set(centroid.0, centroid.1, Tile::StairsUp);

    let id = RoomId(rooms.len() as u32 + 1);
    rooms.push(Room {
        id,
        rect,
        centroid,
        connected: false,
    });
    Some(id)
}
