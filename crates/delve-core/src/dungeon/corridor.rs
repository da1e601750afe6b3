//! Corridor stamping and room-distance queries.

use crate::rng::LevelRng;

use super::direction::Direction;
use super::grid::Grid;
use super::rect::Rect;
use super::room::Room;
use super::scan;
use super::tile::Tile;

/// Directed corridors are at least this long.
pub const MIN_CORRIDOR_LEN: i32 = 2;

/// Width of the clearance scan ahead of a directed corridor.
const CORRIDOR_SCAN_WIDTH: i32 = 3;

/// Carve one path cell. Unclaimed rock and walls open into corridor, closed
/// doors swing open, and anything already passable is left untouched — room
/// interiors are never rewritten.
fn carve(grid: &mut Grid, row: i32, col: i32) {
    match grid.get(row, col) {
        Some(Tile::Unused | Tile::Wall) => grid.set(row, col, Tile::Corridor),
        Some(Tile::DoorClosed) => grid.set(row, col, Tile::DoorOpen),
        _ => {}
    }
}

/// Lay a contiguous passable path between two in-bounds points, walking the
/// vertical leg first and the horizontal leg second. Both endpoints are
/// included; connecting a point to itself is a no-op.
///
/// Returns false only when an endpoint lies outside the grid.
pub fn stamp_corridor(grid: &mut Grid, start: (i32, i32), end: (i32, i32)) -> bool {
    if !grid.in_bounds(start.0, start.1) || !grid.in_bounds(end.0, end.1) {
        return false;
    }

    let (mut row, mut col) = start;
    carve(grid, row, col);
    while row != end.0 {
        row += (end.0 - row).signum();
        carve(grid, row, col);
    }
    while col != end.1 {
        col += (end.1 - col).signum();
        carve(grid, row, col);
    }
    true
}

/// Legacy fixed-direction corridor: a straight run grown from the anchor,
/// with its length drawn from `[MIN_CORRIDOR_LEN, max_len]`, a 3-wide
/// clearance scan before committing, and a closed door at the far end.
pub fn stamp_directed_corridor(
    grid: &mut Grid,
    rng: &mut LevelRng,
    row: i32,
    col: i32,
    dir: Direction,
    max_len: i32,
) -> bool {
    if !grid.in_bounds(row, col) {
        return false;
    }
    if max_len < MIN_CORRIDOR_LEN {
        return false;
    }

    let len = rng.between(MIN_CORRIDOR_LEN as u32, max_len as u32) as i32;

    let (scan_height, scan_width) = match dir {
        Direction::North | Direction::South => (len, CORRIDOR_SCAN_WIDTH),
        Direction::East | Direction::West => (CORRIDOR_SCAN_WIDTH, len),
    };
    if !scan::can_place(grid, row, col, dir, scan_height, scan_width) {
        return false;
    }

    let line = match dir {
        Direction::North | Direction::South => Rect::oriented(row, col, dir, len, 1),
        Direction::East | Direction::West => Rect::oriented(row, col, dir, 1, len),
    };
    if !grid.interior_contains(&line) {
        return false;
    }

    let (d_row, d_col) = dir.delta();
    for step in 0..len {
        let tile = if step == len - 1 {
            Tile::DoorClosed
        } else {
            Tile::Corridor
        };
        grid.set(row + d_row * step, col + d_col * step, tile);
    }
    true
}

/// Index of the room nearest to `rooms[from]` by Euclidean distance between
/// centroids; ties go to the first minimum in iteration order.
pub fn find_nearest_neighbor(rooms: &[Room], from: usize) -> Option<usize> {
    let origin = rooms.get(from)?.centroid;
    let mut best: Option<(usize, i64)> = None;
    for (idx, room) in rooms.iter().enumerate() {
        if idx == from {
            continue;
        }
        let dist = squared_distance(origin, room.centroid);
        if best.is_none_or(|(_, b)| dist < b) {
            best = Some((idx, dist));
        }
    }
    best.map(|(idx, _)| idx)
}

/// Squared Euclidean distance; ordering-equivalent to the real distance.
pub(crate) fn squared_distance(a: (i32, i32), b: (i32, i32)) -> i64 {
    let d_row = (a.0 - b.0) as i64;
    let d_col = (a.1 - b.1) as i64;
    d_row * d_row + d_col * d_col
}
