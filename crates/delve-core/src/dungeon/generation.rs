//! Layout driver: seeds one room near the center, grows rooms at randomly
//! sampled anchors until the per-run quota is met, then joins every room to
//! the corridor network.

use log::{debug, trace};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::rng::LevelRng;

use super::corridor::{squared_distance, stamp_corridor};
use super::direction::Direction;
use super::grid::Grid;
use super::room::{stamp_room, Room};
use super::tile::Tile;

/// Largest dimensions for the mandatory seed room.
const SEED_ROOM_MAX: (i32, i32) = (8, 8);

/// Largest dimensions for rooms grown after the seed.
const GROWTH_ROOM_MAX: (i32, i32) = (11, 12);

/// Inclusive range the per-run room quota is drawn from.
const TARGET_ROOMS: (u32, u32) = (10, 18);

/// Candidate anchors must have no structure within this many cells on either
/// axis (a 7x7 neighborhood).
const CLEARANCE_RADIUS: i32 = 3;

/// How rooms are joined during the connecting phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ConnectStrategy {
    /// Corridor between every ordered pair of room centroids.
    #[default]
    AllPairs,
    /// Spanning connector: each room joins its nearest already-connected
    /// room, nearest by Euclidean distance between centroids.
    NearestNeighbor,
}

/// Tunable generation parameters. `Default` carries the standard layout
/// constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenConfig {
    /// Max (height, width) of the seed room.
    pub seed_room_max: (i32, i32),
    /// Max (height, width) of every later room.
    pub room_max: (i32, i32),
    /// Inclusive range the room quota is drawn from, once per run.
    pub target_rooms: (u32, u32),
    pub connector: ConnectStrategy,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            seed_room_max: SEED_ROOM_MAX,
            room_max: GROWTH_ROOM_MAX,
            target_rooms: TARGET_ROOMS,
            connector: ConnectStrategy::AllPairs,
        }
    }
}

/// Fatal generation failures. Placement rejections during the search are not
/// errors; they are silently retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// Either dimension was non-positive; generation never starts.
    #[error("grid dimensions must be positive, got {height}x{width}")]
    InvalidDimensions { height: i32, width: i32 },
    /// The mandatory first room could not be stamped. Without it no anchor
    /// exists for growth, so the run aborts.
    #[error("could not place the seed room near the grid center")]
    SeedPlacementFailed,
}

/// A finished generation run: the tile grid and the rooms carved into it.
/// Handed to the caller whole; the generator never mutates it afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    pub grid: Grid,
    pub rooms: Vec<Room>,
}

/// Generate a level with the default configuration.
pub fn generate_level(
    height: i32,
    width: i32,
    rng: &mut LevelRng,
) -> Result<Level, GenerationError> {
    generate_level_with(&GenConfig::default(), height, width, rng)
}

/// Generate a level with an explicit configuration.
pub fn generate_level_with(
    config: &GenConfig,
    height: i32,
    width: i32,
    rng: &mut LevelRng,
) -> Result<Level, GenerationError> {
    if height <= 0 || width <= 0 {
        return Err(GenerationError::InvalidDimensions { height, width });
    }

    let mut grid = Grid::new(height as usize, width as usize);
    let mut rooms = Vec::new();

    // Seeding: the first room is load-bearing; nothing can grow without it.
    let seed_dir = Direction::random(rng);
    stamp_room(
        &mut grid,
        &mut rooms,
        rng,
        height / 2,
        width / 2,
        config.seed_room_max.0,
        config.seed_room_max.1,
        seed_dir,
    )
    .ok_or(GenerationError::SeedPlacementFailed)?;

    let target = rng.between(config.target_rooms.0, config.target_rooms.1) as usize;
    debug!("seed room placed facing {seed_dir}, growing to {target} rooms");

    // Sampling/Placing loop. Rejected candidates are normal operation and
    // cost nothing, so there is no retry budget.
    while rooms.len() < target {
        let (row, col) = rng.coord(height as u32, width as u32);
        if grid.get(row, col) != Some(Tile::Unused) {
            continue;
        }
        if !clearance_free(&grid, row, col) {
            continue;
        }
        let dir = Direction::random(rng);
        if let Some(id) = stamp_room(
            &mut grid,
            &mut rooms,
            rng,
            row,
            col,
            config.room_max.0,
            config.room_max.1,
            dir,
        ) {
            trace!("room {} stamped at ({row}, {col}) facing {dir}", id.0);
        }
    }

    match config.connector {
        ConnectStrategy::AllPairs => connect_all_pairs(&mut grid, &mut rooms),
        ConnectStrategy::NearestNeighbor => connect_nearest(&mut grid, &mut rooms),
    }

    Ok(Level { grid, rooms })
}

/// A candidate anchor is only usable when nothing structural — wall, floor,
/// or corridor — lies within its 7x7 neighborhood.
fn clearance_free(grid: &Grid, row: i32, col: i32) -> bool {
    for d_row in -CLEARANCE_RADIUS..=CLEARANCE_RADIUS {
        for d_col in -CLEARANCE_RADIUS..=CLEARANCE_RADIUS {
            if matches!(
                grid.get(row + d_row, col + d_col),
                Some(Tile::Wall | Tile::Floor | Tile::Corridor)
            ) {
                return false;
            }
        }
    }
    true
}

/// Default connecting phase: a corridor between every ordered pair of room
/// centroids. Self-pairs are no-ops.
fn connect_all_pairs(grid: &mut Grid, rooms: &mut [Room]) {
    for i in 0..rooms.len() {
        for j in 0..rooms.len() {
            if stamp_corridor(grid, rooms[i].centroid, rooms[j].centroid) {
                rooms[i].connected = true;
                rooms[j].connected = true;
            }
        }
    }
}

/// Alternate spanning connector: rooms join the nearest already-connected
/// room in id order, starting from the seed room. Ties go to the first
/// minimum in iteration order.
fn connect_nearest(grid: &mut Grid, rooms: &mut [Room]) {
    let Some(seed) = rooms.first_mut() else {
        return;
    };
    seed.connected = true;

    for i in 1..rooms.len() {
        let origin = rooms[i].centroid;
        let nearest = rooms
            .iter()
            .enumerate()
            .filter(|(j, room)| *j != i && room.connected)
            .min_by_key(|(_, room)| squared_distance(origin, room.centroid))
            .map(|(j, _)| j);
        if let Some(j) = nearest
            && stamp_corridor(grid, rooms[j].centroid, rooms[i].centroid)
        {
            rooms[i].connected = true;
        }
    }
}
