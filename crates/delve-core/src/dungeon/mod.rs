//! Dungeon layout generation.
//!
//! One generation run seeds a room near the grid center, grows rooms at
//! randomly sampled anchors until a per-run quota is met, then joins every
//! room to the corridor network. The finished grid and room list are handed
//! to the caller and never mutated afterwards.

mod corridor;
mod direction;
mod generation;
mod grid;
mod rect;
mod room;
mod scan;
mod tile;

pub use corridor::{
    find_nearest_neighbor, stamp_corridor, stamp_directed_corridor, MIN_CORRIDOR_LEN,
};
pub use direction::Direction;
pub use generation::{
    generate_level, generate_level_with, ConnectStrategy, GenConfig, GenerationError, Level,
};
pub use grid::Grid;
pub use rect::Rect;
pub use room::{stamp_room, Room, RoomId, MIN_ROOM_EDGE};
pub use scan::can_place;
pub use tile::Tile;
