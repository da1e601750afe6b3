//! delve-core: procedural dungeon layout generation.
//!
//! Given grid dimensions, produces a 2-D tile map of walled rooms connected
//! by corridors, with no overlapping structures and full traversability.
//! The crate performs no I/O: rendering, input, and actors belong to the
//! caller, which consumes the finished [`dungeon::Grid`] through
//! [`dungeon::Grid::get`] and [`dungeon::Tile::is_passable`].
//!
//! Randomness flows through an explicit [`LevelRng`] handle, so a fixed seed
//! reproduces a level exactly and independent generations can run
//! concurrently with independently seeded handles.

pub mod dungeon;

mod rng;

pub use rng::LevelRng;
