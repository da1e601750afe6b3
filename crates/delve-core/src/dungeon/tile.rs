//! Tile vocabulary for generated maps.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Terrain tile occupying one grid cell.
///
/// Passability and the display glyph are fixed per variant; a tile carries no
/// per-instance state.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum Tile {
    /// Unclaimed rock, the default fill. Impassable.
    #[default]
    Unused = 0,
    /// Room interior. Passable.
    Floor = 1,
    /// Connecting passage. Same glyph and passability class as `Floor`.
    Corridor = 2,
    /// Room perimeter and grid border. Impassable.
    Wall = 3,
    /// Marker stamped on each room's centroid. Passable.
    StairsUp = 4,
    /// Descent to the next level. Passable.
    StairsDown = 5,
    /// Impassable until opened.
    DoorClosed = 6,
    /// Passable.
    DoorOpen = 7,
}

impl Tile {
    /// Whether an actor can occupy this tile.
    pub const fn is_passable(self) -> bool {
        matches!(
            self,
            Tile::Floor | Tile::Corridor | Tile::StairsUp | Tile::StairsDown | Tile::DoorOpen
        )
    }

    /// Display character used by `Grid`'s `Display` impl.
    pub const fn glyph(self) -> char {
        match self {
            Tile::Unused => ' ',
            Tile::Floor | Tile::Corridor => '.',
            Tile::Wall => '#',
            Tile::StairsUp => '^',
            Tile::StairsDown => 'v',
            Tile::DoorClosed => '+',
            Tile::DoorOpen => '/',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_default_fill() {
        assert_eq!(Tile::default(), Tile::Unused);
    }

    #[test]
    fn test_passability() {
        assert!(!Tile::Unused.is_passable());
        assert!(!Tile::Wall.is_passable());
        assert!(!Tile::DoorClosed.is_passable());
        assert!(Tile::Floor.is_passable());
        assert!(Tile::Corridor.is_passable());
        assert!(Tile::StairsUp.is_passable());
        assert!(Tile::StairsDown.is_passable());
        assert!(Tile::DoorOpen.is_passable());
    }

    #[test]
    fn test_floor_and_corridor_share_a_class() {
        assert_eq!(Tile::Floor.glyph(), Tile::Corridor.glyph());
        assert_eq!(Tile::Floor.is_passable(), Tile::Corridor.is_passable());
    }

    #[test]
    fn test_glyphs_are_distinct_outside_the_floor_class() {
        let glyphs: Vec<char> = Tile::iter()
            .filter(|t| *t != Tile::Corridor)
            .map(Tile::glyph)
            .collect();
        for (i, a) in glyphs.iter().enumerate() {
            for b in &glyphs[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
