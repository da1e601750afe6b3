//! Cardinal directions for oriented stamping.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::rng::LevelRng;

/// One of the four cardinal directions.
///
/// Rows grow downward and columns grow rightward, so `North` points toward
/// smaller row indices. Being a closed enum, no invalid direction is
/// representable.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All directions, in sampling order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Unit step as `(d_row, d_col)`.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (-1, 0),
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
        }
    }

    /// Uniformly random direction.
    pub fn random(rng: &mut LevelRng) -> Direction {
        Self::ALL[rng.below(Self::ALL.len() as u32) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deltas_are_unit_steps() {
        for dir in Direction::ALL {
            let (d_row, d_col) = dir.delta();
            assert_eq!(d_row.abs() + d_col.abs(), 1);
        }
    }

    #[test]
    fn test_opposites_cancel() {
        let (nr, nc) = Direction::North.delta();
        let (sr, sc) = Direction::South.delta();
        assert_eq!((nr + sr, nc + sc), (0, 0));

        let (er, ec) = Direction::East.delta();
        let (wr, wc) = Direction::West.delta();
        assert_eq!((er + wr, ec + wc), (0, 0));
    }

    #[test]
    fn test_random_covers_all_directions() {
        let mut rng = LevelRng::new(42);
        let mut seen = [false; 4];
        for _ in 0..100 {
            let dir = Direction::random(&mut rng);
            let idx = Direction::ALL.iter().position(|d| *d == dir).unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}
