//! Random number generation for layout runs.
//!
//! Wraps a seeded ChaCha RNG so generation is reproducible: the same seed and
//! dimensions always yield the same level.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Layout random number generator.
///
/// An explicit handle threaded through every generation sub-call, so
/// independent runs can be seeded independently. Only the seed is serialized;
/// deserializing yields a fresh handle at the start of the same sequence.
#[derive(Debug, Clone)]
pub struct LevelRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl Serialize for LevelRng {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.seed.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for LevelRng {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let seed = u64::deserialize(deserializer)?;
        Ok(LevelRng::new(seed))
    }
}

impl LevelRng {
    /// Create a new RNG with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG with a random seed. Production runs seed from
    /// entropy; tests pin seeds via [`LevelRng::new`].
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this handle was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Random value in `[0, n)`. Returns 0 when `n` is 0.
    pub fn below(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        self.rng.gen_range(0..n)
    }

    /// Random value in `[lo, hi]` inclusive. Returns `lo` when the range is
    /// empty or inverted.
    pub fn between(&mut self, lo: u32, hi: u32) -> u32 {
        if lo >= hi {
            return lo;
        }
        self.rng.gen_range(lo..=hi)
    }

    /// Uniform cell coordinate in `[0, rows) x [0, cols)`.
    pub fn coord(&mut self, rows: u32, cols: u32) -> (i32, i32) {
        (self.below(rows) as i32, self.below(cols) as i32)
    }
}

impl Default for LevelRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_below_bounds() {
        let mut rng = LevelRng::new(42);
        for _ in 0..1000 {
            assert!(rng.below(10) < 10);
        }
    }

    #[test]
    fn test_between_bounds() {
        let mut rng = LevelRng::new(42);
        for _ in 0..1000 {
            let n = rng.between(4, 11);
            assert!((4..=11).contains(&n));
        }
    }

    #[test]
    fn test_reproducibility() {
        let mut rng1 = LevelRng::new(42);
        let mut rng2 = LevelRng::new(42);
        for _ in 0..100 {
            assert_eq!(rng1.below(100), rng2.below(100));
        }
    }

    #[test]
    fn test_degenerate_ranges() {
        let mut rng = LevelRng::new(42);
        assert_eq!(rng.below(0), 0);
        assert_eq!(rng.between(4, 4), 4);
        assert_eq!(rng.between(7, 3), 7);
    }

    #[test]
    fn test_serde_keeps_only_the_seed() {
        let rng = LevelRng::new(1234);
        let json = serde_json::to_string(&rng).unwrap();
        assert_eq!(json, "1234");

        let mut restored: LevelRng = serde_json::from_str(&json).unwrap();
        let mut fresh = LevelRng::new(1234);
        for _ in 0..20 {
            assert_eq!(restored.below(50), fresh.below(50));
        }
    }
}
