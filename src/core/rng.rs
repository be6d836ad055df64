//! Deterministic random number generation for baseline players.
//!
//! ```
//! use rust_minimax::core::GameRng;
//!
//! let moves = ["red 1", "red 2", "blue 1", "blue 2"];
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.choose(&moves), b.choose(&moves));
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seeded RNG. Same seed produces the same sequence of choices.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        let items: Vec<u32> = (0..1000).collect();

        for _ in 0..100 {
            assert_eq!(rng1.choose(&items), rng2.choose(&items));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let items: Vec<u32> = (0..1000).collect();

        let seq1: Vec<_> = (0..10).map(|_| rng1.choose(&items)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.choose(&items)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_choose() {
        let mut rng = GameRng::new(42);
        let items = vec![1, 2, 3, 4, 5];

        let chosen = rng.choose(&items);
        assert!(chosen.is_some());
        assert!(items.contains(chosen.unwrap()));

        let empty: Vec<i32> = vec![];
        assert!(rng.choose(&empty).is_none());
    }
}
