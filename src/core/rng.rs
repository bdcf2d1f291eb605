//! Deterministic random number generation for root-word selection.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the same sequence of root words
//! - **Replayable**: The seed is kept, so a front end can print it and the
//!   player can replay the same rounds with `--seed`
//!
//! ```
//! use word_scramble::core::RoundRng;
//!
//! let words = ["silkworm", "alphabet", "triangle"];
//!
//! let mut rng1 = RoundRng::new(42);
//! let mut rng2 = RoundRng::new(42);
//!
//! assert_eq!(rng1.choose(&words), rng2.choose(&words));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded RNG used to pick root words.
///
/// Uses ChaCha8 so a seed reproduces the same rounds on every platform.
#[derive(Clone, Debug)]
pub struct RoundRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl RoundRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Choose a random element from a slice, uniformly.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn picks(rng: &mut RoundRng, n: usize) -> Vec<usize> {
        let items: Vec<usize> = (0..1000).collect();
        (0..n).map(|_| *rng.choose(&items).unwrap()).collect()
    }

    #[test]
    fn test_determinism() {
        let mut rng1 = RoundRng::new(42);
        let mut rng2 = RoundRng::new(42);

        assert_eq!(picks(&mut rng1, 100), picks(&mut rng2, 100));
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = RoundRng::new(1);
        let mut rng2 = RoundRng::new(2);

        assert_ne!(picks(&mut rng1, 10), picks(&mut rng2, 10));
    }

    #[test]
    fn test_choose() {
        let mut rng = RoundRng::new(42);
        let items = vec!["silkworm", "alphabet", "triangle"];

        let chosen = rng.choose(&items);
        assert!(chosen.is_some());
        assert!(items.contains(chosen.unwrap()));

        let empty: Vec<&str> = vec![];
        assert!(rng.choose(&empty).is_none());
    }

    #[test]
    fn test_choose_covers_every_element() {
        let mut rng = RoundRng::new(7);
        let items = [0, 1, 2, 3];
        let mut seen = [false; 4];

        for _ in 0..200 {
            seen[*rng.choose(&items).unwrap()] = true;
        }

        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_entropy_seed_replays() {
        let mut rng = RoundRng::from_entropy();
        let mut replay = RoundRng::new(rng.seed());

        assert_eq!(picks(&mut rng, 20), picks(&mut replay, 20));
    }
}
