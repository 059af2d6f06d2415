//! Random game id generation.
//!
//! New games get an opaque hex id. Ids come from a ChaCha8 stream so tests
//! can seed it and get reproducible ids, while real games seed from entropy.
//!
//! ```
//! use forest_tally::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! assert_eq!(a.gen_game_id(), b.gen_game_id());
//! assert_eq!(a.gen_game_id().len(), 32);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seedable RNG used for minting game ids.
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

    /// Create an RNG seeded from operating-system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha8Rng::from_entropy(),
        }
    }

    /// Generate a 128-bit game id rendered as 32 lowercase hex digits.
    pub fn gen_game_id(&mut self) -> String {
        let value: u128 = self.inner.gen();
        format!("{:032x}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..10 {
            assert_eq!(rng1.gen_game_id(), rng2.gen_game_id());
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        assert_ne!(rng1.gen_game_id(), rng2.gen_game_id());
    }

    #[test]
    fn test_successive_ids_differ() {
        let mut rng = GameRng::new(7);
        let first = rng.gen_game_id();
        let second = rng.gen_game_id();

        assert_ne!(first, second);
        assert!(first.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
