use crate::RandSource;
use rand::{Rng, rng};

/// Seeds from the calling thread's OS-seeded ChaCha RNG (`rand::rng()`).
///
/// Zero-sized: nothing is stored, so the handle is `Send + Sync` even though
/// `ThreadRng` itself is not.
#[derive(Default, Clone, Copy, Debug)]
pub struct ThreadRandom;

impl RandSource<u64> for ThreadRandom {
    fn rand(&self) -> u64 {
        rng().random()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_vary() {
        let draws: std::collections::HashSet<u64> = (0..8).map(|_| ThreadRandom.rand()).collect();
        assert!(draws.len() > 1);
    }
}
