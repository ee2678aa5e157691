//! RandomSource implementations backed by `rand`.

use std::sync::Mutex;

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::domain::RandomSource;

/// Thread-local RNG, the default for production rounds
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandomSource;

impl RandomSource for ThreadRandomSource {
    fn pick_index(&self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        rand::rng().random_range(0..len)
    }
}

/// Seeded RNG producing a reproducible sequence of picks
#[derive(Debug)]
pub struct SeededRandomSource {
    rng: Mutex<StdRng>,
}

impl SeededRandomSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandomSource {
    fn pick_index(&self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        // a poisoned lock still holds a usable RNG state
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        rng.random_range(0..len)
    }
}
