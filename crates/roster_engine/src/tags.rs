use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use roster_core::TAG_POOL;

pub trait TagPicker: Send + Sync {
    /// Picks one tag from [`TAG_POOL`].
    fn pick(&self) -> &'static str;
}

/// Uniform pick over the tag pool. Seed it to get a repeatable sequence.
#[derive(Debug)]
pub struct RandomTagPicker {
    rng: Mutex<StdRng>,
}

impl RandomTagPicker {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }
}

impl TagPicker for RandomTagPicker {
    fn pick(&self) -> &'static str {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        TAG_POOL[rng.random_range(0..TAG_POOL.len())]
    }
}
