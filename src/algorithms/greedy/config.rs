//! Configuration for the greedy pair allocator.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::occupancy::DEFAULT_DAY_CAPACITY;

/// Tuning knobs for [`GreedyPairAllocator`](super::GreedyPairAllocator).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AllocatorConfig {
    /// Failed iterations tolerated before the run gives up.
    pub max_failures: u32,
    /// People a single day can hold. Pairs only join days with an even
    /// occupancy that leaves room for both.
    pub day_capacity: usize,
    /// Seed for reproducible runs; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl AllocatorConfig {
    pub const DEFAULT_MAX_FAILURES: u32 = 5000;

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_max_failures(mut self, max_failures: u32) -> Self {
        self.max_failures = max_failures;
        self
    }

    /// Random source for one run.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

impl Default for AllocatorConfig {
    fn default() -> Self {
        Self {
            max_failures: Self::DEFAULT_MAX_FAILURES,
            day_capacity: DEFAULT_DAY_CAPACITY,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn default_config_is_valid() {
        let cfg = AllocatorConfig::default();
        assert_eq!(cfg.max_failures, 5000);
        assert_eq!(cfg.day_capacity, 2);
        assert!(cfg.seed.is_none());
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let cfg = AllocatorConfig::default().with_seed(42);
        let a: u64 = cfg.rng().gen();
        let b: u64 = cfg.rng().gen();
        assert_eq!(a, b);
    }
}
