//! Deterministic simulation RNG.
//!
//! The simulator owns a single `SimRng` seeded from `FleetConfig::seed` and
//! draws from it in a fixed order (vehicles are processed in store order),
//! so a run is fully reproducible from the seed and the initial store
//! contents.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Simulation-level RNG for collection amounts and position jitter.
///
/// Used only in single-threaded contexts: a tick is never run concurrently.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Uniform value in `[-half_width, half_width)`; `0.0` for a zero width.
    #[inline]
    pub fn jitter(&mut self, half_width: f64) -> f64 {
        if half_width <= 0.0 {
            return 0.0;
        }
        self.0.gen_range(-half_width..half_width)
    }
}
