//! How much a vehicle picks up at one collection point.

use bf_core::{FleetConfig, SimRng};

/// Pluggable fill increase per collection, in percent of vehicle capacity.
///
/// Called once per arrival at a collection point, in vehicle order, with the
/// simulator's single RNG.  Implementations must draw from `rng` (not from
/// an RNG of their own) for runs to be reproducible from the seed.
pub trait CollectionModel {
    fn collected(&self, rng: &mut SimRng) -> f64;
}

/// Uniform amount in `[min, max)`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct UniformCollection {
    pub min: f64,
    pub max: f64,
}

impl UniformCollection {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// `[collect_min, collect_max)` from the fleet configuration.
    pub fn from_config(config: &FleetConfig) -> Self {
        Self::new(config.collect_min, config.collect_max)
    }
}

impl Default for UniformCollection {
    fn default() -> Self {
        Self::from_config(&FleetConfig::default())
    }
}

impl CollectionModel for UniformCollection {
    fn collected(&self, rng: &mut SimRng) -> f64 {
        // Empty range: no draw, so the RNG stream is unaffected.
        if self.max <= self.min {
            return self.min;
        }
        rng.gen_range(self.min..self.max)
    }
}

/// Always the same amount.  Does not touch the RNG.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FixedCollection(pub f64);

impl CollectionModel for FixedCollection {
    fn collected(&self, _rng: &mut SimRng) -> f64 {
        self.0
    }
}
