//! Fleet-wide configuration.

use crate::{CoreError, CoreResult, Location};

/// Colombo Municipal Council, the default depot.
pub const DEFAULT_DEPOT: Location = Location::new(6.9135, 79.8601);

/// Fill level (percent) a collection point must exceed to be planned, and
/// the lower bound of [`CollectionPointStatus::NearFull`](crate::CollectionPointStatus::NearFull).
pub const DEFAULT_ELIGIBILITY_THRESHOLD: f64 = 85.0;

/// Tunables shared by the planner and the simulator.
///
/// Typically loaded from a JSON file by the application crate and passed to
/// both.  The depot is process-wide and read-only once the run starts.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FleetConfig {
    /// Universal route terminus and unload point.
    pub depot: Location,

    /// Distance a vehicle drives per tick, in kilometres.  A waypoint closer
    /// than this counts as reached.
    pub step_km: f64,

    /// Collection points strictly fuller than this (percent) are planned.
    pub eligibility_threshold: f64,

    /// Crossing this fill level (percent) raises `TRUCK_OVERLOADED`.
    pub overload_threshold: f64,

    /// At or above this fill level (percent) a vehicle returns to the depot.
    pub full_threshold: f64,

    /// Per-axis tolerance, in degrees, for "same location" comparisons.
    pub location_tolerance_deg: f64,

    /// Lower bound of the fill added per collection, percent.
    pub collect_min: f64,

    /// Upper bound (exclusive) of the fill added per collection, percent.
    pub collect_max: f64,

    /// Half-width of the random-walk jitter box, degrees.
    pub wander_half_width_deg: f64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self {
            depot:                  DEFAULT_DEPOT,
            step_km:                0.05,
            eligibility_threshold:  DEFAULT_ELIGIBILITY_THRESHOLD,
            overload_threshold:     95.0,
            full_threshold:         100.0,
            location_tolerance_deg: 1e-6,
            collect_min:            15.0,
            collect_max:            25.0,
            wander_half_width_deg:  0.0005,
            seed:                   42,
        }
    }
}

impl FleetConfig {
    /// Same configuration with a different depot.
    pub fn with_depot(mut self, depot: Location) -> Self {
        self.depot = depot;
        self
    }

    /// Reject values the planner and simulator cannot work with.
    pub fn validate(&self) -> CoreResult<()> {
        if !self.depot.is_valid() {
            return Err(CoreError::InvalidLocation(self.depot));
        }
        if !(self.step_km.is_finite() && self.step_km > 0.0) {
            return Err(CoreError::Config(format!("step_km must be positive, got {}", self.step_km)));
        }
        if !(self.eligibility_threshold <= self.overload_threshold
            && self.overload_threshold <= self.full_threshold
            && self.full_threshold <= crate::FILL_MAX)
        {
            return Err(CoreError::Config(format!(
                "thresholds must satisfy eligibility <= overload <= full <= 100, got {} / {} / {}",
                self.eligibility_threshold, self.overload_threshold, self.full_threshold,
            )));
        }
        if !(self.location_tolerance_deg > 0.0) {
            return Err(CoreError::Config("location_tolerance_deg must be positive".into()));
        }
        if !(self.collect_min >= 0.0 && self.collect_min <= self.collect_max) {
            return Err(CoreError::Config(format!(
                "collect range [{}, {}) is empty or negative",
                self.collect_min, self.collect_max,
            )));
        }
        if !(self.wander_half_width_deg >= 0.0) {
            return Err(CoreError::Config("wander_half_width_deg must be non-negative".into()));
        }
        Ok(())
    }
}
