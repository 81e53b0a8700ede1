//! Geographic coordinate type and spatial utilities.
//!
//! `Location` uses `f64` latitude/longitude in degrees.  Distances are
//! great-circle (haversine) in kilometres; there is no road network.
//!
//! `(0, 0)` is the "unset" sentinel used by the stores for vehicles and
//! collection points that were never geolocated.  Every distance involving
//! an unset or non-finite location is `f64::INFINITY` (unreachable).

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6_371.0;

/// Kilometres per degree of latitude (and of longitude at the equator) used
/// by the local flat-earth stepping approximation.
pub const KM_PER_DEGREE: f64 = 111.32;

/// Remaining distance below which [`Location::step_towards`] snaps to the
/// target instead of normalising a near-zero direction vector.
pub const STEP_EPSILON_KM: f64 = 1e-9;

/// A WGS-84 geographic coordinate in degrees.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
}

impl Location {
    /// The "never geolocated" sentinel.
    pub const UNSET: Location = Location { lat: 0.0, lon: 0.0 };

    #[inline]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// `true` if both coordinates are finite and the location is not the
    /// [`UNSET`](Self::UNSET) sentinel.
    ///
    /// Only the exact `(0, 0)` pair is unset.  A point with a single zero
    /// coordinate (on the equator or the prime meridian) is valid; stores
    /// that mark "never geolocated" by zeroing only one axis must write
    /// `(0, 0)` instead.
    #[inline]
    pub fn is_valid(self) -> bool {
        self.lat.is_finite() && self.lon.is_finite() && self != Self::UNSET
    }

    /// Haversine great-circle distance in kilometres.
    ///
    /// Returns `f64::INFINITY` if either location is invalid.
    pub fn distance_km(self, other: Location) -> f64 {
        if !self.is_valid() || !other.is_valid() {
            return f64::INFINITY;
        }

        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_KM * c
    }

    /// Advance `step_km` from `self` straight towards `target`.
    ///
    /// The direction is computed in a local metric frame (1° lat ≈ 111.32 km,
    /// 1° lon ≈ 111.32·cos(lat) km) so a step covers the same ground
    /// distance whatever the heading.  When the remaining distance is below
    /// [`STEP_EPSILON_KM`] the result is exactly `target`.
    pub fn step_towards(self, target: Location, step_km: f64) -> Location {
        let km_per_deg_lon = KM_PER_DEGREE * self.lat.to_radians().cos();

        let north_km = (target.lat - self.lat) * KM_PER_DEGREE;
        let east_km  = (target.lon - self.lon) * km_per_deg_lon;
        let magnitude = north_km.hypot(east_km);

        if magnitude < STEP_EPSILON_KM || km_per_deg_lon.abs() < f64::EPSILON {
            return target;
        }

        let scale = step_km / magnitude;
        Location {
            lat: self.lat + north_km * scale / KM_PER_DEGREE,
            lon: self.lon + east_km * scale / km_per_deg_lon,
        }
    }

    /// Component-wise equality within `tolerance_deg` degrees.
    #[inline]
    pub fn approx_eq(self, other: Location, tolerance_deg: f64) -> bool {
        (self.lat - other.lat).abs() < tolerance_deg
            && (self.lon - other.lon).abs() < tolerance_deg
    }

    /// Offset by raw degree deltas (used for jitter and nearby placement).
    #[inline]
    pub fn offset(self, d_lat: f64, d_lon: f64) -> Location {
        Location { lat: self.lat + d_lat, lon: self.lon + d_lon }
    }
}

impl From<(f64, f64)> for Location {
    #[inline]
    fn from((lat, lon): (f64, f64)) -> Self {
        Self { lat, lon }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
