//! Vehicle state and the explicit status state machine.
//!
//! ```text
//!            RouteAssigned                 BecameFull
//!   Idle ─────────────────▶ EnRoute ─────────────────▶ Returning
//!    ▲                       │  ▲ WaypointReached          │
//!    │     RouteCompleted    │  └──────┘                   │
//!    └───────────────────────┴─────────────────────────────┘
//!                              RouteCompleted
//! ```
//!
//! `Maintenance` is absorbing and `Collecting` is never entered by the
//! simulator: neither accepts any event.

use crate::{Location, Route, VehicleId};

/// Lower bound of every fill level, in percent.
pub const FILL_MIN: f64 = 0.0;
/// Upper bound of every fill level, in percent.
pub const FILL_MAX: f64 = 100.0;

/// Clamp a fill level into `[FILL_MIN, FILL_MAX]`.  `NaN` maps to empty.
#[inline]
pub fn clamp_fill(fill: f64) -> f64 {
    if fill.is_nan() {
        FILL_MIN
    } else {
        fill.clamp(FILL_MIN, FILL_MAX)
    }
}

// ── Status ────────────────────────────────────────────────────────────────────

/// Operational status of a vehicle.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum VehicleStatus {
    #[default]
    Idle,
    EnRoute,
    /// Present in the store schema; the simulator never uses it.
    Collecting,
    Returning,
    Maintenance,
}

/// Something that happened to a vehicle and may change its status.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum VehicleEvent {
    /// A route was planned for, or reassigned to, the vehicle.
    RouteAssigned,
    /// A waypoint was reached and more remain.
    WaypointReached,
    /// The fill level reached the full threshold mid-route.
    BecameFull,
    /// The last waypoint of the route was reached.
    RouteCompleted,
}

impl VehicleStatus {
    /// The status after `event`, or `None` if the event is not valid in
    /// this status.
    pub fn on(self, event: VehicleEvent) -> Option<VehicleStatus> {
        use VehicleEvent as E;
        use VehicleStatus as S;

        match (self, event) {
            (S::Idle | S::EnRoute, E::RouteAssigned)    => Some(S::EnRoute),
            (S::EnRoute, E::WaypointReached)            => Some(S::EnRoute),
            (S::Returning, E::WaypointReached)          => Some(S::Returning),
            (S::EnRoute, E::BecameFull)                 => Some(S::Returning),
            (S::EnRoute | S::Returning, E::RouteCompleted) => Some(S::Idle),
            _ => None,
        }
    }

    /// `true` for statuses the simulator advances along a route.
    #[inline]
    pub fn is_moving(self) -> bool {
        matches!(self, VehicleStatus::EnRoute | VehicleStatus::Returning)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            VehicleStatus::Idle        => "IDLE",
            VehicleStatus::EnRoute     => "EN_ROUTE",
            VehicleStatus::Collecting  => "COLLECTING",
            VehicleStatus::Returning   => "RETURNING",
            VehicleStatus::Maintenance => "MAINTENANCE",
        }
    }
}

impl std::fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── VehicleState ──────────────────────────────────────────────────────────────

/// One collection vehicle as held by the vehicle store.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VehicleState {
    pub id: VehicleId,
    pub location: Location,
    /// Percent full, always within `[0, 100]`.  Write through
    /// [`set_fill`](Self::set_fill) to keep it clamped.
    pub fill_level: f64,
    /// Nominal payload capacity (informational; fill is tracked in percent).
    pub capacity: f64,
    pub status: VehicleStatus,
    pub route: Route,
}

impl VehicleState {
    /// A new idle, empty vehicle at `location` with no route.
    pub fn new(id: impl Into<VehicleId>, location: Location, capacity: f64) -> Self {
        Self {
            id: id.into(),
            location,
            fill_level: FILL_MIN,
            capacity,
            status: VehicleStatus::Idle,
            route: Route::empty(),
        }
    }

    /// Set the fill level, clamped to `[0, 100]`.  Returns the stored value.
    #[inline]
    pub fn set_fill(&mut self, fill: f64) -> f64 {
        self.fill_level = clamp_fill(fill);
        self.fill_level
    }

    /// Add `delta` percent, clamped.  Returns the new fill level.
    #[inline]
    pub fn add_fill(&mut self, delta: f64) -> f64 {
        self.set_fill(self.fill_level + delta)
    }

    /// Apply `event` to the status.  Returns `false` (and leaves the status
    /// untouched) if the transition is not allowed.
    pub fn apply(&mut self, event: VehicleEvent) -> bool {
        match self.status.on(event) {
            Some(next) => {
                self.status = next;
                true
            }
            None => false,
        }
    }

    /// Moving status with waypoints left to drive.
    #[inline]
    pub fn is_routed(&self) -> bool {
        self.status.is_moving() && !self.route.is_empty()
    }
}
