//! What one tick did.

use bf_core::{Alert, CollectionPointId, Tick, VehicleId};

/// Outcome of handing a full vehicle's remaining waypoints to another one.
#[derive(Clone, Debug, PartialEq)]
pub enum Reassignment {
    /// `to` was IDLE at the start of the tick and now drives the remainder.
    Assigned { from: VehicleId, to: VehicleId, waypoints: usize },
    /// No IDLE vehicle was available; the waypoints were dropped for now and
    /// will be picked up by a later planning pass.
    Abandoned { from: VehicleId, waypoints: usize },
}

/// Summary of one [`FleetSimulator::tick`](crate::FleetSimulator::tick).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickReport {
    pub tick: Tick,
    /// Routed vehicles that stepped towards a waypoint without reaching it.
    pub moved: usize,
    /// Waypoints reached, depot included.
    pub arrivals: usize,
    pub emptied: Vec<CollectionPointId>,
    pub became_full: Vec<VehicleId>,
    pub reassignments: Vec<Reassignment>,
    /// Alerts emitted after the tick's writes were stored.
    pub alerts: Vec<Alert>,
    /// EN_ROUTE vehicles without a route that jittered in place.
    pub wandered: usize,
    /// RETURNING vehicles without a route that were reset to IDLE.
    pub healed: Vec<VehicleId>,
}

impl TickReport {
    pub fn new(tick: Tick) -> Self {
        Self { tick, ..Self::default() }
    }

    pub fn assigned_count(&self) -> usize {
        self.reassignments
            .iter()
            .filter(|r| matches!(r, Reassignment::Assigned { .. }))
            .count()
    }

    pub fn abandoned_count(&self) -> usize {
        self.reassignments.len() - self.assigned_count()
    }
}
