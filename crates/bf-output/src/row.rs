//! Plain data row types written by output backends.

use bf_core::VehicleState;
use bf_fleet::TickReport;

/// One vehicle as stored after a tick.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleSnapshotRow {
    pub tick:       u64,
    pub vehicle_id: String,
    pub lat:        f64,
    pub lon:        f64,
    pub fill_level: f64,
    /// `IDLE`, `EN_ROUTE`, … as stored.
    pub status:     &'static str,
    /// Waypoints left on the route, depot included.
    pub stops_left: usize,
}

impl VehicleSnapshotRow {
    pub fn new(tick: u64, vehicle: &VehicleState) -> Self {
        Self {
            tick,
            vehicle_id: vehicle.id.to_string(),
            lat:        vehicle.location.lat,
            lon:        vehicle.location.lon,
            fill_level: vehicle.fill_level,
            status:     vehicle.status.as_str(),
            stops_left: vehicle.route.len(),
        }
    }
}

/// Counts for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:        u64,
    pub moved:       u64,
    pub arrivals:    u64,
    pub emptied:     u64,
    pub became_full: u64,
    pub reassigned:  u64,
    pub abandoned:   u64,
    pub alerts:      u64,
    pub wandered:    u64,
}

impl From<&TickReport> for TickSummaryRow {
    fn from(report: &TickReport) -> Self {
        Self {
            tick:        report.tick.0,
            moved:       report.moved as u64,
            arrivals:    report.arrivals as u64,
            emptied:     report.emptied.len() as u64,
            became_full: report.became_full.len() as u64,
            reassigned:  report.assigned_count() as u64,
            abandoned:   report.abandoned_count() as u64,
            alerts:      report.alerts.len() as u64,
            wandered:    report.wandered as u64,
        }
    }
}
