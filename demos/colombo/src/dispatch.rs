//! Periodic route dispatch between ticks.

use tracing::{debug, info, warn};

use bf_core::{VehicleState, VehicleStatus};
use bf_fleet::{FleetObserver, TickReport};
use bf_planner::{PlanError, RoutePlanner};
use bf_store::{CollectionPointStore, VehicleStore};

/// Wraps another observer and, every `every` ticks, assigns a fresh route to
/// the first IDLE vehicle while eligible collection points remain.
///
/// Runs from `on_tick_end`, after the tick is committed, so planning never
/// overlaps a tick.
pub struct Dispatcher<V, C, O> {
    planner:    RoutePlanner<V, C>,
    every:      u64,
    inner:      O,
    dispatched: usize,
    error:      Option<PlanError>,
}

impl<V: VehicleStore, C: CollectionPointStore, O: FleetObserver> Dispatcher<V, C, O> {
    pub fn new(planner: RoutePlanner<V, C>, every: u64, inner: O) -> Self {
        Self { planner, every, inner, dispatched: 0, error: None }
    }

    pub fn dispatched(&self) -> usize {
        self.dispatched
    }

    /// The first planning failure other than "nothing to collect", if any.
    pub fn take_error(&mut self) -> Option<PlanError> {
        self.error.take()
    }

    pub fn into_inner(self) -> O {
        self.inner
    }

    fn dispatch(&mut self, vehicles: &[VehicleState]) {
        let Some(vehicle) = vehicles.iter().find(|v| v.status == VehicleStatus::Idle) else {
            debug!("no idle vehicle to dispatch");
            return;
        };
        match self.planner.assign_route(&vehicle.id) {
            Ok(route) => {
                self.dispatched += 1;
                info!(vehicle = %vehicle.id, stops = route.len(), "dispatched");
            }
            Err(PlanError::NoEligibleCollectionPoints) => {
                debug!("nothing left to collect");
            }
            Err(e) => {
                warn!(vehicle = %vehicle.id, error = %e, "dispatch failed");
                if self.error.is_none() {
                    self.error = Some(e);
                }
            }
        }
    }
}

impl<V: VehicleStore, C: CollectionPointStore, O: FleetObserver> FleetObserver for Dispatcher<V, C, O> {
    fn on_tick_start(&mut self, tick: bf_core::Tick) {
        self.inner.on_tick_start(tick);
    }

    fn on_tick_end(&mut self, report: &TickReport, vehicles: &[VehicleState]) {
        self.inner.on_tick_end(report, vehicles);
        if self.every > 0 && (report.tick.0 + 1).is_multiple_of(self.every) {
            self.dispatch(vehicles);
        }
    }

    fn on_run_end(&mut self, next_tick: bf_core::Tick) {
        self.inner.on_run_end(next_tick);
    }
}
