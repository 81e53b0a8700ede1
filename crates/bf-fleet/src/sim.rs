//! The `FleetSimulator` struct and its tick loop.

use std::collections::BTreeMap;

use tracing::{debug, error, info, warn};

use bf_core::{
    Alert, AlertKind, CollectionPoint, FleetConfig, Location, Route, SimRng, Tick, VehicleEvent,
    VehicleId, VehicleState, VehicleStatus,
};
use bf_spatial::LocationIndex;
use bf_store::{AlertSink, CollectionPointStore, VehicleStore};

use crate::{
    CollectionModel, FleetError, FleetObserver, FleetResult, Reassignment, TickReport,
    UndeliveredAlerts,
};

// ── Per-tick working state ────────────────────────────────────────────────────

/// Everything one tick changes, held back until the scan is complete.
struct Pending {
    /// Vehicles to store, keyed by id so a vehicle touched twice (e.g. a
    /// reassignment target) is written once with its final state.
    vehicles: BTreeMap<VehicleId, VehicleState>,
    /// Working copies of all collection points plus a dirty flag per slot.
    points:   Vec<CollectionPoint>,
    touched:  Vec<bool>,
    index:    LocationIndex,
    /// IDLE vehicles from the start-of-tick snapshot not yet claimed.
    idle:     Vec<VehicleState>,
    alerts:   Vec<Alert>,
}

impl Pending {
    fn new(idle: Vec<VehicleState>, points: Vec<CollectionPoint>) -> Self {
        let index = LocationIndex::build(points.iter().map(|p| p.location));
        Self {
            vehicles: BTreeMap::new(),
            touched:  vec![false; points.len()],
            points,
            index,
            idle,
            alerts:   Vec::new(),
        }
    }

    fn stage(&mut self, vehicle: VehicleState) {
        self.vehicles.insert(vehicle.id.clone(), vehicle);
    }

    fn touched_points(&self) -> Vec<CollectionPoint> {
        self.points
            .iter()
            .zip(&self.touched)
            .filter(|(_, touched)| **touched)
            .map(|(p, _)| p.clone())
            .collect()
    }
}

// ── FleetSimulator ────────────────────────────────────────────────────────────

/// Advances every routed vehicle by one step per tick.
///
/// Holds no vehicle or collection-point state between ticks: each tick reads
/// the stores, works on owned copies, and writes the results back.  Ticks
/// must not run concurrently with each other or with route assignment for
/// the same vehicles; `tick` takes `&mut self` so one simulator cannot.
///
/// Create via [`SimulatorBuilder`][crate::SimulatorBuilder].
pub struct FleetSimulator<V, C, A, M> {
    config:   FleetConfig,
    vehicles: V,
    points:   C,
    alerts:   A,
    model:    M,
    rng:      SimRng,
    now:      Tick,
}

impl<V, C, A, M> FleetSimulator<V, C, A, M>
where
    V: VehicleStore,
    C: CollectionPointStore,
    A: AlertSink,
    M: CollectionModel,
{
    pub(crate) fn from_parts(
        config:   FleetConfig,
        vehicles: V,
        points:   C,
        alerts:   A,
        model:    M,
        rng:      SimRng,
        now:      Tick,
    ) -> Self {
        Self { config, vehicles, points, alerts, model, rng, now }
    }

    // ── Public API ────────────────────────────────────────────────────────

    pub fn config(&self) -> &FleetConfig {
        &self.config
    }

    /// The tick the next call to [`tick`](Self::tick) will process.
    pub fn current_tick(&self) -> Tick {
        self.now
    }

    /// Run exactly `n` ticks, reporting each to `observer`.
    ///
    /// Stops at the first failed tick and `on_run_end` is not called.  A
    /// tick that committed but lost alerts is still passed to `on_tick_end`
    /// before its error is returned.
    pub fn run_ticks<O: FleetObserver>(&mut self, n: u64, observer: &mut O) -> FleetResult<()> {
        for _ in 0..n {
            observer.on_tick_start(self.now);
            match self.tick() {
                Ok(report) => {
                    let vehicles = self.vehicles.list_all()?;
                    observer.on_tick_end(&report, &vehicles);
                }
                Err(FleetError::Alerts(undelivered)) => {
                    let vehicles = self.vehicles.list_all()?;
                    observer.on_tick_end(&undelivered.report, &vehicles);
                    return Err(FleetError::Alerts(undelivered));
                }
                Err(e) => return Err(e),
            }
        }
        observer.on_run_end(self.now);
        Ok(())
    }

    /// Process one tick.
    ///
    /// On a store error nothing from the batch is kept, no alerts are
    /// emitted, and the tick counter does not advance.  If the vehicle batch
    /// was stored but the point batch was not, the staged vehicles are
    /// stored again with their start-of-tick state.  Random-walk saves made
    /// before the failure stay.
    ///
    /// Alerts are emitted after the commit.  Every alert is attempted; if
    /// any fail the call returns [`FleetError::Alerts`] carrying the report
    /// and the undelivered alerts.  The tick still counts.
    pub fn tick(&mut self) -> FleetResult<TickReport> {
        let now = self.now;
        let mut report = TickReport::new(now);

        // ── Phase 1: snapshot ─────────────────────────────────────────────
        let snapshot = self.vehicles.list_all()?;
        let mut originals: BTreeMap<VehicleId, VehicleState> =
            snapshot.iter().map(|v| (v.id.clone(), v.clone())).collect();
        let idle: Vec<VehicleState> = snapshot
            .iter()
            .filter(|v| v.status == VehicleStatus::Idle)
            .cloned()
            .collect();

        // ── Phase 2: unrouted vehicles ────────────────────────────────────
        let mut active = Vec::new();
        let mut healed = Vec::new();
        for vehicle in snapshot {
            match (vehicle.status, vehicle.route.is_empty()) {
                (VehicleStatus::EnRoute, true) => {
                    self.wander(vehicle)?;
                    report.wandered += 1;
                }
                (VehicleStatus::Returning, true) => healed.push(vehicle),
                (status, false) if status.is_moving() => active.push(vehicle),
                _ => {}
            }
        }

        if active.is_empty() && healed.is_empty() {
            self.now = now.next();
            return Ok(report);
        }

        // ── Phase 3: advance routed vehicles into the pending batch ───────
        let points = if active.is_empty() { Vec::new() } else { self.points.list_all()? };
        let mut pending = Pending::new(idle, points);

        for mut vehicle in healed {
            self.heal(&mut vehicle);
            report.healed.push(vehicle.id.clone());
            pending.stage(vehicle);
        }
        for vehicle in active {
            self.advance(vehicle, &mut pending, &mut report);
        }

        // ── Phase 4: commit, then alert ───────────────────────────────────
        let touched = pending.touched_points();
        let vehicles: Vec<VehicleState> = pending.vehicles.into_values().collect();
        if !vehicles.is_empty() {
            self.vehicles.save_all(&vehicles)?;
        }
        if !touched.is_empty() {
            if let Err(e) = self.points.save_all(&touched) {
                self.roll_back(&vehicles, &mut originals);
                return Err(e.into());
            }
        }
        self.now = now.next();

        let mut failed = Vec::new();
        let mut first_error = None;
        for alert in pending.alerts {
            match self.alerts.emit(alert.kind, &alert.message, &alert.related_entity_id) {
                Ok(()) => report.alerts.push(alert),
                Err(e) => {
                    warn!(
                        tick = %now,
                        kind = %alert.kind,
                        related = %alert.related_entity_id,
                        error = %e,
                        "alert not emitted"
                    );
                    first_error.get_or_insert(e);
                    failed.push(alert);
                }
            }
        }

        debug!(
            tick = %now,
            moved = report.moved,
            arrivals = report.arrivals,
            saved = vehicles.len(),
            points = touched.len(),
            "tick committed"
        );
        match first_error {
            None => Ok(report),
            Some(source) => Err(FleetError::Alerts(Box::new(UndeliveredAlerts {
                report,
                failed,
                source,
            }))),
        }
    }

    /// Restore the start-of-tick state of every vehicle in `staged`.
    fn roll_back(
        &self,
        staged: &[VehicleState],
        originals: &mut BTreeMap<VehicleId, VehicleState>,
    ) {
        let restore: Vec<VehicleState> =
            staged.iter().filter_map(|v| originals.remove(&v.id)).collect();
        if restore.is_empty() {
            return;
        }
        if let Err(e) = self.vehicles.save_all(&restore) {
            error!(
                vehicles = restore.len(),
                error = %e,
                "vehicle rollback failed; vehicle and point stores disagree"
            );
        } else {
            warn!(vehicles = restore.len(), "point batch failed; vehicle batch rolled back");
        }
    }

    // ── Per-vehicle steps ─────────────────────────────────────────────────

    /// Jitter an EN_ROUTE vehicle that has no route, and save it at once.
    fn wander(&mut self, mut vehicle: VehicleState) -> FleetResult<()> {
        let half = self.config.wander_half_width_deg;
        let origin = if vehicle.location.is_valid() { vehicle.location } else { self.config.depot };
        vehicle.location = origin.offset(self.rng.jitter(half), self.rng.jitter(half));
        self.vehicles.save(&vehicle)?;
        Ok(())
    }

    fn heal(&self, vehicle: &mut VehicleState) {
        vehicle.apply(VehicleEvent::RouteCompleted);
        vehicle.route = Route::empty();
        if self.at_depot(vehicle.location) {
            vehicle.set_fill(0.0);
        }
        warn!(vehicle = %vehicle.id, "RETURNING without a route, reset to IDLE");
    }

    fn advance(&mut self, mut vehicle: VehicleState, pending: &mut Pending, report: &mut TickReport) {
        let depot = self.config.depot;
        if vehicle.status == VehicleStatus::Returning
            && !vehicle.route.is_depot_only(depot, self.config.location_tolerance_deg)
        {
            debug!(vehicle = %vehicle.id, stops = vehicle.route.len(), "returning route normalised to depot");
            vehicle.route = Route::to_depot(depot);
        }

        let Some(target) = vehicle.route.next() else {
            return;
        };
        if !target.is_valid() {
            warn!(vehicle = %vehicle.id, "dropping waypoint without a valid location");
            vehicle.route.pop_next();
            self.finish_if_done(&mut vehicle, false);
            pending.stage(vehicle);
            return;
        }

        if !vehicle.location.is_valid() {
            let half = self.config.wander_half_width_deg;
            vehicle.location = target.offset(self.rng.jitter(half), self.rng.jitter(half));
            debug!(vehicle = %vehicle.id, location = %vehicle.location, "placed next to its target");
        }

        if vehicle.location.distance_km(target) < self.config.step_km {
            self.arrive(vehicle, target, pending, report);
        } else {
            vehicle.location = vehicle.location.step_towards(target, self.config.step_km);
            report.moved += 1;
            pending.stage(vehicle);
        }
    }

    fn arrive(
        &mut self,
        mut vehicle: VehicleState,
        target:  Location,
        pending: &mut Pending,
        report:  &mut TickReport,
    ) {
        vehicle.location = target;
        vehicle.route.pop_next();
        report.arrivals += 1;

        let at_depot = self.at_depot(target);
        if !at_depot && vehicle.status == VehicleStatus::EnRoute {
            let before = vehicle.fill_level;
            let after = vehicle.add_fill(self.model.collected(&mut self.rng));

            if let Some(slot) = pending.index.find_at(target, self.config.location_tolerance_deg) {
                let point = &mut pending.points[slot];
                point.mark_emptied();
                pending.touched[slot] = true;
                report.emptied.push(point.id.clone());
            }
            info!(vehicle = %vehicle.id, fill = after, "collected");

            if after >= self.config.full_threshold {
                vehicle.apply(VehicleEvent::BecameFull);
                let remaining = vehicle.route.take();
                vehicle.route = Route::to_depot(self.config.depot);
                report.became_full.push(vehicle.id.clone());
                info!(vehicle = %vehicle.id, remaining = remaining.len(), "full, returning to depot");

                self.reassign(&vehicle, remaining, pending, report);
                pending.stage(vehicle);
                return;
            }

            let overload = self.config.overload_threshold;
            if before < overload && after >= overload {
                pending.alerts.push(Alert::new(
                    AlertKind::TruckOverloaded,
                    format!("Vehicle {} is at {:.1}% capacity", vehicle.id, after),
                    vehicle.id.as_str(),
                ));
            }
        }

        self.finish_if_done(&mut vehicle, at_depot);
        pending.stage(vehicle);
    }

    /// IDLE once the route is used up (unloaded if that was at the depot),
    /// otherwise carry on to the next waypoint.
    fn finish_if_done(&self, vehicle: &mut VehicleState, at_depot: bool) {
        if !vehicle.route.is_empty() {
            vehicle.apply(VehicleEvent::WaypointReached);
            return;
        }
        vehicle.apply(VehicleEvent::RouteCompleted);
        vehicle.route = Route::empty();
        if at_depot {
            vehicle.set_fill(0.0);
        }
        info!(vehicle = %vehicle.id, fill = vehicle.fill_level, unloaded = at_depot, "route completed");
    }

    /// Hand `remaining` to the IDLE vehicle nearest its first waypoint.
    fn reassign(
        &self,
        from:      &VehicleState,
        remaining: Route,
        pending:   &mut Pending,
        report:    &mut TickReport,
    ) {
        let Some(first) = remaining.next() else {
            return;
        };
        let waypoints = remaining.len();

        // Strict `<` keeps the earliest candidate on ties.
        let mut best: Option<(usize, f64)> = None;
        for (i, candidate) in pending.idle.iter().enumerate() {
            if candidate.id == from.id {
                continue;
            }
            let origin = if candidate.location.is_valid() { candidate.location } else { self.config.depot };
            let km = origin.distance_km(first);
            if best.is_none_or(|(_, best_km)| km < best_km) {
                best = Some((i, km));
            }
        }

        let Some((slot, km)) = best else {
            warn!(vehicle = %from.id, waypoints, "no idle vehicle, remaining waypoints dropped");
            report.reassignments.push(Reassignment::Abandoned { from: from.id.clone(), waypoints });
            return;
        };

        let mut to = pending.idle.remove(slot);
        to.route = remaining;
        to.apply(VehicleEvent::RouteAssigned);
        info!(from = %from.id, to = %to.id, waypoints, km, "route reassigned");

        pending.alerts.push(Alert::new(
            AlertKind::RouteDelay,
            format!(
                "Vehicle {} is full; {} remaining stops reassigned to vehicle {}",
                from.id, waypoints, to.id
            ),
            to.id.as_str(),
        ));
        report.reassignments.push(Reassignment::Assigned {
            from: from.id.clone(),
            to: to.id.clone(),
            waypoints,
        });
        pending.stage(to);
    }

    fn at_depot(&self, location: Location) -> bool {
        location.approx_eq(self.config.depot, self.config.location_tolerance_deg)
    }
}
