//! The route planner.

use tracing::{debug, info};

use bf_core::{FleetConfig, Location, Route, VehicleEvent, VehicleId, VehicleState};
use bf_spatial::{shortest_path_from, Graph, Waypoint};
use bf_store::{CollectionPointStore, VehicleStore};

use crate::{PlanError, PlanResult};

/// Plans routes for single vehicles against the current collection points.
///
/// Owns its two stores by value; pass `&store` or an `Arc` to share them
/// with the simulator.
pub struct RoutePlanner<V, C> {
    vehicles: V,
    points:   C,
    config:   FleetConfig,
}

impl<V: VehicleStore, C: CollectionPointStore> RoutePlanner<V, C> {
    pub fn new(vehicles: V, points: C, config: FleetConfig) -> Self {
        Self { vehicles, points, config }
    }

    pub fn config(&self) -> &FleetConfig {
        &self.config
    }

    /// Plan a route for `vehicle_id` without changing any stored state.
    ///
    /// The route starts at the vehicle's location, visits every eligible
    /// collection point in nearest-neighbour order, and ends at the depot.
    pub fn plan_route(&self, vehicle_id: &VehicleId) -> PlanResult<Route> {
        let vehicle = self.load(vehicle_id)?;
        self.plan_for(&vehicle)
    }

    /// Plan a route for `vehicle_id`, store it on the vehicle, and set the
    /// vehicle `EN_ROUTE`.
    ///
    /// Vehicles that are returning to unload or in maintenance are refused
    /// with [`PlanError::VehicleUnavailable`].
    pub fn assign_route(&self, vehicle_id: &VehicleId) -> PlanResult<Route> {
        let mut vehicle = self.load(vehicle_id)?;
        if vehicle.status.on(VehicleEvent::RouteAssigned).is_none() {
            return Err(PlanError::VehicleUnavailable {
                id:     vehicle.id,
                status: vehicle.status,
            });
        }

        let route = self.plan_for(&vehicle)?;
        vehicle.route = route.clone();
        vehicle.apply(VehicleEvent::RouteAssigned);
        self.vehicles.save(&vehicle)?;

        info!(vehicle = %vehicle.id, stops = route.len(), "route assigned");
        Ok(route)
    }

    fn load(&self, vehicle_id: &VehicleId) -> PlanResult<VehicleState> {
        self.vehicles
            .get(vehicle_id)?
            .ok_or_else(|| PlanError::VehicleNotFound(vehicle_id.clone()))
    }

    fn plan_for(&self, vehicle: &VehicleState) -> PlanResult<Route> {
        if !vehicle.location.is_valid() {
            return Err(PlanError::InvalidVehicleLocation(vehicle.id.clone()));
        }

        let threshold = self.config.eligibility_threshold;
        let eligible: Vec<Waypoint> = self
            .points
            .list_all()?
            .into_iter()
            .filter(|p| p.is_eligible(threshold))
            .map(|p| Waypoint::new(point_key(p.id.as_str()), p.location))
            .collect();

        if eligible.is_empty() {
            return Err(PlanError::NoEligibleCollectionPoints);
        }
        debug!(vehicle = %vehicle.id, eligible = eligible.len(), "planning route");

        let start = Waypoint::new(vehicle_key(vehicle.id.as_str()), vehicle.location);
        greedy_route(start, eligible, self.config.depot)
    }
}

// Graph ids are namespaced so a vehicle and a collection point sharing a
// store key never collide.
fn vehicle_key(id: &str) -> String {
    format!("vehicle:{id}")
}

fn point_key(id: &str) -> String {
    format!("point:{id}")
}

/// Greedy nearest-neighbour tour from `start` through `candidates`,
/// terminated by `depot`.
///
/// The returned route is `[start, nearest, next-nearest-from-there, …,
/// depot]`.  Candidates that cannot be reached from the current position
/// (no finite distance) end the walk early and are left out.
///
/// Candidate ids must be unique and differ from `start.id`.
pub fn greedy_route(start: Waypoint, candidates: Vec<Waypoint>, depot: Location) -> PlanResult<Route> {
    let mut route = Route::empty();
    route.push(start.location);

    let mut current = start;
    let mut unvisited = candidates;

    while !unvisited.is_empty() {
        // Fresh graph per step: `current` plus everything still unvisited,
        // with edges weighted by the distance from `current`.
        let mut graph = Graph::with_capacity(unvisited.len() + 1);
        graph.add_waypoint(current.clone())?;
        for waypoint in &unvisited {
            graph.add_waypoint(waypoint.clone())?;
            let km = current.location.distance_km(waypoint.location);
            if km.is_finite() {
                graph.add_edge(&current.id, &waypoint.id, km)?;
            }
        }

        let paths = shortest_path_from(&graph, &current.id)?;
        let Some((nearest, km)) = paths.nearest_waypoint(&graph) else {
            debug!(from = %current.id, left = unvisited.len(), "no reachable waypoint, stopping early");
            break;
        };
        debug!(from = %current.id, to = %nearest.id, km, "next stop");

        route.push(nearest.location);
        current = Waypoint::new(nearest.id.clone(), nearest.location);
        unvisited.retain(|w| w.id != current.id);
    }

    route.push(depot);
    Ok(route)
}
