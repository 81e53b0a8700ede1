//! `bf-planner`: multi-stop route planning for one vehicle at a time.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`planner`] | `RoutePlanner`, `greedy_route`                              |
//! | [`error`]   | `PlanError`, `PlanResult<T>`                                |
//!
//! # Algorithm
//!
//! Sequential nearest neighbour: from the vehicle's position, build a star
//! graph to every unvisited eligible collection point, run single-source
//! shortest paths, drive to the nearest, and repeat from there.  The graph
//! is rebuilt every step because edge weights are distances from the
//! *current* position.  The route always ends at the depot.
//!
//! This is a heuristic for one vehicle; it does not optimise the fleet.

pub mod error;
pub mod planner;


pub use error::{PlanError, PlanResult};
pub use planner::{greedy_route, RoutePlanner};
