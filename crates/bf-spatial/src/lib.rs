//! `bf-spatial`: waypoint graph, shortest paths, and location indexing.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                      |
//! |------------|---------------------------------------------------------------|
//! | [`graph`]  | `Waypoint`, `Graph`: mutable weighted directed adjacency     |
//! | [`search`] | `shortest_path_from`, `ShortestPaths`: per-run search state  |
//! | [`index`]  | `LocationIndex`: R-tree lookup of "the point at this spot"   |
//! | [`error`]  | `SpatialError`, `SpatialResult<T>`                            |
//!
//! The graph holds identity and edges only.  Tentative distances and
//! predecessors live in a [`ShortestPaths`] value created fresh by every
//! search, so nothing leaks from one planning run into the next.

pub mod error;
pub mod graph;
pub mod index;
pub mod search;


pub use error::{SpatialError, SpatialResult};
pub use graph::{Graph, Waypoint, WaypointIdx};
pub use index::LocationIndex;
pub use search::{shortest_path_from, ShortestPaths};
