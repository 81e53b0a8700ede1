//! `bf-core`: foundational types for the `binfleet` waste-collection
//! simulator.
//!
//! This crate is a dependency of every other `bf-*` crate.  It has no `bf-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module               | Contents                                                  |
//! |----------------------|-----------------------------------------------------------|
//! | [`ids`]              | `VehicleId`, `CollectionPointId`                          |
//! | [`geo`]              | `Location`, haversine distance, metric stepping           |
//! | [`route`]            | `Route`: ordered waypoints ending at the depot           |
//! | [`vehicle`]          | `VehicleState`, `VehicleStatus`, `VehicleEvent`           |
//! | [`collection_point`] | `CollectionPoint`, `CollectionPointStatus`                |
//! | [`alert`]            | `Alert`, `AlertKind`                                      |
//! | [`config`]           | `FleetConfig`                                             |
//! | [`time`]             | `Tick`                                                    |
//! | [`rng`]              | `SimRng`                                                  |
//! | [`error`]            | `CoreError`, `CoreResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod alert;
pub mod collection_point;
pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod route;
pub mod time;
pub mod vehicle;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use alert::{Alert, AlertKind};
pub use collection_point::{CollectionPoint, CollectionPointStatus};
pub use config::{FleetConfig, DEFAULT_ELIGIBILITY_THRESHOLD};
pub use error::{CoreError, CoreResult};
pub use geo::Location;
pub use ids::{CollectionPointId, VehicleId};
pub use rng::SimRng;
pub use route::Route;
pub use time::Tick;
pub use vehicle::{clamp_fill, VehicleEvent, VehicleState, VehicleStatus, FILL_MAX, FILL_MIN};
