//! Spatial-subsystem error type.

use thiserror::Error;

/// Errors produced by `bf-spatial`.
#[derive(Debug, Error, PartialEq)]
pub enum SpatialError {
    #[error("waypoint {0:?} is already in the graph")]
    DuplicateWaypoint(String),

    #[error("waypoint {0:?} not found in graph")]
    WaypointNotFound(String),

    #[error("edge {from:?} -> {to:?} has invalid weight {weight}")]
    InvalidWeight { from: String, to: String, weight: f64 },
}

pub type SpatialResult<T> = Result<T, SpatialError>;
