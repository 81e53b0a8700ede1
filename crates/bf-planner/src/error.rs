//! Planning error type.

use thiserror::Error;

use bf_core::{VehicleId, VehicleStatus};
use bf_spatial::SpatialError;
use bf_store::StoreError;

/// Reasons a route could not be planned or assigned.
///
/// None of these are retried: the caller fixes the input or the fleet state
/// and asks again.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("vehicle {0} not found")]
    VehicleNotFound(VehicleId),

    #[error("vehicle {0} has no valid location")]
    InvalidVehicleLocation(VehicleId),

    #[error("no eligible collection points to visit")]
    NoEligibleCollectionPoints,

    #[error("vehicle {id} cannot take a new route while {status}")]
    VehicleUnavailable { id: VehicleId, status: VehicleStatus },

    #[error(transparent)]
    StoreUnavailable(#[from] StoreError),

    #[error("planning graph error: {0}")]
    Graph(#[from] SpatialError),
}

pub type PlanResult<T> = Result<T, PlanError>;
