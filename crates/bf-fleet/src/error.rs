use bf_core::{Alert, CoreError};
use bf_store::StoreError;
use thiserror::Error;

use crate::TickReport;

#[derive(Debug, Error)]
pub enum FleetError {
    #[error("simulator configuration error: {0}")]
    Config(#[from] CoreError),

    /// The tick was aborted; none of its batched writes were applied.
    #[error("store unavailable: {0}")]
    Store(#[from] StoreError),

    /// The tick was committed but some of its alerts could not be emitted.
    #[error("{} of the tick's alerts could not be emitted: {}", .0.failed.len(), .0.source)]
    Alerts(Box<UndeliveredAlerts>),
}

/// A committed tick whose alert sink failed part-way.
///
/// Every alert was attempted.  `report.alerts` holds the delivered ones,
/// `failed` the rest in emission order, and `source` the first sink error.
#[derive(Debug)]
pub struct UndeliveredAlerts {
    pub report: TickReport,
    pub failed: Vec<Alert>,
    pub source: StoreError,
}

pub type FleetResult<T> = Result<T, FleetError>;
