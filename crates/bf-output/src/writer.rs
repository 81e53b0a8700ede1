//! The `OutputWriter` trait implemented by backend writers.

use crate::{OutputResult, TickSummaryRow, VehicleSnapshotRow};

/// A sink for run output.
///
/// Errors are returned here; [`FleetOutputObserver`](crate::FleetOutputObserver)
/// keeps the first one for [`take_error`](crate::FleetOutputObserver::take_error).
pub trait OutputWriter {
    /// Write a batch of vehicle snapshots.
    fn write_snapshots(&mut self, rows: &[VehicleSnapshotRow]) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
