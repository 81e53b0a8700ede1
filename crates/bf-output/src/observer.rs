//! `FleetOutputObserver<W>`: bridges `FleetObserver` to an `OutputWriter`.

use bf_core::{Tick, VehicleState};
use bf_fleet::{FleetObserver, TickReport};

use crate::row::{TickSummaryRow, VehicleSnapshotRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`FleetObserver`] that writes a summary row and one snapshot row per
/// vehicle every `snapshot_interval` ticks to any [`OutputWriter`].
///
/// Errors from the writer are stored internally because `FleetObserver`
/// methods have no return value.  After the run returns, check for errors
/// with [`take_error`][Self::take_error].
pub struct FleetOutputObserver<W: OutputWriter> {
    writer:            W,
    snapshot_interval: u64,
    last_error:        Option<OutputError>,
}

impl<W: OutputWriter> FleetOutputObserver<W> {
    /// Snapshot every tick.
    pub fn new(writer: W) -> Self {
        Self::with_interval(writer, 1)
    }

    /// Snapshot vehicles only on ticks that are a multiple of `interval`
    /// (summaries are written every tick).  An interval of 0 disables
    /// snapshots.
    pub fn with_interval(writer: W, interval: u64) -> Self {
        Self {
            writer,
            snapshot_interval: interval,
            last_error:        None,
        }
    }

    /// Take the stored write error (if any) after the run returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> FleetObserver for FleetOutputObserver<W> {
    fn on_tick_end(&mut self, report: &TickReport, vehicles: &[VehicleState]) {
        let result = self.writer.write_tick_summary(&TickSummaryRow::from(report));
        self.store_err(result);

        let tick = report.tick.0;
        if self.snapshot_interval == 0 || !tick.is_multiple_of(self.snapshot_interval) {
            return;
        }
        let rows: Vec<VehicleSnapshotRow> =
            vehicles.iter().map(|v| VehicleSnapshotRow::new(tick, v)).collect();
        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_run_end(&mut self, _next_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
