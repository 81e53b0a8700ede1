//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `vehicle_snapshots.csv`
//! - `tick_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, TickSummaryRow, VehicleSnapshotRow};

pub const SNAPSHOT_HEADER: [&str; 7] =
    ["tick", "vehicle_id", "lat", "lon", "fill_level", "status", "stops_left"];

pub const SUMMARY_HEADER: [&str; 9] = [
    "tick", "moved", "arrivals", "emptied", "became_full", "reassigned", "abandoned", "alerts",
    "wandered",
];

/// Writes run output to two CSV files.
pub struct CsvWriter {
    snapshots: Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open (truncate) the two CSV files in it, and
    /// write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut snapshots = Writer::from_path(dir.join("vehicle_snapshots.csv"))?;
        snapshots.write_record(SNAPSHOT_HEADER)?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(SUMMARY_HEADER)?;

        Ok(Self {
            snapshots,
            summaries,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[VehicleSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.tick.to_string(),
                row.vehicle_id.clone(),
                format!("{:.6}", row.lat),
                format!("{:.6}", row.lon),
                format!("{:.2}", row.fill_level),
                row.status.to_owned(),
                row.stops_left.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.moved.to_string(),
            row.arrivals.to_string(),
            row.emptied.to_string(),
            row.became_full.to_string(),
            row.reassigned.to_string(),
            row.abandoned.to_string(),
            row.alerts.to_string(),
            row.wandered.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
