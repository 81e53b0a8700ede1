//! Unit tests for bf-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::{CsvWriter, SNAPSHOT_HEADER, SUMMARY_HEADER};
    use crate::row::{TickSummaryRow, VehicleSnapshotRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn snap_row(id: &str, tick: u64) -> VehicleSnapshotRow {
        VehicleSnapshotRow {
            tick,
            vehicle_id: id.to_owned(),
            lat:        6.9135,
            lon:        79.8601,
            fill_level: 42.5,
            status:     "EN_ROUTE",
            stops_left: 3,
        }
    }

    fn summary_row(tick: u64) -> TickSummaryRow {
        TickSummaryRow {
            tick,
            moved:       2,
            arrivals:    1,
            emptied:     1,
            became_full: 0,
            reassigned:  0,
            abandoned:   0,
            alerts:      1,
            wandered:    0,
        }
    }

    fn headers(path: std::path::PathBuf) -> Vec<String> {
        let mut rdr = ::csv::Reader::from_path(path).unwrap();
        rdr.headers().unwrap().iter().map(str::to_owned).collect()
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("vehicle_snapshots.csv").exists());
        assert!(dir.path().join("tick_summaries.csv").exists());
    }

    #[test]
    fn creates_missing_directory() {
        let dir = tmp();
        let nested = dir.path().join("runs").join("one");
        let _w = CsvWriter::new(&nested).unwrap();
        assert!(nested.join("tick_summaries.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        assert_eq!(headers(dir.path().join("vehicle_snapshots.csv")), SNAPSHOT_HEADER);
        assert_eq!(headers(dir.path().join("tick_summaries.csv")), SUMMARY_HEADER);
    }

    #[test]
    fn snapshot_rows_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[snap_row("t1", 5), snap_row("t2", 5)]).unwrap();
        w.finish().unwrap();

        let mut rdr = ::csv::Reader::from_path(dir.path().join("vehicle_snapshots.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "5");
        assert_eq!(&rows[0][1], "t1");
        assert_eq!(&rows[0][2], "6.913500");
        assert_eq!(&rows[0][4], "42.50");
        assert_eq!(&rows[0][5], "EN_ROUTE");
        assert_eq!(&rows[1][1], "t2");
    }

    #[test]
    fn summary_row_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_tick_summary(&summary_row(3)).unwrap();
        w.finish().unwrap();

        let mut rdr = ::csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].iter().collect::<Vec<_>>(), ["3", "2", "1", "1", "0", "0", "0", "1", "0"]);
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}

#[cfg(test)]
mod observer_tests {
    use bf_core::{AlertKind, Alert, FleetConfig, Location, Tick, VehicleState, VehicleStatus};
    use bf_fleet::{FixedCollection, FleetObserver, Reassignment, SimulatorBuilder, TickReport};
    use bf_store::{MemoryAlertSink, MemoryStore};

    use crate::row::{TickSummaryRow, VehicleSnapshotRow};
    use crate::writer::OutputWriter;
    use crate::{CsvWriter, FleetOutputObserver, OutputError, OutputResult};

    /// Records everything in memory; optionally fails every write.
    #[derive(Default)]
    struct MemWriter {
        snapshots: Vec<VehicleSnapshotRow>,
        summaries: Vec<TickSummaryRow>,
        finished:  usize,
        failing:   bool,
    }

    impl OutputWriter for MemWriter {
        fn write_snapshots(&mut self, rows: &[VehicleSnapshotRow]) -> OutputResult<()> {
            if self.failing {
                return Err(OutputError::Io(std::io::Error::other("disk full")));
            }
            self.snapshots.extend_from_slice(rows);
            Ok(())
        }
        fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
            if self.failing {
                return Err(OutputError::Io(std::io::Error::other("disk full")));
            }
            self.summaries.push(*row);
            Ok(())
        }
        fn finish(&mut self) -> OutputResult<()> {
            self.finished += 1;
            Ok(())
        }
    }

    fn vehicle(id: &str) -> VehicleState {
        let mut v = VehicleState::new(id, Location::new(6.92, 79.87), 10.0);
        v.status = VehicleStatus::EnRoute;
        v
    }

    #[test]
    fn summary_row_counts_report() {
        let mut report = TickReport::new(Tick(7));
        report.moved = 3;
        report.reassignments = vec![
            Reassignment::Assigned { from: "a".into(), to: "b".into(), waypoints: 2 },
            Reassignment::Abandoned { from: "c".into(), waypoints: 1 },
        ];
        report.alerts.push(Alert::new(AlertKind::RouteDelay, "delayed", "b"));

        let row = TickSummaryRow::from(&report);
        assert_eq!(row.tick, 7);
        assert_eq!(row.moved, 3);
        assert_eq!(row.reassigned, 1);
        assert_eq!(row.abandoned, 1);
        assert_eq!(row.alerts, 1);
    }

    #[test]
    fn snapshot_interval_respected() {
        let mut obs = FleetOutputObserver::with_interval(MemWriter::default(), 2);
        let vehicles = [vehicle("t1"), vehicle("t2")];
        for t in 0..4 {
            obs.on_tick_end(&TickReport::new(Tick(t)), &vehicles);
        }
        obs.on_run_end(Tick(4));

        let w = obs.into_writer();
        assert_eq!(w.summaries.len(), 4);
        assert_eq!(w.snapshots.len(), 4); // ticks 0 and 2
        assert_eq!(w.snapshots[2].tick, 2);
        assert_eq!(w.snapshots[0].status, "EN_ROUTE");
        assert_eq!(w.finished, 1);
    }

    #[test]
    fn first_error_is_kept() {
        let writer = MemWriter { failing: true, ..MemWriter::default() };
        let mut obs = FleetOutputObserver::new(writer);
        obs.on_tick_end(&TickReport::new(Tick(0)), &[vehicle("t1")]);
        assert!(matches!(obs.take_error(), Some(OutputError::Io(_))));
        assert!(obs.take_error().is_none());
    }

    #[test]
    fn run_writes_csv() {
        let dir = tempfile::tempdir().unwrap();
        let depot = Location::new(6.9135, 79.8601);
        let mut v = VehicleState::new("t1", depot.offset(0.002, 0.0), 10.0);
        v.status = VehicleStatus::EnRoute;
        v.route = vec![depot].into();
        let store = MemoryStore::with_records([v], []);
        let alerts = MemoryAlertSink::new();

        let mut sim = SimulatorBuilder::new(FleetConfig::default().with_depot(depot), &store, &store, &alerts)
            .collection_model(FixedCollection(20.0))
            .build()
            .unwrap();
        let mut obs = FleetOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        sim.run_ticks(6, &mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let mut rdr = ::csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        assert_eq!(rdr.records().count(), 6);
        let mut rdr = ::csv::Reader::from_path(dir.path().join("vehicle_snapshots.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 6);
        assert_eq!(&rows[5][5], "IDLE");
    }
}
