//! Unit tests for bf-store.

#[cfg(test)]
mod memory_store {
    use bf_core::{CollectionPoint, CollectionPointId, Location, VehicleId, VehicleState};

    use crate::{CollectionPointStore, MemoryStore, StoreError, VehicleStore};

    fn truck(id: &str) -> VehicleState {
        VehicleState::new(id, Location::new(6.9, 79.85), 10.0)
    }

    #[test]
    fn list_all_is_sorted_by_id() {
        let store = MemoryStore::with_records([truck("t2"), truck("t1"), truck("t3")], []);
        let ids: Vec<_> = VehicleStore::list_all(&store)
            .unwrap()
            .into_iter()
            .map(|v| v.id.0)
            .collect();
        assert_eq!(ids, ["t1", "t2", "t3"]);
    }

    #[test]
    fn get_missing_is_none() {
        let store = MemoryStore::new();
        assert_eq!(VehicleStore::get(&store, &VehicleId::from("nope")).unwrap(), None);
        assert_eq!(CollectionPointStore::get(&store, &CollectionPointId::from("nope")).unwrap(), None);
    }

    #[test]
    fn save_replaces_record() {
        let store = MemoryStore::with_records([truck("t1")], []);
        let mut v = store.vehicle("t1").unwrap();
        v.set_fill(40.0);
        store.save(&v).unwrap();
        assert_eq!(store.vehicle("t1").unwrap().fill_level, 40.0);
    }

    #[test]
    fn failed_batch_leaves_store_unchanged() {
        let store = MemoryStore::with_records(
            [truck("t1")],
            [CollectionPoint::new("b1", Location::new(6.91, 79.86), 90.0)],
        );
        store.set_writes_failing(true);

        let mut v = store.vehicle("t1").unwrap();
        v.set_fill(99.0);
        assert!(matches!(VehicleStore::save_all(&store, &[v]), Err(StoreError::Unavailable(_))));

        let mut p = store.point("b1").unwrap();
        p.mark_emptied();
        assert!(CollectionPointStore::save_all(&store, &[p]).is_err());

        assert_eq!(store.vehicle("t1").unwrap().fill_level, 0.0);
        assert_eq!(store.point("b1").unwrap().fill_level, 90.0);
    }

    #[test]
    fn failing_reads() {
        let store = MemoryStore::with_records([truck("t1")], []);
        store.set_reads_failing(true);
        assert!(VehicleStore::list_all(&store).is_err());
        store.set_reads_failing(false);
        assert_eq!(VehicleStore::list_all(&store).unwrap().len(), 1);
    }

    #[test]
    fn usable_through_reference_and_arc() {
        fn count<S: VehicleStore>(s: S) -> usize {
            s.list_all().unwrap().len()
        }
        let store = std::sync::Arc::new(MemoryStore::with_records([truck("t1")], []));
        assert_eq!(count(&*store), 1);
        assert_eq!(count(store.clone()), 1);
    }
}

#[cfg(test)]
mod alert_sink {
    use bf_core::AlertKind;

    use crate::{AlertSink, MemoryAlertSink};

    #[test]
    fn records_in_order() {
        let sink = MemoryAlertSink::new();
        assert!(sink.is_empty());
        sink.emit(AlertKind::TruckOverloaded, "t1 overloaded", "t1").unwrap();
        sink.emit(AlertKind::RouteDelay, "t1 -> t2", "t2").unwrap();

        let alerts = sink.alerts();
        assert_eq!(alerts.len(), 2);
        assert_eq!(alerts[0].kind, AlertKind::TruckOverloaded);
        assert_eq!(alerts[1].related_entity_id, "t2");
        assert_eq!(sink.count(AlertKind::RouteDelay), 1);
    }

    #[test]
    fn failing_sink_records_nothing() {
        let sink = MemoryAlertSink::new();
        sink.set_failing(true);
        assert!(sink.emit(AlertKind::RouteDelay, "x", "t1").is_err());
        assert!(sink.is_empty());
    }
}
