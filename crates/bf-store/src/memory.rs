//! In-process store and alert-sink implementations.
//!
//! Used by the demo driver and as test doubles.  Both can be told to fail
//! so callers can exercise their store-failure paths.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::RwLock;

use bf_core::{Alert, AlertKind, CollectionPoint, CollectionPointId, VehicleId, VehicleState};

use crate::{AlertSink, CollectionPointStore, StoreError, StoreResult, VehicleStore};

// ── MemoryStore ───────────────────────────────────────────────────────────────

/// Vehicles and collection points held in two ordered maps.
///
/// `list_all` returns records in ascending id order, which makes every
/// consumer deterministic.  `save_all` checks availability before touching
/// either map, so a failed batch leaves the store unchanged.
#[derive(Default)]
pub struct MemoryStore {
    vehicles:       RwLock<BTreeMap<VehicleId, VehicleState>>,
    points:         RwLock<BTreeMap<CollectionPointId, CollectionPoint>>,
    fail_reads:     AtomicBool,
    fail_writes:    AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with `vehicles` and `points`.
    pub fn with_records(
        vehicles: impl IntoIterator<Item = VehicleState>,
        points:   impl IntoIterator<Item = CollectionPoint>,
    ) -> Self {
        let store = Self::new();
        for v in vehicles {
            store.insert_vehicle(v);
        }
        for p in points {
            store.insert_point(p);
        }
        store
    }

    /// Insert or replace a vehicle, ignoring failure injection.
    pub fn insert_vehicle(&self, vehicle: VehicleState) {
        self.vehicles.write().insert(vehicle.id.clone(), vehicle);
    }

    /// Insert or replace a collection point, ignoring failure injection.
    pub fn insert_point(&self, point: CollectionPoint) {
        self.points.write().insert(point.id.clone(), point);
    }

    /// Copy of one vehicle, ignoring failure injection.
    pub fn vehicle(&self, id: &str) -> Option<VehicleState> {
        self.vehicles.read().get(&VehicleId::from(id)).cloned()
    }

    /// Copy of one collection point, ignoring failure injection.
    pub fn point(&self, id: &str) -> Option<CollectionPoint> {
        self.points.read().get(&CollectionPointId::from(id)).cloned()
    }

    /// Copies of all vehicles in id order, ignoring failure injection.
    pub fn vehicles(&self) -> Vec<VehicleState> {
        self.vehicles.read().values().cloned().collect()
    }

    /// Copies of all collection points in id order, ignoring failure injection.
    pub fn points(&self) -> Vec<CollectionPoint> {
        self.points.read().values().cloned().collect()
    }

    /// Make every subsequent read fail with [`StoreError::Unavailable`].
    pub fn set_reads_failing(&self, failing: bool) {
        self.fail_reads.store(failing, Ordering::SeqCst);
    }

    /// Make every subsequent write fail with [`StoreError::Unavailable`].
    pub fn set_writes_failing(&self, failing: bool) {
        self.fail_writes.store(failing, Ordering::SeqCst);
    }

    fn check_read(&self) -> StoreResult<()> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("reads disabled".into()));
        }
        Ok(())
    }

    fn check_write(&self) -> StoreResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("writes disabled".into()));
        }
        Ok(())
    }
}

impl VehicleStore for MemoryStore {
    fn get(&self, id: &VehicleId) -> StoreResult<Option<VehicleState>> {
        self.check_read()?;
        Ok(self.vehicles.read().get(id).cloned())
    }

    fn list_all(&self) -> StoreResult<Vec<VehicleState>> {
        self.check_read()?;
        Ok(self.vehicles())
    }

    fn save(&self, vehicle: &VehicleState) -> StoreResult<()> {
        self.check_write()?;
        self.insert_vehicle(vehicle.clone());
        Ok(())
    }

    fn save_all(&self, vehicles: &[VehicleState]) -> StoreResult<()> {
        self.check_write()?;
        let mut map = self.vehicles.write();
        for v in vehicles {
            map.insert(v.id.clone(), v.clone());
        }
        tracing::trace!(count = vehicles.len(), "saved vehicles");
        Ok(())
    }
}

impl CollectionPointStore for MemoryStore {
    fn list_all(&self) -> StoreResult<Vec<CollectionPoint>> {
        self.check_read()?;
        Ok(self.points())
    }

    fn get(&self, id: &CollectionPointId) -> StoreResult<Option<CollectionPoint>> {
        self.check_read()?;
        Ok(self.points.read().get(id).cloned())
    }

    fn save_all(&self, points: &[CollectionPoint]) -> StoreResult<()> {
        self.check_write()?;
        let mut map = self.points.write();
        for p in points {
            map.insert(p.id.clone(), p.clone());
        }
        tracing::trace!(count = points.len(), "saved collection points");
        Ok(())
    }
}

// ── MemoryAlertSink ───────────────────────────────────────────────────────────

/// Records every alert in emission order and logs it at `info`.
#[derive(Default)]
pub struct MemoryAlertSink {
    alerts:  RwLock<Vec<Alert>>,
    failing: AtomicBool,
}

impl MemoryAlertSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies of all alerts emitted so far.
    pub fn alerts(&self) -> Vec<Alert> {
        self.alerts.read().clone()
    }

    /// Number of alerts of `kind` emitted so far.
    pub fn count(&self, kind: AlertKind) -> usize {
        self.alerts.read().iter().filter(|a| a.kind == kind).count()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.read().is_empty()
    }

    /// Make every subsequent `emit` fail.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

impl AlertSink for MemoryAlertSink {
    fn emit(&self, kind: AlertKind, message: &str, related_entity_id: &str) -> StoreResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("alert sink disabled".into()));
        }
        tracing::info!(%kind, related = related_entity_id, "{message}");
        self.alerts.write().push(Alert::new(kind, message, related_entity_id));
        Ok(())
    }
}
