//! Store and alert-sink traits.

use std::sync::Arc;

use bf_core::{AlertKind, CollectionPoint, CollectionPointId, VehicleId, VehicleState};

use crate::StoreResult;

/// Persistent vehicle records.
pub trait VehicleStore {
    /// `Ok(None)` if no vehicle has this id.
    fn get(&self, id: &VehicleId) -> StoreResult<Option<VehicleState>>;

    fn list_all(&self) -> StoreResult<Vec<VehicleState>>;

    fn save(&self, vehicle: &VehicleState) -> StoreResult<()>;

    /// Store every vehicle, or none of them.
    fn save_all(&self, vehicles: &[VehicleState]) -> StoreResult<()>;
}

/// Persistent collection-point records.
pub trait CollectionPointStore {
    fn list_all(&self) -> StoreResult<Vec<CollectionPoint>>;

    /// `Ok(None)` if no collection point has this id.
    fn get(&self, id: &CollectionPointId) -> StoreResult<Option<CollectionPoint>>;

    /// Store every collection point, or none of them.
    fn save_all(&self, points: &[CollectionPoint]) -> StoreResult<()>;
}

/// Destination for alert records.  Delivery beyond "record it" is the
/// implementor's business.
pub trait AlertSink {
    fn emit(&self, kind: AlertKind, message: &str, related_entity_id: &str) -> StoreResult<()>;
}

// ── Forwarding impls ──────────────────────────────────────────────────────────
//
// Let callers pass `&store` or `Arc<store>` wherever a store is owned.

macro_rules! forward_vehicle_store {
    ($($ptr:ty),*) => {$(
        impl<T: VehicleStore + ?Sized> VehicleStore for $ptr {
            fn get(&self, id: &VehicleId) -> StoreResult<Option<VehicleState>> {
                (**self).get(id)
            }
            fn list_all(&self) -> StoreResult<Vec<VehicleState>> {
                (**self).list_all()
            }
            fn save(&self, vehicle: &VehicleState) -> StoreResult<()> {
                (**self).save(vehicle)
            }
            fn save_all(&self, vehicles: &[VehicleState]) -> StoreResult<()> {
                (**self).save_all(vehicles)
            }
        }
    )*};
}

macro_rules! forward_point_store {
    ($($ptr:ty),*) => {$(
        impl<T: CollectionPointStore + ?Sized> CollectionPointStore for $ptr {
            fn list_all(&self) -> StoreResult<Vec<CollectionPoint>> {
                (**self).list_all()
            }
            fn get(&self, id: &CollectionPointId) -> StoreResult<Option<CollectionPoint>> {
                (**self).get(id)
            }
            fn save_all(&self, points: &[CollectionPoint]) -> StoreResult<()> {
                (**self).save_all(points)
            }
        }
    )*};
}

macro_rules! forward_alert_sink {
    ($($ptr:ty),*) => {$(
        impl<T: AlertSink + ?Sized> AlertSink for $ptr {
            fn emit(&self, kind: AlertKind, message: &str, related_entity_id: &str) -> StoreResult<()> {
                (**self).emit(kind, message, related_entity_id)
            }
        }
    )*};
}

forward_vehicle_store!(&T, Arc<T>);
forward_point_store!(&T, Arc<T>);
forward_alert_sink!(&T, Arc<T>);
