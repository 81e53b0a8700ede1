//! Seed data: a few trucks at the depot and bins around central Colombo.

use bf_core::{CollectionPoint, FleetConfig, Location, VehicleState, VehicleStatus};
use bf_store::MemoryStore;

/// `(id, lat, lon, fill %)`: fill levels above 85 % are due for pickup.
const BINS: &[(&str, f64, f64, f64)] = &[
    ("fort-01",        6.9344, 79.8428, 92.0),
    ("pettah-02",      6.9366, 79.8500, 88.0),
    ("slave-island-03", 6.9255, 79.8510, 97.0),
    ("kollupitiya-04", 6.9107, 79.8507, 64.0),
    ("borella-05",     6.9146, 79.8778, 90.0),
    ("maradana-06",    6.9290, 79.8650, 86.5),
    ("narahenpita-07", 6.8950, 79.8770, 99.0),
    ("wellawatte-08",  6.8747, 79.8607, 40.0),
    ("dematagoda-09",  6.9362, 79.8777, 91.0),
];

/// `(id, capacity, status)`; every truck starts at the depot, empty.
const TRUCKS: &[(&str, f64, VehicleStatus)] = &[
    ("truck-a", 12.0, VehicleStatus::Idle),
    ("truck-b", 12.0, VehicleStatus::Idle),
    ("truck-c", 8.0,  VehicleStatus::Idle),
    ("truck-d", 8.0,  VehicleStatus::Maintenance),
];

pub fn seed_store(config: &FleetConfig) -> MemoryStore {
    let trucks = TRUCKS.iter().map(|&(id, capacity, status)| {
        let mut truck = VehicleState::new(id, config.depot, capacity);
        truck.status = status;
        truck
    });
    let bins = BINS
        .iter()
        .map(|&(id, lat, lon, fill)| CollectionPoint::new(id, Location::new(lat, lon), fill));
    MemoryStore::with_records(trucks, bins)
}
