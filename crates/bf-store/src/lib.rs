//! `bf-store`: the capability interfaces the planner and simulator call.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                       |
//! |------------|----------------------------------------------------------------|
//! | [`traits`] | `VehicleStore`, `CollectionPointStore`, `AlertSink`            |
//! | [`memory`] | `MemoryStore`, `MemoryAlertSink`: in-process implementations  |
//! | [`error`]  | `StoreError`, `StoreResult<T>`                                 |
//!
//! Records are exchanged by value: callers get owned copies and hand back
//! fully updated copies.  No reference into a store outlives a call.
//!
//! All trait methods take `&self`, so one store can back both the planner
//! and the simulator.  Implementations are expected to make `save_all`
//! all-or-nothing.

pub mod error;
pub mod memory;
pub mod traits;

#[cfg(test)]
mod tests;

pub use error::{StoreError, StoreResult};
pub use memory::{MemoryAlertSink, MemoryStore};
pub use traits::{AlertSink, CollectionPointStore, VehicleStore};
