//! `bf-fleet`: the per-tick fleet simulator for binfleet.
//!
//! # Tick loop
//!
//! ```text
//! tick():
//!   ① Snapshot : VehicleStore::list_all once; IDLE vehicles form the
//!                reassignment pool.
//!   ② Wander   : EN_ROUTE vehicles without a route jitter in place and are
//!                saved one by one.  RETURNING vehicles without a route are
//!                healed to IDLE.
//!   ③ Advance  : every routed vehicle steps `step_km` towards its next
//!                waypoint, or arrives if closer than that:
//!                  collection point → add fill, empty the point
//!                  full             → RETURNING, remainder reassigned
//!                  overload crossed → TRUCK_OVERLOADED
//!                  last waypoint    → IDLE (unloaded at the depot)
//!   ④ Commit   : one save_all per store, then alerts are emitted.
//! ```
//!
//! Nothing is written until the scan is complete, so a vehicle changed by a
//! reassignment is never processed twice in one tick.
//!
//! # Crate layout
//!
//! | Module         | Contents                                               |
//! |----------------|--------------------------------------------------------|
//! | [`sim`]        | `FleetSimulator`                                       |
//! | [`builder`]    | `SimulatorBuilder`                                     |
//! | [`collection`] | `CollectionModel`, `UniformCollection`, `FixedCollection` |
//! | [`report`]     | `TickReport`, `Reassignment`                           |
//! | [`observer`]   | `FleetObserver`, `NoopObserver`                        |
//! | [`error`]      | `FleetError`, `FleetResult<T>`                         |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use bf_fleet::{NoopObserver, SimulatorBuilder};
//!
//! let mut sim = SimulatorBuilder::new(config, &store, &store, &alerts).build()?;
//! sim.run_ticks(100, &mut NoopObserver)?;
//! ```

pub mod builder;
pub mod collection;
pub mod error;
pub mod observer;
pub mod report;
pub mod sim;


pub use builder::SimulatorBuilder;
pub use collection::{CollectionModel, FixedCollection, UniformCollection};
pub use error::{FleetError, FleetResult, UndeliveredAlerts};
pub use observer::{FleetObserver, NoopObserver};
pub use report::{Reassignment, TickReport};
pub use sim::FleetSimulator;
