//! Observer hooks for progress reporting and data collection.

use bf_core::{Tick, VehicleState};

use crate::TickReport;

/// Callbacks invoked by
/// [`FleetSimulator::run_ticks`][crate::FleetSimulator::run_ticks].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: alert counter
///
/// ```rust,ignore
/// struct AlertCounter(usize);
///
/// impl FleetObserver for AlertCounter {
///     fn on_tick_end(&mut self, report: &TickReport, _vehicles: &[VehicleState]) {
///         self.0 += report.alerts.len();
///     }
/// }
/// ```
pub trait FleetObserver {
    /// Called before each tick is processed.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after each tick has been committed, with the tick's report and
    /// every vehicle as stored after the tick.
    fn on_tick_end(&mut self, _report: &TickReport, _vehicles: &[VehicleState]) {}

    /// Called once after the last tick of a run.  `next_tick` is the tick the
    /// simulator would process next.
    fn on_run_end(&mut self, _next_tick: Tick) {}
}

/// A [`FleetObserver`] that does nothing.
pub struct NoopObserver;

impl FleetObserver for NoopObserver {}
