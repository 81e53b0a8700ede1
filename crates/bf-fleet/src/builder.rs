//! Fluent builder for constructing a [`FleetSimulator`].

use bf_core::{FleetConfig, SimRng, Tick};
use bf_store::{AlertSink, CollectionPointStore, VehicleStore};

use crate::{CollectionModel, FleetResult, FleetSimulator, UniformCollection};

/// Fluent builder for [`FleetSimulator`].
///
/// # Required inputs
///
/// - [`FleetConfig`]: depot, step, thresholds, seed, …
/// - a [`VehicleStore`], a [`CollectionPointStore`] and an [`AlertSink`]
///   (pass `&store` to share one store with a `RoutePlanner`)
///
/// # Optional inputs (have defaults)
///
/// | Method                  | Default                                      |
/// |-------------------------|----------------------------------------------|
/// | `.collection_model(m)`  | `UniformCollection::from_config(&config)`    |
/// | `.start_tick(t)`        | `Tick::ZERO`                                 |
pub struct SimulatorBuilder<V, C, A, M = UniformCollection> {
    config:     FleetConfig,
    vehicles:   V,
    points:     C,
    alerts:     A,
    model:      M,
    start_tick: Tick,
}

impl<V, C, A> SimulatorBuilder<V, C, A, UniformCollection>
where
    V: VehicleStore,
    C: CollectionPointStore,
    A: AlertSink,
{
    pub fn new(config: FleetConfig, vehicles: V, points: C, alerts: A) -> Self {
        let model = UniformCollection::from_config(&config);
        Self {
            config,
            vehicles,
            points,
            alerts,
            model,
            start_tick: Tick::ZERO,
        }
    }
}

impl<V, C, A, M> SimulatorBuilder<V, C, A, M>
where
    V: VehicleStore,
    C: CollectionPointStore,
    A: AlertSink,
    M: CollectionModel,
{
    /// Replace the fill-increase model.
    pub fn collection_model<N: CollectionModel>(self, model: N) -> SimulatorBuilder<V, C, A, N> {
        SimulatorBuilder {
            config:     self.config,
            vehicles:   self.vehicles,
            points:     self.points,
            alerts:     self.alerts,
            model,
            start_tick: self.start_tick,
        }
    }

    /// Number the first tick `tick` instead of zero (e.g. when resuming).
    pub fn start_tick(mut self, tick: Tick) -> Self {
        self.start_tick = tick;
        self
    }

    /// Validate the configuration, seed the RNG, and return a ready-to-run
    /// [`FleetSimulator`].
    pub fn build(self) -> FleetResult<FleetSimulator<V, C, A, M>> {
        self.config.validate()?;
        let rng = SimRng::new(self.config.seed);
        Ok(FleetSimulator::from_parts(
            self.config,
            self.vehicles,
            self.points,
            self.alerts,
            self.model,
            rng,
            self.start_tick,
        ))
    }
}
