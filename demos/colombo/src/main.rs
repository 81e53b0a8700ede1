//! colombo: demo driver for the binfleet waste-collection simulator.
//!
//! Seeds an in-memory store with four trucks at the Colombo Municipal
//! Council depot and nine bins around the city, dispatches one truck, and
//! runs the fleet for `--ticks` ticks.  Every `--dispatch-every` ticks the
//! next idle truck is sent out if any bin is still above the pickup
//! threshold.  With `--output DIR` each tick is written to CSV.

mod cli;
mod dispatch;
mod fleet;

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bf_core::{AlertKind, FleetConfig, VehicleStatus};
use bf_fleet::{FleetObserver, NoopObserver, SimulatorBuilder};
use bf_output::{CsvWriter, FleetOutputObserver};
use bf_planner::RoutePlanner;
use bf_store::{MemoryAlertSink, MemoryStore, VehicleStore};

use cli::Args;
use dispatch::Dispatcher;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let config = load_config(&args)?;
    info!(depot = %config.depot, seed = config.seed, ticks = args.ticks, "configuration loaded");

    let store = fleet::seed_store(&config);
    let alerts = MemoryAlertSink::new();

    // ── Initial dispatch ──────────────────────────────────────────────────
    let planner = RoutePlanner::new(&store, &store, config.clone());
    let first = VehicleStore::list_all(&store)?
        .into_iter()
        .find(|v| v.status == VehicleStatus::Idle)
        .context("seed fleet has no idle truck")?;
    let route = planner.assign_route(&first.id)?;
    info!(vehicle = %first.id, stops = route.len(), "initial route assigned");

    // ── Run ───────────────────────────────────────────────────────────────
    let mut sim = SimulatorBuilder::new(config, &store, &store, &alerts).build()?;
    let threshold = sim.config().eligibility_threshold;
    let t0 = Instant::now();

    let dispatched = match &args.output {
        Some(dir) => {
            let writer = CsvWriter::new(dir)
                .with_context(|| format!("opening output directory {}", dir.display()))?;
            let mut obs = Dispatcher::new(planner, args.dispatch_every, FleetOutputObserver::new(writer));
            sim.run_ticks(args.ticks, &mut obs)?;
            let dispatched = finish(&mut obs)?;
            if let Some(e) = obs.into_inner().take_error() {
                return Err(e).context("writing output");
            }
            info!(dir = %dir.display(), "output written");
            dispatched
        }
        None => {
            let mut obs = Dispatcher::new(planner, args.dispatch_every, NoopObserver);
            sim.run_ticks(args.ticks, &mut obs)?;
            finish(&mut obs)?
        }
    };

    summarise(&store, &alerts, threshold, dispatched, args.ticks, t0);
    Ok(())
}

fn load_config(args: &Args) -> Result<FleetConfig> {
    let mut config = match &args.config {
        Some(path) => read_config(path)?,
        None => FleetConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    config.validate().context("invalid fleet configuration")?;
    Ok(config)
}

fn read_config(path: &Path) -> Result<FleetConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

/// Surface the first planning failure of the run, and count dispatches.
fn finish<V, C, O>(obs: &mut Dispatcher<V, C, O>) -> Result<usize>
where
    V: VehicleStore,
    C: bf_store::CollectionPointStore,
    O: FleetObserver,
{
    if let Some(e) = obs.take_error() {
        return Err(e).context("dispatching routes");
    }
    Ok(obs.dispatched() + 1)
}

fn summarise(
    store:      &MemoryStore,
    alerts:     &MemoryAlertSink,
    threshold:  f64,
    dispatched: usize,
    ticks:      u64,
    t0:         Instant,
) {
    for v in store.vehicles() {
        info!(
            vehicle = %v.id,
            status = %v.status,
            fill = v.fill_level,
            stops_left = v.route.len(),
            "final state"
        );
    }
    let due = store.points().iter().filter(|p| p.is_eligible(threshold)).count();
    info!(
        ticks,
        dispatched,
        bins_still_due = due,
        overloaded = alerts.count(AlertKind::TruckOverloaded),
        route_delays = alerts.count(AlertKind::RouteDelay),
        elapsed_ms = t0.elapsed().as_millis() as u64,
        "run complete"
    );
}
