//! Command-line arguments for the colombo demo.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "colombo", about = "Plan and simulate a small Colombo waste-collection fleet")]
pub struct Args {
    /// Number of ticks to simulate
    #[arg(long, default_value_t = 400)]
    pub ticks: u64,

    /// RNG seed; overrides the config file
    #[arg(long)]
    pub seed: Option<u64>,

    /// JSON fleet configuration; defaults apply to missing fields
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory for vehicle_snapshots.csv and tick_summaries.csv
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Plan a route for one idle truck every this many ticks (0 = never)
    #[arg(long, default_value_t = 25)]
    pub dispatch_every: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::parse_from(["colombo"]);
        assert_eq!(args.ticks, 400);
        assert!(args.seed.is_none());
        assert!(args.output.is_none());
        assert_eq!(args.dispatch_every, 25);
    }

    #[test]
    fn overrides_parse() {
        let args = Args::parse_from(["colombo", "--ticks", "10", "--seed", "7", "--config", "fleet.json"]);
        assert_eq!(args.ticks, 10);
        assert_eq!(args.seed, Some(7));
        assert_eq!(args.config.as_deref(), Some(std::path::Path::new("fleet.json")));
    }
}
