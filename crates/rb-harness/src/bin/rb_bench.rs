//! `rb-bench`: time insert, lookup and remove cycles.
//!
//! Usage:
//!   rb-bench [--nodes N] [--sets N] [--searches N] [--iterations N]
//!            [--seed N] [--packed | --unpacked] [--verbose]
//!
//! The packed link layout is the default.

use rb_forest::{Link, PackedLink};
use rb_harness::{bench, init_tracing, BenchConfig, ConfigError};
use tracing::info;

fn main() {
    let config = match BenchConfig::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(ConfigError::Help) => {
            println!("{}", BenchConfig::USAGE);
            return;
        }
        Err(e) => {
            eprintln!("{e}\n\n{}", BenchConfig::USAGE);
            std::process::exit(1);
        }
    };
    init_tracing(if config.verbose { "debug" } else { "info" });

    let report = if config.packed {
        bench::run::<PackedLink>(&config)
    } else {
        bench::run::<Link>(&config)
    };

    info!(
        packed = config.packed,
        trees = report.trees,
        inserts = report.inserts,
        removals = report.removals,
        lookups = report.lookups,
        visits = report.visits,
        elapsed = ?report.elapsed,
        "Bench end"
    );
}
