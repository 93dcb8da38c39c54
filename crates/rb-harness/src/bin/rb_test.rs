//! `rb-test`: check the tree engine over every prefix of many key sets.
//!
//! Usage:
//!   rb-test [--nodes N] [--sets N] [--seed N] [--packed] [--verbose]
//!           [--print-tree] [--print-forward] [--print-reverse]
//!
//! Progress goes to stderr through `tracing`; set `RB_LOG` to filter it.
//! Exits with status 1 on the first failed check.

use rb_forest::{Link, PackedLink};
use rb_harness::{init_tracing, scenario, ConfigError, HarnessConfig};
use tracing::{error, info};

fn main() {
    let config = match HarnessConfig::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(ConfigError::Help) => {
            println!("{}", HarnessConfig::USAGE);
            return;
        }
        Err(e) => {
            eprintln!("{e}\n\n{}", HarnessConfig::USAGE);
            std::process::exit(1);
        }
    };
    init_tracing(if config.traces() { "debug" } else { "info" });

    info!("Test begin");
    let result = if config.packed {
        scenario::empty_tree_report::<PackedLink>();
        scenario::run::<PackedLink>(&config)
    } else {
        scenario::empty_tree_report::<Link>();
        scenario::run::<Link>(&config)
    };

    match result {
        Ok(summary) => info!(
            sets = summary.sets,
            trees = summary.trees,
            inserts = summary.inserts,
            removals = summary.removals,
            "Test end"
        ),
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    }
}
