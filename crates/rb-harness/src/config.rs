//! Command-line configuration for the two harness binaries.
//!
//! Defaults reproduce the fixed sizes the harnesses have always run with;
//! every flag overrides one of them.

use std::str::FromStr;

use rb_forest::PackedLink;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown flag `{0}`")]
    UnknownFlag(String),

    #[error("flag `{0}` needs a value")]
    MissingValue(String),

    #[error("invalid value `{value}` for `{flag}`")]
    InvalidValue { flag: String, value: String },

    #[error("{nodes} nodes do not fit a packed link (at most {max})")]
    TooManyNodes { nodes: usize, max: usize },

    #[error("help requested")]
    Help,
}

/// Settings for the correctness run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    pub nodes: usize,
    pub sets: usize,
    pub seed: u64,
    pub packed: bool,
    pub verbose: bool,
    pub print_tree: bool,
    pub print_forward: bool,
    pub print_reverse: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            nodes: 200,
            sets: 200,
            seed: 42,
            packed: false,
            verbose: false,
            print_tree: false,
            print_forward: false,
            print_reverse: false,
        }
    }
}

impl HarnessConfig {
    pub const USAGE: &'static str = "\
Usage: rb-test [options]

  --nodes <n>       largest tree built per key set (default 200)
  --sets <n>        number of key sets (default 200)
  --seed <n>        key-set seed (default 42)
  --packed          pack the color into the right child index
  --verbose         log every operation
  --print-tree      log the tree after every operation
  --print-forward   log the forward iteration after every operation
  --print-reverse   log the reverse iteration after every operation
  -h, --help        print this help";

    /// Parses flags, without the program name.
    pub fn from_args<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();
        while let Some(flag) = args.next() {
            match flag.as_str() {
                "--nodes" => config.nodes = value(&flag, &mut args)?,
                "--sets" => config.sets = value(&flag, &mut args)?,
                "--seed" => config.seed = value(&flag, &mut args)?,
                "--packed" => config.packed = true,
                "--verbose" => config.verbose = true,
                "--print-tree" => config.print_tree = true,
                "--print-forward" => config.print_forward = true,
                "--print-reverse" => config.print_reverse = true,
                "-h" | "--help" => return Err(ConfigError::Help),
                _ => return Err(ConfigError::UnknownFlag(flag)),
            }
        }
        check_nodes(config.nodes, config.packed)?;
        Ok(config)
    }

    /// Whether any per-operation output is on.
    pub fn traces(&self) -> bool {
        self.verbose || self.print_tree || self.print_forward || self.print_reverse
    }
}

/// Settings for the throughput run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    pub nodes: usize,
    pub sets: usize,
    /// Search rounds after each insert and before each removal.
    pub searches: usize,
    /// Forward plus reverse iterations of each fully built tree.
    pub iterations: usize,
    pub seed: u64,
    pub packed: bool,
    pub verbose: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            nodes: 1500,
            sets: 25,
            searches: 0,
            iterations: 0,
            seed: 42,
            packed: true,
            verbose: false,
        }
    }
}

impl BenchConfig {
    pub const USAGE: &'static str = "\
Usage: rb-bench [options]

  --nodes <n>       largest tree built per key set (default 1500)
  --sets <n>        number of key sets (default 25)
  --searches <n>    search rounds per insert and removal (default 0)
  --iterations <n>  full traversals per built tree (default 0)
  --seed <n>        key-set seed (default 42)
  --packed          pack the color into the right child index (default)
  --unpacked        keep a dedicated color field
  --verbose         log every tree size
  -h, --help        print this help";

    /// Parses flags, without the program name.
    pub fn from_args<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();
        while let Some(flag) = args.next() {
            match flag.as_str() {
                "--nodes" => config.nodes = value(&flag, &mut args)?,
                "--sets" => config.sets = value(&flag, &mut args)?,
                "--searches" => config.searches = value(&flag, &mut args)?,
                "--iterations" => config.iterations = value(&flag, &mut args)?,
                "--seed" => config.seed = value(&flag, &mut args)?,
                "--packed" => config.packed = true,
                "--unpacked" => config.packed = false,
                "--verbose" => config.verbose = true,
                "-h" | "--help" => return Err(ConfigError::Help),
                _ => return Err(ConfigError::UnknownFlag(flag)),
            }
        }
        check_nodes(config.nodes, config.packed)?;
        Ok(config)
    }
}

fn value<T, I>(flag: &str, args: &mut I) -> Result<T, ConfigError>
where
    T: FromStr,
    I: Iterator<Item = String>,
{
    let raw = args
        .next()
        .ok_or_else(|| ConfigError::MissingValue(flag.to_string()))?;
    raw.parse().map_err(|_| ConfigError::InvalidValue {
        flag: flag.to_string(),
        value: raw,
    })
}

fn check_nodes(nodes: usize, packed: bool) -> Result<(), ConfigError> {
    let max = if packed {
        PackedLink::MAX_INDEX as usize + 1
    } else {
        // NIL is u32::MAX.
        u32::MAX as usize
    };
    if nodes > max {
        return Err(ConfigError::TooManyNodes { nodes, max });
    }
    Ok(())
}
