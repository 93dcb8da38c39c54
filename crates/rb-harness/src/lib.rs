//! Harnesses for `rb-forest`.
//!
//! The `rb-test` binary builds trees over many seeded key sets and checks
//! every red-black invariant after each insert and removal; `rb-bench`
//! times the same cycles without the checks. Both are thin wrappers over
//! [`scenario::run`] and [`bench::run`].

pub mod bench;
pub mod check;
pub mod config;
pub mod error;
pub mod fuzzer;
pub mod logging;
pub mod record;
pub mod scenario;

pub use bench::BenchReport;
pub use check::Checker;
pub use config::{BenchConfig, ConfigError, HarnessConfig};
pub use error::{Direction, HarnessError, Op, Step};
pub use fuzzer::Fuzzer;
pub use logging::init_tracing;
pub use record::{node_cmp, node_tree, Node, NodeLink, NodeTree, NODE_MAGIC};
pub use scenario::{EmptyReport, Removal, Summary};
