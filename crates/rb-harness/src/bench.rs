//! Throughput run: the correctness scenario's insert and remove cycles
//! without the checks, optionally interleaved with lookups and traversals.

use std::hint::black_box;
use std::ops::ControlFlow;
use std::time::{Duration, Instant};

use rb_forest::RbLink;
use tracing::debug;

use crate::config::BenchConfig;
use crate::fuzzer::Fuzzer;
use crate::record::{self, Node, NodeTree};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BenchReport {
    pub trees: usize,
    pub inserts: usize,
    pub removals: usize,
    /// Key lookups, each one `first`, `last`, `search` and `nsearch`.
    pub lookups: usize,
    pub visits: usize,
    pub elapsed: Duration,
}

/// Runs every key set of `config` with link layout `L`.
pub fn run<L: RbLink>(config: &BenchConfig) -> BenchReport {
    let mut fuzzer = Fuzzer::new(Some(config.seed));
    let mut report = BenchReport::default();
    let started = Instant::now();

    for set in 0..config.sets {
        let keys = fuzzer.random_set(config.nodes);
        for len in 1..=config.nodes {
            if config.verbose {
                let plural = if len != 1 { "s" } else { "" };
                debug!("Tree {set}, {len} node{plural}");
            }
            run_tree::<L>(config, &keys, len, &mut report);
        }
    }

    report.elapsed = started.elapsed();
    report
}

fn run_tree<L: RbLink>(config: &BenchConfig, keys: &[i64], len: usize, report: &mut BenchReport) {
    let mut arena = record::arena::<L>(keys, len);
    let mut tree = record::node_tree::<L>();

    for slot in 0..len {
        tree.insert(&mut arena, slot as u32);
        report.inserts += 1;
        for _ in 0..config.searches {
            report.lookups += lookups(&tree, &arena, slot);
        }
    }

    for _ in 0..config.iterations {
        report.visits += traverse(&mut tree, &mut arena, false);
        report.visits += traverse(&mut tree, &mut arena, true);
    }

    for slot in 0..len {
        for _ in 0..config.searches {
            report.lookups += lookups(&tree, &arena, slot);
        }
        tree.remove(&mut arena, slot as u32);
        arena[slot].magic = 0;
        report.removals += 1;
    }
    report.trees += 1;
}

/// Looks up the keys of records `0..=upto`, members or not.
fn lookups<L: RbLink>(tree: &NodeTree<L>, arena: &[Node<L>], upto: usize) -> usize {
    for rec in &arena[..=upto] {
        let key = rec.key;
        black_box(tree.first(arena));
        black_box(tree.last(arena));
        black_box(tree.search_by(arena, |n| key.cmp(&n.key)));
        black_box(tree.nsearch_by(arena, |n| key.cmp(&n.key)));
    }
    upto + 1
}

/// Walks the whole tree, looking every member up by key.
fn traverse<L: RbLink>(tree: &mut NodeTree<L>, arena: &mut [Node<L>], reverse: bool) -> usize {
    let mut visited = 0;
    let visit = |tree: &mut NodeTree<L>, arena: &mut [Node<L>], node: u32| {
        let key = arena[node as usize].key;
        let found = tree.search_by(arena, |n| key.cmp(&n.key));
        debug_assert!(found.is_some_and(|i| arena[i as usize].key == key));
        let found = tree.nsearch_by(arena, |n| key.cmp(&n.key));
        debug_assert!(found.is_some_and(|i| arena[i as usize].key == key));
        visited += 1;
        ControlFlow::Continue(())
    };
    if reverse {
        tree.reverse_iter(arena, None, visit);
    } else {
        tree.iter(arena, None, visit);
    }
    visited
}
