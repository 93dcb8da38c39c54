//! Correctness scenario.
//!
//! For every key set, trees of each size from one node up to
//! [`HarnessConfig::nodes`] are built one insert at a time and then torn
//! down one removal at a time, with a full [`Checker`] pass after every
//! step. The set number picks how the tree is torn down, see [`Removal`].

use std::ops::ControlFlow;

use rb_forest::RbLink;
use tracing::{debug, info};

use crate::check::Checker;
use crate::config::HarnessConfig;
use crate::error::{Direction, HarnessError, Op, Step};
use crate::fuzzer::Fuzzer;
use crate::record::{self, Node, NodeTree};

/// Order in which a built tree is emptied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    InsertionOrder,
    ReverseInsertionOrder,
    /// Forward traversal removing each visited node, resuming at its successor.
    ForwardTraversal,
    /// Reverse traversal removing each visited node, resuming at its predecessor.
    ReverseTraversal,
}

impl Removal {
    pub fn for_set(set: usize) -> Self {
        match set % 4 {
            0 => Removal::InsertionOrder,
            1 => Removal::ReverseInsertionOrder,
            2 => Removal::ForwardTraversal,
            _ => Removal::ReverseTraversal,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub sets: usize,
    pub trees: usize,
    pub inserts: usize,
    pub removals: usize,
}

/// Lookup results on a tree with no members.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EmptyReport {
    pub first: Option<u32>,
    pub last: Option<u32>,
    pub search: Option<u32>,
    pub nsearch: Option<u32>,
    pub psearch: Option<u32>,
}

/// Runs every lookup against an empty tree and logs what came back.
pub fn empty_tree_report<L: RbLink>() -> EmptyReport {
    let tree = record::node_tree::<L>();
    let arena: Vec<Node<L>> = Vec::new();
    let probe = Node::<L>::probe(0);

    let report = EmptyReport {
        first: tree.first(&arena),
        last: tree.last(&arena),
        search: tree.search(&arena, &probe),
        nsearch: tree.nsearch(&arena, &probe),
        psearch: tree.psearch(&arena, &probe),
    };
    info!("Empty tree:");
    for (op, found) in [
        ("rb_first()", report.first),
        ("rb_last()", report.last),
        ("rb_search(0)", report.search),
        ("rb_nsearch(0)", report.nsearch),
        ("rb_psearch(0)", report.psearch),
    ] {
        match found {
            Some(node) => info!("{op} --> {node}"),
            None => info!("{op} --> nil"),
        }
    }
    report
}

/// Runs every key set of `config` with link layout `L`.
pub fn run<L: RbLink>(config: &HarnessConfig) -> Result<Summary, HarnessError> {
    let mut fuzzer = Fuzzer::new(Some(config.seed));
    let scenario = Scenario {
        checker: Checker::new(config),
        verbose: config.verbose,
    };
    let mut summary = Summary::default();

    for set in 0..config.sets {
        let keys = fuzzer.key_set(set, config.nodes);
        let removal = Removal::for_set(set);
        info!(?removal, "Tree {set}");
        for len in 1..=config.nodes {
            if scenario.verbose {
                let plural = if len != 1 { "s" } else { "" };
                debug!("Tree {set}, {len} node{plural}");
            }
            scenario.run_tree::<L>(set, &keys, len, removal, &mut summary)?;
            summary.trees += 1;
        }
        summary.sets += 1;
    }
    Ok(summary)
}

/// `next` and `prev` of `node` must be its neighbours in ascending order.
fn check_neighbours<L: RbLink>(
    tree: &NodeTree<L>,
    arena: &[Node<L>],
    node: u32,
    step: Step,
) -> Result<(), HarnessError> {
    let order: Vec<u32> = tree.indices(arena).collect();
    let pos = order.iter().position(|&i| i == node).ok_or(HarnessError::Search {
        step,
        op: "indices",
        node,
        found: None,
    })?;
    let expected_next = order.get(pos + 1).copied();
    let expected_prev = pos.checked_sub(1).map(|p| order[p]);

    for (op, found, expected) in [
        ("next", tree.next(arena, node), expected_next),
        ("prev", tree.prev(arena, node), expected_prev),
    ] {
        if found != expected {
            return Err(HarnessError::Neighbour {
                step,
                op,
                node,
                found,
                expected,
            });
        }
    }
    Ok(())
}

struct Scenario {
    checker: Checker,
    verbose: bool,
}

impl Scenario {
    fn run_tree<L: RbLink>(
        &self,
        set: usize,
        keys: &[i64],
        len: usize,
        removal: Removal,
        summary: &mut Summary,
    ) -> Result<(), HarnessError> {
        let mut arena = record::arena::<L>(keys, len);
        let mut tree = record::node_tree::<L>();

        for slot in 0..len {
            let node = slot as u32;
            let step = Step {
                set,
                nodes: len,
                op: Op::Insert(arena[slot].key),
            };
            if self.verbose {
                debug!(%step);
            }
            tree.insert(&mut arena, node);
            self.checker.check(&mut tree, &mut arena, slot + 1, step)?;

            if tree.first(&arena).is_none() {
                return Err(HarnessError::Missing { step, op: "first" });
            }
            if tree.last(&arena).is_none() {
                return Err(HarnessError::Missing { step, op: "last" });
            }
            check_neighbours(&tree, &arena, node, step)?;
            summary.inserts += 1;
        }

        match removal {
            Removal::InsertionOrder => {
                for slot in 0..len {
                    self.remove(&mut tree, &mut arena, slot as u32, len - slot, set, len)?;
                    summary.removals += 1;
                }
            }
            Removal::ReverseInsertionOrder => {
                for slot in (0..len).rev() {
                    self.remove(&mut tree, &mut arena, slot as u32, slot + 1, set, len)?;
                    summary.removals += 1;
                }
            }
            Removal::ForwardTraversal | Removal::ReverseTraversal => {
                let forward = removal == Removal::ForwardTraversal;
                let mut remaining = len;
                let mut start = None;
                loop {
                    let mut failure = None;
                    let visit = |tree: &mut NodeTree<L>, arena: &mut [Node<L>], node: u32| {
                        let resume = if forward {
                            tree.next(arena, node)
                        } else {
                            tree.prev(arena, node)
                        };
                        if let Err(err) = self.remove(tree, arena, node, remaining, set, len) {
                            failure = Some(err);
                            return ControlFlow::Break(node);
                        }
                        match resume {
                            Some(resume) => ControlFlow::Break(resume),
                            None => ControlFlow::Continue(()),
                        }
                    };
                    start = if forward {
                        tree.iter(&mut arena, start, visit)
                    } else {
                        tree.reverse_iter(&mut arena, start, visit)
                    };
                    if let Some(err) = failure {
                        return Err(err);
                    }
                    remaining = remaining.saturating_sub(1);
                    summary.removals += 1;
                    if start.is_none() {
                        break;
                    }
                }

                let left = tree.len(&arena);
                if remaining != 0 || left != 0 {
                    let direction = if forward {
                        Direction::Forward
                    } else {
                        Direction::Reverse
                    };
                    return Err(HarnessError::Leftover {
                        step: Step {
                            set,
                            nodes: len,
                            op: Op::Drain(direction),
                        },
                        remaining: remaining.max(left),
                    });
                }
            }
        }
        Ok(())
    }

    /// Removes `node` from a tree of `before` members and checks the result.
    fn remove<L: RbLink>(
        &self,
        tree: &mut NodeTree<L>,
        arena: &mut [Node<L>],
        node: u32,
        before: usize,
        set: usize,
        len: usize,
    ) -> Result<(), HarnessError> {
        let key = arena[node as usize].key;
        let step = Step {
            set,
            nodes: len,
            op: Op::Remove(key),
        };
        if self.verbose {
            debug!(%step);
        }
        tree.remove(arena, node);

        let removed = &arena[node as usize];
        if let Some(found) = tree.nsearch(arena, removed) {
            let found = arena[found as usize].key;
            if found < key {
                return Err(HarnessError::Bound {
                    step,
                    op: "nsearch",
                    key,
                    found,
                });
            }
        }
        if let Some(found) = tree.psearch(arena, removed) {
            let found = arena[found as usize].key;
            if found > key {
                return Err(HarnessError::Bound {
                    step,
                    op: "psearch",
                    key,
                    found,
                });
            }
        }
        arena[node as usize].magic = 0;

        self.checker.check(tree, arena, before - 1, step)
    }
}
