use std::fmt;

use rb_forest::InvariantError;
use thiserror::Error;

/// Operation the harness was checking when a failure surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Insert(i64),
    Remove(i64),
    /// Emptying the tree by removing each node a traversal visits.
    Drain(Direction),
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Insert(key) => write!(f, "insert({key})"),
            Op::Remove(key) => write!(f, "remove({key})"),
            Op::Drain(direction) => write!(f, "{direction} traversal removal"),
        }
    }
}

/// Where in a run a check was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub set: usize,
    pub nodes: usize,
    pub op: Op,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plural = if self.nodes != 1 { "s" } else { "" };
        write!(f, "tree {}, {} node{plural}, {}", self.set, self.nodes, self.op)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Reverse,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Forward => "forward",
            Direction::Reverse => "reverse",
        })
    }
}

/// A failed harness check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HarnessError {
    #[error("{step}: tree imbalance: {source}")]
    Invariant { step: Step, source: InvariantError },

    #[error("{step}: leftmost path has black height {measured}, validation found {validated}")]
    BlackHeight {
        step: Step,
        measured: usize,
        validated: usize,
    },

    #[error("{step}: {direction} iteration visited {visited} nodes, expected {expected}")]
    Count {
        step: Step,
        direction: Direction,
        visited: usize,
        expected: usize,
    },

    #[error("{step}: {op} of member {node} returned {found:?}")]
    Search {
        step: Step,
        op: &'static str,
        node: u32,
        found: Option<u32>,
    },

    #[error("{step}: {op} of removed key {key} returned key {found}")]
    Bound {
        step: Step,
        op: &'static str,
        key: i64,
        found: i64,
    },

    #[error("{step}: {op} of member {node} returned {found:?}, expected {expected:?}")]
    Neighbour {
        step: Step,
        op: &'static str,
        node: u32,
        found: Option<u32>,
        expected: Option<u32>,
    },

    #[error("{step}: {op} returned nil on a non-empty tree")]
    Missing { step: Step, op: &'static str },

    #[error("{step}: {remaining} nodes left after removal by traversal")]
    Leftover { step: Step, remaining: usize },
}
