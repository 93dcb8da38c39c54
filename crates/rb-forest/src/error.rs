use thiserror::Error;

/// Structural defect found by [`RbTree::validate`](crate::RbTree::validate).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantError {
    #[error("sentinel was modified")]
    SentinelModified,

    #[error("root {root} is red")]
    RedRoot { root: u32 },

    #[error("red node {parent} has red child {child}")]
    RedRed { parent: u32, child: u32 },

    #[error("black height mismatch under node {node}: left {left}, right {right}")]
    BlackHeight { node: u32, left: usize, right: usize },

    #[error("node order violated: {prev} does not sort before {next}")]
    Order { prev: u32, next: u32 },

    #[error("node {node} is linked more than once")]
    Cycle { node: u32 },
}
