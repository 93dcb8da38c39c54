//! Full-tree check run after every insert and removal.

use std::ops::ControlFlow;

use rb_forest::RbLink;
use tracing::debug;

use crate::config::HarnessConfig;
use crate::error::{Direction, HarnessError, Step};
use crate::record::{Node, NodeTree};

/// Validates a tree and walks it both ways, checking that every member is
/// found by `search`, `nsearch` and `psearch` with itself as the probe.
#[derive(Debug, Clone, Copy, Default)]
pub struct Checker {
    pub print_tree: bool,
    pub print_forward: bool,
    pub print_reverse: bool,
}

impl Checker {
    pub fn new(config: &HarnessConfig) -> Self {
        Self {
            print_tree: config.print_tree,
            print_forward: config.print_forward,
            print_reverse: config.print_reverse,
        }
    }

    /// Checks `tree` after `step`, expecting `expected` members.
    pub fn check<L: RbLink>(
        &self,
        tree: &mut NodeTree<L>,
        arena: &mut [Node<L>],
        expected: usize,
        step: Step,
    ) -> Result<(), HarnessError> {
        let shape = tree
            .validate(arena)
            .map_err(|source| HarnessError::Invariant { step, source })?;
        let measured = tree.black_height(arena);
        if measured != shape.black_height {
            return Err(HarnessError::BlackHeight {
                step,
                measured,
                validated: shape.black_height,
            });
        }
        if self.print_tree {
            debug!(%step, tree = %tree.print(arena, |n| n.key));
        }

        self.walk(tree, arena, expected, step, Direction::Forward)?;
        self.walk(tree, arena, expected, step, Direction::Reverse)
    }

    fn walk<L: RbLink>(
        &self,
        tree: &mut NodeTree<L>,
        arena: &mut [Node<L>],
        expected: usize,
        step: Step,
        direction: Direction,
    ) -> Result<(), HarnessError> {
        let print = match direction {
            Direction::Forward => self.print_forward,
            Direction::Reverse => self.print_reverse,
        };
        let mut visited = 0;
        let mut keys = Vec::new();
        let mut failure = None;

        let visit = |tree: &mut NodeTree<L>, arena: &mut [Node<L>], node: u32| {
            let rec = &arena[node as usize];
            let found = [
                ("search", tree.search(arena, rec)),
                ("nsearch", tree.nsearch(arena, rec)),
                ("psearch", tree.psearch(arena, rec)),
            ];
            for (op, found) in found {
                if found != Some(node) {
                    failure = Some(HarnessError::Search { step, op, node, found });
                    return ControlFlow::Break(node);
                }
            }
            if print {
                keys.push(rec.key);
            }
            visited += 1;
            ControlFlow::Continue(())
        };
        match direction {
            Direction::Forward => tree.iter(arena, None, visit),
            Direction::Reverse => tree.reverse_iter(arena, None, visit),
        };

        if let Some(err) = failure {
            return Err(err);
        }
        if print {
            let sep = match direction {
                Direction::Forward => "-->",
                Direction::Reverse => "<--",
            };
            let line: Vec<String> = keys.iter().map(i64::to_string).collect();
            debug!(%step, %direction, keys = %line.join(sep));
        }
        if visited != expected {
            return Err(HarnessError::Count {
                step,
                direction,
                visited,
                expected,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Op;
    use crate::record::{arena, node_tree};
    use rb_forest::{InvariantError, Link, PackedLink};

    fn step() -> Step {
        Step {
            set: 0,
            nodes: 6,
            op: Op::Insert(0),
        }
    }

    #[test]
    fn test_check_passes_on_built_tree() {
        let mut nodes = arena::<Link>(&[4, 1, 6, 1, 3, 0], 6);
        let mut tree = node_tree::<Link>();
        let checker = Checker {
            print_tree: true,
            print_forward: true,
            print_reverse: true,
        };
        for slot in 0..6 {
            tree.insert(&mut nodes, slot);
            checker
                .check(&mut tree, &mut nodes, slot as usize + 1, step())
                .unwrap();
        }
    }

    #[test]
    fn test_check_reports_wrong_count() {
        let mut nodes = arena::<PackedLink>(&[2, 1, 3], 3);
        let mut tree = node_tree::<PackedLink>();
        for slot in 0..3 {
            tree.insert(&mut nodes, slot);
        }
        let err = Checker::default()
            .check(&mut tree, &mut nodes, 2, step())
            .unwrap_err();
        assert_eq!(
            err,
            HarnessError::Count {
                step: step(),
                direction: Direction::Forward,
                visited: 3,
                expected: 2,
            }
        );
    }

    #[test]
    fn test_check_reports_red_root() {
        let mut nodes = arena::<Link>(&[1], 1);
        let mut tree = node_tree::<Link>();
        tree.insert(&mut nodes, 0);
        nodes[0].link.set_red(true);
        let err = Checker::default()
            .check(&mut tree, &mut nodes, 1, step())
            .unwrap_err();
        assert_eq!(
            err,
            HarnessError::Invariant {
                step: step(),
                source: InvariantError::RedRoot { root: 0 },
            }
        );
    }
}
