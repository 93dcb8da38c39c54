//! White-box validation, built only on the read accessors.

use std::cmp::Ordering;

use crate::error::InvariantError;
use crate::tree::RbTree;
use crate::types::{Adapter, RbLink, NIL};

/// Shape of a tree that passed [`RbTree::validate`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Shape {
    pub len: usize,
    /// Black nodes on every path from the root down to the sentinel.
    pub black_height: usize,
}

struct Walk {
    seen: Vec<bool>,
    prev: u32,
    len: usize,
}

impl<A, C> RbTree<A, C>
where
    A: Adapter,
    C: Fn(&A::Record, &A::Record) -> Ordering,
{
    /// Checks every red-black and ordering invariant.
    pub fn validate(&self, arena: &[A::Record]) -> Result<Shape, InvariantError> {
        let nil = &self.nil;
        if nil.is_red() || nil.left() != NIL || nil.right() != NIL {
            return Err(InvariantError::SentinelModified);
        }
        if self.root != NIL && self.is_red(arena, self.root) {
            return Err(InvariantError::RedRoot { root: self.root });
        }

        let mut walk = Walk {
            seen: vec![false; arena.len()],
            prev: NIL,
            len: 0,
        };
        let black_height = self.walk(arena, self.root, &mut walk)?;
        Ok(Shape {
            len: walk.len,
            black_height,
        })
    }

    fn walk(&self, arena: &[A::Record], h: u32, walk: &mut Walk) -> Result<usize, InvariantError> {
        if h == NIL {
            return Ok(0);
        }
        if std::mem::replace(&mut walk.seen[h as usize], true) {
            return Err(InvariantError::Cycle { node: h });
        }

        let l = self.left(arena, h);
        let r = self.right(arena, h);
        if self.is_red(arena, h) {
            for child in [l, r] {
                if self.is_red(arena, child) {
                    return Err(InvariantError::RedRed { parent: h, child });
                }
            }
        }

        let left = self.walk(arena, l, walk)?;

        if walk.prev != NIL && self.compare(arena, walk.prev, h) != Ordering::Less {
            return Err(InvariantError::Order {
                prev: walk.prev,
                next: h,
            });
        }
        walk.prev = h;
        walk.len += 1;

        let right = self.walk(arena, r, walk)?;
        if left != right {
            return Err(InvariantError::BlackHeight { node: h, left, right });
        }

        Ok(left + usize::from(!self.is_red(arena, h)))
    }
}

impl<A: Adapter, C> RbTree<A, C> {
    /// Black nodes on the leftmost path from the root.
    ///
    /// Equal to every other root-to-sentinel path in a valid tree.
    pub fn black_height(&self, arena: &[A::Record]) -> usize {
        let mut height = 0;
        let mut h = self.root;
        while h != NIL {
            if !self.is_red(arena, h) {
                height += 1;
            }
            h = self.left(arena, h);
        }
        height
    }
}
