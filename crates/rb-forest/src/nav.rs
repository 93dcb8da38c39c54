use std::cmp::Ordering;

use crate::tree::{some, RbTree};
use crate::types::{Adapter, NIL};

impl<A, C> RbTree<A, C>
where
    A: Adapter,
    C: Fn(&A::Record, &A::Record) -> Ordering,
{
    /// In-order successor of the member at `node`.
    ///
    /// Without parent links the ancestor case re-descends from the root, so
    /// this is O(log n) rather than amortized O(1).
    pub fn next(&self, arena: &[A::Record], node: u32) -> Option<u32> {
        let r = self.right(arena, node);
        if r != NIL {
            return Some(self.leftmost(arena, r));
        }

        let mut ret = NIL;
        let mut h = self.root;
        while h != node {
            debug_assert_ne!(h, NIL, "record {node} is not a member of this tree");
            if h == NIL {
                return None;
            }
            h = match self.compare(arena, node, h) {
                Ordering::Less => {
                    ret = h;
                    self.left(arena, h)
                }
                _ => self.right(arena, h),
            };
        }
        some(ret)
    }

    /// In-order predecessor of the member at `node`.
    pub fn prev(&self, arena: &[A::Record], node: u32) -> Option<u32> {
        let l = self.left(arena, node);
        if l != NIL {
            return Some(self.rightmost(arena, l));
        }

        let mut ret = NIL;
        let mut h = self.root;
        while h != node {
            debug_assert_ne!(h, NIL, "record {node} is not a member of this tree");
            if h == NIL {
                return None;
            }
            h = match self.compare(arena, node, h) {
                Ordering::Greater => {
                    ret = h;
                    self.right(arena, h)
                }
                _ => self.left(arena, h),
            };
        }
        some(ret)
    }
}
