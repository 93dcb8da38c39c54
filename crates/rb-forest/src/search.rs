use std::cmp::Ordering;

use crate::tree::{some, RbTree};
use crate::types::{Adapter, NIL};

impl<A, C> RbTree<A, C>
where
    A: Adapter,
    C: Fn(&A::Record, &A::Record) -> Ordering,
{
    /// Member comparing `Equal` to `key`.
    ///
    /// `key` is any record, typically a probe that is not in the arena.
    pub fn search(&self, arena: &[A::Record], key: &A::Record) -> Option<u32> {
        self.search_by(arena, |n| (self.cmp)(key, n))
    }

    /// Smallest member `>= key`.
    pub fn nsearch(&self, arena: &[A::Record], key: &A::Record) -> Option<u32> {
        self.nsearch_by(arena, |n| (self.cmp)(key, n))
    }

    /// Largest member `<= key`.
    pub fn psearch(&self, arena: &[A::Record], key: &A::Record) -> Option<u32> {
        self.psearch_by(arena, |n| (self.cmp)(key, n))
    }
}

impl<A: Adapter, C> RbTree<A, C> {
    /// Exact search with a probe closure.
    ///
    /// `probe(node)` orders the sought key relative to `node`; it must agree
    /// with the tree's comparator.
    pub fn search_by<F>(&self, arena: &[A::Record], mut probe: F) -> Option<u32>
    where
        F: FnMut(&A::Record) -> Ordering,
    {
        let mut h = self.root;
        while h != NIL {
            h = match probe(&arena[h as usize]) {
                Ordering::Less => self.left(arena, h),
                Ordering::Greater => self.right(arena, h),
                Ordering::Equal => return Some(h),
            };
        }
        None
    }

    /// Smallest member the probe does not order after.
    pub fn nsearch_by<F>(&self, arena: &[A::Record], mut probe: F) -> Option<u32>
    where
        F: FnMut(&A::Record) -> Ordering,
    {
        let mut ret = NIL;
        let mut h = self.root;
        while h != NIL {
            h = match probe(&arena[h as usize]) {
                Ordering::Less => {
                    ret = h;
                    self.left(arena, h)
                }
                Ordering::Greater => self.right(arena, h),
                Ordering::Equal => return Some(h),
            };
        }
        some(ret)
    }

    /// Largest member the probe does not order before.
    pub fn psearch_by<F>(&self, arena: &[A::Record], mut probe: F) -> Option<u32>
    where
        F: FnMut(&A::Record) -> Ordering,
    {
        let mut ret = NIL;
        let mut h = self.root;
        while h != NIL {
            h = match probe(&arena[h as usize]) {
                Ordering::Less => self.left(arena, h),
                Ordering::Greater => {
                    ret = h;
                    self.right(arena, h)
                }
                Ordering::Equal => return Some(h),
            };
        }
        some(ret)
    }

    /// Leftmost member.
    pub fn first(&self, arena: &[A::Record]) -> Option<u32> {
        some(self.leftmost(arena, self.root))
    }

    /// Rightmost member.
    pub fn last(&self, arena: &[A::Record]) -> Option<u32> {
        some(self.rightmost(arena, self.root))
    }
}
