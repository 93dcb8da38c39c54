//! In-order traversal.
//!
//! [`RbTree::iter`] and [`RbTree::reverse_iter`] drive a visitor over the
//! members. The visitor gets the tree and the arena back, so it may remove
//! the member it was handed:
//!
//! ```
//! use std::ops::ControlFlow;
//! use rb_forest::{Adapter, Link, RbTree};
//!
//! struct Rec {
//!     key: i64,
//!     link: Link,
//! }
//!
//! struct ByKey;
//!
//! impl Adapter for ByKey {
//!     type Record = Rec;
//!     type Link = Link;
//!     fn link(r: &Rec) -> &Link {
//!         &r.link
//!     }
//!     fn link_mut(r: &mut Rec) -> &mut Link {
//!         &mut r.link
//!     }
//! }
//!
//! let mut arena: Vec<Rec> = (0..8).map(|key| Rec { key, link: Link::default() }).collect();
//! let mut tree = RbTree::<ByKey, _>::with_comparator(|a: &Rec, b: &Rec| a.key.cmp(&b.key));
//! for i in 0..arena.len() as u32 {
//!     tree.insert(&mut arena, i);
//! }
//!
//! let mut start = None;
//! loop {
//!     start = tree.iter(&mut arena, start, |tree, arena, node| {
//!         // Capture the successor before the node leaves the tree.
//!         let next = tree.next(arena, node);
//!         tree.remove(arena, node);
//!         match next {
//!             Some(next) => ControlFlow::Break(next),
//!             None => ControlFlow::Continue(()),
//!         }
//!     });
//!     if start.is_none() {
//!         break;
//!     }
//! }
//! assert!(tree.is_empty());
//! ```
//!
//! Continuing a traversal after the visitor has changed the tree follows
//! whatever links the change left behind. That is safe in the memory sense
//! but visits an unspecified sequence; break out with the neighbour you
//! captured instead, as above.

use std::cmp::Ordering;
use std::ops::ControlFlow;

use crate::tree::{some, RbTree};
use crate::types::{Adapter, NIL};

impl<A, C> RbTree<A, C>
where
    A: Adapter,
    C: Fn(&A::Record, &A::Record) -> Ordering,
{
    /// Visits members in ascending order, from `start` (inclusive, located
    /// with the comparator) or from the first member.
    ///
    /// Returns the index the visitor broke with, or `None` once every member
    /// has been visited.
    pub fn iter<F>(&mut self, arena: &mut [A::Record], start: Option<u32>, mut visit: F) -> Option<u32>
    where
        F: FnMut(&mut Self, &mut [A::Record], u32) -> ControlFlow<u32>,
    {
        let root = self.root;
        let flow = match start {
            Some(start) => self.iter_from(arena, root, start, &mut visit),
            None => self.iter_all(arena, root, &mut visit),
        };
        match flow {
            ControlFlow::Break(ret) => Some(ret),
            ControlFlow::Continue(()) => None,
        }
    }

    /// Visits members in descending order, from `start` (inclusive) or from
    /// the last member.
    pub fn reverse_iter<F>(&mut self, arena: &mut [A::Record], start: Option<u32>, mut visit: F) -> Option<u32>
    where
        F: FnMut(&mut Self, &mut [A::Record], u32) -> ControlFlow<u32>,
    {
        let root = self.root;
        let flow = match start {
            Some(start) => self.reverse_iter_from(arena, root, start, &mut visit),
            None => self.reverse_iter_all(arena, root, &mut visit),
        };
        match flow {
            ControlFlow::Break(ret) => Some(ret),
            ControlFlow::Continue(()) => None,
        }
    }

    fn iter_all<F>(&mut self, arena: &mut [A::Record], h: u32, visit: &mut F) -> ControlFlow<u32>
    where
        F: FnMut(&mut Self, &mut [A::Record], u32) -> ControlFlow<u32>,
    {
        if h == NIL {
            return ControlFlow::Continue(());
        }
        let l = self.left(arena, h);
        self.iter_all(arena, l, visit)?;
        visit(self, arena, h)?;
        let r = self.right(arena, h);
        self.iter_all(arena, r, visit)
    }

    fn iter_from<F>(&mut self, arena: &mut [A::Record], h: u32, start: u32, visit: &mut F) -> ControlFlow<u32>
    where
        F: FnMut(&mut Self, &mut [A::Record], u32) -> ControlFlow<u32>,
    {
        if h == NIL {
            return ControlFlow::Continue(());
        }
        match self.compare(arena, start, h) {
            Ordering::Less => {
                let l = self.left(arena, h);
                self.iter_from(arena, l, start, visit)?;
            }
            Ordering::Greater => {
                let r = self.right(arena, h);
                return self.iter_from(arena, r, start, visit);
            }
            Ordering::Equal => {}
        }
        visit(self, arena, h)?;
        let r = self.right(arena, h);
        self.iter_all(arena, r, visit)
    }

    fn reverse_iter_all<F>(&mut self, arena: &mut [A::Record], h: u32, visit: &mut F) -> ControlFlow<u32>
    where
        F: FnMut(&mut Self, &mut [A::Record], u32) -> ControlFlow<u32>,
    {
        if h == NIL {
            return ControlFlow::Continue(());
        }
        let r = self.right(arena, h);
        self.reverse_iter_all(arena, r, visit)?;
        visit(self, arena, h)?;
        let l = self.left(arena, h);
        self.reverse_iter_all(arena, l, visit)
    }

    fn reverse_iter_from<F>(
        &mut self,
        arena: &mut [A::Record],
        h: u32,
        start: u32,
        visit: &mut F,
    ) -> ControlFlow<u32>
    where
        F: FnMut(&mut Self, &mut [A::Record], u32) -> ControlFlow<u32>,
    {
        if h == NIL {
            return ControlFlow::Continue(());
        }
        match self.compare(arena, start, h) {
            Ordering::Greater => {
                let r = self.right(arena, h);
                self.reverse_iter_from(arena, r, start, visit)?;
            }
            Ordering::Less => {
                let l = self.left(arena, h);
                return self.reverse_iter_from(arena, l, start, visit);
            }
            Ordering::Equal => {}
        }
        visit(self, arena, h)?;
        let l = self.left(arena, h);
        self.reverse_iter_all(arena, l, visit)
    }

    /// Ascending member indices for read-only walks.
    pub fn indices<'a>(&'a self, arena: &'a [A::Record]) -> Indices<'a, A, C> {
        Indices {
            tree: self,
            arena,
            next: self.first(arena).unwrap_or(NIL),
        }
    }
}

/// Iterator returned by [`RbTree::indices`].
pub struct Indices<'a, A: Adapter, C> {
    tree: &'a RbTree<A, C>,
    arena: &'a [A::Record],
    next: u32,
}

impl<A, C> Iterator for Indices<'_, A, C>
where
    A: Adapter,
    C: Fn(&A::Record, &A::Record) -> Ordering,
{
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        let curr = some(self.next)?;
        self.next = self.tree.next(self.arena, curr).unwrap_or(NIL);
        Some(curr)
    }
}
