use std::cmp::Ordering;

use crate::tree::{Dir, RbTree};
use crate::types::{Adapter, RbLink, NIL};

/// What a frame of the insert descent still owes its caller.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Fixup {
    /// Subtree is a valid red-black tree with unchanged black height and
    /// unchanged root color.
    Done,
    /// Subtree root is red and its children are black.
    Red,
    /// Subtree root is red and so is its child on the given side.
    RedRed(Dir),
}

impl<A, C> RbTree<A, C>
where
    A: Adapter,
    C: Fn(&A::Record, &A::Record) -> Ordering,
{
    /// Inserts the record at `node`.
    ///
    /// The record's link is fully reinitialized, so a previously removed
    /// record can be inserted again as is. Inserting a record that is already
    /// a member, or one that compares `Equal` to a member, is a caller error.
    pub fn insert(&mut self, arena: &mut [A::Record], node: u32) {
        {
            let link = Self::link_mut(arena, node);
            *link = A::Link::default();
            link.set_red(true);
        }
        let (root, fixup) = self.insert_below(arena, self.root, node);
        self.root = root;
        if fixup != Fixup::Done {
            Self::set_red(arena, root, false);
        }
    }

    fn insert_below(&self, arena: &mut [A::Record], h: u32, node: u32) -> (u32, Fixup) {
        if h == NIL {
            return (node, Fixup::Red);
        }

        let ord = self.compare(arena, node, h);
        debug_assert_ne!(ord, Ordering::Equal, "record {node} compares equal to member {h}");
        let dir = Dir::of(ord);

        let next = self.child(arena, h, dir);
        let (c, fixup) = self.insert_below(arena, next, node);
        Self::set_child(arena, h, dir, c);

        match fixup {
            Fixup::Done => (h, Fixup::Done),
            Fixup::Red if self.is_red(arena, h) => (h, Fixup::RedRed(dir)),
            Fixup::Red => (h, Fixup::Done),
            Fixup::RedRed(inner) => {
                // `c` was red before this insert, so `h` is black.
                let uncle = self.child(arena, h, dir.flip());
                if self.is_red(arena, uncle) {
                    Self::set_red(arena, c, false);
                    Self::set_red(arena, uncle, false);
                    Self::set_red(arena, h, true);
                    return (h, Fixup::Red);
                }

                if inner != dir {
                    let x = self.rotate(arena, c, dir);
                    Self::set_child(arena, h, dir, x);
                }
                let top = self.rotate(arena, h, dir.flip());
                Self::set_red(arena, top, false);
                Self::set_red(arena, h, true);
                (top, Fixup::Done)
            }
        }
    }
}
