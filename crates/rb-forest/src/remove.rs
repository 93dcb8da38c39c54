use std::cmp::Ordering;

use crate::tree::{Dir, RbTree};
use crate::types::{Adapter, NIL};

impl<A, C> RbTree<A, C>
where
    A: Adapter,
    C: Fn(&A::Record, &A::Record) -> Ordering,
{
    /// Removes the member at `node` and resets its link to the unlinked
    /// state.
    ///
    /// A node with two children is replaced by its in-order successor, which
    /// moves into the removed node's position and color. Other members keep
    /// their identity but may change position relative to each other.
    /// Removing a record that is not a member is a caller error; release
    /// builds leave both the tree and the record untouched.
    pub fn remove(&mut self, arena: &mut [A::Record], node: u32) {
        let Some((root, _)) = self.remove_below(arena, self.root, node) else {
            return;
        };
        self.root = root;
        if root != NIL {
            Self::set_red(arena, root, false);
        }
        *Self::link_mut(arena, node) = A::Link::default();
    }

    /// Returns the new subtree root and whether the subtree lost one black
    /// node on every path, or `None` when `node` is not below `h`.
    fn remove_below(&self, arena: &mut [A::Record], h: u32, node: u32) -> Option<(u32, bool)> {
        if h == NIL {
            debug_assert!(false, "record {node} is not a member of this tree");
            return None;
        }

        let ord = if h == node {
            Ordering::Equal
        } else {
            self.compare(arena, node, h)
        };
        if ord == Ordering::Equal {
            debug_assert_eq!(h, node, "member {h} compares equal to record {node}");
            return (h == node).then(|| self.remove_here(arena, h));
        }

        let dir = Dir::of(ord);
        let next = self.child(arena, h, dir);
        let (c, short) = self.remove_below(arena, next, node)?;
        Self::set_child(arena, h, dir, c);
        Some(if short {
            self.repair(arena, h, dir)
        } else {
            (h, false)
        })
    }

    fn remove_here(&self, arena: &mut [A::Record], h: u32) -> (u32, bool) {
        let l = self.left(arena, h);
        let r = self.right(arena, h);
        if l == NIL || r == NIL {
            let child = if l == NIL { r } else { l };
            return (child, self.splice(arena, h, child));
        }

        let (r, short, succ) = self.remove_min(arena, r);
        Self::set_child(arena, succ, Dir::Left, l);
        Self::set_child(arena, succ, Dir::Right, r);
        let red = self.is_red(arena, h);
        Self::set_red(arena, succ, red);
        if short {
            self.repair(arena, succ, Dir::Right)
        } else {
            (succ, false)
        }
    }

    /// Detaches the minimum of the subtree at `h`.
    ///
    /// Returns the new subtree root, whether it came up short, and the
    /// detached node.
    fn remove_min(&self, arena: &mut [A::Record], h: u32) -> (u32, bool, u32) {
        let l = self.left(arena, h);
        if l == NIL {
            let child = self.right(arena, h);
            return (child, self.splice(arena, h, child), h);
        }

        let (c, short, min) = self.remove_min(arena, l);
        Self::set_child(arena, h, Dir::Left, c);
        let (h, short) = if short {
            self.repair(arena, h, Dir::Left)
        } else {
            (h, false)
        };
        (h, short, min)
    }

    /// `h` leaves the tree and its only child (possibly the sentinel) takes
    /// its place. Returns whether that place is now one black node short.
    fn splice(&self, arena: &mut [A::Record], h: u32, child: u32) -> bool {
        if self.is_red(arena, h) {
            false
        } else if self.is_red(arena, child) {
            Self::set_red(arena, child, false);
            false
        } else {
            true
        }
    }

    /// The subtree on `dir` of `h` is one black node short of its sibling.
    ///
    /// Returns the new subtree root and whether the whole subtree is now
    /// short, in which case the caller owes the repair.
    fn repair(&self, arena: &mut [A::Record], h: u32, dir: Dir) -> (u32, bool) {
        let s = self.child(arena, h, dir.flip());
        debug_assert_ne!(s, NIL, "a short subtree always has a real sibling");

        if self.is_red(arena, s) {
            // `h` is black. Bring `s` up, then the sibling of the short side
            // is one of its black children and `h` is red, which always
            // absorbs the deficiency.
            let top = self.rotate(arena, h, dir);
            Self::set_red(arena, top, false);
            Self::set_red(arena, h, true);
            let (sub, _) = self.repair(arena, h, dir);
            Self::set_child(arena, top, dir, sub);
            return (top, false);
        }

        let outer = self.child(arena, s, dir.flip());
        let inner = self.child(arena, s, dir);
        let red = self.is_red(arena, h);

        if self.is_red(arena, outer) {
            let top = self.rotate(arena, h, dir);
            Self::set_red(arena, top, red);
            Self::set_red(arena, h, false);
            Self::set_red(arena, outer, false);
            (top, false)
        } else if self.is_red(arena, inner) {
            let x = self.rotate(arena, s, dir.flip());
            Self::set_child(arena, h, dir.flip(), x);
            let top = self.rotate(arena, h, dir);
            Self::set_red(arena, top, red);
            Self::set_red(arena, h, false);
            (top, false)
        } else {
            Self::set_red(arena, s, true);
            if red {
                Self::set_red(arena, h, false);
                (h, false)
            } else {
                (h, true)
            }
        }
    }
}
