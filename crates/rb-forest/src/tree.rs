use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

use crate::types::{Adapter, RbLink, NIL};

/// Comparator type used by [`RbTree::new`].
pub type OrdComparator<R> = fn(&R, &R) -> Ordering;

/// Tree over records ordered by [`Ord`].
pub type OrdTree<A> = RbTree<A, OrdComparator<<A as Adapter>::Record>>;

/// Child side.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Dir {
    Left,
    Right,
}

impl Dir {
    #[inline]
    pub(crate) fn flip(self) -> Self {
        match self {
            Dir::Left => Dir::Right,
            Dir::Right => Dir::Left,
        }
    }

    #[inline]
    pub(crate) fn of(ord: Ordering) -> Self {
        if ord == Ordering::Less {
            Dir::Left
        } else {
            Dir::Right
        }
    }
}

#[inline]
pub(crate) fn some(i: u32) -> Option<u32> {
    (i != NIL).then_some(i)
}

/// Red-black tree over a caller-owned record arena.
///
/// The tree owns only its root index, its sentinel and its comparator.
/// Records stay in the caller's slice and are addressed by index; every
/// operation takes that slice. Passing a different arena than the one the
/// members live in is a caller error.
///
/// The comparator must be a strict total order over every record ever
/// inserted: `Equal` only when both arguments are the same record. Records
/// whose keys may tie must break the tie, typically by arena slot.
pub struct RbTree<A: Adapter, C> {
    pub(crate) root: u32,
    pub(crate) nil: A::Link,
    pub(crate) cmp: C,
    _adapter: PhantomData<fn() -> A>,
}

impl<A> RbTree<A, OrdComparator<A::Record>>
where
    A: Adapter,
    A::Record: Ord,
{
    pub fn new() -> Self {
        Self::with_comparator(<A::Record as Ord>::cmp)
    }
}

impl<A> Default for RbTree<A, OrdComparator<A::Record>>
where
    A: Adapter,
    A::Record: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Adapter, C> fmt::Debug for RbTree<A, C>
where
    A::Link: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RbTree")
            .field("root", &some(self.root))
            .field("nil", &self.nil)
            .finish()
    }
}

impl<A, C> RbTree<A, C>
where
    A: Adapter,
    C: Fn(&A::Record, &A::Record) -> Ordering,
{
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            root: NIL,
            nil: A::Link::default(),
            cmp,
            _adapter: PhantomData,
        }
    }

    #[inline]
    pub(crate) fn compare(&self, arena: &[A::Record], a: u32, b: u32) -> Ordering {
        (self.cmp)(&arena[a as usize], &arena[b as usize])
    }
}

impl<A: Adapter, C> RbTree<A, C> {
    /// Forgets every member. Records keep whatever links they had.
    pub fn clear(&mut self) {
        self.root = NIL;
    }

    pub fn is_empty(&self) -> bool {
        self.root == NIL
    }

    /// Root index, `None` on an empty tree.
    pub fn root(&self) -> Option<u32> {
        some(self.root)
    }

    /// The sentinel link shared by every leaf of this tree.
    pub fn nil(&self) -> &A::Link {
        &self.nil
    }

    /// Number of members. Walks the whole tree.
    pub fn len(&self, arena: &[A::Record]) -> usize {
        fn count<A: Adapter, C>(tree: &RbTree<A, C>, arena: &[A::Record], h: u32) -> usize {
            if h == NIL {
                return 0;
            }
            1 + count(tree, arena, tree.left(arena, h)) + count(tree, arena, tree.right(arena, h))
        }
        count(self, arena, self.root)
    }

    #[inline]
    pub(crate) fn link<'a>(&'a self, arena: &'a [A::Record], i: u32) -> &'a A::Link {
        if i == NIL {
            &self.nil
        } else {
            A::link(&arena[i as usize])
        }
    }

    #[inline]
    pub(crate) fn link_mut(arena: &mut [A::Record], i: u32) -> &mut A::Link {
        debug_assert_ne!(i, NIL, "the sentinel is never written");
        A::link_mut(&mut arena[i as usize])
    }

    /// Left child of `i`, [`NIL`] for none.
    #[inline]
    pub fn left(&self, arena: &[A::Record], i: u32) -> u32 {
        self.link(arena, i).left()
    }

    /// Right child of `i`, [`NIL`] for none.
    #[inline]
    pub fn right(&self, arena: &[A::Record], i: u32) -> u32 {
        self.link(arena, i).right()
    }

    #[inline]
    pub fn is_red(&self, arena: &[A::Record], i: u32) -> bool {
        self.link(arena, i).is_red()
    }

    #[inline]
    pub(crate) fn child(&self, arena: &[A::Record], i: u32, dir: Dir) -> u32 {
        match dir {
            Dir::Left => self.left(arena, i),
            Dir::Right => self.right(arena, i),
        }
    }

    #[inline]
    pub(crate) fn set_child(arena: &mut [A::Record], i: u32, dir: Dir, v: u32) {
        let link = Self::link_mut(arena, i);
        match dir {
            Dir::Left => link.set_left(v),
            Dir::Right => link.set_right(v),
        }
    }

    #[inline]
    pub(crate) fn set_red(arena: &mut [A::Record], i: u32, red: bool) {
        Self::link_mut(arena, i).set_red(red);
    }

    /// Rotates `h` towards `dir`: its child on the opposite side takes its
    /// place. Returns the new subtree root. Colors are left alone.
    pub(crate) fn rotate(&self, arena: &mut [A::Record], h: u32, dir: Dir) -> u32 {
        let x = self.child(arena, h, dir.flip());
        let inner = self.child(arena, x, dir);
        Self::set_child(arena, h, dir.flip(), inner);
        Self::set_child(arena, x, dir, h);
        x
    }

    pub(crate) fn leftmost(&self, arena: &[A::Record], mut h: u32) -> u32 {
        loop {
            let l = self.left(arena, h);
            if l == NIL {
                return h;
            }
            h = l;
        }
    }

    pub(crate) fn rightmost(&self, arena: &[A::Record], mut h: u32) -> u32 {
        loop {
            let r = self.right(arena, h);
            if r == NIL {
                return h;
            }
            h = r;
        }
    }
}
