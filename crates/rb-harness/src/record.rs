//! Harness records: a key, an arena slot and an embedded link.

use std::cmp::Ordering;
use std::marker::PhantomData;

use rb_forest::{Adapter, RbLink, RbTree};

/// Stamp carried by every live record. Cleared once a record leaves its tree.
pub const NODE_MAGIC: u32 = 0x9823_af7e;

/// Slot used by probe records so they never tie with a real record.
pub const PROBE_SLOT: u32 = u32::MAX;

#[derive(Debug, Clone)]
pub struct Node<L> {
    pub magic: u32,
    pub key: i64,
    /// Position in the arena; breaks ties between equal keys.
    pub slot: u32,
    pub link: L,
}

impl<L: RbLink> Node<L> {
    pub fn new(slot: u32, key: i64) -> Self {
        Self {
            magic: NODE_MAGIC,
            key,
            slot,
            link: L::default(),
        }
    }

    /// Lookup record for `key` that is never itself a member.
    pub fn probe(key: i64) -> Self {
        Self::new(PROBE_SLOT, key)
    }
}

/// Adapter over [`Node::link`].
pub struct NodeLink<L>(PhantomData<L>);

impl<L: RbLink> Adapter for NodeLink<L> {
    type Record = Node<L>;
    type Link = L;

    #[inline]
    fn link(record: &Node<L>) -> &L {
        &record.link
    }

    #[inline]
    fn link_mut(record: &mut Node<L>) -> &mut L {
        &mut record.link
    }
}

/// Key order, ties broken by slot so distinct records never compare equal.
pub fn node_cmp<L>(a: &Node<L>, b: &Node<L>) -> Ordering {
    debug_assert_eq!(a.magic, NODE_MAGIC, "compared a record outside its tree");
    debug_assert_eq!(b.magic, NODE_MAGIC, "compared a record outside its tree");
    a.key.cmp(&b.key).then(a.slot.cmp(&b.slot))
}

pub type NodeCmp<L> = fn(&Node<L>, &Node<L>) -> Ordering;
pub type NodeTree<L> = RbTree<NodeLink<L>, NodeCmp<L>>;

pub fn node_tree<L: RbLink>() -> NodeTree<L> {
    RbTree::with_comparator(node_cmp::<L> as NodeCmp<L>)
}

/// Fresh, unlinked records for the first `len` keys of `keys`.
pub fn arena<L: RbLink>(keys: &[i64], len: usize) -> Vec<Node<L>> {
    keys[..len]
        .iter()
        .enumerate()
        .map(|(slot, &key)| Node::new(slot as u32, key))
        .collect()
}
