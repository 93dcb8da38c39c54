//! Intrusive red-black tree without parent links.
//!
//! Records live in a caller-owned arena (`&mut [R]`) and embed a link
//! holding a color and two child indices. The tree itself stores only a
//! root index, one sentinel and the comparator; it never allocates or frees
//! records. Insertion and removal are recursive descents that repair
//! red-black violations while the recursion unwinds, so no node needs to
//! know its parent.
//!
//! # Instantiation
//!
//! An [`Adapter`] picks the record type and the embedded link field; the
//! comparator is given when the tree is built with
//! [`RbTree::with_comparator`] (or [`RbTree::new`] for `Ord` records). The
//! link layout is the adapter's choice: [`Link`] keeps a dedicated color
//! field, [`PackedLink`] packs the color into the right child index.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`types`] | [`NIL`], [`RbLink`], [`Link`], [`PackedLink`], [`Adapter`] |
//! | `tree` | [`RbTree`], sentinel and link accessors, rotations |
//! | `insert` / `remove` | structural core |
//! | `search` | `search`, `nsearch`, `psearch`, `first`, `last` |
//! | `nav` | `next`, `prev` |
//! | [`iter`] | visitor traversal that tolerates removing the visited node |
//! | `check` / `print` | validation and compact dumps for tests |
//!
//! # Contract
//!
//! Not-found results are `None`. Caller errors (inserting a member twice,
//! removing a non-member, a comparator that is not a strict total order)
//! trip `debug_assert!`s in debug builds. In release builds removing a
//! non-member does nothing; the other errors leave the tree in an
//! unspecified but memory-safe state.

mod check;
mod error;
mod insert;
pub mod iter;
mod nav;
mod print;
mod remove;
mod search;
mod tree;
pub mod types;

pub use check::Shape;
pub use error::InvariantError;
pub use iter::Indices;
pub use tree::{OrdComparator, OrdTree, RbTree};
pub use types::{Adapter, Color, Link, PackedLink, RbLink, NIL};
