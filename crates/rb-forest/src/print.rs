use std::fmt::{Display, Write};

use crate::tree::RbTree;
use crate::types::{Adapter, NIL};

impl<A: Adapter, C> RbTree<A, C> {
    /// Compact one-line dump.
    ///
    /// Each node prints as its key followed by `r` or `b`, then its left
    /// subtree in `[...]` and its right subtree in `<...>`; a sentinel child
    /// prints as `.`. A black `2` with red children `1` and `3` prints as
    /// `2b[1r..]<3r..>`. An empty tree prints as `.`.
    pub fn print<F, D>(&self, arena: &[A::Record], key: F) -> String
    where
        F: Fn(&A::Record) -> D,
        D: Display,
    {
        let mut out = String::new();
        if self.root == NIL {
            out.push('.');
        } else {
            self.print_node(arena, self.root, &key, &mut out);
        }
        out
    }

    fn print_node<F, D>(&self, arena: &[A::Record], h: u32, key: &F, out: &mut String)
    where
        F: Fn(&A::Record) -> D,
        D: Display,
    {
        let color = if self.is_red(arena, h) { 'r' } else { 'b' };
        let _ = write!(out, "{}{color}", key(&arena[h as usize]));

        for (child, open, close) in [(self.left(arena, h), '[', ']'), (self.right(arena, h), '<', '>')] {
            if child == NIL {
                out.push('.');
            } else {
                out.push(open);
                self.print_node(arena, child, key, out);
                out.push(close);
            }
        }
    }
}
