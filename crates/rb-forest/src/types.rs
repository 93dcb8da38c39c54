//! Link layouts and the adapter trait.
//!
//! A record joins a tree through an embedded link. Links hold no parent
//! reference: only the color and the two child indices. Child "pointers" are
//! `u32` indices into the caller-owned record arena, with [`NIL`] standing in
//! for the tree's sentinel.

/// Index of the per-tree sentinel.
///
/// Never a valid arena slot. Reads of `NIL` resolve to the sentinel link the
/// tree stores inline; the engine never writes through it.
pub const NIL: u32 = u32::MAX;

/// Node color.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

/// Storage layout of an embedded link.
///
/// `Default` must produce the unlinked state: black, both children [`NIL`].
/// The sentinel is exactly that state.
pub trait RbLink: Default {
    fn left(&self) -> u32;
    fn right(&self) -> u32;
    fn is_red(&self) -> bool;
    fn set_left(&mut self, v: u32);
    fn set_right(&mut self, v: u32);
    fn set_red(&mut self, red: bool);

    fn color(&self) -> Color {
        if self.is_red() {
            Color::Red
        } else {
            Color::Black
        }
    }

    fn set_color(&mut self, color: Color) {
        self.set_red(color == Color::Red);
    }
}

/// Link with a dedicated color field.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Link {
    left: u32,
    right: u32,
    red: bool,
}

impl Default for Link {
    fn default() -> Self {
        Self {
            left: NIL,
            right: NIL,
            red: false,
        }
    }
}

impl RbLink for Link {
    #[inline]
    fn left(&self) -> u32 {
        self.left
    }

    #[inline]
    fn right(&self) -> u32 {
        self.right
    }

    #[inline]
    fn is_red(&self) -> bool {
        self.red
    }

    #[inline]
    fn set_left(&mut self, v: u32) {
        self.left = v;
    }

    #[inline]
    fn set_right(&mut self, v: u32) {
        self.right = v;
    }

    #[inline]
    fn set_red(&mut self, red: bool) {
        self.red = red;
    }
}

const RED_BIT: u32 = 1 << 31;
const PACKED_NIL: u32 = RED_BIT - 1;

/// Link with the color packed into the top bit of the right child index.
///
/// Two words per record instead of three. Arena indices must stay below
/// `2^31 - 1`; the all-ones 31-bit pattern encodes [`NIL`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PackedLink {
    left: u32,
    right_red: u32,
}

impl PackedLink {
    /// Largest arena index a packed link can hold.
    pub const MAX_INDEX: u32 = PACKED_NIL - 1;

    #[inline]
    fn pack(v: u32) -> u32 {
        if v == NIL {
            PACKED_NIL
        } else {
            debug_assert!(v < PACKED_NIL, "index {v} does not fit a packed link");
            v
        }
    }
}

impl Default for PackedLink {
    fn default() -> Self {
        Self {
            left: NIL,
            right_red: PACKED_NIL,
        }
    }
}

impl RbLink for PackedLink {
    #[inline]
    fn left(&self) -> u32 {
        self.left
    }

    #[inline]
    fn right(&self) -> u32 {
        match self.right_red & !RED_BIT {
            PACKED_NIL => NIL,
            v => v,
        }
    }

    #[inline]
    fn is_red(&self) -> bool {
        self.right_red & RED_BIT != 0
    }

    #[inline]
    fn set_left(&mut self, v: u32) {
        self.left = v;
    }

    #[inline]
    fn set_right(&mut self, v: u32) {
        self.right_red = (self.right_red & RED_BIT) | Self::pack(v);
    }

    #[inline]
    fn set_red(&mut self, red: bool) {
        if red {
            self.right_red |= RED_BIT;
        } else {
            self.right_red &= !RED_BIT;
        }
    }
}

/// Binds a record type to one of its embedded links.
///
/// A record that lives in several trees at once embeds one link per tree and
/// gets one adapter per link.
pub trait Adapter {
    type Record;
    type Link: RbLink;

    fn link(record: &Self::Record) -> &Self::Link;
    fn link_mut(record: &mut Self::Record) -> &mut Self::Link;
}
