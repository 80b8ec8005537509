//! Width padding in scalar units.
//!
//! Widths are measured in Unicode scalars, matching `len_chars`. A builder
//! already at or beyond the requested width is returned untouched.

use crate::builder::Builder;

impl Builder {
    /// Pads with `fill` on the right until the content is `width` scalars.
    pub fn justify_left(self, width: usize, fill: char) -> Self {
        let have = self.len_chars();
        if have >= width {
            return self;
        }
        self.append_chars(width - have, fill)
    }

    /// Pads with `fill` on the left until the content is `width` scalars.
    pub fn justify_right(self, width: usize, fill: char) -> Self {
        let have = self.len_chars();
        if have >= width {
            return self;
        }
        self.prepend_chars(width - have, fill)
    }

    /// Pads on both sides; an odd leftover scalar goes to the right.
    pub fn center(self, width: usize, fill: char) -> Self {
        let have = self.len_chars();
        if have >= width {
            return self;
        }
        let missing = width - have;
        let front = missing / 2;
        self.prepend_chars(front, fill).append_chars(missing - front, fill)
    }
}
