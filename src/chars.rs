//! Character writes: single scalars, replication, and the space fill.
//!
//! A scalar's UTF-8 length is known from its code point, so single-character
//! writes are exact writes of 1–4 bytes encoded straight into the scratch
//! slice. Replication encodes once and fills; the all-ASCII space case
//! reduces to a plain byte fill.

use crate::buffer::checked;
use crate::builder::Builder;

/// Encodes `c` once and tiles the encoding across `dst`.
///
/// `dst.len()` must be a multiple of the encoded length.
fn fill_with_char(dst: &mut [u8], c: char) {
    let mut enc = [0u8; 4];
    let enc = c.encode_utf8(&mut enc).as_bytes();
    if enc.len() == 1 {
        dst.fill(enc[0]);
        return;
    }
    for chunk in dst.chunks_exact_mut(enc.len()) {
        chunk.copy_from_slice(enc);
    }
}

impl Builder {
    /// Appends one Unicode scalar.
    pub fn append_char(mut self, c: char) -> Self {
        self.buf.append_exact(c.len_utf8(), |dst| {
            c.encode_utf8(dst);
        });
        self
    }

    /// Prepends one Unicode scalar.
    pub fn prepend_char(mut self, c: char) -> Self {
        self.buf.prepend_exact(c.len_utf8(), |dst| {
            c.encode_utf8(dst);
        });
        self
    }

    /// Appends `count` copies of `c`.
    pub fn append_chars(mut self, count: usize, c: char) -> Self {
        let total = checked(count.checked_mul(c.len_utf8()));
        self.buf.append_exact(total, |dst| fill_with_char(dst, c));
        self
    }

    /// Prepends `count` copies of `c`.
    pub fn prepend_chars(mut self, count: usize, c: char) -> Self {
        let total = checked(count.checked_mul(c.len_utf8()));
        self.buf.prepend_exact(total, |dst| fill_with_char(dst, c));
        self
    }

    /// Appends `count` ASCII spaces (plain byte fill).
    pub fn append_spaces(mut self, count: usize) -> Self {
        self.buf.append_exact(count, |dst| dst.fill(b' '));
        self
    }

    /// Prepends `count` ASCII spaces (plain byte fill).
    pub fn prepend_spaces(mut self, count: usize) -> Self {
        self.buf.prepend_exact(count, |dst| dst.fill(b' '));
        self
    }
}
