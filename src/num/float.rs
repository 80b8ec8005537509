//! Shortest-round-trip writers for `f64`.
//!
//! The actual digit selection is `ryu`'s problem; this module only moves the
//! result into the buffer. Ryu emits forwards into its own stack scratch, so
//! the write here is a single exact copy of a known length; no bounded
//! reserve is needed, unlike the right-to-left integer writers.

use crate::builder::Builder;

impl Builder {
    /// Appends the shortest decimal rendering that round-trips to `value`.
    ///
    /// Finite values look like `0.1`, `1e300`, or `-2.5`; non-finite values
    /// render as `NaN`, `inf`, and `-inf`.
    pub fn append_f64(mut self, value: f64) -> Self {
        let mut scratch = ryu::Buffer::new();
        let s = scratch.format(value);
        self.buf
            .append_exact(s.len(), |dst| dst.copy_from_slice(s.as_bytes()));
        self
    }

    /// Prepends the shortest decimal rendering that round-trips to `value`.
    pub fn prepend_f64(mut self, value: f64) -> Self {
        let mut scratch = ryu::Buffer::new();
        let s = scratch.format(value);
        self.buf
            .prepend_exact(s.len(), |dst| dst.copy_from_slice(s.as_bytes()));
        self
    }
}
