//! Affine UTF-8 string builder with reserves on both sides of the content.
//!
//! # Scope
//! This crate builds text by mutating one byte array in place. The public
//! handle, [`Builder`], is *affine*: every operation consumes it by value and
//! returns a new handle, so a buffer is reachable through exactly one handle
//! at a time and the engine never needs a copy-on-write or a lock. Space is
//! reserved on both sides of the content, which makes append *and* prepend
//! amortised O(1), and the numeric writers format digits directly into the
//! array with no intermediate buffers.
//!
//! # Design themes
//! - Growth is policy, not accident: every reuse-vs-reallocate decision lives
//!   in one module (`buffer`), with documented capacity formulas.
//! - Writers see scratch slices, never the buffer: formatters are plain
//!   functions from a slice to a byte count.
//! - Freezing transfers ownership: [`Builder::run`] trims and hands the array
//!   to an immutable [`Text`]; [`Builder::run_bytes`] does the same with a
//!   pinned, page-aligned array behind [`PinnedBytes`].
//!
//! # Module map
//! - `raw`: the allocation handle (alloc/copy/shrink, pinning).
//! - `buffer`: the growth engine and reserve bookkeeping.
//! - `builder`: the affine handle and lifecycle entry points.
//! - `text`: frozen outputs.
//! - `chars`, `pad`: scalar writes, replication, width padding.
//! - `num`: decimal, hexadecimal, arbitrary-precision, and `f64` writers.
//!
//! # Example
//! ```
//! use textbuf::Builder;
//!
//! let text = Builder::run(|b| {
//!     b.append_str("x = ")
//!         .append_dec(42)
//!         .append_str(" (hex ")
//!         .append_hex(42u32)
//!         .append_char(')')
//! });
//! assert_eq!(&*text, "x = 42 (hex 2a)");
//! ```

mod buffer;
mod builder;
mod chars;
mod num;
mod pad;
mod raw;
mod text;

pub use builder::Builder;
pub use num::dec::Decimal;
pub use num::hex::Hexadecimal;
pub use text::{PinnedBytes, Text};

#[cfg(test)]
pub mod test_utils;
