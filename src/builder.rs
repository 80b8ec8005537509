//! The affine builder handle.
//!
//! # Scope
//! [`Builder`] is the public face of the engine: a move-only wrapper around
//! the `TextBuf` engine. Every operation takes the handle by value and returns a new
//! one, so a given buffer is reachable through exactly one live handle at any
//! instant. That single fact is what lets the engine mutate the backing array
//! in place with no synchronization and no copies.
//!
//! # Affinity
//! Rust's move semantics enforce the discipline statically: `Builder` has no
//! `Clone` or `Copy`, so using a handle twice is a compile error, not a
//! runtime check. The only way to obtain two handles is [`Builder::duplicate`]
//! or [`Builder::new_empty`], both of which guarantee disjoint arrays.
//!
//! # Threading
//! `Builder` holds a raw allocation pointer and is `!Send`/`!Sync`; a handle
//! never crosses threads. The frozen [`Text`]/[`PinnedBytes`] results are
//! `Send + Sync` and are the only values that publish bytes outward.

use std::ffi::CStr;

use crate::buffer::TextBuf;
use crate::text::{PinnedBytes, Text};

/// Affine handle to a mutable UTF-8 buffer.
///
/// Construct one with [`Builder::new`] (or inside [`Builder::run`] /
/// [`Builder::run_bytes`]), thread it through a chain of consuming calls, and
/// freeze it into a [`Text`] or [`PinnedBytes`].
///
/// ```
/// use textbuf::Builder;
///
/// let text = Builder::run(|b| b.append_str("foo").append_str("bar"));
/// assert_eq!(&*text, "foobar");
/// ```
pub struct Builder {
    pub(crate) buf: TextBuf,
}

impl Builder {
    /// New empty, unpinned builder.
    pub fn new() -> Self {
        Self {
            buf: TextBuf::new(),
        }
    }

    fn new_pinned() -> Self {
        Self {
            buf: TextBuf::new_pinned(),
        }
    }

    /// Runs a builder pipeline and freezes the result into a [`Text`].
    ///
    /// The final allocation is trimmed to the content before freezing. Each
    /// call produces an independent buffer: two identical `run` calls never
    /// share storage.
    pub fn run<F>(f: F) -> Text
    where
        F: FnOnce(Builder) -> Builder,
    {
        let built = f(Builder::new());
        let (raw, off, len) = built.buf.into_frozen();
        Text::from_frozen(raw, off, len)
    }

    /// Runs a builder pipeline on pinned storage and returns the bytes.
    ///
    /// The whole chain allocates pinned (page-aligned) arrays, so the
    /// resulting [`PinnedBytes`] can hand out a stable pointer.
    pub fn run_bytes<F>(f: F) -> PinnedBytes
    where
        F: FnOnce(Builder) -> Builder,
    {
        let built = f(Builder::new_pinned());
        let (raw, off, len) = built.buf.into_frozen();
        PinnedBytes::from_frozen(raw, off, len)
    }

    /// Splits off a fresh empty builder with the same pinnedness.
    ///
    /// The original handle is returned untouched alongside the new one, so
    /// sub-builders created mid-pipeline stay in the same pinning regime.
    pub fn new_empty(self) -> (Self, Self) {
        let empty = Self {
            buf: self.buf.empty_like(),
        };
        (self, empty)
    }

    /// Two handles with identical content and disjoint arrays.
    ///
    /// This is the only way to fork a pipeline; the copy is physical, so
    /// operations on one branch can never observe the other.
    pub fn duplicate(self) -> (Self, Self) {
        let copy = Self {
            buf: self.buf.duplicate(),
        };
        (self, copy)
    }

    /// Discards the builder and its storage.
    pub fn consume(self) {}

    /// Logically empties the builder; the allocation is retained.
    pub fn erase(mut self) -> Self {
        self.buf.erase();
        self
    }

    /// Content length in bytes.
    #[inline]
    pub fn size_bytes(&self) -> usize {
        self.buf.size_bytes()
    }

    /// Content length in Unicode scalars.
    #[inline]
    pub fn len_chars(&self) -> usize {
        self.buf.len_chars()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size_bytes() == 0
    }

    /// Keeps the first `n` scalars, saturating at the end of the content.
    pub fn take_chars(mut self, n: usize) -> Self {
        self.buf.take_chars(n);
        self
    }

    /// Removes the first `n` scalars, saturating at the end of the content.
    pub fn drop_chars(mut self, n: usize) -> Self {
        self.buf.drop_chars(n);
        self
    }

    /// Appends a string slice.
    pub fn append_str(mut self, s: &str) -> Self {
        self.buf
            .append_exact(s.len(), |dst| dst.copy_from_slice(s.as_bytes()));
        self
    }

    /// Prepends a string slice.
    pub fn prepend_str(mut self, s: &str) -> Self {
        self.buf
            .prepend_exact(s.len(), |dst| dst.copy_from_slice(s.as_bytes()));
        self
    }

    /// Appends a null-terminated byte sequence.
    ///
    /// # Safety
    /// The bytes of `s` (excluding the terminator) must be valid UTF-8. This
    /// is not checked; feeding non-UTF-8 breaks the buffer invariant and the
    /// behavior of every later operation is undefined.
    pub unsafe fn append_c_str(mut self, s: &CStr) -> Self {
        let bytes = s.to_bytes();
        self.buf
            .append_exact(bytes.len(), |dst| dst.copy_from_slice(bytes));
        self
    }

    /// Prepends a null-terminated byte sequence.
    ///
    /// # Safety
    /// Same contract as [`Builder::append_c_str`].
    pub unsafe fn prepend_c_str(mut self, s: &CStr) -> Self {
        let bytes = s.to_bytes();
        self.buf
            .prepend_exact(bytes.len(), |dst| dst.copy_from_slice(bytes));
        self
    }

    /// Concatenates two builders, consuming both.
    ///
    /// Reuses whichever input array can absorb the other side (preferring the
    /// cheaper copy); allocates fresh only when neither fits.
    pub fn concat(self, other: Builder) -> Self {
        Self {
            buf: TextBuf::concat(self.buf, other.buf),
        }
    }

    /// Left-folds `items` through `f`, threading the builder.
    pub fn fold<I, T, F>(self, items: I, mut f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: FnMut(Builder, T) -> Builder,
    {
        let mut acc = self;
        for item in items {
            acc = f(acc, item);
        }
        acc
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Builder {
    /// Shows lengths only; the content is deliberately not aliased here.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Builder")
            .field("bytes", &self.size_bytes())
            .field("chars", &self.len_chars())
            .field("pinned", &self.buf.is_pinned())
            .finish()
    }
}
