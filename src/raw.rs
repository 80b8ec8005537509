//! Raw byte allocations backing the builder.
//!
//! # Scope
//! `RawBuf` is the owning handle for a single heap allocation of bytes. It
//! knows nothing about offsets, lengths, or UTF-8; the buffer engine layers
//! that bookkeeping on top. This module makes allocation behavior explicit:
//! growth is always a fresh allocation plus an engine-directed copy, and the
//! only in-place resize is the final shrink before a buffer is frozen.
//!
//! # Pinning
//! A pinned allocation is page-aligned (minimum 4 KiB). Pinned storage exists
//! for buffers whose final bytes are handed out with a stable pointer
//! ([`run_bytes`](crate::Builder::run_bytes)); the page alignment keeps that
//! pointer predictable for foreign consumers. Pinnedness is a property of the
//! allocation and must be re-applied by the engine on every reallocation of
//! the same logical buffer.
//!
//! # Invariants
//! - `cap == 0` holds no allocation (`ptr` is dangling); `cap > 0` holds
//!   exactly one allocation of `cap` bytes at the recorded alignment.
//! - Freshly allocated storage is zeroed, so every byte in `[0, cap)` is
//!   initialized and the engine can hand out plain `&mut [u8]` scratch.
//! - The allocation address is stable from creation until drop or `shrink_to`.
//!
//! # Failure modes
//! Allocation failure reports through `std::alloc::handle_alloc_error`.
//! Capacity arithmetic is checked by the engine before it reaches this
//! module; layouts that would overflow `isize` panic here.

use std::alloc::{alloc_zeroed, dealloc, handle_alloc_error, realloc, Layout};
use std::ptr::NonNull;

/// Alignment of pinned allocations. Page alignment keeps pointers handed to
/// foreign code predictable regardless of allocator internals.
const PIN_ALIGN: usize = 4096;

/// Owning handle for one raw byte allocation.
///
/// # Invariants
/// - When `cap > 0`, `ptr` points to `cap` zero-initialized-or-written bytes
///   allocated with the layout derived from (`cap`, `pinned`).
/// - When `cap == 0`, `ptr` is dangling and nothing is deallocated on drop.
pub(crate) struct RawBuf {
    ptr: NonNull<u8>,
    cap: usize,
    pinned: bool,
}

impl RawBuf {
    /// Allocates an unpinned buffer of `cap` bytes.
    pub(crate) fn new(cap: usize) -> Self {
        Self::with_pinning(cap, false)
    }

    /// Allocates a pinned (page-aligned) buffer of `cap` bytes.
    pub(crate) fn new_pinned(cap: usize) -> Self {
        Self::with_pinning(cap, true)
    }

    /// Allocates a buffer of `cap` bytes with the given pinnedness.
    ///
    /// `cap == 0` performs no allocation and returns a dangling handle.
    pub(crate) fn with_pinning(cap: usize, pinned: bool) -> Self {
        if cap == 0 {
            return Self {
                ptr: NonNull::dangling(),
                cap: 0,
                pinned,
            };
        }

        let layout = Self::layout(cap, pinned);
        // SAFETY: layout has non-zero size (cap > 0 checked above).
        let raw = unsafe { alloc_zeroed(layout) };
        let Some(ptr) = NonNull::new(raw) else {
            handle_alloc_error(layout)
        };
        Self { ptr, cap, pinned }
    }

    fn layout(cap: usize, pinned: bool) -> Layout {
        let align = if pinned { PIN_ALIGN } else { 1 };
        match Layout::from_size_align(cap, align) {
            Ok(layout) => layout,
            Err(_) => panic!("buffer capacity overflows the address space"),
        }
    }

    /// Capacity in bytes.
    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.cap
    }

    /// True when the allocation address may be published to foreign code.
    #[inline]
    pub(crate) fn is_pinned(&self) -> bool {
        self.pinned
    }

    /// Base pointer of the allocation. Stable until drop or `shrink_to`.
    #[inline]
    pub(crate) fn as_ptr(&self) -> *const u8 {
        self.ptr.as_ptr()
    }

    /// Shared view of the whole capacity.
    #[inline]
    pub(crate) fn bytes(&self) -> &[u8] {
        // SAFETY: `[0, cap)` is allocated and initialized (zeroed on alloc,
        // only ever overwritten with initialized bytes afterwards).
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), self.cap) }
    }

    /// Mutable view of the whole capacity.
    #[inline]
    pub(crate) fn bytes_mut(&mut self) -> &mut [u8] {
        // SAFETY: as in `bytes`, plus `&mut self` guarantees exclusivity.
        unsafe { std::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.cap) }
    }

    /// Copies `len` bytes from `src` to `dst` within this allocation.
    ///
    /// The ranges may overlap; semantics are those of a memmove.
    ///
    /// # Panics (debug builds)
    /// Panics if either range leaves `[0, cap)`.
    #[inline]
    pub(crate) fn copy_within(&mut self, src: usize, dst: usize, len: usize) {
        debug_assert!(src.checked_add(len).is_some_and(|end| end <= self.cap));
        debug_assert!(dst.checked_add(len).is_some_and(|end| end <= self.cap));
        // SAFETY: both ranges are in bounds per the invariants above.
        unsafe {
            std::ptr::copy(
                self.ptr.as_ptr().add(src),
                self.ptr.as_ptr().add(dst),
                len,
            );
        }
    }

    /// Copies `src` into this allocation starting at `dst`.
    ///
    /// # Panics
    /// Panics if `dst + src.len()` exceeds the capacity.
    #[inline]
    pub(crate) fn copy_from(&mut self, dst: usize, src: &[u8]) {
        self.bytes_mut()[dst..dst + src.len()].copy_from_slice(src);
    }

    /// Shrinks the allocation to exactly `new_cap` bytes, releasing the tail.
    ///
    /// Used once, when a buffer is frozen; the address of the retained prefix
    /// may change, which is fine because nothing has been published yet.
    ///
    /// # Panics (debug builds)
    /// Panics if `new_cap > cap`.
    pub(crate) fn shrink_to(&mut self, new_cap: usize) {
        debug_assert!(new_cap <= self.cap, "shrink_to may only shrink");
        if new_cap == self.cap {
            return;
        }
        let old_layout = Self::layout(self.cap, self.pinned);
        if new_cap == 0 {
            // SAFETY: cap > 0 here (new_cap != cap), so the allocation exists
            // and old_layout is the layout it was allocated with.
            unsafe { dealloc(self.ptr.as_ptr(), old_layout) };
            self.ptr = NonNull::dangling();
            self.cap = 0;
            return;
        }
        // SAFETY: the allocation exists with old_layout; new_cap is non-zero
        // and does not overflow isize (it is smaller than cap).
        let raw = unsafe { realloc(self.ptr.as_ptr(), old_layout, new_cap) };
        let Some(ptr) = NonNull::new(raw) else {
            handle_alloc_error(Self::layout(new_cap, self.pinned))
        };
        self.ptr = ptr;
        self.cap = new_cap;
    }
}

impl Drop for RawBuf {
    fn drop(&mut self) {
        if self.cap > 0 {
            // SAFETY: cap > 0 means we own an allocation made with this layout.
            unsafe { dealloc(self.ptr.as_ptr(), Self::layout(self.cap, self.pinned)) };
        }
    }
}
