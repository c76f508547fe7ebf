//! PageFrame - a slot in the buffer pool.
//!
//! A [`PageFrame`] holds one cached page plus the metadata needed for
//! buffer management: which page is loaded, the pin count, the dirty bit,
//! and the CLOCK reference bit.

use crate::common::{FrameId, PageId};
use crate::storage::Page;

/// A frame in the buffer pool.
///
/// Frames are the "slots" in the buffer pool; the pool allocates a fixed
/// number of them at `init` and never resizes. Unlike the multi-threaded
/// BusTub-style pool this crate's frames are descended from, `PageFrame`
/// owns its fields outright rather than behind locks or atomics — the
/// buffer pool is specified single-threaded and synchronous (spec §5), so
/// plain ownership plus `&mut self` on the pool is the whole
/// synchronization story.
pub struct PageFrame {
    /// Position in the pool's frame vector. Assigned at creation, never
    /// changes.
    frame_index: FrameId,

    /// Which page is currently loaded, or `None` if the frame is empty
    /// (the spec's `NO_PAGE` sentinel).
    page_number: Option<PageId>,

    /// Non-negative pin count. A frame is pinned iff `pin_count > 0`.
    pin_count: u32,

    /// Set when the client calls `markDirty`; cleared after a successful
    /// write-back.
    dirty: bool,

    /// Used by CLOCK only. Set on every access (pin hit or miss-load).
    reference_bit: bool,

    /// The cached page bytes.
    data: Page,
}

impl PageFrame {
    /// Create a new empty frame at the given index.
    pub fn new(frame_index: FrameId) -> Self {
        Self {
            frame_index,
            page_number: None,
            pin_count: 0,
            dirty: false,
            reference_bit: false,
            data: Page::new(),
        }
    }

    #[inline]
    pub fn frame_index(&self) -> FrameId {
        self.frame_index
    }

    #[inline]
    pub fn page_number(&self) -> Option<PageId> {
        self.page_number
    }

    #[inline]
    pub fn pin_count(&self) -> u32 {
        self.pin_count
    }

    #[inline]
    pub fn is_pinned(&self) -> bool {
        self.pin_count > 0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.page_number.is_none()
    }

    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    #[inline]
    pub fn reference_bit(&self) -> bool {
        self.reference_bit
    }

    #[inline]
    pub fn set_reference_bit(&mut self, value: bool) {
        self.reference_bit = value;
    }

    #[inline]
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    #[inline]
    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    #[inline]
    pub fn pin(&mut self) {
        self.pin_count += 1;
    }

    /// Decrement the pin count.
    ///
    /// # Panics
    /// Panics if the pin count is already zero. Callers (the buffer pool)
    /// must check `is_pinned()` first and return `unpin-underflow` to the
    /// client instead of reaching this.
    pub fn unpin(&mut self) {
        assert!(self.pin_count > 0, "pin count underflow");
        self.pin_count -= 1;
    }

    #[inline]
    pub fn data(&self) -> &[u8] {
        self.data.as_slice()
    }

    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        self.data.as_mut_slice()
    }

    /// Bind this frame to a freshly loaded page.
    ///
    /// Replaces the frame's bytes with `data`, sets `page_number`, resets
    /// `pin_count` to 1 and `dirty` to false, and sets the reference bit
    /// (step 5 of the miss path in spec §4.1).
    pub fn bind(&mut self, page_number: PageId, data: Page) {
        self.data = data;
        self.page_number = Some(page_number);
        self.pin_count = 1;
        self.dirty = false;
        self.reference_bit = true;
    }

    /// Reset the frame to the empty state. Used when a read fails mid-miss
    /// so the frame is left cleanly empty rather than half-bound.
    pub fn clear(&mut self) {
        self.page_number = None;
        self.pin_count = 0;
        self.dirty = false;
        self.reference_bit = false;
    }
}
