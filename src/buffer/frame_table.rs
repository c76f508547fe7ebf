//! FrameTable - the fixed-size collection of frames plus the page lookup
//! index.
//!
//! Replaces the source's circular doubly-linked frame list (see spec §9):
//! frames are a flat, indexable `Vec<PageFrame>` allocated once at `init`,
//! and a side `HashMap<PageId, FrameId>` gives O(1) hit lookup instead of
//! the source's O(N) linear scan. Policy ordering state lives in the
//! replacer, not here — `FrameTable` only answers "which frame (if any)
//! holds page p" and "how many frames are occupied."

use std::collections::HashMap;

use crate::common::{FrameId, PageId};
use crate::storage::Page;

use super::frame::PageFrame;

/// Fixed-length sequence of frames plus a page-number → frame-index index.
pub struct FrameTable {
    frames: Vec<PageFrame>,
    index: HashMap<PageId, FrameId>,
    occupied_count: usize,
}

impl FrameTable {
    /// Allocate `n` empty frames. `n` must be at least 1 (checked by the
    /// caller, `BufferPool::init`).
    pub fn new(n: usize) -> Self {
        let frames = (0..n).map(|i| PageFrame::new(FrameId::new(i))).collect();
        Self {
            frames,
            index: HashMap::with_capacity(n),
            occupied_count: 0,
        }
    }

    /// Total number of frames (`N` in the spec).
    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Number of frames whose `page_number != NO_PAGE`.
    #[inline]
    pub fn occupied_count(&self) -> usize {
        self.occupied_count
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.occupied_count >= self.frames.len()
    }

    /// Look up the frame currently holding `page_number`, if any.
    #[inline]
    pub fn lookup(&self, page_number: PageId) -> Option<FrameId> {
        self.index.get(&page_number).copied()
    }

    #[inline]
    pub fn frame(&self, frame_index: FrameId) -> &PageFrame {
        &self.frames[frame_index.0]
    }

    #[inline]
    pub fn frame_mut(&mut self, frame_index: FrameId) -> &mut PageFrame {
        &mut self.frames[frame_index.0]
    }

    /// Find the first empty frame in creation order (frame 0, 1, 2, …),
    /// independent of replacement policy (spec §4.3's warm-up rule).
    pub fn first_empty_frame(&self) -> Option<FrameId> {
        self.frames.iter().find(|f| f.is_empty()).map(|f| f.frame_index())
    }

    /// Bind `frame_index` to `page_number`, replacing its bytes with
    /// `data`, and record the new index entry. Bumps `occupied_count` only
    /// if the frame was previously empty (invariant 3, §3).
    pub fn bind(&mut self, frame_index: FrameId, page_number: PageId, data: Page) {
        let was_empty = self.frames[frame_index.0].is_empty();
        self.frames[frame_index.0].bind(page_number, data);
        self.index.insert(page_number, frame_index);
        if was_empty {
            self.occupied_count += 1;
        }
    }

    /// Remove the index entry for whatever page `frame_index` currently
    /// holds (no-op if it's already empty). Does not touch
    /// `occupied_count`: per spec §9's open question, occupied_count is
    /// monotonic across an eviction-then-rebind cycle — a frame stays
    /// "occupied" between `unindex` and the `bind` that follows it, because
    /// a new page replaces the old one rather than leaving a hole. Only
    /// `clear_frame` (the read-failure path, where no replacement page
    /// arrives) actually empties the frame, and decrements accordingly.
    pub fn unindex(&mut self, frame_index: FrameId) {
        if let Some(page_number) = self.frames[frame_index.0].page_number() {
            self.index.remove(&page_number);
        }
    }

    /// Clear a frame to the empty state (used only when a miss's read
    /// fails mid-resolution, leaving the frame and index consistent per
    /// spec §4.5). Decrements `occupied_count` if the frame held a page,
    /// preserving invariant 3 (§3): unlike `unindex`, no replacement page
    /// follows this call, so the frame genuinely becomes empty.
    pub fn clear_frame(&mut self, frame_index: FrameId) {
        let was_occupied = !self.frames[frame_index.0].is_empty();
        self.frames[frame_index.0].clear();
        if was_occupied {
            self.occupied_count -= 1;
        }
    }

    /// Iterate all frames in fixed creation order, for the statistics view
    /// (spec §4.2).
    pub fn iter(&self) -> impl Iterator<Item = &PageFrame> {
        self.frames.iter()
    }
}
