//! FIFO (First-In-First-Out) page replacement policy.
//!
//! Pages are evicted in the order they were first brought into the pool.
//! Re-accessing a frame does NOT move it to the back of the queue — that's
//! the defining difference from [`super::LruReplacer`].

use std::collections::VecDeque;

use crate::common::FrameId;

use super::super::frame_table::FrameTable;
use super::ReplacementPolicy;

/// FIFO replacement policy.
///
/// Pin state lives on `PageFrame` itself, not here — `select_victim` asks
/// the frame table directly rather than tracking a separate evictable set
/// the caller has to keep in sync.
pub struct FifoReplacer {
    /// Frame IDs in insertion order (front = oldest).
    queue: VecDeque<FrameId>,
}

impl FifoReplacer {
    pub fn new() -> Self {
        Self { queue: VecDeque::new() }
    }
}

impl Default for FifoReplacer {
    fn default() -> Self {
        Self::new()
    }
}

impl ReplacementPolicy for FifoReplacer {
    fn select_victim(&mut self, frames: &mut FrameTable) -> Option<FrameId> {
        let position = self
            .queue
            .iter()
            .position(|&fid| !frames.frame(fid).is_pinned())?;
        self.queue.remove(position)
    }

    fn on_access(&mut self, _frame_index: FrameId, _frames: &mut FrameTable) {
        // FIFO ignores re-access: insertion order is the whole story.
    }

    fn on_insert(&mut self, frame_index: FrameId, _frames: &mut FrameTable) {
        self.queue.push_back(frame_index);
    }

    fn on_evict(&mut self, _frame_index: FrameId, _frames: &mut FrameTable) {
        // select_victim already removed the entry.
    }
}
