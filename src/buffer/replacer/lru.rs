//! LRU (Least Recently Used) page replacement policy.
//!
//! Evicts the unpinned frame that was least recently accessed. Unlike
//! [`super::FifoReplacer`], every access — not just the first — moves a
//! frame to the most-recently-used end.

use std::collections::VecDeque;

use crate::common::FrameId;

use super::super::frame_table::FrameTable;
use super::ReplacementPolicy;

/// LRU replacement policy.
///
/// `order` holds every live frame from least-recent (front) to most-recent
/// (back). A linked hash map would make `touch` O(1); a plain `VecDeque`
/// with linear search keeps this dependency-free and is fast enough at the
/// pool sizes this crate targets.
pub struct LruReplacer {
    order: VecDeque<FrameId>,
}

impl LruReplacer {
    pub fn new() -> Self {
        Self { order: VecDeque::new() }
    }

    fn touch(&mut self, frame_index: FrameId) {
        if let Some(pos) = self.order.iter().position(|&fid| fid == frame_index) {
            self.order.remove(pos);
        }
        self.order.push_back(frame_index);
    }
}

impl Default for LruReplacer {
    fn default() -> Self {
        Self::new()
    }
}

impl ReplacementPolicy for LruReplacer {
    fn select_victim(&mut self, frames: &mut FrameTable) -> Option<FrameId> {
        let position = self
            .order
            .iter()
            .position(|&fid| !frames.frame(fid).is_pinned())?;
        self.order.remove(position)
    }

    fn on_access(&mut self, frame_index: FrameId, _frames: &mut FrameTable) {
        self.touch(frame_index);
    }

    fn on_insert(&mut self, frame_index: FrameId, _frames: &mut FrameTable) {
        self.touch(frame_index);
    }

    fn on_evict(&mut self, _frame_index: FrameId, _frames: &mut FrameTable) {
        // select_victim already removed the entry.
    }
}
