//! CLOCK (second-chance) page replacement policy.
//!
//! A single hand sweeps the fixed-size frame array. At each unpinned frame
//! the hand visits: if the reference bit is set, it is cleared and the hand
//! advances (the frame got a "second chance"); if clear, that frame is the
//! victim. Pinned frames are skipped without affecting their reference bit.

use crate::common::FrameId;

use super::super::frame_table::FrameTable;
use super::ReplacementPolicy;

/// CLOCK replacement policy.
///
/// `pool_size` is fixed at construction — the hand indexes frames
/// `0..pool_size` and the pool never resizes after `init` (spec §5).
pub struct ClockReplacer {
    pool_size: usize,
    hand: usize,
}

impl ClockReplacer {
    pub fn new(pool_size: usize) -> Self {
        Self { pool_size, hand: 0 }
    }

    fn advance(&mut self) -> usize {
        let idx = self.hand;
        self.hand = (self.hand + 1) % self.pool_size.max(1);
        idx
    }
}

impl ReplacementPolicy for ClockReplacer {
    fn select_victim(&mut self, frames: &mut FrameTable) -> Option<FrameId> {
        if self.pool_size == 0 {
            return None;
        }

        // A full sweep clears every set reference bit it meets without
        // selecting anything; a second sweep is then guaranteed to find an
        // unpinned frame with a clear bit, if one exists at all. Bounding
        // the loop at 2 * pool_size steps rules out spinning forever when
        // every frame is pinned.
        for _ in 0..(2 * self.pool_size) {
            let idx = self.advance();
            let frame_id = FrameId::new(idx);
            let frame = frames.frame_mut(frame_id);

            if frame.is_pinned() {
                continue;
            }
            if frame.reference_bit() {
                frame.set_reference_bit(false);
                continue;
            }
            return Some(frame_id);
        }

        None
    }

    fn on_access(&mut self, frame_index: FrameId, frames: &mut FrameTable) {
        frames.frame_mut(frame_index).set_reference_bit(true);
    }

    fn on_insert(&mut self, frame_index: FrameId, frames: &mut FrameTable) {
        frames.frame_mut(frame_index).set_reference_bit(true);
    }

    fn on_evict(&mut self, _frame_index: FrameId, _frames: &mut FrameTable) {
        // The hand already moved past the victim during select_victim.
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::PageId;
    use crate::storage::Page;

    fn bind(frames: &mut FrameTable, idx: usize, page: u32) {
        frames.bind(FrameId::new(idx), PageId::new(page), Page::new());
        frames.frame_mut(FrameId::new(idx)).unpin();
    }

    #[test]
    fn test_second_chance_skips_referenced_frame() {
        let mut frames = FrameTable::new(2);
        bind(&mut frames, 0, 100);
        bind(&mut frames, 1, 101);
        frames.frame_mut(FrameId::new(0)).set_reference_bit(true);
        frames.frame_mut(FrameId::new(1)).set_reference_bit(false);

        let mut replacer = ClockReplacer::new(2);
        // First pass over frame 0 clears its bit and gives it a second
        // chance; frame 1 has no reference bit set and is chosen.
        assert_eq!(replacer.select_victim(&mut frames), Some(FrameId::new(1)));
        assert!(!frames.frame(FrameId::new(0)).reference_bit());
    }

    #[test]
    fn test_skips_pinned_frames() {
        let mut frames = FrameTable::new(2);
        frames.bind(FrameId::new(0), PageId::new(100), Page::new()); // pinned
        bind(&mut frames, 1, 101);
        frames.frame_mut(FrameId::new(1)).set_reference_bit(false);

        let mut replacer = ClockReplacer::new(2);
        assert_eq!(replacer.select_victim(&mut frames), Some(FrameId::new(1)));
    }

    #[test]
    fn test_none_when_all_pinned() {
        let mut frames = FrameTable::new(2);
        frames.bind(FrameId::new(0), PageId::new(100), Page::new());
        frames.bind(FrameId::new(1), PageId::new(101), Page::new());

        let mut replacer = ClockReplacer::new(2);
        assert_eq!(replacer.select_victim(&mut frames), None);
    }

    #[test]
    fn test_hand_wraps_across_calls() {
        let mut frames = FrameTable::new(3);
        bind(&mut frames, 0, 100);
        bind(&mut frames, 1, 101);
        bind(&mut frames, 2, 102);
        for i in 0..3 {
            frames.frame_mut(FrameId::new(i)).set_reference_bit(false);
        }

        let mut replacer = ClockReplacer::new(3);
        assert_eq!(replacer.select_victim(&mut frames), Some(FrameId::new(0)));
        assert_eq!(replacer.select_victim(&mut frames), Some(FrameId::new(1)));
        assert_eq!(replacer.select_victim(&mut frames), Some(FrameId::new(2)));
    }

    #[test]
    fn test_full_sweep_clears_all_then_selects() {
        let mut frames = FrameTable::new(3);
        bind(&mut frames, 0, 100);
        bind(&mut frames, 1, 101);
        bind(&mut frames, 2, 102);
        for i in 0..3 {
            frames.frame_mut(FrameId::new(i)).set_reference_bit(true);
        }

        let mut replacer = ClockReplacer::new(3);
        // Every frame starts referenced; the hand must clear all three
        // before it can select one on the second pass.
        let victim = replacer.select_victim(&mut frames);
        assert!(victim.is_some());
    }
}
