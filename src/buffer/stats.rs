//! Statistics view - pure snapshots of frame state, indexed by frame_index.
//!
//! Replaces the source's atomic hit/miss/eviction-rate counters (a model
//! this crate doesn't track) with the contract spec §4.2 actually asks
//! for: per-frame arrays in fixed creation order, plus the two I/O
//! counters owned by [`super::io_gateway::IoGateway`].

use std::fmt;

use crate::common::config::NO_PAGE;

use super::frame_table::FrameTable;

/// A point-in-time snapshot of every frame's identity, dirty bit, and pin
/// count, plus the pool's cumulative I/O counters.
///
/// Frame order is fixed creation order (frame 0, 1, 2, …), never policy
/// order, so the three per-frame vectors always line up by index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub frame_contents: Vec<i64>,
    pub dirty_flags: Vec<bool>,
    pub fix_counts: Vec<u32>,
    pub num_read_io: u64,
    pub num_write_io: u64,
}

impl StatsSnapshot {
    /// Build a snapshot from the current frame table and I/O counters.
    pub fn capture(frames: &FrameTable, num_read_io: u64, num_write_io: u64) -> Self {
        let mut frame_contents = Vec::with_capacity(frames.len());
        let mut dirty_flags = Vec::with_capacity(frames.len());
        let mut fix_counts = Vec::with_capacity(frames.len());

        for frame in frames.iter() {
            frame_contents.push(frame.page_number().map_or(NO_PAGE, |p| p.0 as i64));
            dirty_flags.push(!frame.is_empty() && frame.is_dirty());
            fix_counts.push(frame.pin_count());
        }

        Self {
            frame_contents,
            dirty_flags,
            fix_counts,
            num_read_io,
            num_write_io,
        }
    }
}

impl fmt::Display for StatsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "StatsSnapshot {{ frames: {}, read_io: {}, write_io: {} }}",
            self.frame_contents.len(),
            self.num_read_io,
            self.num_write_io
        )
    }
}
