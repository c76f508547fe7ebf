//! Eviction policy implementations (replacers).
//!
//! Implements the three replacement strategies named in spec §1/§4.3:
//! - [`FifoReplacer`] - insertion-order eviction
//! - [`LruReplacer`] - least-recently-used eviction
//! - [`ClockReplacer`] - second-chance / CLOCK eviction
//!
//! All three share the [`ReplacementPolicy`] capability. Only unpinned
//! frames are ever returned by `select_victim`; each policy owns its own
//! ordering state (a queue, a recency list, or a hand cursor) rather than
//! the source's frame-embedded linked-list pointers (spec §9) — the frame
//! table stays a flat `Vec<PageFrame>` and policies are swappable at
//! `init` without touching frame layout.

mod clock;
mod fifo;
mod lru;

pub use clock::ClockReplacer;
pub use fifo::FifoReplacer;
pub use lru::LruReplacer;

use crate::common::FrameId;

use super::frame_table::FrameTable;

/// Shared capability implemented by every replacement policy.
///
/// `select_victim` must skip pinned frames and return `None` iff every
/// frame in the pool is currently pinned.
pub trait ReplacementPolicy {
    /// Select an evictable (unpinned) frame, or `None` if all are pinned.
    fn select_victim(&mut self, frames: &mut FrameTable) -> Option<FrameId>;

    /// Notify the policy that `frame_index` was accessed (a pin hit, or a
    /// re-pin after a miss-load — the miss path calls `on_insert`
    /// instead).
    fn on_access(&mut self, frame_index: FrameId, frames: &mut FrameTable);

    /// Notify the policy that `frame_index` was just bound to a page for
    /// the first time (or rebound after an eviction).
    fn on_insert(&mut self, frame_index: FrameId, frames: &mut FrameTable);

    /// Notify the policy that `frame_index` was just evicted.
    fn on_evict(&mut self, frame_index: FrameId, frames: &mut FrameTable);
}

/// The replacement strategy selected at `init` (spec §1, §4.1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplacementStrategy {
    Fifo,
    Lru,
    Clock,
}

impl ReplacementStrategy {
    /// Construct the replacer for this strategy. `pool_size` is needed
    /// up front only by CLOCK, which sweeps a fixed-size circular list.
    pub fn build(self, pool_size: usize) -> Box<dyn ReplacementPolicy> {
        match self {
            ReplacementStrategy::Fifo => Box::new(FifoReplacer::new()),
            ReplacementStrategy::Lru => Box::new(LruReplacer::new()),
            ReplacementStrategy::Clock => Box::new(ClockReplacer::new(pool_size)),
        }
    }
}
