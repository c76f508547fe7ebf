//! A single-threaded buffer pool manager with swappable eviction policies.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        BufferPool                           │
//! │  ┌─────────────────────────────────────────────────────┐    │
//! │  │  Eviction policy: FIFO | LRU | CLOCK                 │    │
//! │  │        (chosen once, at `init`)                      │    │
//! │  └─────────────────────────────────────────────────────┘    │
//! │      FrameTable + IoGateway + StatsSnapshot                 │
//! └───────────────────────────┬───────────────────────────────--┘
//!                              ↓
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Storage Layer (storage/)                 │
//! │                 PageStore + Page (4KB, opaque bytes)         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - shared primitives (`PageId`, `FrameId`, `Error`, config)
//! - [`buffer`] - buffer pool management and eviction policies
//! - [`storage`] - page file I/O and the page byte buffer
//!
//! # Quick Start
//! ```no_run
//! use bufferpool::{BufferPool, PageId};
//! use bufferpool::buffer::replacer::ReplacementStrategy;
//!
//! let mut pool = BufferPool::new();
//! pool.init("my_database.db", 64, ReplacementStrategy::Clock).unwrap();
//!
//! let handle = pool.pin(PageId::new(0)).unwrap();
//! pool.data_mut(handle).unwrap()[0] = 0xFF;
//! pool.mark_dirty(handle).unwrap();
//! pool.unpin(handle).unwrap();
//!
//! pool.shutdown().unwrap();
//! ```

pub mod buffer;
pub mod common;
mod error;
pub mod storage;

pub use common::config::PAGE_SIZE;
pub use common::{Error, FrameId, PageId, Result};

pub use buffer::{BufferPool, PageFrame, PageHandle, StatsSnapshot};
pub use storage::Page;
