//! BufferPool - the public façade orchestrating frames, policy, and I/O.
//!
//! Single-threaded and synchronous end to end (spec §5): every method takes
//! `&mut self` and runs to completion before returning. There is no
//! background flusher and no locking — a caller that needs the pool from
//! multiple threads must serialize access itself, the same way the source's
//! single `BM_BufferPool_Mgmt` record was meant to be used by one
//! coordinator at a time.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::common::{FrameId, PageId};
use crate::error::{Error, Result};
use crate::storage::PageStore;

use super::frame_table::FrameTable;
use super::io_gateway::IoGateway;
use super::page_handle::PageHandle;
use super::replacer::{ReplacementPolicy, ReplacementStrategy};
use super::stats::StatsSnapshot;

/// The buffer pool manager.
///
/// Constructed empty via [`BufferPool::new`]; call [`BufferPool::init`]
/// before any other operation. Calling anything else first, or after
/// [`BufferPool::shutdown`], fails with [`Error::NotInitialized`].
pub struct BufferPool {
    inner: Option<Inner>,
}

struct Inner {
    frames: FrameTable,
    gateway: IoGateway,
    policy: Box<dyn ReplacementPolicy>,
}

impl BufferPool {
    /// Construct an uninitialized pool. Call `init` before using it.
    pub fn new() -> Self {
        Self { inner: None }
    }

    fn inner(&self) -> Result<&Inner> {
        self.inner.as_ref().ok_or(Error::NotInitialized)
    }

    fn inner_mut(&mut self) -> Result<&mut Inner> {
        self.inner.as_mut().ok_or(Error::NotInitialized)
    }

    /// Allocate `pool_size` empty frames backed by `page_file_name`, using
    /// `strategy` for eviction.
    ///
    /// # Errors
    /// `Error::FileNotFound` if the page file cannot be opened. Panics if
    /// `pool_size` is zero — a zero-frame pool can never satisfy a pin and
    /// is a caller bug, not a recoverable condition.
    pub fn init<P: AsRef<Path>>(
        &mut self,
        page_file_name: P,
        pool_size: usize,
        strategy: ReplacementStrategy,
    ) -> Result<()> {
        assert!(pool_size >= 1, "pool_size must be at least 1");

        let store = PageStore::open_or_create(page_file_name)?;
        info!(pool_size, strategy = ?strategy, "initializing buffer pool");

        self.inner = Some(Inner {
            frames: FrameTable::new(pool_size),
            gateway: IoGateway::new(store),
            policy: strategy.build(pool_size),
        });
        Ok(())
    }

    /// Flush all dirty unpinned frames and release pool state.
    ///
    /// # Errors
    /// `Error::PoolInUse` if any frame is still pinned.
    pub fn shutdown(&mut self) -> Result<()> {
        {
            let inner = self.inner_mut()?;
            if inner.frames.iter().any(|f| f.is_pinned()) {
                return Err(Error::PoolInUse);
            }
        }
        self.force_flush_pool()?;
        info!("shutting down buffer pool");
        self.inner = None;
        Ok(())
    }

    /// Pin `page_number`, loading it from disk on a miss.
    ///
    /// # Errors
    /// `Error::NoFreeFrame`, `Error::WriteFailed` (dirty victim write-back),
    /// `Error::ReadFailed` (loading the requested page).
    pub fn pin(&mut self, page_number: PageId) -> Result<PageHandle> {
        let inner = self.inner_mut()?;

        if let Some(frame_index) = inner.frames.lookup(page_number) {
            inner.frames.frame_mut(frame_index).pin();
            inner.policy.on_access(frame_index, &mut inner.frames);
            debug!(%page_number, "pin hit");
            return Ok(PageHandle::new(page_number, frame_index));
        }

        // spec §4.1 step 1: occupied_count < N picks an empty frame; a full
        // pool asks the policy for a victim instead.
        let frame_index = if inner.frames.is_full() {
            inner
                .policy
                .select_victim(&mut inner.frames)
                .ok_or(Error::NoFreeFrame)?
        } else {
            inner
                .frames
                .first_empty_frame()
                .expect("occupied_count < len() implies an empty frame exists")
        };

        debug!(occupied = inner.frames.occupied_count(), pool_size = inner.frames.len(), "pin miss");
        Self::resolve_miss(inner, frame_index, page_number)?;
        debug!(%page_number, frame = frame_index.0, "pin miss resolved");
        Ok(PageHandle::new(page_number, frame_index))
    }

    /// Load `page_number` into `frame_index`, flushing a dirty occupant
    /// first (spec §4.1 miss path, steps 2-6).
    fn resolve_miss(inner: &mut Inner, frame_index: FrameId, page_number: PageId) -> Result<()> {
        let was_dirty = inner.frames.frame(frame_index).is_dirty();
        if was_dirty {
            let victim_page = inner
                .frames
                .frame(frame_index)
                .page_number()
                .expect("dirty frame must hold a page");
            inner.gateway.ensure_capacity(victim_page.0 + 1)?;
            let bytes = inner.frames.frame(frame_index).data().to_vec();
            let mut page = crate::storage::Page::new();
            page.as_mut_slice().copy_from_slice(&bytes);
            inner.gateway.write(victim_page.0, &page)?;
            inner.frames.frame_mut(frame_index).clear_dirty();
        }

        inner.frames.unindex(frame_index);

        inner.gateway.ensure_capacity(page_number.0 + 1)?;
        let loaded = match inner.gateway.read(page_number.0) {
            Ok(page) => page,
            Err(e) => {
                inner.frames.clear_frame(frame_index);
                warn!(%page_number, "pin miss read failed, frame left empty");
                return Err(e);
            }
        };

        inner.frames.bind(frame_index, page_number, loaded);
        inner.policy.on_insert(frame_index, &mut inner.frames);
        Ok(())
    }

    /// Release a pin taken by [`BufferPool::pin`].
    ///
    /// # Errors
    /// `Error::PageNotInPool` if the page isn't resident; `Error::UnpinUnderflow`
    /// if the pin count is already zero.
    pub fn unpin(&mut self, handle: PageHandle) -> Result<()> {
        let inner = self.inner_mut()?;
        let frame_index = Self::locate(inner, handle.page_number())?;
        let frame = inner.frames.frame_mut(frame_index);
        if !frame.is_pinned() {
            return Err(Error::UnpinUnderflow(handle.page_number().0));
        }
        frame.unpin();
        Ok(())
    }

    /// Mark the page referenced by `handle` dirty.
    ///
    /// # Errors
    /// `Error::PageNotInPool` if the page isn't resident.
    pub fn mark_dirty(&mut self, handle: PageHandle) -> Result<()> {
        let inner = self.inner_mut()?;
        let frame_index = Self::locate(inner, handle.page_number())?;
        inner.frames.frame_mut(frame_index).mark_dirty();
        Ok(())
    }

    /// Read-only access to a pinned page's bytes.
    ///
    /// # Errors
    /// `Error::PageNotInPool` if the page isn't resident.
    pub fn data(&self, handle: PageHandle) -> Result<&[u8]> {
        let inner = self.inner()?;
        let frame_index = Self::locate(inner, handle.page_number())?;
        Ok(inner.frames.frame(frame_index).data())
    }

    /// Mutable access to a pinned page's bytes. Does not mark it dirty —
    /// callers must still call `mark_dirty`.
    ///
    /// # Errors
    /// `Error::PageNotInPool` if the page isn't resident.
    pub fn data_mut(&mut self, handle: PageHandle) -> Result<&mut [u8]> {
        let inner = self.inner_mut()?;
        let frame_index = Self::locate(inner, handle.page_number())?;
        Ok(inner.frames.frame_mut(frame_index).data_mut())
    }

    /// Write back the page referenced by `handle` if dirty. No-op if clean.
    ///
    /// # Errors
    /// `Error::PageNotInPool`, `Error::WriteFailed`.
    pub fn force_page(&mut self, handle: PageHandle) -> Result<()> {
        let inner = self.inner_mut()?;
        let frame_index = Self::locate(inner, handle.page_number())?;
        Self::flush_frame(inner, frame_index)
    }

    /// Write back every dirty, unpinned frame. Pinned dirty frames are
    /// skipped, not an error.
    ///
    /// # Errors
    /// `Error::WriteFailed` — stops at the first failure; frames already
    /// flushed remain clean.
    pub fn force_flush_pool(&mut self) -> Result<()> {
        let inner = self.inner_mut()?;
        let dirty_unpinned: Vec<FrameId> = inner
            .frames
            .iter()
            .filter(|f| !f.is_empty() && !f.is_pinned() && f.is_dirty())
            .map(|f| f.frame_index())
            .collect();

        for frame_index in dirty_unpinned {
            Self::flush_frame(inner, frame_index)?;
        }
        Ok(())
    }

    fn flush_frame(inner: &mut Inner, frame_index: FrameId) -> Result<()> {
        let frame = inner.frames.frame(frame_index);
        if !frame.is_dirty() {
            return Ok(());
        }
        let page_number = frame.page_number().expect("dirty frame must hold a page");
        let bytes = frame.data().to_vec();
        let mut page = crate::storage::Page::new();
        page.as_mut_slice().copy_from_slice(&bytes);

        inner.gateway.write(page_number.0, &page)?;
        inner.frames.frame_mut(frame_index).clear_dirty();
        Ok(())
    }

    fn locate(inner: &Inner, page_number: PageId) -> Result<FrameId> {
        inner.frames.lookup(page_number).ok_or(Error::PageNotInPool(page_number.0))
    }

    /// Snapshot of per-frame state plus cumulative I/O counters (spec §4.2).
    ///
    /// # Errors
    /// `Error::NotInitialized` if the pool hasn't been `init`'d.
    pub fn stats(&self) -> Result<StatsSnapshot> {
        let inner = self.inner()?;
        Ok(StatsSnapshot::capture(
            &inner.frames,
            inner.gateway.num_read_io(),
            inner.gateway.num_write_io(),
        ))
    }

    /// Total number of frames (`N`).
    pub fn pool_size(&self) -> Result<usize> {
        Ok(self.inner()?.frames.len())
    }
}

impl Default for BufferPool {
    fn default() -> Self {
        Self::new()
    }
}
