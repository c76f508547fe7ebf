//! Error types for the buffer pool manager.
//!
//! One enum covers every result code named in the external interface
//! contract; each variant is returned, never panicked on, from a public
//! operation.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors raised by the buffer pool manager.
#[derive(Debug, Error)]
pub enum Error {
    /// The backing page file could not be opened at `init`.
    #[error("page file not found or could not be opened: {0}")]
    FileNotFound(std::io::Error),

    /// A page write failed during flush or eviction write-back.
    #[error("write failed for page {0}: {1}")]
    WriteFailed(u32, std::io::Error),

    /// A page read failed because the block does not exist on disk.
    #[error("read failed for page {0}: page does not exist")]
    ReadFailed(u32),

    /// `markDirty` / `unpin` / `forcePage` referenced a page not currently
    /// resident in the pool.
    #[error("page {0} is not in the buffer pool")]
    PageNotInPool(u32),

    /// A miss could not be resolved because every frame is pinned.
    #[error("no free frame available: all frames are pinned")]
    NoFreeFrame,

    /// `shutdown` was called while at least one frame is still pinned.
    #[error("buffer pool is still in use: a frame is pinned")]
    PoolInUse,

    /// An operation was attempted on a pool that has not been initialized,
    /// or has already been shut down.
    #[error("buffer pool is not initialized")]
    NotInitialized,

    /// `unpin` was called on a frame whose pin count is already zero.
    #[error("unpin underflow on page {0}: pin count is already zero")]
    UnpinUnderflow(u32),

    /// The backing store could not grow to the requested capacity.
    ///
    /// Not one of spec.md §6's ten named result codes: `ensureCapacity` is a
    /// consumed storage-manager operation with no distinct produced code of
    /// its own there. Added so a capacity-extension I/O failure is still
    /// reported precisely instead of being folded into `WriteFailed`.
    #[error("failed to extend page file to {0} pages: {1}")]
    CapacityExtensionFailed(u32, std::io::Error),

    /// Reserved for spec.md §6's `memory-allocation-failed` code. Never
    /// constructed by this crate today — `PageStore` and `FrameTable`
    /// allocate a fixed, bounded amount of memory up front at `init` and do
    /// not grow afterward — but kept so every named result code has a
    /// variant.
    #[error("memory allocation failed")]
    MemoryAllocationFailed,
}
