//! Integration tests for the buffer pool manager.
//!
//! These exercise the public façade end to end against a real page file on
//! disk, rather than the frame/policy unit tests inside `src/`.

use bufferpool::buffer::replacer::ReplacementStrategy;
use bufferpool::{BufferPool, PageId};
use tempfile::tempdir;

const FRAMES: usize = 10;

fn bpm(pool_size: usize, strategy: ReplacementStrategy) -> (BufferPool, tempfile::TempDir) {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.db");
    let mut pool = BufferPool::new();
    pool.init(&path, pool_size, strategy).unwrap();
    (pool, dir)
}

/// Write a string into page data with a null terminator.
fn copy_string(data: &mut [u8], s: &str) {
    let bytes = s.as_bytes();
    data[..bytes.len()].copy_from_slice(bytes);
    data[bytes.len()] = 0;
}

/// Read a null-terminated string back out of page data.
fn read_string(data: &[u8]) -> String {
    let end = data.iter().position(|&b| b == 0).unwrap_or(data.len());
    String::from_utf8_lossy(&data[..end]).to_string()
}

#[test]
fn test_very_basic_pin_write_unpin_cycle() {
    let (mut pool, _dir) = bpm(FRAMES, ReplacementStrategy::Fifo);
    let str_data = "Hello, world!";

    let handle = pool.pin(PageId::new(0)).unwrap();
    copy_string(pool.data_mut(handle).unwrap(), str_data);
    pool.mark_dirty(handle).unwrap();
    pool.unpin(handle).unwrap();

    let handle = pool.pin(PageId::new(0)).unwrap();
    assert_eq!(read_string(pool.data(handle).unwrap()), str_data);
    pool.unpin(handle).unwrap();
}

#[test]
fn test_data_persistence_across_evictions() {
    let (mut pool, _dir) = bpm(2, ReplacementStrategy::Fifo);

    for i in 0u32..5 {
        let handle = pool.pin(PageId::new(i)).unwrap();
        let data = pool.data_mut(handle).unwrap();
        data[0] = i as u8;
        data[1] = (i as u8).wrapping_mul(3);
        pool.mark_dirty(handle).unwrap();
        pool.unpin(handle).unwrap();
    }

    for i in 0u32..5 {
        let handle = pool.pin(PageId::new(i)).unwrap();
        let data = pool.data(handle).unwrap();
        assert_eq!(data[0], i as u8);
        assert_eq!(data[1], (i as u8).wrapping_mul(3));
        pool.unpin(handle).unwrap();
    }
}

#[test]
fn test_flush_and_reopen_across_pool_instances() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.db");
    let data = b"persistent!";

    {
        let mut pool = BufferPool::new();
        pool.init(&path, 10, ReplacementStrategy::Lru).unwrap();

        let handle = pool.pin(PageId::new(3)).unwrap();
        pool.data_mut(handle).unwrap()[..data.len()].copy_from_slice(data);
        pool.mark_dirty(handle).unwrap();
        pool.unpin(handle).unwrap();
        pool.shutdown().unwrap();
    }

    {
        let mut pool = BufferPool::new();
        pool.init(&path, 10, ReplacementStrategy::Lru).unwrap();

        let handle = pool.pin(PageId::new(3)).unwrap();
        assert_eq!(&pool.data(handle).unwrap()[..data.len()], data);
        pool.unpin(handle).unwrap();
    }
}

#[test]
fn test_stats_track_io_under_load() {
    let (mut pool, _dir) = bpm(4, ReplacementStrategy::Fifo);

    let mut handle = pool.pin(PageId::new(0)).unwrap();
    for _ in 0..4 {
        pool.unpin(handle).unwrap();
        handle = pool.pin(PageId::new(0)).unwrap();
    }
    assert_eq!(pool.stats().unwrap().num_read_io, 1);
    pool.unpin(handle).unwrap();

    let h1 = pool.pin(PageId::new(1)).unwrap();
    pool.unpin(h1).unwrap();
    pool.pin(PageId::new(2)).unwrap();

    let stats = pool.stats().unwrap();
    assert_eq!(stats.num_read_io, 3);
}

#[test]
fn test_every_replacement_strategy_satisfies_the_same_contract() {
    for strategy in [
        ReplacementStrategy::Fifo,
        ReplacementStrategy::Lru,
        ReplacementStrategy::Clock,
    ] {
        let (mut pool, _dir) = bpm(2, strategy);

        let h1 = pool.pin(PageId::new(1)).unwrap();
        pool.unpin(h1).unwrap();
        let h2 = pool.pin(PageId::new(2)).unwrap();
        pool.unpin(h2).unwrap();
        pool.pin(PageId::new(3)).unwrap();

        let stats = pool.stats().unwrap();
        assert_eq!(stats.num_read_io, 3);
        assert_eq!(stats.frame_contents.len(), 2);
    }
}
