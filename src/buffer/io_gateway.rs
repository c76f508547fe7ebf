//! IOGateway - adapter over the storage manager that counts I/O.
//!
//! Wraps a [`PageStore`] and counts successful reads and writes. Capacity
//! extension is not counted: it is plumbing for a read or write, not a
//! user-visible cache event (spec §4.4).

use tracing::debug;

use crate::error::Result;
use crate::storage::{Page, PageStore};

/// Thin adapter between [`super::buffer_pool::BufferPool`] and the backing
/// [`PageStore`]. Holds the counters the statistics view reports as
/// `numReadIO` / `numWriteIO`.
pub struct IoGateway {
    store: PageStore,
    num_read_io: u64,
    num_write_io: u64,
}

impl IoGateway {
    pub fn new(store: PageStore) -> Self {
        Self {
            store,
            num_read_io: 0,
            num_write_io: 0,
        }
    }

    #[inline]
    pub fn num_read_io(&self) -> u64 {
        self.num_read_io
    }

    #[inline]
    pub fn num_write_io(&self) -> u64 {
        self.num_write_io
    }

    /// Extend the backing file so it has at least `min_page_count` pages.
    /// Never counted as a read or write.
    pub fn ensure_capacity(&mut self, min_page_count: u32) -> Result<()> {
        self.store.ensure_capacity(min_page_count)
    }

    /// Read a page from disk, counting it on success only.
    pub fn read(&mut self, page_number: u32) -> Result<Page> {
        let page = self.store.read_page(page_number)?;
        self.num_read_io += 1;
        debug!(page_number, total = self.num_read_io, "page read from disk");
        Ok(page)
    }

    /// Write a page to disk, counting it on success only.
    pub fn write(&mut self, page_number: u32, page: &Page) -> Result<()> {
        self.store.write_page(page_number, page)?;
        self.num_write_io += 1;
        debug!(page_number, total = self.num_write_io, "page written to disk");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn gateway() -> (IoGateway, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.db");
        let store = PageStore::create(&path).unwrap();
        (IoGateway::new(store), dir)
    }

    #[test]
    fn test_ensure_capacity_not_counted() {
        let (mut gw, _dir) = gateway();
        gw.ensure_capacity(4).unwrap();
        assert_eq!(gw.num_read_io(), 0);
        assert_eq!(gw.num_write_io(), 0);
    }

    #[test]
    fn test_read_counts_on_success() {
        let (mut gw, _dir) = gateway();
        gw.ensure_capacity(1).unwrap();
        gw.read(0).unwrap();
        assert_eq!(gw.num_read_io(), 1);
    }

    #[test]
    fn test_read_does_not_count_on_failure() {
        let (mut gw, _dir) = gateway();
        assert!(gw.read(0).is_err());
        assert_eq!(gw.num_read_io(), 0);
    }

    #[test]
    fn test_write_counts_on_success() {
        let (mut gw, _dir) = gateway();
        gw.ensure_capacity(1).unwrap();
        gw.write(0, &Page::new()).unwrap();
        assert_eq!(gw.num_write_io(), 1);
    }

    #[test]
    fn test_write_does_not_count_on_failure() {
        let (mut gw, _dir) = gateway();
        assert!(gw.write(0, &Page::new()).is_err());
        assert_eq!(gw.num_write_io(), 0);
    }
}
