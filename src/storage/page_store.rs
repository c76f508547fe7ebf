//! PageStore - a single-file implementation of the storage manager contract.
//!
//! `PageStore` is the concrete external collaborator the buffer pool's
//! `IOGateway` is written against: `openPageFile`/`readBlock`/`writeBlock`/
//! `ensureCapacity` from the storage manager contract, realized as direct
//! file operations on one database file with pages laid out sequentially.
//!
//! # File Layout
//! ```text
//! ┌─────────┬─────────┬─────────┬─────────┬─────────┐
//! │ Page 0  │ Page 1  │ Page 2  │  ...    │ Page N  │
//! │ (4KB)   │ (4KB)   │ (4KB)   │         │ (4KB)   │
//! └─────────┴─────────┴─────────┴─────────┴─────────┘
//! Offset:  0      4096     8192    ...    N×4096
//! ```
//! Page N is located at file offset `N × PAGE_SIZE`.
//!
//! # Thread Safety
//! `PageStore` is single-threaded, matching the buffer pool it serves (see
//! spec §5). The buffer pool is responsible for serializing all access.

use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

use crate::common::config::PAGE_SIZE;
use crate::error::Error;
use crate::storage::page::Page;

/// Manages disk I/O for a single page file.
pub struct PageStore {
    file: File,
    /// Number of pages currently allocated in the file.
    page_count: u32,
}

impl PageStore {
    /// Create a new, empty page file.
    ///
    /// # Errors
    /// Returns `Error::FileNotFound` if the file already exists or cannot
    /// be created.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create_new(true)
            .open(path)
            .map_err(Error::FileNotFound)?;

        Ok(Self { file, page_count: 0 })
    }

    /// Open an existing page file.
    ///
    /// # Errors
    /// Returns `Error::FileNotFound` if the file doesn't exist or cannot be
    /// opened.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(&path)
            .map_err(Error::FileNotFound)?;

        let file_size = file.metadata().map_err(Error::FileNotFound)?.len();
        let page_count = (file_size / PAGE_SIZE as u64) as u32;

        Ok(Self { file, page_count })
    }

    /// Open an existing page file, or create it if it doesn't exist.
    pub fn open_or_create<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        if path.as_ref().exists() {
            Self::open(path)
        } else {
            Self::create(path)
        }
    }

    /// Number of pages currently allocated in the file.
    #[inline]
    pub fn page_count(&self) -> u32 {
        self.page_count
    }

    /// Read a page from disk into a freshly allocated [`Page`].
    ///
    /// # Errors
    /// Returns `Error::ReadFailed` if `page_number` is beyond the end of
    /// the file.
    pub fn read_page(&mut self, page_number: u32) -> Result<Page, Error> {
        if page_number >= self.page_count {
            return Err(Error::ReadFailed(page_number));
        }

        let offset = (page_number as u64) * (PAGE_SIZE as u64);
        self.file
            .seek(SeekFrom::Start(offset))
            .map_err(|_| Error::ReadFailed(page_number))?;

        let mut page = Page::new();
        self.file
            .read_exact(page.as_mut_slice())
            .map_err(|_| Error::ReadFailed(page_number))?;

        Ok(page)
    }

    /// Write a page to disk.
    ///
    /// `ensure_capacity` must have been called with at least
    /// `page_number + 1` before this, or the write fails.
    ///
    /// # Errors
    /// Returns `Error::WriteFailed` if `page_number` is beyond the end of
    /// the file, or the underlying write fails.
    pub fn write_page(&mut self, page_number: u32, page: &Page) -> Result<(), Error> {
        if page_number >= self.page_count {
            return Err(Error::WriteFailed(
                page_number,
                std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "page beyond EOF"),
            ));
        }

        let offset = (page_number as u64) * (PAGE_SIZE as u64);
        self.file
            .seek(SeekFrom::Start(offset))
            .map_err(|e| Error::WriteFailed(page_number, e))?;
        self.file
            .write_all(page.as_slice())
            .map_err(|e| Error::WriteFailed(page_number, e))?;
        self.file
            .sync_data()
            .map_err(|e| Error::WriteFailed(page_number, e))?;

        Ok(())
    }

    /// Extend the file with zero-filled pages so it has at least
    /// `min_page_count` pages. A no-op if the file is already that long.
    ///
    /// # Errors
    /// Returns `Error::CapacityExtensionFailed` on I/O failure.
    pub fn ensure_capacity(&mut self, min_page_count: u32) -> Result<(), Error> {
        if min_page_count <= self.page_count {
            return Ok(());
        }

        let additional = min_page_count - self.page_count;
        let offset = (self.page_count as u64) * (PAGE_SIZE as u64);
        self.file
            .seek(SeekFrom::Start(offset))
            .map_err(|e| Error::CapacityExtensionFailed(min_page_count, e))?;

        let zeros = [0u8; PAGE_SIZE];
        for _ in 0..additional {
            self.file
                .write_all(&zeros)
                .map_err(|e| Error::CapacityExtensionFailed(min_page_count, e))?;
        }
        self.file
            .sync_all()
            .map_err(|e| Error::CapacityExtensionFailed(min_page_count, e))?;

        self.page_count = min_page_count;
        Ok(())
    }
}
