//! Storage abstraction for the removable-media filesystem

use crate::config::MAX_TRACK_NAME;

/// Name of a directory entry, bounded to [`MAX_TRACK_NAME`] bytes.
pub type EntryName = heapless::String<MAX_TRACK_NAME>;

/// Storage trait for file system access
pub trait Storage {
    /// Error type
    type Error: core::fmt::Debug;
    /// File type
    type File: File;
    /// Directory handle type
    type Dir: Dir<Error = Self::Error>;

    /// Bring up the storage interconnect and mount the filesystem
    fn mount(&mut self) -> impl core::future::Future<Output = Result<(), Self::Error>>;

    /// Open a directory for enumeration
    fn open_dir(
        &mut self,
        path: &str,
    ) -> impl core::future::Future<Output = Result<Self::Dir, Self::Error>>;

    /// Open file for reading
    fn open_file(
        &mut self,
        path: &str,
    ) -> impl core::future::Future<Output = Result<Self::File, Self::Error>>;

    /// Check if path exists
    fn exists(
        &mut self,
        path: &str,
    ) -> impl core::future::Future<Output = Result<bool, Self::Error>>;
}

/// An open directory, enumerated once from the start.
pub trait Dir {
    /// Error type
    type Error: core::fmt::Debug;

    /// Next entry in enumeration order, `None` at the end
    fn next_entry(
        &mut self,
    ) -> impl core::future::Future<Output = Result<Option<DirEntry>, Self::Error>>;
}

/// One entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// Entry name without the parent path
    pub name: EntryName,
    /// `true` for subdirectories
    pub is_dir: bool,
}

impl DirEntry {
    /// Build an entry, or `None` when `name` exceeds [`MAX_TRACK_NAME`] bytes.
    pub fn new(name: &str, is_dir: bool) -> Option<Self> {
        let mut buf = EntryName::new();
        buf.push_str(name).ok()?;
        Some(Self { name: buf, is_dir })
    }
}

/// File trait for reading files
pub trait File {
    /// Error type
    type Error: core::fmt::Debug;

    /// Read from current position
    fn read(
        &mut self,
        buf: &mut [u8],
    ) -> impl core::future::Future<Output = Result<usize, Self::Error>>;

    /// Seek to position
    fn seek(&mut self, pos: u64) -> impl core::future::Future<Output = Result<u64, Self::Error>>;

    /// Get file size
    fn size(&self) -> u64;
}
