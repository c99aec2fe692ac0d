//! Local filesystem Storage implementation for the desktop simulator.
//!
//! `LocalFileStorage` implements `platform::Storage` using `std::fs`.
//! Used when the `std` feature is enabled (simulator and xtask builds only).
//! All paths are resolved relative to the `music_root` provided at construction;
//! a leading `/` addresses that root, mirroring the card's root directory.

use std::ffi::OsString;
use std::fs;
use std::io::{Read, Seek, SeekFrom};
use std::path::PathBuf;

use crate::storage::{Dir, DirEntry, File, Storage};

/// Error type for local filesystem operations.
#[derive(Debug)]
pub enum LocalStorageError {
    /// The configured root is missing or is not a directory.
    NotMounted(PathBuf),
    /// Underlying I/O failure.
    Io(std::io::Error),
}

impl core::fmt::Display for LocalStorageError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NotMounted(root) => {
                write!(f, "storage root {} is not a directory", root.display())
            }
            Self::Io(e) => write!(f, "local storage error: {e}"),
        }
    }
}

impl std::error::Error for LocalStorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotMounted(_) => None,
            Self::Io(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for LocalStorageError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// An open file on the local filesystem.
pub struct LocalFile {
    inner: fs::File,
    size: u64,
}

impl File for LocalFile {
    type Error = LocalStorageError;

    async fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        Ok(Read::read(&mut self.inner, buf)?)
    }

    async fn seek(&mut self, pos: u64) -> Result<u64, Self::Error> {
        Ok(Seek::seek(&mut self.inner, SeekFrom::Start(pos))?)
    }

    fn size(&self) -> u64 {
        self.size
    }
}

/// A directory listing on the local filesystem.
///
/// Host directory order is unspecified, so entries are enumerated in byte
/// order of their names. Names that are not UTF-8 or do not fit in
/// [`crate::config::MAX_TRACK_NAME`] bytes are skipped with a warning.
///
/// A read error part way through the listing ends it: the entries read
/// before it are yielded first, then the error, then nothing.
pub struct LocalDir {
    entries: std::vec::IntoIter<DirEntry>,
    error: Option<LocalStorageError>,
}

impl LocalDir {
    fn collect<I>(listing: I) -> Self
    where
        I: IntoIterator<Item = std::io::Result<(OsString, bool)>>,
    {
        let mut entries = Vec::new();
        let mut error = None;
        for item in listing {
            let (name, is_dir) = match item {
                Ok(item) => item,
                Err(e) => {
                    error = Some(LocalStorageError::Io(e));
                    break;
                }
            };
            let Ok(name) = name.into_string() else {
                crate::warn!("Skipping entry with a non UTF-8 name");
                continue;
            };
            match DirEntry::new(&name, is_dir) {
                Some(e) => entries.push(e),
                None => crate::warn!("Skipping entry with an over-long name: {}", name.as_str()),
            }
        }
        entries.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));
        Self { entries: entries.into_iter(), error }
    }
}

impl Dir for LocalDir {
    type Error = LocalStorageError;

    async fn next_entry(&mut self) -> Result<Option<DirEntry>, Self::Error> {
        match self.entries.next() {
            Some(entry) => Ok(Some(entry)),
            None => self.error.take().map_or(Ok(None), Err),
        }
    }
}

/// A `platform::Storage` implementation backed by `std::fs`.
///
/// # Example
/// ```no_run
/// # async fn example() {
/// use platform::storage_local::LocalFileStorage;
/// use platform::Storage;
/// let mut storage = LocalFileStorage::new("/home/user/music");
/// storage.mount().await.unwrap();
/// let file = storage.open_file("/a.wav").await.unwrap();
/// # }
/// ```
pub struct LocalFileStorage {
    root: PathBuf,
}

impl LocalFileStorage {
    /// Create a new storage rooted at `music_root`.
    #[must_use]
    pub fn new(music_root: &str) -> Self {
        Self { root: PathBuf::from(music_root) }
    }

    /// Create from the `MUSIC_PATH` environment variable.
    ///
    /// Returns `None` if `MUSIC_PATH` is not set or is not valid UTF-8.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        std::env::var("MUSIC_PATH").ok().map(|p| Self::new(&p))
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(path.trim_start_matches('/'))
    }
}

impl Storage for LocalFileStorage {
    type Error = LocalStorageError;
    type File = LocalFile;
    type Dir = LocalDir;

    async fn mount(&mut self) -> Result<(), Self::Error> {
        if self.root.is_dir() {
            Ok(())
        } else {
            Err(LocalStorageError::NotMounted(self.root.clone()))
        }
    }

    async fn open_dir(&mut self, path: &str) -> Result<Self::Dir, Self::Error> {
        let listing = fs::read_dir(self.resolve(path))?.map(|entry| -> std::io::Result<_> {
            let entry = entry?;
            Ok((entry.file_name(), entry.file_type()?.is_dir()))
        });
        Ok(LocalDir::collect(listing))
    }

    async fn open_file(&mut self, path: &str) -> Result<Self::File, Self::Error> {
        let file = fs::File::open(self.resolve(path))?;
        let meta = file.metadata()?;
        Ok(LocalFile { inner: file, size: meta.len() })
    }

    async fn exists(&mut self, path: &str) -> Result<bool, Self::Error> {
        Ok(self.resolve(path).exists())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::config::MAX_TRACK_NAME;
    use crate::storage::{Dir, File, Storage};
    use std::fs;
    use tempfile::TempDir;

    async fn names(storage: &mut LocalFileStorage, path: &str) -> Vec<(String, bool)> {
        let mut dir = storage.open_dir(path).await.unwrap();
        let mut out = Vec::new();
        while let Some(entry) = dir.next_entry().await.unwrap() {
            out.push((entry.name.as_str().to_owned(), entry.is_dir));
        }
        out
    }

    #[tokio::test]
    async fn local_storage_mount_requires_directory() {
        let tmp = TempDir::new().unwrap();
        let mut ok = LocalFileStorage::new(tmp.path().to_str().unwrap());
        assert!(ok.mount().await.is_ok());

        let missing = tmp.path().join("missing");
        let mut bad = LocalFileStorage::new(missing.to_str().unwrap());
        assert!(matches!(bad.mount().await, Err(LocalStorageError::NotMounted(_))));
    }

    #[tokio::test]
    async fn local_storage_root_slash_addresses_music_root() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("b.wav"), b"b").unwrap();
        fs::write(tmp.path().join("a.wav"), b"a").unwrap();
        fs::create_dir(tmp.path().join("album")).unwrap();
        let mut storage = LocalFileStorage::new(tmp.path().to_str().unwrap());
        let listed = names(&mut storage, "/").await;
        assert_eq!(
            listed,
            vec![
                ("a.wav".to_owned(), false),
                ("album".to_owned(), true),
                ("b.wav".to_owned(), false),
            ]
        );
    }

    #[tokio::test]
    async fn local_storage_skips_over_long_names() {
        let tmp = TempDir::new().unwrap();
        let long = format!("{}.wav", "x".repeat(MAX_TRACK_NAME));
        fs::write(tmp.path().join(&long), b"x").unwrap();
        fs::write(tmp.path().join("short.wav"), b"s").unwrap();
        let mut storage = LocalFileStorage::new(tmp.path().to_str().unwrap());
        let listed = names(&mut storage, "/").await;
        assert_eq!(listed, vec![("short.wav".to_owned(), false)]);
    }

    #[tokio::test]
    async fn local_dir_keeps_entries_read_before_an_error() {
        let listing = vec![
            Ok((OsString::from("b.wav"), false)),
            Ok((OsString::from("a.wav"), false)),
            Err(std::io::Error::other("bad sector")),
            Ok((OsString::from("c.wav"), false)),
        ];
        let mut dir = LocalDir::collect(listing);

        let first = dir.next_entry().await.unwrap().unwrap();
        let second = dir.next_entry().await.unwrap().unwrap();
        assert_eq!(first.name.as_str(), "a.wav");
        assert_eq!(second.name.as_str(), "b.wav");
        assert!(matches!(dir.next_entry().await, Err(LocalStorageError::Io(_))));
        assert!(dir.next_entry().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn local_storage_open_dir_missing_is_err() {
        let tmp = TempDir::new().unwrap();
        let mut storage = LocalFileStorage::new(tmp.path().to_str().unwrap());
        assert!(storage.open_dir("/nope").await.is_err());
    }

    #[tokio::test]
    async fn local_storage_read_full_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("test.bin"), b"hello world").unwrap();
        let mut storage = LocalFileStorage::new(tmp.path().to_str().unwrap());
        let mut file = storage.open_file("/test.bin").await.unwrap();
        let mut buf = [0u8; 11];
        let n = file.read(&mut buf).await.unwrap();
        assert_eq!(n, 11);
        assert_eq!(&buf, b"hello world");
        assert_eq!(file.size(), 11);
    }

    #[tokio::test]
    async fn local_storage_seek_and_read() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("seek.bin"), b"ABCDEFGH").unwrap();
        let mut storage = LocalFileStorage::new(tmp.path().to_str().unwrap());
        let mut file = storage.open_file("seek.bin").await.unwrap();
        file.seek(4).await.unwrap();
        let mut buf = [0u8; 4];
        file.read(&mut buf).await.unwrap();
        assert_eq!(&buf, b"EFGH");
    }

    #[tokio::test]
    async fn local_storage_exists() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("exists.bin"), b"x").unwrap();
        let mut storage = LocalFileStorage::new(tmp.path().to_str().unwrap());
        assert!(storage.exists("/exists.bin").await.unwrap());
        assert!(!storage.exists("/absent.bin").await.unwrap());
    }
}
