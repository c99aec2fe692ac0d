//! Mock implementations for testing
//!
//! This module provides mock implementations of all platform traits
//! for use in unit and integration tests. Engine calls are recorded so tests
//! can assert exactly what the player asked the engine to do.

#![cfg(any(test, feature = "std"))]

use std::collections::VecDeque;

use crate::*;

/// Bytes every mock file starts with.
pub const MOCK_WAV_HEADER: &[u8] = b"RIFF\x24\x00\x00\x00WAVEfmt ";

/// Error returned by the mock storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockStorageError {
    /// Mount was configured to fail
    MountFailed,
    /// No such file or directory
    NotFound,
    /// The file was configured to be unreadable
    Unreadable,
}

/// In-memory flat filesystem: one directory holding files and subdirectories.
pub struct MockStorage {
    root: String,
    entries: Vec<DirEntry>,
    unreadable: Vec<String>,
    opened: Vec<String>,
    mount_fails: bool,
    dir_fails: bool,
    dir_error_after: Option<usize>,
    mount_calls: usize,
}

impl MockStorage {
    /// Empty root directory `/`.
    pub fn new() -> Self {
        Self {
            root: String::from("/"),
            entries: Vec::new(),
            unreadable: Vec::new(),
            opened: Vec::new(),
            mount_fails: false,
            dir_fails: false,
            dir_error_after: None,
            mount_calls: 0,
        }
    }

    /// Root directory holding the given files, in enumeration order.
    pub fn with_files(names: &[&str]) -> Self {
        let mut storage = Self::new();
        for name in names {
            storage.add_file(name);
        }
        storage
    }

    /// Append a file entry.
    pub fn add_file(&mut self, name: &str) {
        if let Some(entry) = DirEntry::new(name, false) {
            self.entries.push(entry);
        }
    }

    /// Append a subdirectory entry.
    pub fn add_dir(&mut self, name: &str) {
        if let Some(entry) = DirEntry::new(name, true) {
            self.entries.push(entry);
        }
    }

    /// Make `open_file` fail for `path`.
    pub fn set_unreadable(&mut self, path: &str) {
        self.unreadable.push(path.to_owned());
    }

    /// Make `mount` fail.
    pub fn fail_mount(&mut self) {
        self.mount_fails = true;
    }

    /// Make `open_dir` fail.
    pub fn fail_open_dir(&mut self) {
        self.dir_fails = true;
    }

    /// Make enumeration fail after `count` entries.
    pub fn fail_enumeration_after(&mut self, count: usize) {
        self.dir_error_after = Some(count);
    }

    /// Paths passed to `open_file`, in call order.
    pub fn opened(&self) -> &[String] {
        &self.opened
    }

    /// Number of `mount` calls.
    pub fn mount_calls(&self) -> usize {
        self.mount_calls
    }

    fn file_path(&self, name: &str) -> String {
        if self.root.ends_with('/') {
            format!("{}{name}", self.root)
        } else {
            format!("{}/{name}", self.root)
        }
    }
}

impl Default for MockStorage {
    fn default() -> Self {
        Self::new()
    }
}

/// Directory handle produced by [`MockStorage`].
pub struct MockDir {
    entries: VecDeque<DirEntry>,
    error_after: Option<usize>,
    yielded: usize,
}

impl Dir for MockDir {
    type Error = MockStorageError;

    async fn next_entry(&mut self) -> Result<Option<DirEntry>, Self::Error> {
        if self.error_after.is_some_and(|limit| self.yielded >= limit) {
            return Err(MockStorageError::Unreadable);
        }
        self.yielded = self.yielded.saturating_add(1);
        Ok(self.entries.pop_front())
    }
}

/// File handle produced by [`MockStorage`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockFile {
    /// Path the file was opened with
    pub path: String,
    data: Vec<u8>,
    pos: usize,
}

impl File for MockFile {
    type Error = MockStorageError;

    async fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let rest = self.data.get(self.pos..).unwrap_or_default();
        let n = rest.len().min(buf.len());
        if let (Some(dst), Some(src)) = (buf.get_mut(..n), rest.get(..n)) {
            dst.copy_from_slice(src);
        }
        self.pos = self.pos.saturating_add(n);
        Ok(n)
    }

    async fn seek(&mut self, pos: u64) -> Result<u64, Self::Error> {
        self.pos = usize::try_from(pos).unwrap_or(usize::MAX).min(self.data.len());
        Ok(self.pos as u64)
    }

    fn size(&self) -> u64 {
        self.data.len() as u64
    }
}

impl Storage for MockStorage {
    type Error = MockStorageError;
    type File = MockFile;
    type Dir = MockDir;

    async fn mount(&mut self) -> Result<(), Self::Error> {
        self.mount_calls = self.mount_calls.saturating_add(1);
        if self.mount_fails {
            Err(MockStorageError::MountFailed)
        } else {
            Ok(())
        }
    }

    async fn open_dir(&mut self, path: &str) -> Result<Self::Dir, Self::Error> {
        if self.dir_fails || path != self.root {
            return Err(MockStorageError::NotFound);
        }
        Ok(MockDir {
            entries: self.entries.iter().cloned().collect(),
            error_after: self.dir_error_after,
            yielded: 0,
        })
    }

    async fn open_file(&mut self, path: &str) -> Result<Self::File, Self::Error> {
        self.opened.push(path.to_owned());
        if self.unreadable.iter().any(|p| p == path) {
            return Err(MockStorageError::Unreadable);
        }
        let known = self
            .entries
            .iter()
            .any(|e| !e.is_dir && self.file_path(e.name.as_str()) == path);
        if !known {
            return Err(MockStorageError::NotFound);
        }
        Ok(MockFile {
            path: path.to_owned(),
            data: MOCK_WAV_HEADER.to_vec(),
            pos: 0,
        })
    }

    async fn exists(&mut self, path: &str) -> Result<bool, Self::Error> {
        Ok(self
            .entries
            .iter()
            .any(|e| self.file_path(e.name.as_str()) == path))
    }
}

/// One recorded call into [`MockEngine`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCall {
    /// `begin` with the source's path
    Begin(String),
    /// `stop`
    Stop,
    /// `set_paused`
    SetPaused(bool),
}

/// Error returned by [`MockEngine::begin`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockEngineError;

/// Recording audio engine. Every track lasts a fixed number of `advance` calls.
pub struct MockEngine {
    calls: Vec<EngineCall>,
    rejected: Vec<String>,
    chunks_per_track: usize,
    remaining: usize,
    active: bool,
    paused: bool,
    advances: usize,
}

impl MockEngine {
    /// Engine whose tracks last three chunks.
    pub fn new() -> Self {
        Self::with_track_chunks(3)
    }

    /// Engine whose tracks last `chunks` calls to `advance`.
    pub fn with_track_chunks(chunks: usize) -> Self {
        Self {
            calls: Vec::new(),
            rejected: Vec::new(),
            chunks_per_track: chunks,
            remaining: 0,
            active: false,
            paused: false,
            advances: 0,
        }
    }

    /// Make `begin` fail for sources opened from `path`.
    pub fn reject(&mut self, path: &str) {
        self.rejected.push(path.to_owned());
    }

    /// Recorded control calls (`begin`, `stop`, `set_paused`).
    pub fn calls(&self) -> &[EngineCall] {
        &self.calls
    }

    /// Forget recorded calls.
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    /// Number of `advance` calls.
    pub fn advances(&self) -> usize {
        self.advances
    }
}

impl Default for MockEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioEngine for MockEngine {
    type Source = MockFile;
    type Error = MockEngineError;

    async fn begin(&mut self, source: Self::Source) -> Result<(), Self::Error> {
        self.calls.push(EngineCall::Begin(source.path.clone()));
        if self.rejected.contains(&source.path) {
            self.active = false;
            return Err(MockEngineError);
        }
        self.active = true;
        self.paused = false;
        self.remaining = self.chunks_per_track;
        Ok(())
    }

    fn stop(&mut self) {
        self.calls.push(EngineCall::Stop);
        self.active = false;
        self.paused = false;
    }

    fn set_paused(&mut self, paused: bool) {
        self.calls.push(EngineCall::SetPaused(paused));
        self.paused = paused;
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn is_active(&self) -> bool {
        self.active
    }

    async fn advance(&mut self) -> StreamStatus {
        self.advances = self.advances.saturating_add(1);
        if !self.active {
            return StreamStatus::Exhausted;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.active = false;
            StreamStatus::Exhausted
        } else {
            StreamStatus::MoreData
        }
    }
}

/// Error returned by [`MockSink::start`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockSinkError;

/// Transport sink with a settable link state.
pub struct MockSink {
    connected: bool,
    started_as: Option<String>,
    callback: Option<StatusCallback>,
    start_fails: bool,
}

impl MockSink {
    /// Sink with the accessory already connected.
    pub fn connected() -> Self {
        Self {
            connected: true,
            started_as: None,
            callback: None,
            start_fails: false,
        }
    }

    /// Sink with no accessory link.
    pub fn disconnected() -> Self {
        Self {
            connected: false,
            ..Self::connected()
        }
    }

    /// Change the link state.
    pub fn set_connected(&mut self, connected: bool) {
        self.connected = connected;
    }

    /// Make `start` fail.
    pub fn fail_start(&mut self) {
        self.start_fails = true;
    }

    /// Name passed to `start`, if it was called.
    pub fn started_as(&self) -> Option<&str> {
        self.started_as.as_deref()
    }

    /// Whether a status callback was registered.
    pub fn has_callback(&self) -> bool {
        self.callback.is_some()
    }

    /// Invoke the registered callback as the radio stack would.
    pub fn deliver(&self, raw_status: u8) {
        if let Some(callback) = self.callback {
            callback(raw_status);
        }
    }
}

impl TransportSink for MockSink {
    type Error = MockSinkError;

    async fn start(&mut self, name: &str) -> Result<(), Self::Error> {
        self.started_as = Some(name.to_owned());
        if self.start_fails {
            Err(MockSinkError)
        } else {
            Ok(())
        }
    }

    fn is_connected(&self) -> bool {
        self.connected
    }

    fn register_status_callback(&mut self, callback: StatusCallback) {
        self.callback = Some(callback);
    }
}

/// Mock input device
pub struct MockInput {
    events: VecDeque<InputEvent>,
}

impl MockInput {
    /// Create new mock input
    pub fn new() -> Self {
        Self {
            events: VecDeque::new(),
        }
    }

    /// Add event to queue
    pub fn add_event(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }

    /// Number of events not yet polled
    pub fn pending(&self) -> usize {
        self.events.len()
    }
}

impl Default for MockInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InputDevice for MockInput {
    fn poll(&mut self) -> Option<InputEvent> {
        self.events.pop_front()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_storage_lists_entries_in_insertion_order() {
        let mut storage = MockStorage::with_files(&["b.wav", "a.wav"]);
        storage.add_dir("album");
        let mut dir = storage.open_dir("/").await.unwrap();
        let mut names = Vec::new();
        while let Some(entry) = dir.next_entry().await.unwrap() {
            names.push(entry.name.as_str().to_owned());
        }
        assert_eq!(names, ["b.wav", "a.wav", "album"]);
    }

    #[tokio::test]
    async fn mock_storage_opens_known_files_only() {
        let mut storage = MockStorage::with_files(&["a.wav"]);
        assert!(storage.open_file("/a.wav").await.is_ok());
        assert_eq!(
            storage.open_file("/b.wav").await,
            Err(MockStorageError::NotFound)
        );
        assert_eq!(storage.opened(), ["/a.wav", "/b.wav"]);
    }

    #[tokio::test]
    async fn mock_engine_exhausts_after_configured_chunks() {
        let mut storage = MockStorage::with_files(&["a.wav"]);
        let file = storage.open_file("/a.wav").await.unwrap();
        let mut engine = MockEngine::with_track_chunks(2);
        engine.begin(file).await.unwrap();
        assert_eq!(engine.advance().await, StreamStatus::MoreData);
        assert_eq!(engine.advance().await, StreamStatus::Exhausted);
        assert!(!engine.is_active());
    }

    #[tokio::test]
    async fn mock_engine_records_rejected_begin() {
        let mut storage = MockStorage::with_files(&["bad.wav"]);
        let file = storage.open_file("/bad.wav").await.unwrap();
        let mut engine = MockEngine::new();
        engine.reject("/bad.wav");
        assert_eq!(engine.begin(file).await, Err(MockEngineError));
        assert_eq!(engine.calls(), [EngineCall::Begin("/bad.wav".into())]);
        assert!(!engine.is_active());
    }

    #[test]
    fn mock_input_is_fifo() {
        let mut input = MockInput::new();
        input.add_event(InputEvent::Click(Button::Next));
        input.add_event(InputEvent::LongPress(Button::Next));
        assert_eq!(input.poll(), Some(InputEvent::Click(Button::Next)));
        assert_eq!(input.poll(), Some(InputEvent::LongPress(Button::Next)));
        assert_eq!(input.poll(), None);
    }
}
