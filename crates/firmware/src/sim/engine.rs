//! Simulated decode/transport engine.
//!
//! Streams the source file in [`CHUNK_BYTES`] pieces, one per `advance`,
//! and reports exhaustion at end of file. Every source must start with a
//! RIFF/WAVE header; `begin` rejects anything else, whatever its suffix.

use platform::storage_local::{LocalFile, LocalStorageError};
use platform::{AudioEngine, File, StreamStatus};

/// Bytes consumed per `advance` call.
pub const CHUNK_BYTES: usize = 1024;

const HEADER_BYTES: usize = 12;

/// Why [`SimEngine::begin`] rejected a source.
#[derive(Debug)]
pub enum SimEngineError {
    /// Read failed
    Io(LocalStorageError),
    /// Missing RIFF/WAVE signature
    NotWave,
}

impl core::fmt::Display for SimEngineError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "read failed: {e}"),
            Self::NotWave => f.write_str("missing RIFF/WAVE header"),
        }
    }
}

impl std::error::Error for SimEngineError {}

/// Engine that "plays" a file by reading through it.
pub struct SimEngine {
    source: Option<LocalFile>,
    paused: bool,
    buf: Box<[u8; CHUNK_BYTES]>,
    streamed: u64,
}

impl SimEngine {
    /// Idle engine.
    pub fn new() -> Self {
        Self {
            source: None,
            paused: false,
            buf: Box::new([0; CHUNK_BYTES]),
            streamed: 0,
        }
    }

    /// Bytes streamed from the current source.
    pub fn streamed(&self) -> u64 {
        self.streamed
    }
}

impl Default for SimEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn is_wave_header(header: &[u8]) -> bool {
    header.get(0..4) == Some(b"RIFF".as_slice()) && header.get(8..12) == Some(b"WAVE".as_slice())
}

impl AudioEngine for SimEngine {
    type Source = LocalFile;
    type Error = SimEngineError;

    async fn begin(&mut self, mut source: LocalFile) -> Result<(), SimEngineError> {
        self.source = None;
        self.paused = false;
        self.streamed = 0;

        let mut header = [0u8; HEADER_BYTES];
        let n = source.read(&mut header).await.map_err(SimEngineError::Io)?;
        if !is_wave_header(header.get(..n).unwrap_or_default()) {
            return Err(SimEngineError::NotWave);
        }
        source.seek(0).await.map_err(SimEngineError::Io)?;
        self.source = Some(source);
        Ok(())
    }

    fn stop(&mut self) {
        self.source = None;
        self.paused = false;
    }

    fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn is_active(&self) -> bool {
        self.source.is_some()
    }

    async fn advance(&mut self) -> StreamStatus {
        let Some(source) = self.source.as_mut() else {
            return StreamStatus::Exhausted;
        };
        match source.read(self.buf.as_mut_slice()).await {
            Ok(0) | Err(_) => {
                platform::debug!("Stream exhausted after {} bytes", self.streamed);
                self.source = None;
                StreamStatus::Exhausted
            }
            Ok(n) => {
                self.streamed = self.streamed.saturating_add(n as u64);
                StreamStatus::MoreData
            }
        }
    }
}
