//! Simulated transport sink.
//!
//! The link comes up when `start` is called; the console can drop and
//! restore it through the shared flag.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use platform::{StatusCallback, TransportSink};

/// `start` called twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimSinkError;

impl core::fmt::Display for SimSinkError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("transport already started")
    }
}

impl std::error::Error for SimSinkError {}

/// Transport sink backed by a shared link flag.
pub struct SimSink {
    link: Arc<AtomicBool>,
    name: Option<String>,
    callback: Option<StatusCallback>,
}

impl SimSink {
    /// Sink with the link down.
    pub fn new() -> Self {
        Self {
            link: Arc::new(AtomicBool::new(false)),
            name: None,
            callback: None,
        }
    }

    /// Handle the console uses to drop and restore the link.
    pub fn link(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.link)
    }

    /// Registered status callback.
    pub fn status_callback(&self) -> Option<StatusCallback> {
        self.callback
    }

    /// Name the sink was started under.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl Default for SimSink {
    fn default() -> Self {
        Self::new()
    }
}

impl TransportSink for SimSink {
    type Error = SimSinkError;

    async fn start(&mut self, name: &str) -> Result<(), SimSinkError> {
        if self.name.is_some() {
            return Err(SimSinkError);
        }
        self.name = Some(name.to_owned());
        self.link.store(true, Ordering::SeqCst);
        platform::info!("Accessory paired: {}", name);
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.link.load(Ordering::SeqCst)
    }

    fn register_status_callback(&mut self, callback: StatusCallback) {
        self.callback = Some(callback);
    }
}
