//! Wireless transport sink abstraction

/// Callback invoked by the wireless stack with a raw accessory transport
/// status (AVRCP playback-status code).
///
/// The wireless stack may call this from its own execution context, so
/// implementations must only hand the status off (see
/// `bluetooth::CommandQueue`) and never touch controller state directly.
pub type StatusCallback = fn(u8);

/// Transport sink trait: forwards decoded audio to the paired accessory and
/// relays the accessory's transport commands back.
///
/// Pairing and connection management happen inside the implementation; the
/// player only observes them through [`TransportSink::is_connected`].
pub trait TransportSink {
    /// Error type
    type Error: core::fmt::Debug;

    /// Start advertising and connecting under `name`
    async fn start(&mut self, name: &str) -> Result<(), Self::Error>;

    /// Check if the accessory link is up
    fn is_connected(&self) -> bool;

    /// Register the accessory transport-status callback
    fn register_status_callback(&mut self, callback: StatusCallback);
}
