//! Decode/transport engine abstraction

/// Outcome of one decode-and-forward step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StreamStatus {
    /// Samples were produced; call again on the next tick.
    MoreData,
    /// The byte stream has no further audio.
    Exhausted,
}

/// Audio engine trait: decodes an open byte stream and pushes samples
/// toward the transport sink, incrementally.
pub trait AudioEngine {
    /// Byte stream type the engine decodes (a storage file)
    type Source;
    /// Error type
    type Error: core::fmt::Debug;

    /// Load `source` and start decoding it
    fn begin(
        &mut self,
        source: Self::Source,
    ) -> impl core::future::Future<Output = Result<(), Self::Error>>;

    /// Halt decoding and release the current source
    fn stop(&mut self);

    /// Set or clear the pause flag without reloading the source
    fn set_paused(&mut self, paused: bool);

    /// Current pause flag
    fn is_paused(&self) -> bool;

    /// Whether a source is loaded and not yet exhausted
    fn is_active(&self) -> bool;

    /// Decode and forward one chunk.
    ///
    /// Must return promptly whether or not output was produced. Decode
    /// errors are reported as [`StreamStatus::Exhausted`].
    fn advance(&mut self) -> impl core::future::Future<Output = StreamStatus>;
}
