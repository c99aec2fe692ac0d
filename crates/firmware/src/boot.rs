//! Boot sequence for the Soundbridge player.
//!
//! Initialization order (each step is fatal-or-continue, nothing is retried):
//!   1. Storage: bring up the card bus and mount the filesystem
//!   2. Playlist: scan the music root once
//!   3. Accessory: register the transport-status callback
//!   4. Transport: start advertising under the accessory name
//!
//! Only a mount failure is fatal. Without storage there is nothing to play
//! and no later step is meaningful, so the device parks instead of polling.

use library::{Playlist, PlaylistBuilder};
use platform::config::{
    ACCESSORY_NAME, APP_NAME, APP_VERSION, BUTTON_PINS, DEBOUNCE_MS, LONG_PRESS_MS, MUSIC_ROOT,
    STORAGE_PINS,
};
use platform::{AudioEngine, StatusCallback, Storage, TransportSink};
use playback::Controller;

/// Ordered list of boot sequence steps for documentation and testing.
///
/// # Correctness Invariants
///
/// - Storage must be mounted before the playlist scan; a failed mount stops
///   the sequence.
/// - The status callback is registered before the transport starts, so no
///   accessory command can arrive unobserved.
pub const BOOT_SEQUENCE_STEPS: &[&str] = &[
    "1. Storage: bring up the card bus and mount the filesystem (fatal on failure)",
    "2. Playlist: scan the music root for playable files (empty list is a warning)",
    "3. Accessory: register the transport-status callback",
    "4. Transport: start advertising under the accessory name",
];

/// Runtime-relevant subset of the build-time configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootConfig<'a> {
    /// Name the transport advertises/pairs under
    pub accessory_name: &'a str,
    /// Directory scanned for tracks
    pub music_root: &'a str,
}

impl Default for BootConfig<'static> {
    fn default() -> Self {
        Self {
            accessory_name: ACCESSORY_NAME,
            music_root: MUSIC_ROOT,
        }
    }
}

/// Fatal boot failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BootError {
    /// The filesystem could not be mounted.
    StorageMount,
}

impl core::fmt::Display for BootError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::StorageMount => f.write_str("storage mount failed"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BootError {}

/// Run the boot sequence and hand back a stopped controller at cursor 0.
///
/// `callback` is registered with `sink` before it starts; on the device it
/// is [`on_transport_status`](crate::on_transport_status). A transport start
/// failure is logged and boot continues: the link simply never comes up and
/// every playback request stays a no-op.
pub async fn boot<S, E, T, const N: usize>(
    mut storage: S,
    engine: E,
    mut sink: T,
    config: &BootConfig<'_>,
    callback: StatusCallback,
) -> Result<Controller<S, E, T, N>, BootError>
where
    S: Storage,
    E: AudioEngine<Source = S::File>,
    T: TransportSink,
{
    platform::info!("{} v{}", APP_NAME, APP_VERSION);

    // Step 1
    platform::info!(
        "Initializing storage (cs={}, mosi={}, miso={}, sck={})",
        STORAGE_PINS.cs,
        STORAGE_PINS.mosi,
        STORAGE_PINS.miso,
        STORAGE_PINS.sck
    );
    if storage.mount().await.is_err() {
        platform::error!("ERROR: Storage mount failed. Halting.");
        return Err(BootError::StorageMount);
    }
    platform::info!("Storage mounted.");

    // Step 2
    let playlist: Playlist<N> = PlaylistBuilder::new(config.music_root)
        .build(&mut storage)
        .await;

    // Step 3
    platform::info!(
        "Buttons: next={}, previous={} (debounce {} ms, long press {} ms)",
        BUTTON_PINS.next,
        BUTTON_PINS.previous,
        DEBOUNCE_MS,
        LONG_PRESS_MS
    );
    sink.register_status_callback(callback);

    // Step 4
    platform::info!("Starting transport as: {}", config.accessory_name);
    if sink.start(config.accessory_name).await.is_err() {
        platform::error!("ERROR: Transport failed to start: {}", config.accessory_name);
    }

    Ok(Controller::new(storage, engine, sink, playlist))
}

/// Device-only fatal-error handling.
/// Only compiled when targeting real hardware (`--features hardware`).
#[cfg(feature = "hardware")]
pub mod hardware {
    /// Park the core forever after a fatal boot error.
    ///
    /// No further polling happens; the device needs a power cycle.
    pub fn halt() -> ! {
        loop {
            cortex_m::asm::wfi();
        }
    }
}
