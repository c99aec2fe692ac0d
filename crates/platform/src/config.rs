//! Application configuration and constants
//!
//! Behavior is fixed at build time: there is no command-line surface and no
//! persisted settings on the device. All naming, pin assignments and
//! capacities should reference these constants rather than hardcoding values.

/// The application name
pub const APP_NAME: &str = "Soundbridge";

/// Application version (synchronized with Cargo.toml)
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name of the paired playback accessory the transport advertises for.
pub const ACCESSORY_NAME: &str = "Mivi DuoPods K6";

/// Directory scanned for tracks at boot.
pub const MUSIC_ROOT: &str = "/";

/// Maximum number of tracks held in the playlist.
///
/// Entries beyond this are skipped with a warning during the scan.
pub const MAX_TRACKS: usize = 256;

/// Maximum length in bytes of a directory entry name.
pub const MAX_TRACK_NAME: usize = 128;

/// Longest music root, trailing separator included, that track paths are
/// sized for.
pub const MAX_ROOT_PATH: usize = 32;

/// Maximum length in bytes of a full track path: root, separator and a
/// name of up to [`MAX_TRACK_NAME`] bytes.
pub const MAX_TRACK_PATH: usize = 160;

/// Depth of the accessory command queue between the radio callback and the
/// polling loop.
pub const COMMAND_QUEUE_DEPTH: usize = 8;

/// Hold time after which a button press is reported as a long press.
pub const LONG_PRESS_MS: u32 = 800;

/// Debounce window applied by the input driver.
pub const DEBOUNCE_MS: u32 = 50;

/// SPI wiring of the removable-storage slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StoragePins {
    /// Chip select
    pub cs: u8,
    /// Controller → card data
    pub mosi: u8,
    /// Card → controller data
    pub miso: u8,
    /// Serial clock
    pub sck: u8,
}

/// Storage slot pin assignment.
pub const STORAGE_PINS: StoragePins = StoragePins {
    cs: 5,
    mosi: 23,
    miso: 19,
    sck: 18,
};

/// Active-low button inputs with internal pull-ups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonPins {
    /// Next / play button (long press stops)
    pub next: u8,
    /// Previous button
    pub previous: u8,
}

/// Button pin assignment.
pub const BUTTON_PINS: ButtonPins = ButtonPins {
    next: 13,
    previous: 14,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_and_button_pins_do_not_overlap() {
        let storage = [STORAGE_PINS.cs, STORAGE_PINS.mosi, STORAGE_PINS.miso, STORAGE_PINS.sck];
        assert!(!storage.contains(&BUTTON_PINS.next));
        assert!(!storage.contains(&BUTTON_PINS.previous));
        assert_ne!(BUTTON_PINS.next, BUTTON_PINS.previous);
    }

    #[test]
    fn track_path_fits_music_root() {
        assert!(MUSIC_ROOT.len() < MAX_ROOT_PATH);
    }

    #[test]
    #[allow(clippy::arithmetic_side_effects)]
    fn track_path_fits_root_and_longest_name() {
        assert!(MAX_TRACK_PATH >= MAX_ROOT_PATH + MAX_TRACK_NAME);
    }

    #[test]
    fn long_press_is_longer_than_debounce() {
        assert!(LONG_PRESS_MS > DEBOUNCE_MS);
    }
}
