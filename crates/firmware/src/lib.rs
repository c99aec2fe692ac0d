//! Soundbridge player firmware
//!
//! Streams audio files from removable storage to a paired wireless
//! accessory, controlled by local buttons and by the accessory itself.
//!
//! # Architecture
//!
//! ```text
//! Polling loop (player) ── bootstrap (boot)
//!         ↓
//! Playback controller (playback) ← accessory queue (bluetooth)
//!         ↓
//! Playlist (library)
//!         ↓
//! Collaborator traits (platform)
//! ```
//!
//! # Features
//!
//! - `hardware` - Device build: `defmt` logging over RTT, core parking on fatal errors
//! - `emulator` - Desktop simulator (tokio, tracing, local filesystem)
//! - `std` - Enable standard library (for emulator and testing)
//!
//! # Examples
//!
//! ## Simulator
//!
//! ```bash
//! MUSIC_PATH=~/Music cargo run -p firmware --features emulator
//! ```

#![cfg_attr(all(not(test), not(feature = "std")), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Critical correctness: deny these
#![deny(clippy::await_holding_lock)] // holding a blocking Mutex across .await is a bug
#![deny(unsafe_op_in_unsafe_fn)]
// Logging discipline
#![warn(clippy::print_stdout)] // prefer the log facade over println! in lib code
#![warn(clippy::dbg_macro)]
// Intentional allows for this codebase:
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::unused_async)]
#![allow(async_fn_in_trait)]

// RTT transport for defmt
#[cfg(feature = "hardware")]
use defmt_rtt as _;

pub mod accessory;
pub mod boot;
pub mod input;
pub mod player;

#[cfg(feature = "emulator")]
pub mod sim;

pub use accessory::{on_transport_status, AccessoryQueue, ACCESSORY_QUEUE};
pub use boot::{boot, BootConfig, BootError, BOOT_SEQUENCE_STEPS};
pub use input::control_event;
pub use player::Player;
