//! Collaborator abstractions for the Soundbridge player
//!
//! This crate provides trait-based abstractions for the pre-built subsystems
//! the player is wired to, enabling development and testing without the
//! physical board, the radio stack, or the audio engine.
//!
//! # Architecture Layers
//!
//! ```text
//! Application Layer (firmware crate: boot + polling loop)
//!         ↓
//! Feature Layers (playback, library, bluetooth)
//!         ↓
//! Platform (this crate - trait abstractions, config, logging)
//!         ↓
//! Vendor subsystems (filesystem driver, wireless stack, decoder)
//! ```
//!
//! # Collaborators
//!
//! - [`Storage`] - Removable-media filesystem (directory scan + byte streams)
//! - [`TransportSink`] - Wireless link to the paired playback accessory
//! - [`AudioEngine`] - Decode-and-forward engine, one step per call
//! - [`InputDevice`] - Debounced button edges
//!
//! # Features
//!
//! - `std`: Local filesystem storage and mocks (for testing and the simulator)
//! - `tracing`: Log through `tracing`
//! - `defmt`: Log through `defmt`, derive `defmt::Format`
//!
//! # Example
//!
//! ```no_run
//! use platform::{Dir, Storage};
//!
//! async fn count_entries<S: Storage>(storage: &mut S) -> usize {
//!     let mut count = 0;
//!     if let Ok(mut dir) = storage.open_dir("/").await {
//!         while let Ok(Some(_)) = dir.next_entry().await {
//!             count += 1;
//!         }
//!     }
//!     count
//! }
//! ```

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // no panic!() in production code
#![deny(clippy::unreachable)] // no unreachable!() that isn't documented
#![deny(unused_must_use)]
// all Results must be handled
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(unsafe_op_in_unsafe_fn)] // unsafe fn body is not implicitly unsafe block
#![warn(clippy::print_stdout)] // prefer the log facade over println! in lib code
#![allow(clippy::doc_markdown)]
#![allow(clippy::must_use_candidate)] // accessors, callers decide
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(async_fn_in_trait)] // single-threaded cooperative loop, Send bounds not needed

pub mod config;
pub mod engine;
pub mod input;
pub mod log;
pub mod storage;
pub mod transport;

#[cfg(any(test, feature = "std"))]
pub mod storage_local;

#[cfg(any(test, feature = "std"))]
pub mod mocks;

// Re-export main collaborator traits
pub use engine::{AudioEngine, StreamStatus};
pub use input::{Button, InputDevice, InputEvent};
pub use storage::{Dir, DirEntry, EntryName, File, Storage};
pub use transport::{StatusCallback, TransportSink};
