//! Track list management: suffix filtering, playlist, directory scan.
//!
//! # Modules
//!
//! - [`track`]: `Track` record and `AudioFormat` enum
//! - [`playlist`]: `Playlist<N>` fixed-capacity ordered list
//! - [`scanner`]: extension filtering
//! - [`builder`]: `PlaylistBuilder`, the boot-time directory scan

#![cfg_attr(not(test), no_std)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
#![deny(clippy::expect_used)]
#![warn(missing_docs)]

pub mod builder;
pub mod playlist;
pub mod scanner;
pub mod track;

// Top-level re-exports for convenience
pub use builder::PlaylistBuilder;
pub use playlist::{DevicePlaylist, Playlist, PlaylistError, SmallPlaylist};
pub use scanner::Scanner;
pub use track::{AudioFormat, Track, TrackPath};
