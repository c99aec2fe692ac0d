//! Playlist: fixed-capacity, ordered list of playable tracks.
//!
//! Built once at boot from a directory scan and read-only afterwards. The
//! order is the storage enumeration order.

use crate::track::Track;
use heapless::Vec;
use platform::config::MAX_TRACKS;

/// Error type for playlist operations.
#[derive(Debug, PartialEq, Eq)]
pub enum PlaylistError {
    /// The playlist has reached its compile-time capacity.
    Full,
}

impl core::fmt::Display for PlaylistError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Full => f.write_str("playlist is full"),
        }
    }
}

/// A fixed-capacity, ordered list of [`Track`] entries.
pub struct Playlist<const N: usize> {
    tracks: Vec<Track, N>,
}

/// Alias for the device playlist.
pub type DevicePlaylist = Playlist<MAX_TRACKS>;

/// Alias used in tests (capacity 8).
pub type SmallPlaylist = Playlist<8>;

impl<const N: usize> Playlist<N> {
    /// Create an empty playlist.
    pub const fn new() -> Self {
        Playlist { tracks: Vec::new() }
    }

    /// Append `track`.
    ///
    /// Returns `Err(PlaylistError::Full)` when capacity `N` is exhausted.
    pub fn push(&mut self, track: Track) -> Result<(), PlaylistError> {
        self.tracks.push(track).map_err(|_| PlaylistError::Full)
    }

    /// Return the track at zero-based `pos`, or `None`.
    pub fn get(&self, pos: usize) -> Option<&Track> {
        self.tracks.get(pos)
    }

    /// Number of tracks.
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Returns `true` when there is nothing to play.
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Iterate in play order.
    pub fn iter(&self) -> impl Iterator<Item = &Track> {
        self.tracks.iter()
    }
}

impl<const N: usize> Default for Playlist<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::track::{AudioFormat, Track};

    fn make_track(path: &str) -> Track {
        Track::new(path, AudioFormat::Wav).expect("short path")
    }

    #[test]
    fn test_playlist_starts_empty() {
        let list = SmallPlaylist::new();
        assert_eq!(list.len(), 0);
        assert!(list.is_empty());
    }

    #[test]
    fn test_playlist_keeps_insertion_order() {
        let mut list = SmallPlaylist::new();
        list.push(make_track("/b.wav")).expect("push");
        list.push(make_track("/a.wav")).expect("push");
        let names: std::vec::Vec<_> = list.iter().map(Track::name).collect();
        assert_eq!(names, ["b.wav", "a.wav"]);
    }

    #[test]
    fn test_playlist_full_returns_err() {
        let mut list = Playlist::<2>::new();
        list.push(make_track("/1.wav")).expect("room");
        list.push(make_track("/2.wav")).expect("room");
        let err = list.push(make_track("/3.wav")).unwrap_err();
        assert_eq!(err, PlaylistError::Full);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_playlist_get_by_position() {
        let mut list = SmallPlaylist::new();
        list.push(make_track("/first.wav")).expect("push");
        let t = list.get(0).expect("should have entry at 0");
        assert_eq!(t.path.as_str(), "/first.wav");
        assert!(list.get(1).is_none());
    }
}
