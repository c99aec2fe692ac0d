//! Playlist builder: one pass over a directory, keeping playable files.
//!
//! Enumerates every entry once, in storage order, and keeps non-directory
//! entries whose name carries an accepted audio suffix. Nothing here is
//! fatal: a directory that cannot be opened yields an empty playlist, an
//! enumeration error ends the scan with the tracks found so far.

use heapless::Vec;
use platform::{Dir, Storage};

use crate::playlist::Playlist;
use crate::scanner::Scanner;
use crate::track::{AudioFormat, Track};

/// Fluent configuration for a directory scan.
///
/// ```no_run
/// # async fn example<S: platform::Storage>(storage: &mut S) {
/// use library::{AudioFormat, DevicePlaylist, PlaylistBuilder};
/// let playlist: DevicePlaylist = PlaylistBuilder::new("/")
///     .accept(AudioFormat::Wav)
///     .build(storage)
///     .await;
/// # }
/// ```
pub struct PlaylistBuilder<'a> {
    dir: &'a str,
    formats: Vec<AudioFormat, 3>,
}

impl<'a> PlaylistBuilder<'a> {
    /// Scan `dir`. With no [`accept`](Self::accept) call only WAV is kept.
    pub fn new(dir: &'a str) -> Self {
        Self {
            dir,
            formats: Vec::new(),
        }
    }

    /// Also keep files of `format`.
    #[must_use]
    pub fn accept(mut self, format: AudioFormat) -> Self {
        if !self.formats.contains(&format) {
            // Capacity equals the number of formats; a new one always fits.
            self.formats.push(format).ok();
        }
        self
    }

    /// Directory being scanned.
    pub fn dir(&self) -> &str {
        self.dir
    }

    /// Whether a file called `name` would be kept.
    pub fn accepts(&self, name: &str) -> Option<AudioFormat> {
        let format = Scanner::format_for_name(name)?;
        let accepted = if self.formats.is_empty() {
            format == AudioFormat::Wav
        } else {
            self.formats.contains(&format)
        };
        accepted.then_some(format)
    }

    /// Enumerate the directory and build the playlist.
    pub async fn build<S: Storage, const N: usize>(&self, storage: &mut S) -> Playlist<N> {
        let mut playlist = Playlist::new();
        platform::info!("Scanning for audio files in: {}", self.dir);

        match storage.open_dir(self.dir).await {
            Ok(mut dir) => loop {
                let entry = match dir.next_entry().await {
                    Ok(Some(entry)) => entry,
                    Ok(None) => break,
                    Err(_) => {
                        platform::error!(
                            "-> Directory listing failed after {} tracks",
                            playlist.len()
                        );
                        break;
                    }
                };
                if entry.is_dir {
                    continue;
                }
                let Some(format) = self.accepts(entry.name.as_str()) else {
                    continue;
                };
                let Some(track) = Track::in_dir(self.dir, entry.name.as_str(), format) else {
                    platform::warn!("  Skipping {}: path too long", entry.name.as_str());
                    continue;
                };
                if playlist.push(track).is_err() {
                    platform::warn!("Playlist full at {} tracks, rest of directory ignored", N);
                    break;
                }
                platform::info!("  Found: {}", entry.name.as_str());
            },
            Err(_) => platform::error!("-> Failed to open directory {}", self.dir),
        }

        if playlist.is_empty() {
            platform::warn!("WARNING: No playable audio files found in {}", self.dir);
        }
        playlist
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::playlist::SmallPlaylist;
    use platform::mocks::MockStorage;

    fn paths<const N: usize>(list: &Playlist<N>) -> std::vec::Vec<&str> {
        list.iter().map(|t| t.path.as_str()).collect()
    }

    #[test]
    fn test_default_builder_accepts_wav_only() {
        let b = PlaylistBuilder::new("/");
        assert_eq!(b.accepts("a.wav"), Some(AudioFormat::Wav));
        assert_eq!(b.accepts("A.WAV"), Some(AudioFormat::Wav));
        assert_eq!(b.accepts("a.mp3"), None);
    }

    #[test]
    fn test_accept_adds_formats() {
        let b = PlaylistBuilder::new("/")
            .accept(AudioFormat::Mp3)
            .accept(AudioFormat::Mp3);
        assert_eq!(b.accepts("a.mp3"), Some(AudioFormat::Mp3));
        assert_eq!(b.accepts("a.wav"), None);
    }

    #[tokio::test]
    async fn test_build_keeps_enumeration_order_and_filters() {
        let mut storage = MockStorage::with_files(&["c.wav", "cover.jpg", "a.WAV", "notes.txt"]);
        storage.add_dir("sub.wav");
        storage.add_file("b.wav");
        let list: SmallPlaylist = PlaylistBuilder::new("/").build(&mut storage).await;
        assert_eq!(paths(&list), ["/c.wav", "/a.WAV", "/b.wav"]);
    }

    #[tokio::test]
    async fn test_build_open_failure_yields_empty() {
        let mut storage = MockStorage::with_files(&["a.wav"]);
        storage.fail_open_dir();
        let list: SmallPlaylist = PlaylistBuilder::new("/").build(&mut storage).await;
        assert!(list.is_empty());
    }

    #[tokio::test]
    async fn test_build_enumeration_error_keeps_partial_result() {
        let mut storage = MockStorage::with_files(&["a.wav", "b.wav", "c.wav"]);
        storage.fail_enumeration_after(2);
        let list: SmallPlaylist = PlaylistBuilder::new("/").build(&mut storage).await;
        assert_eq!(paths(&list), ["/a.wav", "/b.wav"]);
    }

    #[tokio::test]
    async fn test_build_stops_at_capacity() {
        let mut storage = MockStorage::with_files(&["1.wav", "2.wav", "3.wav"]);
        let list: Playlist<2> = PlaylistBuilder::new("/").build(&mut storage).await;
        assert_eq!(paths(&list), ["/1.wav", "/2.wav"]);
    }
}
