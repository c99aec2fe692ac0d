//! Track: core data type representing a single playable file.

use heapless::String;
use platform::config::MAX_TRACK_PATH;

/// Full storage path of a track.
pub type TrackPath = String<MAX_TRACK_PATH>;

/// Audio container/codec format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AudioFormat {
    /// Waveform Audio File Format
    Wav,
    /// MPEG Audio Layer III
    Mp3,
    /// Free Lossless Audio Codec
    Flac,
}

impl AudioFormat {
    /// Lowercase file extension for this format.
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Wav => "wav",
            Self::Mp3 => "mp3",
            Self::Flac => "flac",
        }
    }
}

/// A single playlist entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    /// Full path on the storage volume
    pub path: TrackPath,
    /// Container/codec format
    pub format: AudioFormat,
}

impl Track {
    /// Create a track for `path`.
    ///
    /// Returns `None` when the path exceeds [`MAX_TRACK_PATH`] bytes; a
    /// truncated path would open the wrong file.
    pub fn new(path: &str, format: AudioFormat) -> Option<Self> {
        let mut buf = TrackPath::new();
        buf.push_str(path).ok()?;
        Some(Track { path: buf, format })
    }

    /// Create a track for `name` inside directory `dir`.
    pub fn in_dir(dir: &str, name: &str, format: AudioFormat) -> Option<Self> {
        let mut buf = TrackPath::new();
        buf.push_str(dir).ok()?;
        if !dir.ends_with('/') {
            buf.push('/').ok()?;
        }
        buf.push_str(name).ok()?;
        Some(Track { path: buf, format })
    }

    /// File name without the directory part.
    pub fn name(&self) -> &str {
        match self.path.rsplit_once('/') {
            Some((_, name)) => name,
            None => self.path.as_str(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_track_in_root_dir() {
        let t = Track::in_dir("/", "a.wav", AudioFormat::Wav).expect("fits");
        assert_eq!(t.path.as_str(), "/a.wav");
        assert_eq!(t.name(), "a.wav");
    }

    #[test]
    fn test_track_in_sub_dir_adds_separator() {
        let t = Track::in_dir("/music", "b.wav", AudioFormat::Wav).expect("fits");
        assert_eq!(t.path.as_str(), "/music/b.wav");
        assert_eq!(t.name(), "b.wav");
    }

    #[test]
    fn test_track_without_dir_name_is_path() {
        let t = Track::new("c.wav", AudioFormat::Wav).expect("fits");
        assert_eq!(t.name(), "c.wav");
    }

    #[test]
    fn test_track_rejects_path_over_capacity() {
        let long = "z".repeat(MAX_TRACK_PATH);
        assert!(Track::new(&long, AudioFormat::Wav).is_some());
        assert!(Track::in_dir("/", &long, AudioFormat::Wav).is_none());
    }

    #[test]
    fn test_longest_entry_name_fits_under_root() {
        let name = "n".repeat(platform::config::MAX_TRACK_NAME);
        let t = Track::in_dir("/", &name, AudioFormat::Wav).expect("fits");
        assert_eq!(t.name(), name);
    }

    #[test]
    fn test_format_extension() {
        assert_eq!(AudioFormat::Wav.extension(), "wav");
        assert_eq!(AudioFormat::Flac.extension(), "flac");
    }
}
