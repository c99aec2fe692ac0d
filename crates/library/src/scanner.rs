//! Scanner: recognises playable files by their name suffix.

use crate::track::AudioFormat;

/// Stateless helper for extension filtering.
pub struct Scanner;

impl Scanner {
    /// Returns `true` when `ext` is a supported audio file extension.
    ///
    /// The comparison is **case-insensitive** and does not allocate.
    ///
    /// Supported extensions: `wav`, `mp3`, `flac`.
    pub fn is_supported_extension(ext: &str) -> bool {
        Self::format_for_extension(ext).is_some()
    }

    /// Derive an [`AudioFormat`] from a file extension, or return `None`.
    pub fn format_for_extension(ext: &str) -> Option<AudioFormat> {
        [AudioFormat::Wav, AudioFormat::Mp3, AudioFormat::Flac]
            .into_iter()
            .find(|f| ext.eq_ignore_ascii_case(f.extension()))
    }

    /// Format of a file called `name`, judged by the text after its last dot.
    ///
    /// `"a.WAV"` and `"a.wav"` are both WAV; `"wav"` (no dot) is not.
    pub fn format_for_name(name: &str) -> Option<AudioFormat> {
        let (_, ext) = name.rsplit_once('.')?;
        Self::format_for_extension(ext)
    }
}
