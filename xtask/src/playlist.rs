//! xtask playlist: preview the boot-time scan on a local folder.
//!
//! Runs the same `PlaylistBuilder` the device runs, over `LocalFileStorage`,
//! so the printed order is the order the device would play.

use std::path::Path;

use anyhow::{bail, Context, Result};
use colored::Colorize;
use library::{AudioFormat, DevicePlaylist, PlaylistBuilder};
use platform::config::MUSIC_ROOT;
use platform::storage_local::LocalFileStorage;
use platform::Storage;

/// Entry point called from main.rs
pub fn run(music_dir: &Path, all_formats: bool) -> Result<()> {
    println!("Scanning: {}", music_dir.display());
    let tracks = preview(music_dir, all_formats)?;

    if tracks.is_empty() {
        println!("{}", "No playable audio files found".yellow().bold());
        return Ok(());
    }
    for (i, path) in tracks.iter().enumerate() {
        println!("  {:>3}  {}", i.saturating_add(1), path);
    }
    println!("{}", format!("✓ {} track(s)", tracks.len()).green());
    Ok(())
}

/// Track paths, in play order, that a device would list for `music_dir`.
pub(crate) fn preview(music_dir: &Path, all_formats: bool) -> Result<Vec<String>> {
    let root = music_dir
        .to_str()
        .with_context(|| format!("not valid UTF-8: {}", music_dir.display()))?;
    let mut storage = LocalFileStorage::new(root);

    if embassy_futures::block_on(storage.mount()).is_err() {
        bail!("not a directory: {}", music_dir.display());
    }

    let mut builder = PlaylistBuilder::new(MUSIC_ROOT).accept(AudioFormat::Wav);
    if all_formats {
        builder = builder.accept(AudioFormat::Mp3).accept(AudioFormat::Flac);
    }
    let playlist: DevicePlaylist = embassy_futures::block_on(builder.build(&mut storage));

    Ok(playlist.iter().map(|t| t.path.as_str().to_owned()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_preview_keeps_wav_in_name_order() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("b.wav"), b"RIFF").unwrap();
        fs::write(tmp.path().join("a.WAV"), b"RIFF").unwrap();
        fs::write(tmp.path().join("c.mp3"), b"ID3").unwrap();

        let tracks = preview(tmp.path(), false).unwrap();
        assert_eq!(tracks, ["/a.WAV", "/b.wav"]);
    }

    #[test]
    fn test_preview_all_formats() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.flac"), b"fLaC").unwrap();
        fs::write(tmp.path().join("b.mp3"), b"ID3").unwrap();
        fs::write(tmp.path().join("notes.txt"), b"").unwrap();

        let tracks = preview(tmp.path(), true).unwrap();
        assert_eq!(tracks, ["/a.flac", "/b.mp3"]);
    }

    #[test]
    fn test_preview_rejects_missing_dir() {
        let tmp = TempDir::new().unwrap();
        assert!(preview(&tmp.path().join("absent"), false).is_err());
    }
}
