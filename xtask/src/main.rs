// Desktop/tooling crate: unwrap/expect/panic acceptable in non-embedded code.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod playlist;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Soundbridge development tasks", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the playlist the device would build from a local folder
    Playlist {
        /// Folder standing in for the storage card root
        #[arg(long)]
        music_dir: std::path::PathBuf,
        /// Also list MP3 and FLAC files (the device plays WAV only)
        #[arg(long)]
        all_formats: bool,
    },
    /// Run all tests (unit, integration, and simulator)
    Test {
        /// Run only unit tests
        #[arg(long)]
        unit: bool,
        /// Run only integration tests
        #[arg(long)]
        integration: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Playlist {
            music_dir,
            all_formats,
        } => playlist::run(&music_dir, all_formats),
        Commands::Test { unit, integration } => test::run(unit, integration),
    }
}
