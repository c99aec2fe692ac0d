//! Soundbridge desktop simulator.
//!
//! Runs the device boot sequence and polling loop against the host
//! filesystem, a simulated engine and a console-driven accessory.
//!
//! ```bash
//! MUSIC_PATH=~/Music RUST_LOG=debug cargo run -p firmware --features emulator
//! ```

// Desktop binary: printing and error context are fine here.
#![allow(clippy::print_stdout)]
#![allow(missing_docs)]

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use firmware::sim::{spawn_console, SimEngine, SimInput, SimSink};
use firmware::{boot, on_transport_status, BootConfig, Player, ACCESSORY_QUEUE};
use library::DevicePlaylist;
use platform::config::{ACCESSORY_NAME, MAX_TRACKS, MUSIC_ROOT};
use platform::storage_local::LocalFileStorage;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments for the simulator
#[derive(Parser, Debug)]
#[command(name = "simulator")]
#[command(about = "Soundbridge player simulator")]
#[command(version)]
struct Args {
    /// Host directory that stands in for the storage card
    #[arg(short, long, default_value = ".", env = "MUSIC_PATH")]
    music_path: PathBuf,

    /// Accessory name the transport starts under
    #[arg(short, long, default_value = ACCESSORY_NAME, env = "SIM_ACCESSORY_NAME")]
    accessory_name: String,

    /// Delay between polling ticks in milliseconds
    #[arg(long, default_value_t = 5)]
    tick_ms: u64,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let music_path = args
        .music_path
        .to_str()
        .context("music path is not valid UTF-8")?;

    let storage = LocalFileStorage::new(music_path);
    let sink = SimSink::new();
    let link = sink.link();
    let config = BootConfig {
        accessory_name: &args.accessory_name,
        music_root: MUSIC_ROOT,
    };

    let controller = boot::<_, _, _, MAX_TRACKS>(
        storage,
        SimEngine::new(),
        sink,
        &config,
        on_transport_status,
    )
    .await
    .with_context(|| format!("boot failed for {}", args.music_path.display()))?;

    let playlist: &DevicePlaylist = controller.playlist();
    println!("{} track(s). Keys: n, N (long), p, space, acc <code>, link up|down, q", playlist.len());

    let quit = Arc::new(AtomicBool::new(false));
    let (buttons, input) = SimInput::channel();
    let callback = controller.sink().status_callback();
    let _console = spawn_console(buttons, callback, link, Arc::clone(&quit));

    let tick = Duration::from_millis(args.tick_ms);
    let quit = &quit;
    let mut player = Player::new(controller, input, &ACCESSORY_QUEUE);
    player
        .run(move || async move {
            tokio::time::sleep(tick).await;
            !quit.load(Ordering::SeqCst)
        })
        .await;

    tracing::info!("Simulator stopped.");
    Ok(())
}
