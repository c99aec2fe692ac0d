//! Playback controller: executes [`apply`] transitions against the
//! collaborators.
//!
//! The controller owns the playlist, the [`PlayerState`] and the three
//! collaborators it drives. It is the only place where state changes; it is
//! driven from the single polling loop, one event or decode step at a time.

use library::Playlist;
use platform::{AudioEngine, Storage, StreamStatus, TransportSink};

use crate::dispatch::{apply, guard, EngineCommand};
use crate::event::ControlEvent;
use crate::state::{PlaybackStatus, PlayerState};

/// Playback controller over storage `S`, engine `E` and transport `T`.
pub struct Controller<S, E, T, const N: usize>
where
    S: Storage,
    E: AudioEngine<Source = S::File>,
    T: TransportSink,
{
    storage: S,
    engine: E,
    sink: T,
    playlist: Playlist<N>,
    state: PlayerState,
}

impl<S, E, T, const N: usize> Controller<S, E, T, N>
where
    S: Storage,
    E: AudioEngine<Source = S::File>,
    T: TransportSink,
{
    /// Controller at cursor 0, stopped.
    pub fn new(storage: S, engine: E, sink: T, playlist: Playlist<N>) -> Self {
        let state = PlayerState::new(playlist.len());
        Self {
            storage,
            engine,
            sink,
            playlist,
            state,
        }
    }

    /// Current state.
    pub fn state(&self) -> PlayerState {
        self.state
    }

    /// Track list built at boot.
    pub fn playlist(&self) -> &Playlist<N> {
        &self.playlist
    }

    /// Transport link level.
    pub fn is_connected(&self) -> bool {
        self.sink.is_connected()
    }

    /// Storage collaborator.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Audio engine collaborator.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Mutable audio engine, for simulators and tests.
    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// Transport sink collaborator.
    pub fn sink(&self) -> &T {
        &self.sink
    }

    /// Mutable transport sink, for simulators and tests.
    pub fn sink_mut(&mut self) -> &mut T {
        &mut self.sink
    }

    /// Apply one control event.
    pub async fn handle(&mut self, event: ControlEvent) {
        let connected = self.sink.is_connected();
        let before = self.state;
        let (next, commands) = apply(before, event, connected);
        self.state = next;

        if commands.is_empty() {
            if let Err(blocked) = guard(before, connected) {
                platform::info!("Ignoring {}: {}", event.as_str(), blocked.as_str());
            }
            return;
        }

        let stop_only = commands.as_slice() == [EngineCommand::Stop];
        for command in commands {
            match command {
                EngineCommand::Stop => {
                    self.engine.stop();
                    if stop_only {
                        platform::info!("Playback stopped.");
                    }
                }
                EngineCommand::SetPaused(paused) => {
                    self.engine.set_paused(paused);
                    if paused {
                        platform::info!("Playback paused.");
                    } else {
                        platform::info!("Playback resumed.");
                    }
                }
                EngineCommand::Begin { index } => self.begin(index).await,
            }
        }
    }

    /// Run one decode-and-forward step.
    ///
    /// Only steps while playing and the engine's pause flag is clear; returns
    /// `None` when no step was taken. Stream exhaustion advances to the next
    /// track exactly like a "next" press.
    pub async fn step(&mut self) -> Option<StreamStatus> {
        if self.state.status() != PlaybackStatus::Playing || self.engine.is_paused() {
            return None;
        }
        let status = self.engine.advance().await;
        if status == StreamStatus::Exhausted {
            platform::info!("Song finished, playing next.");
            self.handle(ControlEvent::TrackFinished).await;
        }
        Some(status)
    }

    /// Open the track at `index` and hand it to the engine.
    ///
    /// Failure leaves the controller stopped; there is no retry.
    async fn begin(&mut self, index: usize) {
        let Some(track) = self.playlist.get(index) else {
            self.state = self.state.with_status(PlaybackStatus::Stopped);
            return;
        };
        let path = track.path.as_str();

        let source = match self.storage.open_file(path).await {
            Ok(source) => source,
            Err(_) => {
                platform::error!("ERROR: Failed to open file: {}", path);
                self.state = self.state.with_status(PlaybackStatus::Stopped);
                return;
            }
        };

        match self.engine.begin(source).await {
            Ok(()) => platform::info!("Playing file: {}", path),
            Err(_) => {
                platform::error!("ERROR: Failed to start player for: {}", path);
                self.state = self.state.with_status(PlaybackStatus::Stopped);
            }
        }
    }
}
