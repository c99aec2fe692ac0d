//! Pure transition function.
//!
//! [`apply`] decides, from the current [`PlayerState`], one [`ControlEvent`]
//! and the sampled link level, what the next state is and which engine calls
//! realise it. It performs no I/O, so the whole transition table is testable
//! on the host without collaborators.
//!
//! | Event                     | Stopped         | Playing                | Paused                 |
//! |---------------------------|-----------------|------------------------|------------------------|
//! | `ClickNext` / `SkipNext`  | begin cursor    | next, stop + begin     | next, stop + begin     |
//! | `ClickPrev` / `SkipPrev`  | no-op           | prev, stop + begin     | prev, stop + begin     |
//! | `PlayOrResume`            | begin cursor    | no-op                  | resume                 |
//! | `Pause`                   | no-op           | pause                  | resume                 |
//! | `ClickPlayPause`          | begin cursor    | pause                  | resume                 |
//! | `Stop` / `LongPressNext`  | no-op           | stop                   | stop                   |
//! | `Select(i)`               | begin `i`       | stop + begin `i`       | stop + begin `i`       |
//! | `TrackFinished`           | no-op           | next, stop + begin     | next, stop + begin     |
//!
//! Every begin, pause and resume is blocked when the playlist is empty or the
//! accessory link is down; blocked events leave the state untouched. Stop is
//! never blocked. `TrackFinished` with the link down stops instead of
//! advancing.

use heapless::Vec;

use crate::event::ControlEvent;
use crate::state::{PlaybackStatus, PlayerState};

/// Upper bound on engine calls per transition ("stop, then begin").
pub const MAX_COMMANDS: usize = 2;

/// One call into the audio engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EngineCommand {
    /// Halt the current track.
    Stop,
    /// Open the track at `index` and start decoding it.
    Begin {
        /// Playlist index
        index: usize,
    },
    /// Set (`true`) or clear (`false`) the pause flag.
    SetPaused(bool),
}

/// Engine calls produced by one transition, in execution order.
pub type Commands = Vec<EngineCommand, MAX_COMMANDS>;

/// Why a start/pause/resume request was not acted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Blocked {
    /// No tracks were found at boot.
    EmptyPlaylist,
    /// The accessory link is down.
    NotConnected,
}

impl Blocked {
    /// Log label.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EmptyPlaylist => "playlist is empty",
            Self::NotConnected => "accessory not connected",
        }
    }
}

/// Precondition shared by every engine begin, pause and resume.
pub fn guard(state: PlayerState, connected: bool) -> Result<(), Blocked> {
    if state.is_empty() {
        Err(Blocked::EmptyPlaylist)
    } else if !connected {
        Err(Blocked::NotConnected)
    } else {
        Ok(())
    }
}

fn commands(list: &[EngineCommand]) -> Commands {
    Commands::from_slice(list).unwrap_or_default()
}

fn unchanged(state: PlayerState) -> (PlayerState, Commands) {
    (state, Commands::new())
}

/// Start the track under the cursor, stopping the loaded one first.
fn begin_at(state: PlayerState) -> (PlayerState, Commands) {
    let begin = EngineCommand::Begin {
        index: state.cursor(),
    };
    let list = if state.status().is_active() {
        commands(&[EngineCommand::Stop, begin])
    } else {
        commands(&[begin])
    };
    (state.with_status(PlaybackStatus::Playing), list)
}

fn stop(state: PlayerState) -> (PlayerState, Commands) {
    if state.status().is_active() {
        (
            state.with_status(PlaybackStatus::Stopped),
            commands(&[EngineCommand::Stop]),
        )
    } else {
        unchanged(state)
    }
}

fn set_paused(state: PlayerState, paused: bool) -> (PlayerState, Commands) {
    let status = if paused {
        PlaybackStatus::Paused
    } else {
        PlaybackStatus::Playing
    };
    (
        state.with_status(status),
        commands(&[EngineCommand::SetPaused(paused)]),
    )
}

/// Compute the transition for `event` from `state`.
///
/// `connected` is the transport link level sampled by the caller. Returns
/// the next state and the engine calls to execute, in order; an empty list
/// means the event was a no-op.
pub fn apply(
    state: PlayerState,
    event: ControlEvent,
    connected: bool,
) -> (PlayerState, Commands) {
    use PlaybackStatus::{Paused, Playing, Stopped};

    match event {
        ControlEvent::Stop | ControlEvent::LongPressNext => return stop(state),
        ControlEvent::TrackFinished if state.status().is_active() && !connected => {
            return stop(state);
        }
        _ => {}
    }

    if guard(state, connected).is_err() {
        return unchanged(state);
    }

    match (event, state.status()) {
        (ControlEvent::ClickNext | ControlEvent::SkipNext, Stopped) => begin_at(state),
        (ControlEvent::ClickPrev | ControlEvent::SkipPrev | ControlEvent::TrackFinished, Stopped) => {
            unchanged(state)
        }
        (ControlEvent::ClickNext | ControlEvent::SkipNext | ControlEvent::TrackFinished, _) => {
            begin_at(state.advanced())
        }
        (ControlEvent::ClickPrev | ControlEvent::SkipPrev, _) => begin_at(state.retreated()),

        (ControlEvent::PlayOrResume | ControlEvent::ClickPlayPause, Stopped) => begin_at(state),
        (ControlEvent::PlayOrResume, Playing) => unchanged(state),
        (ControlEvent::Pause, Stopped) => unchanged(state),
        (ControlEvent::Pause | ControlEvent::ClickPlayPause, Playing) => set_paused(state, true),
        (ControlEvent::PlayOrResume | ControlEvent::Pause | ControlEvent::ClickPlayPause, Paused) => {
            set_paused(state, false)
        }

        (ControlEvent::Select(index), _) => match state.selecting(index) {
            Some(selected) => begin_at(selected),
            None => unchanged(state),
        },

        (ControlEvent::Stop | ControlEvent::LongPressNext, _) => stop(state),
    }
}
