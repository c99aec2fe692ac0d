//! Playback controller: status and cursor state, control events, the pure
//! transition function and the controller that drives the audio engine.
//!
//! # Modules
//!
//! - [`state`]: `PlayerState` (cursor + `PlaybackStatus`)
//! - [`event`]: `ControlEvent`, the single inbound event type
//! - [`dispatch`]: `apply(state, event, connected) -> (state, commands)`
//! - [`controller`]: `Controller`, executes transitions against collaborators
#![cfg_attr(not(test), no_std)]
#![deny(clippy::unwrap_used)]
#![warn(missing_docs)]
#![allow(async_fn_in_trait)]

pub mod controller;
pub mod dispatch;
pub mod event;
pub mod state;

pub use controller::Controller;
pub use dispatch::{apply, guard, Blocked, Commands, EngineCommand};
pub use event::ControlEvent;
pub use state::{PlaybackStatus, PlayerState};
