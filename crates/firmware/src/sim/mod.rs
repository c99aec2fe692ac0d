//! Desktop stand-ins for the device collaborators.
//!
//! | Collaborator    | Simulator            | Backing                          |
//! |-----------------|----------------------|----------------------------------|
//! | Storage         | `LocalFileStorage`   | host directory (`MUSIC_PATH`)    |
//! | Audio engine    | [`SimEngine`]        | reads the file in fixed chunks   |
//! | Transport sink  | [`SimSink`]          | link flag shared with the console|
//! | Input device    | [`SimInput`]         | stdin lines                      |
//!
//! The console runs on its own thread and invokes the registered status
//! callback from there, like a radio stack would.

pub mod console;
pub mod engine;
pub mod sink;

pub use console::{parse_command, spawn_console, ConsoleCommand, SimInput};
pub use engine::{SimEngine, SimEngineError, CHUNK_BYTES};
pub use sink::{SimSink, SimSinkError};
