//! Stdin console for the simulator.
//!
//! | Line        | Effect                                   |
//! |-------------|------------------------------------------|
//! | `n`         | click Next                               |
//! | `N`         | long-press Next                          |
//! | `p`         | click Previous                           |
//! | `space`/` ` | click Play/Pause                         |
//! | `acc <code>`| accessory transport status (AVRCP code)  |
//! | `link up`   | restore the accessory link               |
//! | `link down` | drop the accessory link                  |
//! | `q`         | quit                                     |

use std::io::BufRead;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread::JoinHandle;

use platform::{Button, InputDevice, InputEvent, StatusCallback};

/// One parsed console line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Button edge
    Input(InputEvent),
    /// Raw accessory status
    Accessory(u8),
    /// Set the link level
    Link(bool),
    /// Stop the simulator
    Quit,
}

/// Parse one console line. Unknown lines yield `None`.
pub fn parse_command(line: &str) -> Option<ConsoleCommand> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line == " " {
        return Some(ConsoleCommand::Input(InputEvent::Click(Button::PlayPause)));
    }
    let mut words = line.split_whitespace();
    let command = match (words.next()?, words.next()) {
        ("n", None) => ConsoleCommand::Input(InputEvent::Click(Button::Next)),
        ("N", None) => ConsoleCommand::Input(InputEvent::LongPress(Button::Next)),
        ("p", None) => ConsoleCommand::Input(InputEvent::Click(Button::Previous)),
        ("space", None) => ConsoleCommand::Input(InputEvent::Click(Button::PlayPause)),
        ("acc", Some(code)) => ConsoleCommand::Accessory(parse_code(code)?),
        ("link", Some("up")) => ConsoleCommand::Link(true),
        ("link", Some("down")) => ConsoleCommand::Link(false),
        ("q" | "quit", None) => ConsoleCommand::Quit,
        _ => return None,
    };
    words.next().is_none().then_some(command)
}

fn parse_code(code: &str) -> Option<u8> {
    match code.strip_prefix("0x").or_else(|| code.strip_prefix("0X")) {
        Some(hex) => u8::from_str_radix(hex, 16).ok(),
        None => code.parse().ok(),
    }
}

/// Input device fed by the console thread.
pub struct SimInput {
    events: Receiver<InputEvent>,
}

impl SimInput {
    /// Input device and the sender the console feeds.
    pub fn channel() -> (Sender<InputEvent>, Self) {
        let (tx, rx) = mpsc::channel();
        (tx, Self { events: rx })
    }
}

impl InputDevice for SimInput {
    fn poll(&mut self) -> Option<InputEvent> {
        self.events.try_recv().ok()
    }
}

/// Read stdin on a background thread until EOF or `q`.
///
/// Button edges go to `buttons`; accessory statuses are delivered through
/// `callback` on the console thread; `link` is the sink's link flag; `quit`
/// is raised on exit.
pub fn spawn_console(
    buttons: Sender<InputEvent>,
    callback: Option<StatusCallback>,
    link: Arc<AtomicBool>,
    quit: Arc<AtomicBool>,
) -> JoinHandle<()> {
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            match parse_command(&line) {
                Some(ConsoleCommand::Input(edge)) => {
                    if buttons.send(edge).is_err() {
                        break;
                    }
                }
                Some(ConsoleCommand::Accessory(code)) => match callback {
                    Some(deliver) => deliver(code),
                    None => platform::warn!("No status callback registered"),
                },
                Some(ConsoleCommand::Link(up)) => link.store(up, Ordering::SeqCst),
                Some(ConsoleCommand::Quit) => break,
                None => platform::warn!("Unknown command: {}", line.as_str()),
            }
        }
        quit.store(true, Ordering::SeqCst);
    })
}
