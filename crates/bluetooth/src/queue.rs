//! Bounded hand-off of accessory commands from the radio stack.
//!
//! The wireless stack invokes its status callback from its own context, which
//! must not touch playback state. The callback only decodes the byte and
//! pushes it here; the polling loop drains the queue at the start of every
//! tick and applies the commands in arrival order.
//!
//! Backed by an `embassy_sync::channel::Channel`, so it can live in a
//! `static` and be shared between the callback and the loop without locks on
//! the caller side. On the device use `CriticalSectionRawMutex`; single
//! threaded host tests can use `NoopRawMutex`.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::channel::Channel;

use crate::avrcp::AvrcpStatus;

/// Result of offering a raw status byte to the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum QueuePush {
    /// Decoded and queued.
    Queued(AvrcpStatus),
    /// Code has no mapping; nothing queued.
    Unrecognized(u8),
    /// Queue full; command dropped.
    Dropped(AvrcpStatus),
}

/// Fixed-depth FIFO of decoded accessory commands.
pub struct CommandQueue<M: RawMutex, const N: usize> {
    channel: Channel<M, AvrcpStatus, N>,
}

impl<M: RawMutex, const N: usize> CommandQueue<M, N> {
    /// Create an empty queue. Usable in `static` initialisers.
    pub const fn new() -> Self {
        Self {
            channel: Channel::new(),
        }
    }

    /// Status-callback entry point.
    ///
    /// Never blocks: unknown codes are logged and ignored, and a full queue
    /// drops the newest command with a warning.
    pub fn on_status(&self, raw: u8) -> QueuePush {
        let status = match AvrcpStatus::from_raw(raw) {
            Ok(status) => status,
            Err(_) => {
                platform::warn!("AVRCP: ignoring unrecognized status {}", raw);
                return QueuePush::Unrecognized(raw);
            }
        };

        platform::info!("AVRCP: {}", status.as_str());
        match self.channel.try_send(status) {
            Ok(()) => QueuePush::Queued(status),
            Err(_) => {
                platform::warn!("AVRCP: command queue full, dropping {}", status.as_str());
                QueuePush::Dropped(status)
            }
        }
    }

    /// Next queued command, oldest first.
    pub fn try_next(&self) -> Option<AvrcpStatus> {
        self.channel.try_receive().ok()
    }

    /// Number of commands waiting.
    pub fn len(&self) -> usize {
        self.channel.len()
    }

    /// `true` when nothing is waiting.
    pub fn is_empty(&self) -> bool {
        self.channel.is_empty()
    }
}

impl<M: RawMutex, const N: usize> Default for CommandQueue<M, N> {
    fn default() -> Self {
        Self::new()
    }
}
