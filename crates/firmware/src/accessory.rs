//! Accessory command entry point.
//!
//! The wireless stack delivers transport statuses through a plain function
//! pointer, possibly from its own task or interrupt. [`on_transport_status`]
//! is that function: it only enqueues, and the polling loop applies the
//! commands on its next tick.

use bluetooth::CommandQueue;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use platform::config::COMMAND_QUEUE_DEPTH;

/// Queue type shared between the radio callback and the polling loop.
pub type AccessoryQueue = CommandQueue<CriticalSectionRawMutex, COMMAND_QUEUE_DEPTH>;

/// The device's accessory command queue.
pub static ACCESSORY_QUEUE: AccessoryQueue = CommandQueue::new();

/// Transport-status callback registered with the transport sink at boot.
pub fn on_transport_status(status: u8) {
    ACCESSORY_QUEUE.on_status(status);
}
