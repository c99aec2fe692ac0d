//! Accessory control channel: AVRCP transport statuses, the command queue
//! between the radio stack and the polling loop, and link-state tracking.
//!
//! This crate is `no_std` by default; it only uses `core` + `embassy-sync`.

#![cfg_attr(not(test), no_std)]
#![deny(clippy::unwrap_used)]
#![warn(missing_docs)]

pub mod avrcp;
pub mod link;
pub mod queue;

pub use avrcp::{AvrcpStatus, UnknownStatus};
pub use link::{LinkMonitor, LinkTransition};
pub use queue::{CommandQueue, QueuePush};
