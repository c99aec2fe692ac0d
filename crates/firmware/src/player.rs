//! Cooperative polling loop.
//!
//! One [`Player::tick`] performs, strictly in sequence:
//!   1. sample the transport link and report connect/drop edges
//!   2. drain the accessory command queue, oldest first
//!   3. poll the input device until it has no more edges
//!   4. if playing and not paused, one decode-and-forward step
//!
//! Controller state is only ever mutated here. The accessory callback may
//! run in another execution context; it only touches the queue.

use core::future::Future;

use bluetooth::{CommandQueue, LinkMonitor};
use embassy_sync::blocking_mutex::raw::RawMutex;
use platform::{AudioEngine, InputDevice, Storage, StreamStatus, TransportSink};
use playback::{ControlEvent, Controller};

use crate::input::control_event;

/// The polling loop's state: controller, input device, link monitor and
/// the accessory queue it drains.
pub struct Player<'q, S, E, T, I, M, const N: usize, const Q: usize>
where
    S: Storage,
    E: AudioEngine<Source = S::File>,
    T: TransportSink,
    I: InputDevice,
    M: RawMutex,
{
    controller: Controller<S, E, T, N>,
    input: I,
    link: LinkMonitor,
    queue: &'q CommandQueue<M, Q>,
}

impl<'q, S, E, T, I, M, const N: usize, const Q: usize> Player<'q, S, E, T, I, M, N, Q>
where
    S: Storage,
    E: AudioEngine<Source = S::File>,
    T: TransportSink,
    I: InputDevice,
    M: RawMutex,
{
    /// Wrap a booted controller.
    pub fn new(controller: Controller<S, E, T, N>, input: I, queue: &'q CommandQueue<M, Q>) -> Self {
        Self {
            controller,
            input,
            link: LinkMonitor::new(),
            queue,
        }
    }

    /// The controller being driven.
    pub fn controller(&self) -> &Controller<S, E, T, N> {
        &self.controller
    }

    /// Mutable controller, for simulators and tests.
    pub fn controller_mut(&mut self) -> &mut Controller<S, E, T, N> {
        &mut self.controller
    }

    /// Mutable input device, for simulators and tests.
    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    /// Run one polling iteration. Returns the decode step's outcome, or
    /// `None` when no step was due.
    pub async fn tick(&mut self) -> Option<StreamStatus> {
        self.link.observe(self.controller.is_connected());

        while let Some(status) = self.queue.try_next() {
            self.controller.handle(ControlEvent::from(status)).await;
        }

        while let Some(edge) = self.input.poll() {
            if let Some(event) = control_event(edge) {
                self.controller.handle(event).await;
            }
        }

        self.controller.step().await
    }

    /// Tick until `pace` resolves to `false`.
    ///
    /// `pace` runs between ticks; it is where the caller yields to other
    /// tasks ([`yield_pace`] on the device) or sleeps (simulator).
    pub async fn run<F, P>(&mut self, mut pace: P)
    where
        P: FnMut() -> F,
        F: Future<Output = bool>,
    {
        loop {
            self.tick().await;
            if !pace().await {
                break;
            }
        }
    }
}

/// Device pacing: yield once to the executor, never stop.
pub async fn yield_pace() -> bool {
    embassy_futures::yield_now().await;
    true
}
