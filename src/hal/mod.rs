//! Hardware seams of the monitor: frame ingress, key input, serial console,
//! clock, and board control. The traits let firmware plug in any HAL, and
//! tests substitute synthetic sources without touching the core logic.
//!
//! The bus interface is expected to run in monitor (listen-only) mode;
//! there is deliberately no way to transmit a frame through these traits.
use core::convert::Infallible;
use core::fmt::Debug;
use core::future::Future;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::channel::Receiver;
use embassy_time::{Instant, Timer};

use crate::frame::CanFrame;

//==================================================================================Traits
/// Contract to receive CAN frames asynchronously, one per bus message.
pub trait FrameSource {
    type Error: Debug;
    /// Retrieve the next available frame. Asynchronously waits until the
    /// bus delivers one.
    fn recv(&mut self) -> impl Future<Output = Result<CanFrame, Self::Error>>;
}

/// Single-character input, polled without blocking by the main loop.
pub trait KeySource {
    /// At most one key per call; `None` when nothing is pending.
    fn poll_key(&mut self) -> Option<u8>;
}

/// Text output channel (the serial console of the original firmware).
pub trait Console {
    type Error: Debug;
    /// Write raw text. Line termination is the caller's concern.
    fn write<'a>(
        &'a mut self,
        text: &'a str,
    ) -> impl Future<Output = Result<(), Self::Error>> + 'a;
}

/// Monotonic uptime source plus the bounded delay used between key polls.
pub trait MonitorClock {
    /// Asynchronously wait for `millis` milliseconds.
    fn delay_ms(&mut self, millis: u32) -> impl Future<Output = ()>;
    /// Milliseconds since boot; drives the report timestamps.
    fn uptime_ms(&self) -> u64;
}

/// Board-level side effects: the learn-mode indicator and the reset line.
pub trait Board {
    /// Drive the learn-mode indicator (an LED on the original hardware).
    fn set_learn_indicator(&mut self, on: bool);
    /// Unconditional, non-graceful reboot. Hardware implementations never
    /// return; host-side mocks may, so the signature stays total.
    fn system_reset(&mut self);
}

//==================================================================================Channel impls
// The interrupt-style frame handler is realized by the receive IRQ pushing
// into a channel; the runner side is just a `Receiver`. One consumer means
// every frame is processed exactly once.
impl<'ch, M: RawMutex, const N: usize> FrameSource for Receiver<'ch, M, CanFrame, N> {
    type Error = Infallible;

    async fn recv(&mut self) -> Result<CanFrame, Self::Error> {
        Ok(self.receive().await)
    }
}

impl<'ch, M: RawMutex, const N: usize> KeySource for Receiver<'ch, M, u8, N> {
    fn poll_key(&mut self) -> Option<u8> {
        self.try_receive().ok()
    }
}

//==================================================================================Embassy clock
/// [`MonitorClock`] backed by the embassy time driver.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbassyClock;

impl MonitorClock for EmbassyClock {
    async fn delay_ms(&mut self, millis: u32) {
        Timer::after_millis(millis as u64).await;
    }

    fn uptime_ms(&self) -> u64 {
        Instant::now().as_millis()
    }
}
