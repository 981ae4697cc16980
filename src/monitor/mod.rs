//! Monitor service: owns the filter engine and drives the capture loop.
//!
//! One task `select`s between the next bus frame and a bounded key-poll
//! tick, so the engine is only ever touched from this task. That closes the
//! shared-state hazard between the interrupt-style frame path and command
//! processing: the interrupt side merely feeds a channel (see
//! [`crate::hal::FrameSource`]), and this runner is its single consumer.
use futures_util::{
    future::{select, Either},
    pin_mut,
};

use crate::command::{self, CommandEffect};
use crate::error::MonitorError;
use crate::filter::{ClassifyResult, FilterEngine, FilterMode};
use crate::frame::CanFrame;
use crate::hal::{Board, Console, FrameSource, KeySource, MonitorClock};
use crate::report::{self, FrameReport};

//==================================================================================Config
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Capture parameters announced at startup and the key-poll cadence.
pub struct MonitorConfig {
    /// Bus bit rate in bits per second, reported in the startup banner.
    /// The bus itself is configured outside this crate.
    pub bitrate_bps: u32,
    /// Bounded interval between key polls (ms). Keeps command latency low
    /// without busy-spinning; the loop never blocks indefinitely.
    pub key_poll_ms: u32,
}

impl Default for MonitorConfig {
    /// GMLAN single-wire CAN runs at 33.3 kbps; 20 ms key polling is well
    /// under human typing latency.
    fn default() -> Self {
        Self {
            bitrate_bps: 33_300,
            key_poll_ms: 20,
        }
    }
}

//==================================================================================Monitor
/// One cycle outcome of the select loop.
enum LoopEvent<E> {
    Frame(Result<CanFrame, E>),
    Tick,
}

/// Whether the key handler ended the session.
#[derive(PartialEq, Eq)]
enum KeyFlow {
    Continue,
    Reset,
}

/// Passive bus monitor wiring the codec, filter, formatter, and command
/// interpreter to the hardware seams.
pub struct Monitor<S, K, W, C, B, const CAP: usize>
where
    S: FrameSource,
    K: KeySource,
    W: Console,
    C: MonitorClock,
    B: Board,
{
    source: S,
    keys: K,
    console: W,
    clock: C,
    board: B,
    engine: FilterEngine<CAP>,
    config: MonitorConfig,
}

impl<S, K, W, C, B, const CAP: usize> Monitor<S, K, W, C, B, CAP>
where
    S: FrameSource,
    K: KeySource,
    W: Console,
    C: MonitorClock,
    B: Board,
{
    /// Assemble a monitor with an empty filter in `Reporting` mode.
    pub fn new(source: S, keys: K, console: W, clock: C, board: B, config: MonitorConfig) -> Self {
        Self {
            source,
            keys,
            console,
            clock,
            board,
            engine: FilterEngine::new(),
            config,
        }
    }

    /// Read access to the filter engine, mainly for assertions in tests.
    pub fn engine(&self) -> &FilterEngine<CAP> {
        &self.engine
    }

    //==================================================================================Run loop
    /// Print the startup sequence, then capture until a receive or console
    /// error occurs, or the reset command fires.
    ///
    /// After `ResetRequested` the board reset is invoked and `Ok(())` is
    /// returned for host-side mocks whose reset is advisory; on hardware the
    /// call does not return.
    pub async fn run(&mut self) -> Result<(), MonitorError<S::Error, W::Error>> {
        self.startup().await?;

        loop {
            let event = {
                let frame_future = self.source.recv();
                let tick_future = self.clock.delay_ms(self.config.key_poll_ms);
                pin_mut!(frame_future);
                pin_mut!(tick_future);

                match select(frame_future, tick_future).await {
                    Either::Left((result, pending_tick)) => {
                        drop(pending_tick);
                        LoopEvent::Frame(result)
                    }
                    Either::Right(((), pending_frame)) => {
                        drop(pending_frame);
                        LoopEvent::Tick
                    }
                }
            };

            match event {
                LoopEvent::Frame(Ok(frame)) => self.on_frame(frame).await?,
                LoopEvent::Frame(Err(err)) => return Err(MonitorError::Receive(err)),
                LoopEvent::Tick => {
                    // At most one character consumed per poll cycle.
                    if let Some(key) = self.keys.poll_key() {
                        if self.on_key(key).await? == KeyFlow::Reset {
                            return Ok(());
                        }
                    }
                }
            }
        }
    }

    /// Terminal clear, legend, capture banner, indicator sync.
    async fn startup(&mut self) -> Result<(), MonitorError<S::Error, W::Error>> {
        self.console
            .write(report::CLEAR_AND_HOME)
            .await
            .map_err(MonitorError::Console)?;
        self.write_line(report::LEGEND).await?;
        let banner = report::startup_banner(self.config.bitrate_bps);
        self.write_line(&banner).await?;
        self.board
            .set_learn_indicator(self.engine.mode() == FilterMode::Learning);
        Ok(())
    }

    /// Classify one received frame and emit whatever the verdict calls for.
    async fn on_frame(&mut self, frame: CanFrame) -> Result<(), MonitorError<S::Error, W::Error>> {
        match self.engine.classify(frame.id.raw()) {
            ClassifyResult::Added(position) => {
                let notice = report::filter_added(frame.id.raw(), position);
                self.write_line(&notice).await
            }
            ClassifyResult::Reported => {
                let line = FrameReport {
                    uptime_ms: self.clock.uptime_ms(),
                    frame: &frame,
                }
                .render();
                self.write_line(&line).await
            }
            // Learned while learning, or suppressed while reporting.
            ClassifyResult::Silent | ClassifyResult::Suppressed => Ok(()),
        }
    }

    /// Route one keypress through the command interpreter and render the
    /// effect.
    async fn on_key(&mut self, key: u8) -> Result<KeyFlow, MonitorError<S::Error, W::Error>> {
        match command::dispatch(key, &mut self.engine) {
            CommandEffect::ModeChanged(mode) => {
                self.board.set_learn_indicator(mode == FilterMode::Learning);
                self.write_line(report::mode_line(mode)).await?;
            }
            CommandEffect::Cleared => {
                self.write_line(report::FILTER_CLEARED).await?;
            }
            CommandEffect::Dump => {
                let header = report::dump_header(self.engine.len());
                self.write_line(&header).await?;
                for index in 0..self.engine.len() {
                    let entry = report::dump_entry(index + 1, self.engine.list()[index]);
                    self.write_line(&entry).await?;
                }
            }
            CommandEffect::ResetRequested => {
                #[cfg(feature = "defmt")]
                defmt::info!("Reset requested, restarting");
                self.board.system_reset();
                return Ok(KeyFlow::Reset);
            }
            CommandEffect::Unknown(key) => {
                self.write_line(&report::unknown_key(key)).await?;
            }
        }
        Ok(KeyFlow::Continue)
    }

    /// Write one CRLF-terminated line to the console.
    async fn write_line(&mut self, line: &str) -> Result<(), MonitorError<S::Error, W::Error>> {
        self.console
            .write(line)
            .await
            .map_err(MonitorError::Console)?;
        self.console
            .write("\r\n")
            .await
            .map_err(MonitorError::Console)
    }
}
