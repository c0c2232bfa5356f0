use std::time::Instant;

use anyhow::{Context, Result};

use crate::core::{App, AppControl};
use crate::meter::{MeterEngine, Tariff};
use crate::time::{DeadlineTicker, Ticker};

/// Loop configuration.
#[derive(Debug, Clone, Default)]
pub struct RuntimeConfig {
    pub tariff: Tariff,
}

/// Commands accepted by the running loop.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Command {
    Toggle,
    Pause,
    Resume,
    Exit,
}

/// Cloneable sender collaborators use to drive the meter.
#[derive(Debug, Clone)]
pub struct MeterHandle {
    tx: flume::Sender<Command>,
}

impl MeterHandle {
    /// Pause if running, else resume. The sole user-facing control.
    pub fn toggle(&self) {
        self.send(Command::Toggle);
    }

    pub fn pause(&self) {
        self.send(Command::Pause);
    }

    pub fn resume(&self) {
        self.send(Command::Resume);
    }

    /// Asks the loop to return.
    pub fn exit(&self) {
        self.send(Command::Exit);
    }

    fn send(&self, cmd: Command) {
        // A finished loop leaves every handle inert; nothing to report.
        let _ = self.tx.send(cmd);
    }
}

/// What woke the loop.
enum Event {
    Command(Command),
    TickDue,
}

/// Entry point for the meter loop.
pub struct Runtime;

impl Runtime {
    /// Runs the loop to completion with no command collaborator.
    pub fn run<A: App>(config: RuntimeConfig, app: A) -> Result<()> {
        Self::run_with(config, app, |_| {})
    }

    /// Runs the loop to completion.
    ///
    /// `connect` receives the [`MeterHandle`] before the first frame so
    /// command collaborators can be wired up.
    pub fn run_with<A, F>(config: RuntimeConfig, mut app: A, connect: F) -> Result<()>
    where
        A: App,
        F: FnOnce(MeterHandle),
    {
        let (tx, rx) = flume::unbounded();
        connect(MeterHandle { tx });

        let mut engine = MeterEngine::new(config.tariff);
        let mut ticker = DeadlineTicker::new();

        if engine.tariff().start_running {
            engine.start(&mut ticker);
        }

        // Initial publish, so the collaborator paints the starting cost
        // before the first cycle completes.
        if app.on_frame(&engine.frame()) == AppControl::Exit {
            return Ok(());
        }

        loop {
            let frame = match Self::next_event(&rx, &ticker)? {
                Event::Command(Command::Exit) => {
                    log::debug!("exit requested");
                    return Ok(());
                }
                Event::Command(Command::Toggle) => {
                    engine.toggle(&mut ticker);
                    engine.frame()
                }
                Event::Command(Command::Pause) => {
                    engine.pause(&mut ticker);
                    engine.frame()
                }
                Event::Command(Command::Resume) => {
                    engine.resume(&mut ticker);
                    engine.frame()
                }
                Event::TickDue => {
                    // The deadline is consumed; `tick` re-arms while running.
                    ticker.disarm();
                    engine.tick(&mut ticker)
                }
            };

            if app.on_frame(&frame) == AppControl::Exit {
                return Ok(());
            }
        }
    }

    /// Blocks until a command arrives or the armed deadline passes.
    ///
    /// Commands win ties: anything already queued is applied before a due
    /// tick, so a pause disarms the deadline before the tick can land.
    fn next_event(rx: &flume::Receiver<Command>, ticker: &DeadlineTicker) -> Result<Event> {
        let Some(deadline) = ticker.deadline() else {
            // Paused: only a command can wake the loop again.
            return rx
                .recv()
                .map(Event::Command)
                .context("all meter handles dropped while the meter is paused");
        };

        let now = Instant::now();
        if deadline <= now {
            return match rx.try_recv() {
                Ok(cmd) => Ok(Event::Command(cmd)),
                Err(_) => Ok(Event::TickDue),
            };
        }

        match rx.recv_timeout(deadline - now) {
            Ok(cmd) => Ok(Event::Command(cmd)),
            Err(flume::RecvTimeoutError::Timeout) => Ok(Event::TickDue),
            Err(flume::RecvTimeoutError::Disconnected) => {
                // No senders left; keep ticking on the deadline alone.
                std::thread::sleep(deadline.saturating_duration_since(Instant::now()));
                Ok(Event::TickDue)
            }
        }
    }
}
