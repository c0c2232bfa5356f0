use std::time::Duration;

use crate::time::Ticker;

use super::frame::MeterFrame;
use super::tariff::Tariff;

/// Per-cycle increment tier.
///
/// Starts `High`; drops to `Low` at the rollover that floors the cycle
/// duration and never recovers.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CostRate {
    High,
    Low,
}

/// The fare meter state machine.
///
/// Two states: Paused (initial) and Running. While running, an external
/// periodic trigger calls [`tick`](MeterEngine::tick) every
/// `refresh_time`; the countdown decrements by the nominal step
/// regardless of actual elapsed wall time, and a rollover fires when it
/// crosses below zero. Scheduling lives behind the injected [`Ticker`],
/// so tests can drive ticks synchronously.
#[derive(Debug)]
pub struct MeterEngine {
    tariff: Tariff,
    cost: f64,
    rate: CostRate,
    cycle_duration: i64,
    time_remaining: i64,
    running: bool,
}

impl MeterEngine {
    /// Builds a paused meter showing the tariff's initial cost.
    pub fn new(tariff: Tariff) -> Self {
        let initial = ms(tariff.initial_time);
        Self {
            cost: tariff.initial_cost,
            rate: CostRate::High,
            cycle_duration: initial,
            time_remaining: initial,
            running: false,
            tariff,
        }
    }

    pub fn tariff(&self) -> &Tariff {
        &self.tariff
    }

    /// Accumulated fare. Non-decreasing.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn cost_rate(&self) -> CostRate {
        self.rate
    }

    /// Length of the current/next cycle in milliseconds. Non-increasing,
    /// floored at the tariff's minimum duration.
    pub fn cycle_duration(&self) -> i64 {
        self.cycle_duration
    }

    /// Countdown within the current cycle, in milliseconds.
    pub fn time_remaining(&self) -> i64 {
        self.time_remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Snapshot of the published values.
    pub fn frame(&self) -> MeterFrame {
        MeterFrame {
            cost: self.cost,
            time_remaining: self.time_remaining,
            running: self.running,
        }
    }

    /// Initial transition out of Paused. Alias of [`resume`](MeterEngine::resume).
    pub fn start(&mut self, ticker: &mut dyn Ticker) {
        self.resume(ticker);
    }

    /// Enters Running and arms the next tick.
    ///
    /// No-op while already running (the armed tick stays as it is);
    /// never touches cost, rate, or cycle duration.
    pub fn resume(&mut self, ticker: &mut dyn Ticker) {
        if self.running {
            return;
        }
        self.running = true;
        ticker.arm(self.tariff.refresh_time);
    }

    /// Enters Paused and disarms any pending tick, so a tick scheduled
    /// before the pause cannot land after it. No-op while paused.
    pub fn pause(&mut self, ticker: &mut dyn Ticker) {
        if !self.running {
            return;
        }
        self.running = false;
        ticker.disarm();
    }

    /// Pause if running, else resume. The sole user-facing control.
    pub fn toggle(&mut self, ticker: &mut dyn Ticker) {
        if self.running {
            self.pause(ticker);
        } else {
            self.resume(ticker);
        }
    }

    /// Advances the countdown by one nominal step and reports the frame.
    ///
    /// Ticks are meaningful only while running; a stray tick while paused
    /// changes nothing and reports the current frame. Re-arms the ticker
    /// afterwards, still-running permitting.
    pub fn tick(&mut self, ticker: &mut dyn Ticker) -> MeterFrame {
        if self.running {
            self.time_remaining -= ms(self.tariff.refresh_time);
            if self.time_remaining < 0 {
                self.rollover();
            }
            ticker.arm(self.tariff.refresh_time);
        }
        self.frame()
    }

    /// Ends the cycle: shortens the next one, floors it, downgrades the
    /// rate at the floor, adds one increment to the cost, and restarts
    /// the countdown.
    fn rollover(&mut self) {
        self.cycle_duration -= ms(self.tariff.cycle_speedup);
        // `<=` so the floor is reached and held, never overshot.
        if self.cycle_duration <= ms(self.tariff.minimum_duration) {
            self.cycle_duration = ms(self.tariff.minimum_duration);
            self.rate = CostRate::Low;
        }
        self.cost += self.increment();
        self.time_remaining = self.cycle_duration;
    }

    fn increment(&self) -> f64 {
        match self.rate {
            CostRate::High => self.tariff.high_rate,
            CostRate::Low => self.tariff.low_rate,
        }
    }
}

fn ms(d: Duration) -> i64 {
    d.as_millis() as i64
}
