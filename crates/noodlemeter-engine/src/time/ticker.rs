use std::time::{Duration, Instant};

/// Scheduling capability injected into the meter.
pub trait Ticker {
    /// Requests a tick `after` from now, replacing any armed tick.
    fn arm(&mut self, after: Duration);

    /// Cancels the armed tick, if any.
    ///
    /// Cancel-before-fire: once disarmed, the tick must not be delivered
    /// even if it was already due.
    fn disarm(&mut self);
}

/// Deadline-backed [`Ticker`] the runtime loop waits on.
#[derive(Debug, Default)]
pub struct DeadlineTicker {
    deadline: Option<Instant>,
}

impl DeadlineTicker {
    pub fn new() -> Self {
        Self { deadline: None }
    }

    /// Instant the next tick is due, if one is armed.
    #[inline]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    #[inline]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }
}

impl Ticker for DeadlineTicker {
    fn arm(&mut self, after: Duration) {
        self.deadline = Some(Instant::now() + after);
    }

    fn disarm(&mut self) {
        self.deadline = None;
    }
}
