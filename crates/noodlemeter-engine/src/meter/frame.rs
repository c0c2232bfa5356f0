/// Meter state snapshot.
///
/// Published once at startup and after every tick or applied command, so
/// a display collaborator can paint the initial cost before the first
/// cycle completes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MeterFrame {
    /// Accumulated fare.
    pub cost: f64,

    /// Raw countdown within the current cycle, in milliseconds.
    pub time_remaining: i64,

    /// Whether the countdown is actively being advanced.
    pub running: bool,
}

impl MeterFrame {
    /// Converts the snapshot into presentation-ready values.
    pub fn display(&self) -> DisplayFrame {
        DisplayFrame {
            cost_text: format!("{:.2}", self.cost),
            countdown_ms: self.time_remaining.max(0),
            paused: !self.running,
        }
    }
}

/// Values ready for a presentation collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayFrame {
    /// Cost with exactly two decimal places.
    pub cost_text: String,

    /// Countdown clamped at zero; the raw value stays on [`MeterFrame`].
    pub countdown_ms: i64,

    /// Drives the currency-symbol/blink cue owned by the presentation layer.
    pub paused: bool,
}
