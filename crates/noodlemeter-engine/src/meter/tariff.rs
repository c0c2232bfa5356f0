use std::time::Duration;

/// Fare schedule and startup behavior for a meter.
///
/// Fixed once the engine is built; there is no runtime reconfiguration.
#[derive(Debug, Clone)]
pub struct Tariff {
    /// Per-cycle cost increment while the cycle duration is above the floor.
    pub high_rate: f64,

    /// Per-cycle cost increment once the cycle duration has floored.
    pub low_rate: f64,

    /// Amount shaved off the cycle duration at each rollover.
    pub cycle_speedup: Duration,

    /// Cost shown when the meter starts.
    pub initial_cost: f64,

    /// Duration of the first cycle.
    pub initial_time: Duration,

    /// Floor for the cycle duration.
    pub minimum_duration: Duration,

    /// Nominal interval between countdown ticks.
    ///
    /// Most screens run at 60 Hz, which is 16.7 ms.
    pub refresh_time: Duration,

    /// Whether the meter starts running or paused.
    pub start_running: bool,
}

impl Default for Tariff {
    fn default() -> Self {
        Self {
            high_rate: 0.07,
            low_rate: 0.03,
            cycle_speedup: Duration::from_millis(100),
            initial_cost: 0.13,
            initial_time: Duration::from_millis(8000),
            minimum_duration: Duration::from_millis(500),
            refresh_time: Duration::from_millis(16),
            start_running: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tariff_matches_the_posted_schedule() {
        let t = Tariff::default();
        assert_eq!(t.high_rate, 0.07);
        assert_eq!(t.low_rate, 0.03);
        assert_eq!(t.cycle_speedup, Duration::from_millis(100));
        assert_eq!(t.initial_cost, 0.13);
        assert_eq!(t.initial_time, Duration::from_millis(8000));
        assert_eq!(t.minimum_duration, Duration::from_millis(500));
        assert_eq!(t.refresh_time, Duration::from_millis(16));
        assert!(t.start_running);
    }
}
