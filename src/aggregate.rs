//! Pure accumulators behind the stateful displays.
//!
//! These types do the arithmetic and nothing else: no locking, no registry
//! awareness. A display wraps one of them behind its own mutex.

use crate::view::{TemperatureStats, Trend};

/// Baseline barometric pressure in inches of mercury (standard atmosphere).
///
/// Seeds the trend tracker so the very first reading has a defined comparison
/// result instead of an arbitrary one.
pub const BASELINE_PRESSURE: f64 = 29.92;

/// Running min/max/average over a sequence of temperatures.
///
/// Accumulates monotonically for its lifetime; there is no reset. Extremes
/// are seeded at the infinities so the first recorded value always replaces
/// them.
#[derive(Debug, Clone, Copy)]
pub struct TemperatureAccumulator {
    sum: f64,
    count: u64,
    max: f64,
    min: f64,
}

impl TemperatureAccumulator {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self {
            sum: 0.0,
            count: 0,
            max: f64::NEG_INFINITY,
            min: f64::INFINITY,
        }
    }

    /// Fold one temperature into the running statistics.
    pub fn record(&mut self, temperature: f64) {
        self.sum += temperature;
        self.count += 1;
        self.max = self.max.max(temperature);
        self.min = self.min.min(temperature);
    }

    /// Number of readings recorded so far.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Current statistics, or `None` if nothing has been recorded yet.
    ///
    /// The empty case is an explicit result rather than a division by zero.
    pub fn stats(&self) -> Option<TemperatureStats> {
        if self.count == 0 {
            return None;
        }
        Some(TemperatureStats {
            average: self.sum / self.count as f64,
            max: self.max,
            min: self.min,
        })
    }
}

impl Default for TemperatureAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

/// Tracks the two most recent pressures and classifies the change.
#[derive(Debug, Clone, Copy)]
pub struct PressureTrend {
    previous: f64,
    current: f64,
}

impl PressureTrend {
    /// Create a tracker seeded with [`BASELINE_PRESSURE`].
    pub fn new() -> Self {
        Self::with_baseline(BASELINE_PRESSURE)
    }

    /// Create a tracker with a custom baseline pressure.
    pub fn with_baseline(baseline: f64) -> Self {
        Self {
            previous: baseline,
            current: baseline,
        }
    }

    /// Shift the current pressure into history and store the new one.
    pub fn record(&mut self, pressure: f64) {
        self.previous = self.current;
        self.current = pressure;
    }

    /// Classify the latest change: strictly greater is `Improving`, equal is
    /// `Steady`, strictly less is `Cooling`.
    pub fn trend(&self) -> Trend {
        if self.current > self.previous {
            Trend::Improving
        } else if self.current == self.previous {
            Trend::Steady
        } else {
            Trend::Cooling
        }
    }
}

impl Default for PressureTrend {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_accumulator_has_no_stats() {
        let acc = TemperatureAccumulator::new();
        assert_eq!(acc.count(), 0);
        assert!(acc.stats().is_none());
    }

    #[test]
    fn stats_over_three_readings() {
        let mut acc = TemperatureAccumulator::new();
        for t in [80.0, 82.0, 78.0] {
            acc.record(t);
        }

        let stats = acc.stats().unwrap();
        assert_eq!(stats.average, 80.0);
        assert_eq!(stats.max, 82.0);
        assert_eq!(stats.min, 78.0);
    }

    #[test]
    fn first_reading_replaces_seeded_extremes() {
        let mut acc = TemperatureAccumulator::new();
        acc.record(-40.0);

        let stats = acc.stats().unwrap();
        assert_eq!(stats.max, -40.0);
        assert_eq!(stats.min, -40.0);
        assert_eq!(stats.average, -40.0);
    }

    #[test]
    fn accumulator_never_resets() {
        let mut acc = TemperatureAccumulator::new();
        acc.record(10.0);
        acc.record(20.0);
        assert_eq!(acc.count(), 2);
        acc.record(30.0);
        assert_eq!(acc.count(), 3);
        assert_eq!(acc.stats().unwrap().average, 20.0);
    }

    #[test]
    fn first_trend_compares_against_baseline() {
        let mut tracker = PressureTrend::new();
        tracker.record(30.4);
        // 30.4 > 29.92 baseline
        assert_eq!(tracker.trend(), Trend::Improving);
    }

    #[test]
    fn trend_sequence_from_reference_pressures() {
        let mut tracker = PressureTrend::new();
        let mut trends = Vec::new();
        for p in [30.4, 29.2, 29.2] {
            tracker.record(p);
            trends.push(tracker.trend());
        }
        assert_eq!(trends, vec![Trend::Improving, Trend::Cooling, Trend::Steady]);
    }

    #[test]
    fn custom_baseline_changes_first_comparison() {
        let mut tracker = PressureTrend::with_baseline(31.0);
        tracker.record(30.4);
        assert_eq!(tracker.trend(), Trend::Cooling);
    }

    #[test]
    fn unchanged_pressure_is_steady_before_any_reading() {
        let tracker = PressureTrend::new();
        assert_eq!(tracker.trend(), Trend::Steady);
    }
}
