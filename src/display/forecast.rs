//! Pressure-trend forecast display.

use parking_lot::Mutex;

use crate::aggregate::PressureTrend;
use crate::reading::Reading;
use crate::view::{Trend, View};

use super::DisplayElement;

/// Forecasts by comparing the latest pressure against the previous one.
///
/// The tracker starts at [`BASELINE_PRESSURE`](crate::aggregate::BASELINE_PRESSURE),
/// so the first reading is compared against standard atmosphere and always
/// yields a defined trend.
#[derive(Debug, Default)]
pub struct ForecastDisplay {
    tracker: Mutex<PressureTrend>,
}

impl ForecastDisplay {
    /// Create a display seeded with the standard-atmosphere baseline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a display with a custom baseline pressure.
    pub fn with_baseline(baseline: f64) -> Self {
        Self {
            tracker: Mutex::new(PressureTrend::with_baseline(baseline)),
        }
    }

    /// The current trend without going through [`View`].
    pub fn trend(&self) -> Trend {
        self.tracker.lock().trend()
    }
}

impl DisplayElement for ForecastDisplay {
    fn update(&self, reading: Reading) {
        self.tracker.lock().record(reading.pressure);
    }

    fn render(&self) -> View {
        View::Forecast {
            trend: self.trend(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steady_before_any_reading() {
        let display = ForecastDisplay::new();
        assert_eq!(display.render(), View::Forecast { trend: Trend::Steady });
    }

    #[test]
    fn trend_sequence_over_reference_pressures() {
        let display = ForecastDisplay::new();
        let mut trends = Vec::new();
        for p in [30.4, 29.2, 29.2] {
            display.update(Reading::new(0.0, 0.0, p));
            trends.push(display.trend());
        }
        // First reading compares against the 29.92 baseline.
        assert_eq!(trends, vec![Trend::Improving, Trend::Cooling, Trend::Steady]);
    }

    #[test]
    fn custom_baseline_flips_first_trend() {
        let display = ForecastDisplay::with_baseline(31.0);
        display.update(Reading::new(0.0, 0.0, 30.4));
        assert_eq!(display.trend(), Trend::Cooling);
    }

    #[test]
    fn temperature_and_humidity_are_ignored() {
        let display = ForecastDisplay::new();
        display.update(Reading::new(120.0, 100.0, 29.92));
        assert_eq!(display.trend(), Trend::Steady);
    }
}
