//! Running-statistics display.

use parking_lot::Mutex;

use crate::aggregate::TemperatureAccumulator;
use crate::reading::Reading;
use crate::view::View;

use super::DisplayElement;

/// Maintains running average/max/min temperature across every reading seen.
///
/// Statistics accumulate for the display's lifetime and are never reset.
/// Rendering before the first update yields an explicit empty view rather
/// than a division by zero.
#[derive(Debug, Default)]
pub struct StatisticsDisplay {
    accumulator: Mutex<TemperatureAccumulator>,
}

impl StatisticsDisplay {
    /// Create a display with an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }
}

impl DisplayElement for StatisticsDisplay {
    fn update(&self, reading: Reading) {
        self.accumulator.lock().record(reading.temperature);
    }

    fn render(&self) -> View {
        View::Statistics {
            stats: self.accumulator.lock().stats(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_no_data_before_first_update() {
        let display = StatisticsDisplay::new();
        assert_eq!(display.render(), View::Statistics { stats: None });
    }

    #[test]
    fn computes_running_stats_over_reference_sequence() {
        let display = StatisticsDisplay::new();
        display.update(Reading::new(80.0, 65.0, 30.4));
        display.update(Reading::new(82.0, 70.0, 29.2));
        display.update(Reading::new(78.0, 90.0, 29.2));

        let View::Statistics { stats } = display.render() else {
            panic!("wrong view kind");
        };
        let stats = stats.unwrap();
        assert_eq!(stats.average, 80.0);
        assert_eq!(stats.max, 82.0);
        assert_eq!(stats.min, 78.0);
    }

    #[test]
    fn only_temperature_contributes() {
        let display = StatisticsDisplay::new();
        display.update(Reading::new(50.0, 99.0, 31.0));

        let View::Statistics { stats } = display.render() else {
            panic!("wrong view kind");
        };
        let stats = stats.unwrap();
        assert_eq!(stats.average, 50.0);
        assert_eq!(stats.max, 50.0);
        assert_eq!(stats.min, 50.0);
    }
}
