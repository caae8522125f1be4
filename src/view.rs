//! View values rendered by displays.
//!
//! A view is the structured result of `Display::render` - a plain data value
//! consumed by whatever presentation layer sits outside the crate (console,
//! log, UI). Nothing in here performs output.

use serde::{Deserialize, Serialize};

/// The latest observed temperature/humidity pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Conditions {
    /// Temperature in degrees Fahrenheit.
    pub temperature: f64,
    /// Relative humidity in percent.
    pub humidity: f64,
}

/// Running temperature statistics over every reading seen so far.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureStats {
    /// Mean temperature across all readings.
    pub average: f64,
    /// Highest temperature seen.
    pub max: f64,
    /// Lowest temperature seen.
    pub min: f64,
}

/// Pressure trend relative to the previous reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    /// Pressure rose: improving weather on the way.
    Improving,
    /// Pressure unchanged: more of the same.
    Steady,
    /// Pressure fell: watch out for cooler, rainy weather.
    Cooling,
}

impl Trend {
    /// Returns a short symbol for display.
    pub fn symbol(&self) -> &'static str {
        match self {
            Trend::Improving => "+",
            Trend::Steady => "=",
            Trend::Cooling => "-",
        }
    }

    /// Returns a one-line human description of the trend.
    pub fn description(&self) -> &'static str {
        match self {
            Trend::Improving => "improving weather on the way",
            Trend::Steady => "more of the same",
            Trend::Cooling => "watch out for cooler, rainy weather",
        }
    }
}

/// A display's rendered view, tagged by display kind.
///
/// `Current` and `Statistics` carry `None` until the display has received its
/// first reading; `Forecast` is always defined because the trend tracker is
/// seeded with [`BASELINE_PRESSURE`](crate::aggregate::BASELINE_PRESSURE).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum View {
    /// Latest conditions snapshot from a [`CurrentConditionsDisplay`](crate::CurrentConditionsDisplay).
    Current {
        /// `None` before the first reading arrives.
        conditions: Option<Conditions>,
    },
    /// Running statistics from a [`StatisticsDisplay`](crate::StatisticsDisplay).
    Statistics {
        /// `None` before the first reading arrives; never a division by zero.
        stats: Option<TemperatureStats>,
    },
    /// Pressure trend from a [`ForecastDisplay`](crate::ForecastDisplay).
    Forecast {
        /// Trend of the most recent reading vs. the one before it.
        trend: Trend,
    },
}
