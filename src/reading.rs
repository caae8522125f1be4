//! The measurement triple published by a weather station.

use serde::{Deserialize, Serialize};

/// A single complete weather measurement.
///
/// Readings are produced as a whole triple; there is no way to publish a
/// partial reading, so a display never observes a half-updated measurement.
///
/// Units follow the station hardware: temperature in degrees Fahrenheit,
/// relative humidity in percent, barometric pressure in inches of mercury.
/// No physical-plausibility validation is performed; all arithmetic
/// downstream is total over any `f64` input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Temperature in degrees Fahrenheit.
    pub temperature: f64,
    /// Relative humidity in percent.
    pub humidity: f64,
    /// Barometric pressure in inches of mercury.
    pub pressure: f64,
}

impl Reading {
    /// Create a reading from its three fields.
    pub fn new(temperature: f64, humidity: f64, pressure: f64) -> Self {
        Self {
            temperature,
            humidity,
            pressure,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reading_round_trips_through_json() {
        let reading = Reading::new(80.0, 65.0, 30.4);
        let json = serde_json::to_string(&reading).unwrap();
        let back: Reading = serde_json::from_str(&json).unwrap();
        assert_eq!(back, reading);
    }

    #[test]
    fn reading_accepts_any_float() {
        // No validation by design: NaN and negative values pass through.
        let reading = Reading::new(f64::NAN, -40.0, 0.0);
        assert!(reading.temperature.is_nan());
        assert_eq!(reading.humidity, -40.0);
    }
}
