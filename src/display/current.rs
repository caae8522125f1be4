//! Latest-conditions display.

use parking_lot::Mutex;

use crate::reading::Reading;
use crate::view::{Conditions, View};

use super::DisplayElement;

/// Tracks the most recent temperature and humidity, discarding pressure.
///
/// No aggregation: each update overwrites the previous pair in O(1).
#[derive(Debug, Default)]
pub struct CurrentConditionsDisplay {
    latest: Mutex<Option<Conditions>>,
}

impl CurrentConditionsDisplay {
    /// Create a display with no conditions recorded yet.
    pub fn new() -> Self {
        Self::default()
    }
}

impl DisplayElement for CurrentConditionsDisplay {
    fn update(&self, reading: Reading) {
        *self.latest.lock() = Some(Conditions {
            temperature: reading.temperature,
            humidity: reading.humidity,
        });
    }

    fn render(&self) -> View {
        View::Current {
            conditions: *self.latest.lock(),
        }
    }
}
