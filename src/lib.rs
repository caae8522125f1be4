//! # weatherwatch
//!
//! In-process observer plumbing for weather telemetry.
//!
//! A [`WeatherStation`] holds the current measurement triple and an ordered
//! registry of displays. Publishing a reading with
//! [`set_measurements`](WeatherStation::set_measurements) broadcasts it
//! synchronously to every registered display in registration order; each
//! display folds the reading into its own private state and exposes a
//! structured [`View`] on demand. The crate never performs output itself -
//! rendering a view to console, log, or UI belongs to the caller.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use weatherwatch::{
//!     CurrentConditionsDisplay, DisplayElement, ForecastDisplay, StatisticsDisplay,
//!     WeatherStation,
//! };
//!
//! let station = WeatherStation::new();
//!
//! let current = Arc::new(CurrentConditionsDisplay::new());
//! let statistics = Arc::new(StatisticsDisplay::new());
//! let forecast = Arc::new(ForecastDisplay::new());
//!
//! station.register(current.clone());
//! station.register(statistics.clone());
//! station.register(forecast.clone());
//!
//! station.set_measurements(80.0, 65.0, 30.4);
//! station.set_measurements(82.0, 70.0, 29.2);
//!
//! println!("{:?}", statistics.render());
//! ```
//!
//! ## Guarantees
//!
//! - **Atomic updates**: readings are replaced as a whole triple; a display
//!   never observes a partially updated measurement.
//! - **Ordered broadcast**: displays are notified in registration order,
//!   before `set_measurements` returns.
//! - **Snapshot-on-broadcast**: registering or removing displays from inside
//!   an update handler is well-defined; membership changes apply from the
//!   next broadcast.
//! - **No hidden faults**: a statistics view before any reading is an
//!   explicit empty value, not a division by zero; all numeric input is
//!   accepted unvalidated by design.
//! - **Thread-safe**: the station and every display are `Send + Sync`;
//!   display state is exclusively owned, so concurrent updates across
//!   different displays never contend.

pub mod aggregate;
mod display;
mod reading;
mod station;
mod view;

pub use display::{
    CurrentConditionsDisplay, DisplayElement, ForecastDisplay, StatisticsDisplay,
};
pub use reading::Reading;
pub use station::WeatherStation;
pub use view::{Conditions, TemperatureStats, Trend, View};
