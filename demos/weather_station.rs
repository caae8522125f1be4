//! Example: wiring a station to the three stock displays
//!
//! This is the driver/presentation layer that the library itself deliberately
//! does not contain: it constructs a station, registers displays, feeds it
//! the classic measurement sequence, and prints each rendered view.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example weather_station
//! ```
//!
//! Set `RUST_LOG=weatherwatch=trace` to watch the broadcasts happen.

use std::sync::Arc;

use weatherwatch::{
    CurrentConditionsDisplay, DisplayElement, ForecastDisplay, StatisticsDisplay, View,
    WeatherStation,
};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let station = WeatherStation::new();

    let current = Arc::new(CurrentConditionsDisplay::new());
    let statistics = Arc::new(StatisticsDisplay::new());
    let forecast = Arc::new(ForecastDisplay::new());

    station.register(current.clone());
    station.register(statistics.clone());
    station.register(forecast.clone());

    let sequence = [(80.0, 65.0, 30.4), (82.0, 70.0, 29.2), (78.0, 90.0, 29.2)];
    for (temperature, humidity, pressure) in sequence {
        station.set_measurements(temperature, humidity, pressure);
        println!("published {temperature}F / {humidity}% / {pressure}inHg");

        print_view(current.render());
        print_view(statistics.render());
        print_view(forecast.render());
        println!();
    }

    Ok(())
}

fn print_view(view: View) {
    match view {
        View::Current { conditions: Some(c) } => {
            println!("  current conditions: {}F degrees and {}% humidity", c.temperature, c.humidity);
        }
        View::Current { conditions: None } => {
            println!("  current conditions: (no reading yet)");
        }
        View::Statistics { stats: Some(s) } => {
            println!("  statistics avg/max/min = {}/{}/{}", s.average, s.max, s.min);
        }
        View::Statistics { stats: None } => {
            println!("  statistics: (no readings yet)");
        }
        View::Forecast { trend } => {
            println!("  forecast [{}]: {}", trend.symbol(), trend.description());
        }
    }
}
