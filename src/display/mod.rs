//! The display capability trait and its concrete implementations.

mod current;
mod forecast;
mod statistics;

pub use current::CurrentConditionsDisplay;
pub use forecast::ForecastDisplay;
pub use statistics::StatisticsDisplay;

use crate::reading::Reading;
use crate::view::View;

/// Capability interface for anything that subscribes to a weather station.
///
/// A display receives every published reading through [`update`](Self::update)
/// and exposes its derived state through [`render`](Self::render). Private
/// state lives behind the display's own interior mutability, so a display can
/// be shared as `Arc<dyn DisplayElement>` and updated through `&self` from any
/// thread. The station never touches a display's state directly.
pub trait DisplayElement: Send + Sync {
    /// Fold one reading into the display's private state.
    fn update(&self, reading: Reading);

    /// The display's current computed view.
    ///
    /// A plain data value; rendering it to console, log, or UI is the
    /// caller's concern.
    fn render(&self) -> View;
}
