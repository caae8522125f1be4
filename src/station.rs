//! The weather station: authoritative state plus the display registry.

use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use tracing::{debug, trace};

use crate::display::DisplayElement;
use crate::reading::Reading;

/// The subject side of the observer pair.
///
/// A station owns the current [`Reading`] and an ordered registry of
/// displays. [`set_measurements`](Self::set_measurements) replaces the whole
/// triple atomically and then broadcasts it synchronously to every registered
/// display, in registration order, before returning.
///
/// The station is `Send + Sync`: share it as `Arc<WeatherStation>` and call
/// it from any thread. Broadcasts are serialized by an internal lock, so each
/// display sees readings in publication order. Registry locks are not held
/// while display handlers run, which means a handler may register or remove
/// displays mid-broadcast; a handler must not publish recursively.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use weatherwatch::{CurrentConditionsDisplay, DisplayElement, WeatherStation};
///
/// let station = WeatherStation::new();
/// let current = Arc::new(CurrentConditionsDisplay::new());
/// station.register(current.clone());
///
/// station.set_measurements(80.0, 65.0, 30.4);
/// println!("{:?}", current.render());
/// ```
#[derive(Default)]
pub struct WeatherStation {
    displays: RwLock<Vec<Arc<dyn DisplayElement>>>,
    current: RwLock<Option<Reading>>,
    /// Serializes publication so displays observe per-station FIFO order.
    publish_lock: Mutex<()>,
}

/// Handle identity: two `Arc`s are the same display iff they share an
/// allocation. Cast to thin pointers first so vtable identity never factors
/// into the comparison.
fn same_handle(a: &Arc<dyn DisplayElement>, b: &Arc<dyn DisplayElement>) -> bool {
    std::ptr::eq(Arc::as_ptr(a) as *const (), Arc::as_ptr(b) as *const ())
}

impl WeatherStation {
    /// Create a station with no displays and no reading yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a display to the end of the registry.
    ///
    /// Duplicate registration is permitted: registering the same handle twice
    /// yields two notifications per published reading.
    pub fn register(&self, display: Arc<dyn DisplayElement>) {
        let mut displays = self.displays.write();
        displays.push(display);
        debug!(registered = displays.len(), "display registered");
    }

    /// Remove every occurrence of a display from the registry.
    ///
    /// Removing a handle that was never registered is a silent no-op. A
    /// removed display keeps whatever state it accumulated; it simply stops
    /// receiving notifications from the next broadcast onward.
    pub fn remove(&self, display: &Arc<dyn DisplayElement>) {
        let mut displays = self.displays.write();
        let before = displays.len();
        displays.retain(|d| !same_handle(d, display));
        let removed = before - displays.len();
        if removed == 0 {
            trace!("remove: display was not registered");
        } else {
            debug!(removed, remaining = displays.len(), "display removed");
        }
    }

    /// Number of registry entries (duplicates counted).
    pub fn display_count(&self) -> usize {
        self.displays.read().len()
    }

    /// The most recently published reading, if any.
    pub fn current(&self) -> Option<Reading> {
        *self.current.read()
    }

    /// Atomically replace the current reading and broadcast it.
    ///
    /// This is the sole mutation entry point; individual fields cannot be
    /// updated independently, so no display ever observes a partial triple.
    /// Returns only after every registered display has been notified.
    pub fn set_measurements(&self, temperature: f64, humidity: f64, pressure: f64) {
        let reading = Reading::new(temperature, humidity, pressure);
        let _publish = self.publish_lock.lock();
        *self.current.write() = Some(reading);
        debug!(temperature, humidity, pressure, "measurements changed");
        self.broadcast(reading);
    }

    /// Re-broadcast the current reading to every registered display.
    ///
    /// A no-op if nothing has been published yet or the registry is empty.
    pub fn notify_all(&self) {
        let _publish = self.publish_lock.lock();
        let Some(reading) = *self.current.read() else {
            trace!("notify_all: no reading published yet");
            return;
        };
        self.broadcast(reading);
    }

    /// Fan a reading out to a snapshot of the registry, in registration
    /// order. The snapshot makes register/remove from inside a handler
    /// well-defined: membership changes apply from the next broadcast.
    fn broadcast(&self, reading: Reading) {
        let snapshot: Vec<Arc<dyn DisplayElement>> = self.displays.read().clone();
        if snapshot.is_empty() {
            trace!("broadcast skipped: no displays registered");
            return;
        }
        trace!(displays = snapshot.len(), "broadcasting reading");
        for display in &snapshot {
            display.update(reading);
        }
    }
}

impl std::fmt::Debug for WeatherStation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherStation")
            .field("displays", &self.display_count())
            .field("current", &self.current())
            .finish()
    }
}
