//! # Web
//!
//! Browser backend for `resize-latch`, built on [`wasm-bindgen`][wasm_bindgen] and
//! [`web-sys`][web_sys].
//!
//! [`WindowResizeSource`] listens on the global `window`. Listeners are plain DOM event listeners
//! and run on the browser event loop, between animation frames. Each listener is owned by an
//! [`EventListenerHandle`] which removes it from the target on drop.
//!
//! JavaScript callers can use the exported `ResizeFlag` class and `trackResized()` directly.
//!
//! [wasm_bindgen]: https://docs.rs/wasm-bindgen

mod bindings;
mod event_handle;
mod window_source;

use resize_latch_core::{ResizeTracker, SetupError, TrackerAttributes};

pub use self::bindings::{track_resized, ResizeFlag};
pub use self::event_handle::EventListenerHandle;
pub use self::window_source::WindowResizeSource;

/// Create a tracker listening on the global `window`.
pub fn track_window(attributes: TrackerAttributes) -> Result<ResizeTracker, SetupError> {
    let source = WindowResizeSource::new()?;
    let mut tracker = ResizeTracker::new(attributes);
    tracker.setup(&source)?;
    Ok(tracker)
}
