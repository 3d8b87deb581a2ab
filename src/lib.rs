//! Edge-triggered viewport resize tracking for frame loops.
//!
//! Instead of handling `resize` callbacks, code that runs once per frame asks a
//! [`ResizeTracker`] whether the viewport changed since it last asked:
//!
//! ```no_run
//! use resize_latch::{track_viewport, TrackerAttributes};
//!
//! let tracker = track_viewport(TrackerAttributes::default())?;
//! loop {
//!     if tracker.poll() {
//!         // recompute layout, resize the surface...
//!     }
//!     # break;
//! }
//! # Ok::<(), resize_latch::SetupError>(())
//! ```
//!
//! Any number of resizes between two polls are reported once. Trackers are independent values;
//! there is no global flag.
//!
//! On the Web (`wasm32-unknown-unknown`) [`track_viewport`] listens on the global `window`. On
//! other platforms there is no viewport to observe, so callers feed resizes in themselves, either
//! through a [`ManualSource`] or a [`ResizeTracker::notifier`].

pub use resize_latch_core::{
    error, latch, os_error, Latch, LatchSetter, ManualSource, NotSupportedError, OsError,
    Registration, ResizeCallback, ResizeSource, ResizeTracker, SetupError, Subscription,
    TrackerAttributes, RESIZE_EVENT,
};

mod platform;

pub use self::platform::track_viewport;

/// Web-specific functionality.
#[cfg(web_platform)]
pub mod web {
    pub use resize_latch_web::{track_resized, EventListenerHandle, ResizeFlag, WindowResizeSource};
}
