//! Platform-independent part of `resize-latch`.
//!
//! A [`ResizeTracker`] registers a listener on a [`ResizeSource`] and exposes the notifications
//! as an edge-triggered flag, so that a per-frame update loop can ask "did the viewport resize
//! since last frame?" instead of reacting to callbacks.

pub mod attributes;
pub mod error;
pub mod latch;
pub mod manual;
pub mod source;
pub mod tracker;

pub use attributes::{Registration, TrackerAttributes};
pub use error::{NotSupportedError, OsError, SetupError};
pub use latch::{Latch, LatchSetter};
pub use manual::ManualSource;
pub use source::{ResizeCallback, ResizeSource, Subscription};
pub use tracker::ResizeTracker;

/// Name of the viewport resize notification channel.
pub const RESIZE_EVENT: &str = "resize";
