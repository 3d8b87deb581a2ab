use resize_latch_core::{ResizeTracker, SetupError, TrackerAttributes};

/// Create a tracker listening on the platform viewport.
///
/// ## Platform-specific
///
/// - **Web:** listens on the global `window`; fails with
///   [`SetupError::NotSupported`] in workers.
/// - **Others:** always fails with [`SetupError::NotSupported`].
pub fn track_viewport(attributes: TrackerAttributes) -> Result<ResizeTracker, SetupError> {
    imp::track_viewport(attributes)
}

#[cfg(web_platform)]
mod imp {
    use super::*;

    pub(super) fn track_viewport(
        attributes: TrackerAttributes,
    ) -> Result<ResizeTracker, SetupError> {
        resize_latch_web::track_window(attributes)
    }
}

#[cfg(not(web_platform))]
mod imp {
    use resize_latch_core::NotSupportedError;
    use tracing::debug;

    use super::*;

    pub(super) fn track_viewport(
        attributes: TrackerAttributes,
    ) -> Result<ResizeTracker, SetupError> {
        debug!(event_type = attributes.event_type, "no viewport on this platform");
        Err(NotSupportedError::new("no viewport on this platform").into())
    }
}
