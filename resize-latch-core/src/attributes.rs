use crate::RESIZE_EVENT;

/// What [`ResizeTracker::setup`](crate::ResizeTracker::setup) does when a listener is already
/// registered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Registration {
    /// Further setups are no-ops.
    #[default]
    Once,
    /// Every setup registers one more listener. All of them raise the same flag, so polling is
    /// unaffected; only the number of host listeners grows.
    Cumulative,
}

/// Attributes used when creating a tracker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerAttributes {
    pub event_type: &'static str,
    pub registration: Registration,
}

impl TrackerAttributes {
    /// Listen on a channel other than `resize`.
    #[inline]
    pub fn with_event_type(mut self, event_type: &'static str) -> Self {
        self.event_type = event_type;
        self
    }

    #[inline]
    pub fn with_registration(mut self, registration: Registration) -> Self {
        self.registration = registration;
        self
    }
}

impl Default for TrackerAttributes {
    #[inline]
    fn default() -> TrackerAttributes {
        TrackerAttributes { event_type: RESIZE_EVENT, registration: Registration::default() }
    }
}
