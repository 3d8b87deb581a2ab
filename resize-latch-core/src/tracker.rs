//! The resize flag tracker.

use tracing::{debug, trace};

use crate::attributes::{Registration, TrackerAttributes};
use crate::error::SetupError;
use crate::latch::{Latch, LatchSetter};
use crate::source::{ResizeSource, Subscription};

/// Turns resize notifications into a flag that a frame loop can poll.
///
/// The flag is raised by every notification and cleared by [`poll`](Self::poll), so a poll
/// reports whether at least one resize happened since the previous poll. Dropping the tracker
/// unregisters its listeners.
#[derive(Debug)]
pub struct ResizeTracker {
    attributes: TrackerAttributes,
    latch: Latch,
    subscriptions: Vec<Subscription>,
}

impl ResizeTracker {
    pub fn new(attributes: TrackerAttributes) -> Self {
        Self { attributes, latch: Latch::new(), subscriptions: Vec::new() }
    }

    pub fn attributes(&self) -> &TrackerAttributes {
        &self.attributes
    }

    /// Register a listener on `source` that raises the flag.
    ///
    /// With [`Registration::Once`] this is a no-op once a listener is registered.
    pub fn setup<S: ResizeSource + ?Sized>(&mut self, source: &S) -> Result<(), SetupError> {
        if self.attributes.registration == Registration::Once && self.is_registered() {
            debug!(event_type = self.attributes.event_type, "listener already registered");
            return Ok(());
        }

        let event_type = self.attributes.event_type;
        let setter = self.latch.setter();
        let subscription = source.subscribe(
            event_type,
            Box::new(move || {
                if setter.set() {
                    trace!(event_type, "resize flag raised");
                }
            }),
        )?;
        self.subscriptions.push(subscription);

        debug!(event_type, listeners = self.subscriptions.len(), "registered resize listener");
        Ok(())
    }

    /// Whether a resize happened since the last poll. Clears the flag.
    pub fn poll(&self) -> bool {
        let resized = self.latch.get_and_reset();
        if resized {
            trace!(event_type = self.attributes.event_type, "polled resize");
        }
        resized
    }

    /// Read the flag without clearing it.
    pub fn peek(&self) -> bool {
        self.latch.is_set()
    }

    /// A handle for raising the flag from a custom push source.
    pub fn notifier(&self) -> LatchSetter {
        self.latch.setter()
    }

    pub fn is_registered(&self) -> bool {
        !self.subscriptions.is_empty()
    }

    pub fn listener_count(&self) -> usize {
        self.subscriptions.len()
    }

    /// Unregister every listener. The flag keeps its current value.
    pub fn teardown(&mut self) {
        if self.subscriptions.is_empty() {
            return;
        }
        debug!(
            event_type = self.attributes.event_type,
            listeners = self.subscriptions.len(),
            "unregistering resize listeners"
        );
        self.subscriptions.clear();
    }
}

impl Default for ResizeTracker {
    fn default() -> Self {
        Self::new(TrackerAttributes::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manual::ManualSource;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    }

    fn tracked() -> (ManualSource, ResizeTracker) {
        init_tracing();
        let source = ManualSource::new();
        let mut tracker = ResizeTracker::default();
        tracker.setup(&source).unwrap();
        (source, tracker)
    }

    #[test]
    fn poll_without_setup_is_false() {
        let tracker = ResizeTracker::default();
        assert!(!tracker.poll());
        assert!(!tracker.is_registered());
    }

    #[test]
    fn poll_reports_and_clears() {
        let (source, tracker) = tracked();
        assert!(!tracker.poll());

        source.resize();
        assert!(tracker.peek());
        assert!(tracker.poll());
        assert!(!tracker.peek());
        assert!(!tracker.poll());
    }

    #[test]
    fn bursts_coalesce() {
        let (source, tracker) = tracked();
        for _ in 0..5 {
            source.resize();
        }
        assert!(tracker.poll());
        assert!(!tracker.poll());
    }

    #[test]
    fn repeated_setup_registers_once_by_default() {
        let (source, mut tracker) = tracked();
        tracker.setup(&source).unwrap();
        tracker.setup(&source).unwrap();
        assert_eq!(tracker.listener_count(), 1);
        assert_eq!(source.listener_count(), 1);
        assert_eq!(source.resize(), 1);
    }

    #[test]
    fn cumulative_setup_stacks_listeners() {
        init_tracing();
        let source = ManualSource::new();
        let mut tracker = ResizeTracker::new(
            TrackerAttributes::default().with_registration(Registration::Cumulative),
        );
        tracker.setup(&source).unwrap();
        tracker.setup(&source).unwrap();
        assert_eq!(tracker.listener_count(), 2);
        assert_eq!(source.resize(), 2);

        assert!(tracker.poll());
        assert!(!tracker.poll());
    }

    #[test]
    fn custom_event_type() {
        init_tracing();
        let source = ManualSource::new();
        let mut tracker =
            ResizeTracker::new(TrackerAttributes::default().with_event_type("orientationchange"));
        tracker.setup(&source).unwrap();

        source.resize();
        assert!(!tracker.poll());
        source.dispatch("orientationchange");
        assert!(tracker.poll());
    }

    #[test]
    fn teardown_stops_listening_but_keeps_flag() {
        let (source, mut tracker) = tracked();
        source.resize();
        tracker.teardown();
        assert!(!tracker.is_registered());
        assert_eq!(source.listener_count(), 0);

        assert!(tracker.poll());
        source.resize();
        assert!(!tracker.poll());
    }

    #[test]
    fn drop_unregisters() {
        let (source, tracker) = tracked();
        drop(tracker);
        assert_eq!(source.listener_count(), 0);
    }

    #[test]
    fn failed_setup_leaves_tracker_unregistered() {
        init_tracing();
        let mut tracker = ResizeTracker::default();
        let err = tracker.setup(&ManualSource::unavailable()).unwrap_err();
        assert!(matches!(err, SetupError::NotSupported(_)));
        assert!(!tracker.is_registered());
        assert!(!tracker.poll());
    }

    #[test]
    fn notifier_raises_flag() {
        let tracker = ResizeTracker::default();
        tracker.notifier().set();
        assert!(tracker.poll());
        assert!(!tracker.poll());
    }
}
