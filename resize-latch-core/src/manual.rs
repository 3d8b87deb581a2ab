//! A resize source driven by hand.
//!
//! Used by native drivers that learn about resizes some other way, and by tests.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use tracing::trace;

use crate::error::{NotSupportedError, SetupError};
use crate::source::{ResizeCallback, ResizeSource, Subscription};
use crate::RESIZE_EVENT;

struct Listener {
    id: u64,
    event_type: &'static str,
    callback: ResizeCallback,
}

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<Listener>,
}

/// An in-memory event target.
///
/// Callbacks run synchronously inside [`ManualSource::dispatch`] and must not call back into
/// the same source.
pub struct ManualSource {
    listeners: Option<Rc<RefCell<Listeners>>>,
}

impl ManualSource {
    pub fn new() -> Self {
        Self { listeners: Some(Rc::default()) }
    }

    /// A source standing in for a host without a viewport. Every subscription fails.
    pub fn unavailable() -> Self {
        Self { listeners: None }
    }

    /// Notify every listener registered on `event_type`. Returns how many were run.
    pub fn dispatch(&self, event_type: &str) -> usize {
        let Some(listeners) = &self.listeners else {
            return 0;
        };

        let mut listeners = listeners.borrow_mut();
        let mut notified = 0;
        for listener in listeners.entries.iter_mut().filter(|l| l.event_type == event_type) {
            (listener.callback)();
            notified += 1;
        }
        trace!(event_type, notified, "dispatched manual event");
        notified
    }

    /// Shorthand for dispatching a `resize` event.
    pub fn resize(&self) -> usize {
        self.dispatch(RESIZE_EVENT)
    }

    /// Number of listeners currently registered, across all event types.
    pub fn listener_count(&self) -> usize {
        self.listeners.as_ref().map_or(0, |l| l.borrow().entries.len())
    }
}

impl Default for ManualSource {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ManualSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManualSource")
            .field("available", &self.listeners.is_some())
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl ResizeSource for ManualSource {
    fn subscribe(
        &self,
        event_type: &'static str,
        callback: ResizeCallback,
    ) -> Result<Subscription, SetupError> {
        let listeners = self
            .listeners
            .as_ref()
            .ok_or(NotSupportedError::new("manual source has no viewport"))?;

        let mut inner = listeners.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.entries.push(Listener { id, event_type, callback });

        Ok(Subscription::new(event_type, ListenerGuard { listeners: Rc::downgrade(listeners), id }))
    }
}

struct ListenerGuard {
    listeners: Weak<RefCell<Listeners>>,
    id: u64,
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners.borrow_mut().entries.retain(|l| l.id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    fn counter() -> (Rc<Cell<u32>>, ResizeCallback) {
        let count = Rc::new(Cell::new(0));
        let callback = {
            let count = count.clone();
            Box::new(move || count.set(count.get() + 1))
        };
        (count, callback)
    }

    #[test]
    fn dispatch_reaches_matching_listeners() {
        let source = ManualSource::new();
        let (resizes, on_resize) = counter();
        let (scrolls, on_scroll) = counter();
        let _a = source.subscribe("resize", on_resize).unwrap();
        let _b = source.subscribe("scroll", on_scroll).unwrap();

        assert_eq!(source.resize(), 1);
        assert_eq!(source.resize(), 1);
        assert_eq!(resizes.get(), 2);
        assert_eq!(scrolls.get(), 0);
    }

    #[test]
    fn dropping_subscription_unregisters() {
        let source = ManualSource::new();
        let (count, callback) = counter();
        let subscription = source.subscribe("resize", callback).unwrap();
        assert_eq!(subscription.event_type(), "resize");
        assert_eq!(source.listener_count(), 1);

        drop(subscription);
        assert_eq!(source.listener_count(), 0);
        assert_eq!(source.resize(), 0);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn subscription_outliving_source_is_harmless() {
        let source = ManualSource::new();
        let (_, callback) = counter();
        let subscription = source.subscribe("resize", callback).unwrap();
        drop(source);
        drop(subscription);
    }

    #[test]
    fn unavailable_source_rejects_subscriptions() {
        let source = ManualSource::unavailable();
        let (_, callback) = counter();
        let err = source.subscribe("resize", callback).unwrap_err();
        assert!(matches!(err, SetupError::NotSupported(_)));
        assert_eq!(source.resize(), 0);
        assert_eq!(source.listener_count(), 0);
    }
}
