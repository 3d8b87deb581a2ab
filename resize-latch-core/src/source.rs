//! The seam between a tracker and whatever emits resize notifications.

use std::any::Any;
use std::fmt;

use crate::error::SetupError;

/// Callback run by a [`ResizeSource`] for every notification.
pub type ResizeCallback = Box<dyn FnMut() + 'static>;

/// Something that can notify about viewport resizes.
///
/// Implementations run the callback on the host's notification cycle. On the Web that is the
/// browser event loop, so the callback never runs concurrently with itself.
pub trait ResizeSource {
    /// Register `callback` on the `event_type` channel.
    ///
    /// The listener stays registered for as long as the returned [`Subscription`] is alive.
    fn subscribe(
        &self,
        event_type: &'static str,
        callback: ResizeCallback,
    ) -> Result<Subscription, SetupError>;
}

impl<S: ResizeSource + ?Sized> ResizeSource for &S {
    fn subscribe(
        &self,
        event_type: &'static str,
        callback: ResizeCallback,
    ) -> Result<Subscription, SetupError> {
        (**self).subscribe(event_type, callback)
    }
}

/// A registered listener. Dropping it unregisters the listener.
pub struct Subscription {
    event_type: &'static str,
    _guard: Box<dyn Any>,
}

impl Subscription {
    /// Wrap a backend guard whose `Drop` removes the listener.
    pub fn new<G: 'static>(event_type: &'static str, guard: G) -> Self {
        Self { event_type, _guard: Box::new(guard) }
    }

    pub fn event_type(&self) -> &'static str {
        self.event_type
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("event_type", &self.event_type).finish_non_exhaustive()
    }
}
