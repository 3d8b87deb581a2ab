use resize_latch_core::{os_error, OsError};
use tracing::error;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::EventTarget;

/// A DOM event listener that is removed again when dropped.
pub struct EventListenerHandle<T: ?Sized> {
    target: EventTarget,
    event_type: &'static str,
    listener: Closure<T>,
}

impl<T: ?Sized> EventListenerHandle<T> {
    pub fn new<U>(target: U, event_type: &'static str, listener: Closure<T>) -> Result<Self, OsError>
    where
        U: Into<EventTarget>,
    {
        let target = target.into();
        target
            .add_event_listener_with_callback(event_type, listener.as_ref().unchecked_ref())
            .map_err(|e| os_error!(format!("failed to add `{event_type}` listener: {e:?}")))?;
        Ok(EventListenerHandle { target, event_type, listener })
    }

    pub fn event_type(&self) -> &'static str {
        self.event_type
    }
}

impl<T: ?Sized> Drop for EventListenerHandle<T> {
    fn drop(&mut self) {
        self.target
            .remove_event_listener_with_callback(
                self.event_type,
                self.listener.as_ref().unchecked_ref(),
            )
            .unwrap_or_else(|e| {
                error!(event_type = self.event_type, "error removing event listener: {e:?}")
            });
    }
}
