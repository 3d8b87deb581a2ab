use resize_latch_core::{NotSupportedError, ResizeCallback, ResizeSource, SetupError, Subscription};
use tracing::debug;
use wasm_bindgen::prelude::Closure;
use web_sys::{Event, Window};

use crate::event_handle::EventListenerHandle;

/// Resize notifications from the browser's `window`.
#[derive(Debug, Clone)]
pub struct WindowResizeSource {
    window: Window,
}

impl WindowResizeSource {
    /// Use the global `window`. Fails in scopes without one, such as workers.
    pub fn new() -> Result<Self, NotSupportedError> {
        web_sys::window()
            .map(Self::from_window)
            .ok_or_else(|| NotSupportedError::new("no `window` in this global scope"))
    }

    pub fn from_window(window: Window) -> Self {
        Self { window }
    }

    pub fn window(&self) -> &Window {
        &self.window
    }
}

impl ResizeSource for WindowResizeSource {
    fn subscribe(
        &self,
        event_type: &'static str,
        mut callback: ResizeCallback,
    ) -> Result<Subscription, SetupError> {
        let listener = Closure::<dyn FnMut(Event)>::new(move |_: Event| callback());
        let handle = EventListenerHandle::new(self.window.clone(), event_type, listener)?;
        debug!(event_type, "added window listener");
        Ok(Subscription::new(event_type, handle))
    }
}
