//! Exports for JavaScript callers.
//!
//! ```js
//! import init, { trackResized } from "./resize_latch_web.js";
//!
//! await init();
//! const resized = await trackResized();
//! function frame() {
//!     if (resized.poll()) {
//!         // recompute layout
//!     }
//!     requestAnimationFrame(frame);
//! }
//! ```

use resize_latch_core::ResizeTracker;
use wasm_bindgen::prelude::*;

use crate::window_source::WindowResizeSource;

/// A resize flag tracking the global `window`.
#[wasm_bindgen]
#[derive(Debug, Default)]
pub struct ResizeFlag {
    tracker: ResizeTracker,
}

#[wasm_bindgen]
impl ResizeFlag {
    #[wasm_bindgen(constructor)]
    pub fn new() -> ResizeFlag {
        ResizeFlag::default()
    }

    /// Start listening for `resize` on `window`. Calling it again is a no-op.
    pub fn setup(&mut self) -> Result<(), JsError> {
        let source = WindowResizeSource::new()?;
        self.tracker.setup(&source)?;
        Ok(())
    }

    /// Whether the window resized since the last call.
    pub fn poll(&self) -> bool {
        self.tracker.poll()
    }

    /// Stop listening.
    pub fn teardown(&mut self) {
        self.tracker.teardown();
    }

    #[wasm_bindgen(getter, js_name = isRegistered)]
    pub fn is_registered(&self) -> bool {
        self.tracker.is_registered()
    }
}

/// Create a [`ResizeFlag`] that is already listening.
#[wasm_bindgen(js_name = trackResized)]
pub async fn track_resized() -> Result<ResizeFlag, JsError> {
    let mut flag = ResizeFlag::new();
    flag.setup()?;
    Ok(flag)
}
