//! A frame loop that re-lays out only when the viewport changed.
//!
//! Natively there is no viewport, so a background thread stands in for the window system and
//! raises the tracker's flag at random-ish intervals. On the Web the global `window` is used.

#[cfg(not(web_platform))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    use std::thread;
    use std::time::Duration;

    use resize_latch::{track_viewport, ResizeTracker, SetupError, TrackerAttributes};
    use tracing::info;
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let tracker = match track_viewport(TrackerAttributes::default()) {
        Ok(tracker) => tracker,
        Err(SetupError::NotSupported(err)) => {
            info!("{err}, simulating resizes");
            ResizeTracker::default()
        },
        Err(err) => return Err(err.into()),
    };

    let notifier = tracker.notifier();
    let window_system = thread::spawn(move || {
        for burst in [1, 3, 0, 2] {
            thread::sleep(Duration::from_millis(50));
            for _ in 0..burst {
                notifier.set();
            }
        }
    });

    for frame in 0..15 {
        if tracker.poll() {
            info!(frame, "viewport resized, recomputing layout");
        }
        thread::sleep(Duration::from_millis(16));
    }

    window_system.join().map_err(|_| "window system thread panicked")?;
    Ok(())
}

#[cfg(web_platform)]
fn main() {
    use std::cell::RefCell;
    use std::rc::Rc;

    use resize_latch::{track_viewport, TrackerAttributes};
    use tracing_subscriber::prelude::*;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    console_error_panic_hook::set_once();
    let console = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(tracing_web::MakeWebConsoleWriter::new());
    tracing_subscriber::registry().with(console).init();

    let tracker = match track_viewport(TrackerAttributes::default()) {
        Ok(tracker) => tracker,
        Err(err) => {
            tracing::error!("{err}");
            return;
        },
    };

    // The closure reschedules itself, so it has to be reachable from inside.
    let frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let next = frame.clone();
    *frame.borrow_mut() = Some(Closure::new(move || {
        if tracker.poll() {
            tracing::info!("viewport resized, recomputing layout");
        }
        if let (Some(window), Some(callback)) = (web_sys::window(), next.borrow().as_ref()) {
            let _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
        }
    }));

    if let (Some(window), Some(callback)) = (web_sys::window(), frame.borrow().as_ref()) {
        let _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
    }
}
