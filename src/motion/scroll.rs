use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;
use yew::Callback;

use crate::motion::parallax::scroll_progress;

#[derive(Debug, Clone, PartialEq)]
pub enum MotionError {
    NoWindow,
    Listener(String),
}

impl fmt::Display for MotionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotionError::NoWindow => write!(f, "no window available"),
            MotionError::Listener(event) => write!(f, "failed to listen for {} events", event),
        }
    }
}

impl std::error::Error for MotionError {}

const EVENTS: [&str; 2] = ["scroll", "resize"];

/// Tracks the one animation frame a burst of events may have in flight.
#[derive(Debug, Default)]
struct FrameGate {
    pending: Cell<Option<i32>>,
}

impl FrameGate {
    fn should_request(&self) -> bool {
        self.pending.get().is_none()
    }

    fn arm(&self, id: i32) {
        self.pending.set(Some(id));
    }

    fn fire(&self) {
        self.pending.set(None);
    }

    /// Clears the gate and returns the frame that still needs cancelling.
    fn take(&self) -> Option<i32> {
        self.pending.take()
    }
}

#[derive(Default)]
struct FrameSlot {
    gate: FrameGate,
    callback: RefCell<Option<Closure<dyn FnMut()>>>,
}

struct Active {
    window: Window,
    frame: Rc<FrameSlot>,
    on_scroll: Closure<dyn FnMut()>,
}

/// Reports page scroll progress at most once per animation frame.
///
/// Scroll and resize events only request a frame; the progress is read and
/// emitted inside `requestAnimationFrame`, so a burst of events costs one
/// update.
pub struct ScrollWatcher {
    on_progress: Callback<f64>,
    active: RefCell<Option<Active>>,
}

impl ScrollWatcher {
    pub fn new(on_progress: Callback<f64>) -> Self {
        Self {
            on_progress,
            active: RefCell::new(None),
        }
    }

    pub fn start(&self) -> Result<(), MotionError> {
        if self.active.borrow().is_some() {
            return Ok(());
        }
        let window = web_sys::window().ok_or(MotionError::NoWindow)?;
        let frame = Rc::new(FrameSlot::default());

        let on_frame = {
            let slot = Rc::downgrade(&frame);
            let window = window.clone();
            let on_progress = self.on_progress.clone();
            Closure::wrap(Box::new(move || {
                if let Some(slot) = slot.upgrade() {
                    slot.gate.fire();
                }
                on_progress.emit(read_progress(&window));
            }) as Box<dyn FnMut()>)
        };
        *frame.callback.borrow_mut() = Some(on_frame);

        let on_scroll = {
            let slot = Rc::downgrade(&frame);
            let window = window.clone();
            Closure::wrap(Box::new(move || {
                let Some(slot) = slot.upgrade() else {
                    return;
                };
                if !slot.gate.should_request() {
                    return;
                }
                if let Some(callback) = slot.callback.borrow().as_ref() {
                    if let Ok(id) = window.request_animation_frame(callback.as_ref().unchecked_ref()) {
                        slot.gate.arm(id);
                    }
                };
            }) as Box<dyn FnMut()>)
        };

        for event in EVENTS {
            if window
                .add_event_listener_with_callback(event, on_scroll.as_ref().unchecked_ref())
                .is_err()
            {
                remove_listeners(&window, &on_scroll);
                return Err(MotionError::Listener(event.to_string()));
            }
        }

        self.on_progress.emit(read_progress(&window));
        *self.active.borrow_mut() = Some(Active {
            window,
            frame,
            on_scroll,
        });
        debug!("scroll watcher started");
        Ok(())
    }

    pub fn stop(&self) {
        let Some(active) = self.active.borrow_mut().take() else {
            return;
        };
        remove_listeners(&active.window, &active.on_scroll);
        if let Some(id) = active.frame.gate.take() {
            let _ = active.window.cancel_animation_frame(id);
        }
        debug!("scroll watcher stopped");
    }
}

impl Drop for ScrollWatcher {
    fn drop(&mut self) {
        self.stop();
    }
}

fn remove_listeners(window: &Window, callback: &Closure<dyn FnMut()>) {
    for event in EVENTS {
        let _ = window.remove_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
    }
}

fn read_progress(window: &Window) -> f64 {
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let scroll_height = window
        .document()
        .and_then(|document| document.document_element())
        .map(|element| f64::from(element.scroll_height()))
        .unwrap_or(0.0);
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|height| height.as_f64())
        .unwrap_or(0.0);
    scroll_progress(scroll_y, scroll_height, viewport)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_read_plainly() {
        assert_eq!(MotionError::NoWindow.to_string(), "no window available");
        assert_eq!(
            MotionError::Listener("scroll".into()).to_string(),
            "failed to listen for scroll events"
        );
    }

    #[test]
    fn burst_of_events_requests_one_frame() {
        let gate = FrameGate::default();
        let mut requested = 0;
        for id in 0..25 {
            if gate.should_request() {
                gate.arm(id);
                requested += 1;
            }
        }
        assert_eq!(requested, 1);
        assert_eq!(gate.pending.get(), Some(0));
    }

    #[test]
    fn next_event_after_a_frame_requests_again() {
        let gate = FrameGate::default();
        gate.arm(7);
        assert!(!gate.should_request());
        gate.fire();
        assert!(gate.should_request());
        gate.arm(8);
        assert_eq!(gate.pending.get(), Some(8));
    }

    #[test]
    fn teardown_takes_the_pending_frame_once() {
        let gate = FrameGate::default();
        assert_eq!(gate.take(), None);
        gate.arm(3);
        assert_eq!(gate.take(), Some(3));
        assert_eq!(gate.take(), None);
        assert!(gate.should_request());
    }
}
