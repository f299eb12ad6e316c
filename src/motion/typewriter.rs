use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use log::debug;
use yew::Callback;

use crate::config::typewriter::{
    BEFORE_DELETE_PAUSE, BETWEEN_TEXTS_PAUSE, CURSOR_BLINK, DELETE_STEP, READ_PAUSE, RESET_PAUSE,
    START_DELAY, TYPE_STEP,
};
use crate::motion::timers::{TimerHandle, Timers};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Typing,
    PausedAfterType,
    Deleting,
    PausedAfterDelete,
    Resetting,
}

/// Character-by-character reveal and removal over a fixed list of texts.
///
/// Texts are typed forward one after another; after the last one is read the
/// machine deletes back through the list and, once the first text is empty,
/// starts over exactly as a fresh machine would. `step` advances by one tick
/// and returns how long to wait before the next one.
///
/// `chars` is the number of characters the next typing tick shows, so a
/// finished text stays on screen through the pauses until typing of the
/// following text begins with an empty line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Typewriter {
    texts: &'static [&'static str],
    index: usize,
    chars: usize,
    phase: Phase,
    shown: &'static str,
}

impl Typewriter {
    pub fn new(texts: &'static [&'static str]) -> Self {
        Self {
            texts,
            index: 0,
            chars: 0,
            phase: Phase::Typing,
            shown: "",
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn chars(&self) -> usize {
        self.chars
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current(&self) -> &'static str {
        self.texts.get(self.index).copied().unwrap_or("")
    }

    pub fn current_len(&self) -> usize {
        self.current().chars().count()
    }

    pub fn display(&self) -> &'static str {
        self.shown
    }

    fn show_prefix(&mut self) {
        let text = self.current();
        let end = text
            .char_indices()
            .nth(self.chars)
            .map(|(byte, _)| byte)
            .unwrap_or(text.len());
        self.shown = &text[..end];
    }

    pub fn step(&mut self) -> u32 {
        match self.phase {
            Phase::Typing => {
                self.show_prefix();
                if self.chars < self.current_len() {
                    self.chars += 1;
                } else {
                    self.phase = Phase::PausedAfterType;
                }
                TYPE_STEP
            }
            Phase::PausedAfterType => {
                if self.index + 1 < self.texts.len() {
                    self.index += 1;
                    self.chars = 0;
                    self.phase = Phase::Typing;
                    READ_PAUSE + BETWEEN_TEXTS_PAUSE
                } else {
                    // first visible deletion lands one delete step after the pause
                    self.phase = Phase::Deleting;
                    READ_PAUSE + BEFORE_DELETE_PAUSE + DELETE_STEP
                }
            }
            Phase::Deleting => {
                if self.chars > 0 {
                    self.chars -= 1;
                    self.show_prefix();
                    DELETE_STEP
                } else if self.index > 0 {
                    self.phase = Phase::PausedAfterDelete;
                    BETWEEN_TEXTS_PAUSE
                } else {
                    self.phase = Phase::Resetting;
                    RESET_PAUSE
                }
            }
            Phase::PausedAfterDelete => {
                self.index -= 1;
                self.chars = self.current_len().saturating_sub(1);
                self.show_prefix();
                self.phase = Phase::Deleting;
                DELETE_STEP
            }
            Phase::Resetting => {
                *self = Self::new(self.texts);
                self.step()
            }
        }
    }
}

struct DriverState<H> {
    machine: Typewriter,
    pending: Option<H>,
    running: bool,
    on_text: Callback<String>,
}

/// Runs a [`Typewriter`] on a timer and reports each change of the displayed string.
///
/// The driver owns its pending timeout; `stop` (or dropping the driver)
/// cancels it so nothing fires after the owning component is gone.
pub struct TypewriterDriver<T: Timers> {
    timers: T,
    state: Rc<RefCell<DriverState<T::Handle>>>,
}

impl<T: Timers> TypewriterDriver<T> {
    pub fn new(timers: T, texts: &'static [&'static str], on_text: Callback<String>) -> Self {
        Self {
            timers,
            state: Rc::new(RefCell::new(DriverState {
                machine: Typewriter::new(texts),
                pending: None,
                running: false,
                on_text,
            })),
        }
    }

    pub fn start(&self) {
        {
            let mut state = self.state.borrow_mut();
            if state.running {
                return;
            }
            state.running = true;
        }
        debug!("typewriter started");
        schedule_tick(&self.timers, Rc::downgrade(&self.state), START_DELAY);
    }

    pub fn stop(&self) {
        let pending = {
            let mut state = self.state.borrow_mut();
            state.running = false;
            state.pending.take()
        };
        if let Some(handle) = pending {
            handle.cancel();
            debug!("typewriter stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.state.borrow().running
    }
}

impl<T: Timers> Drop for TypewriterDriver<T> {
    fn drop(&mut self) {
        self.stop();
    }
}

fn schedule_tick<T: Timers>(
    timers: &T,
    state: Weak<RefCell<DriverState<T::Handle>>>,
    delay: u32,
) {
    let Some(strong) = state.upgrade() else {
        return;
    };
    let next_timers = timers.clone();
    let handle = timers.timeout(delay, move || {
        let Some(strong) = state.upgrade() else {
            return;
        };
        let (changed, delay, on_text) = {
            let mut current = strong.borrow_mut();
            if !current.running {
                return;
            }
            let before = current.machine.display();
            let delay = current.machine.step();
            let after = current.machine.display();
            ((before != after).then(|| after.to_string()), delay, current.on_text.clone())
        };
        if let Some(text) = changed {
            on_text.emit(text);
        }
        schedule_tick(&next_timers, state, delay);
    });

    let mut current = strong.borrow_mut();
    if current.running {
        current.pending = Some(handle);
    }
}

/// Toggles cursor visibility on a fixed interval, independent of the text.
pub struct CursorBlink<T: Timers> {
    timers: T,
    visible: Rc<Cell<bool>>,
    on_toggle: Callback<bool>,
    handle: RefCell<Option<T::Handle>>,
}

impl<T: Timers> CursorBlink<T> {
    pub fn new(timers: T, on_toggle: Callback<bool>) -> Self {
        Self {
            timers,
            visible: Rc::new(Cell::new(true)),
            on_toggle,
            handle: RefCell::new(None),
        }
    }

    pub fn start(&self) {
        if self.handle.borrow().is_some() {
            return;
        }
        let visible = self.visible.clone();
        let on_toggle = self.on_toggle.clone();
        let handle = self.timers.interval(CURSOR_BLINK, move || {
            let now = !visible.get();
            visible.set(now);
            on_toggle.emit(now);
        });
        *self.handle.borrow_mut() = Some(handle);
    }

    pub fn stop(&self) {
        if let Some(handle) = self.handle.borrow_mut().take() {
            handle.cancel();
        }
    }

    pub fn visible(&self) -> bool {
        self.visible.get()
    }
}

impl<T: Timers> Drop for CursorBlink<T> {
    fn drop(&mut self) {
        self.stop();
    }
}
