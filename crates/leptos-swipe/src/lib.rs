//! Leptos Swipe Utilities
//!
//! Simple swipe detection for Leptos using mouse and touch events.
//! Uses a movement threshold to distinguish a click or tap from a swipe.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Direction of a completed swipe
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
    Up,
    Down,
}

/// Movement threshold in pixels before a gesture counts as a swipe
pub const SWIPE_THRESHOLD_PX: i32 = 10;

/// How long the click following a swipe is suppressed
const SWIPE_CLICK_GUARD_MS: i32 = 100;

/// Gesture state between press and release
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SwipeTracker {
    start: Option<(i32, i32)>,
    threshold_px: i32,
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(SWIPE_THRESHOLD_PX)
    }
}

impl SwipeTracker {
    pub fn new(threshold_px: i32) -> Self {
        Self {
            start: None,
            threshold_px: threshold_px.max(0),
        }
    }

    pub fn begin(&mut self, x: i32, y: i32) {
        self.start = Some((x, y));
    }

    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }

    pub fn cancel(&mut self) {
        self.start = None;
    }

    /// End the gesture at `(x, y)`.
    ///
    /// The dominant axis decides the direction; ties count as horizontal.
    /// Returns `None` when nothing was tracked or the movement stayed
    /// within the threshold.
    pub fn finish(&mut self, x: i32, y: i32) -> Option<SwipeDirection> {
        let (start_x, start_y) = self.start.take()?;
        let dx = x - start_x;
        let dy = y - start_y;

        if dx.abs() >= dy.abs() {
            if dx.abs() <= self.threshold_px {
                return None;
            }
            Some(if dx < 0 { SwipeDirection::Left } else { SwipeDirection::Right })
        } else {
            if dy.abs() <= self.threshold_px {
                return None;
            }
            Some(if dy < 0 { SwipeDirection::Up } else { SwipeDirection::Down })
        }
    }
}

/// Swipe state signals for one swipeable element
#[derive(Clone, Copy)]
pub struct SwipeSignals {
    pub tracker_read: ReadSignal<SwipeTracker>,
    pub tracker_write: WriteSignal<SwipeTracker>,
    /// Set briefly after a swipe so the trailing click can be ignored
    pub swipe_just_ended_read: ReadSignal<bool>,
    pub swipe_just_ended_write: WriteSignal<bool>,
}

pub fn create_swipe_signals() -> SwipeSignals {
    create_swipe_signals_with_threshold(SWIPE_THRESHOLD_PX)
}

pub fn create_swipe_signals_with_threshold(threshold_px: i32) -> SwipeSignals {
    let (tracker_read, tracker_write) = signal(SwipeTracker::new(threshold_px));
    let (swipe_just_ended_read, swipe_just_ended_write) = signal(false);
    SwipeSignals {
        tracker_read,
        tracker_write,
        swipe_just_ended_read,
        swipe_just_ended_write,
    }
}

/// Whether a click arriving now is the tail of a swipe
pub fn is_swipe_click(swipe: &SwipeSignals) -> bool {
    swipe.swipe_just_ended_read.get_untracked()
}

fn end_swipe(swipe: &SwipeSignals) {
    swipe.swipe_just_ended_write.set(true);

    if let Some(win) = web_sys::window() {
        let clear = swipe.swipe_just_ended_write;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            clear.set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            SWIPE_CLICK_GUARD_MS,
        );
        cb.forget();
    }
}

fn finish_swipe(swipe: &SwipeSignals, x: i32, y: i32, on_swipe: Callback<SwipeDirection>) {
    let mut direction = None;
    swipe.tracker_write.update(|tracker| direction = tracker.finish(x, y));

    if let Some(direction) = direction {
        end_swipe(swipe);
        on_swipe.run(direction);
    }
}

/// Inputs and buttons inside a swipeable row keep their own pointer behaviour
fn is_interactive_target(ev: &web_sys::Event) -> bool {
    ev.target().is_some_and(|target| {
        target.dyn_ref::<web_sys::HtmlInputElement>().is_some()
            || target.dyn_ref::<web_sys::HtmlButtonElement>().is_some()
    })
}

/// Create mousedown handler: records the start position
pub fn make_on_mousedown(swipe: SwipeSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 || is_interactive_target(&ev) {
            return;
        }
        swipe.tracker_write.update(|tracker| tracker.begin(ev.client_x(), ev.client_y()));
    }
}

/// Create mouseup handler: classifies the gesture and reports a swipe
pub fn make_on_mouseup(
    swipe: SwipeSignals,
    on_swipe: Callback<SwipeDirection>,
) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        finish_swipe(&swipe, ev.client_x(), ev.client_y(), on_swipe);
    }
}

/// Create mouseleave handler: abandons a gesture that leaves the element
pub fn make_on_mouseleave(swipe: SwipeSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if swipe.tracker_read.get_untracked().is_tracking() {
            swipe.tracker_write.update(|tracker| tracker.cancel());
        }
    }
}

/// Create touchstart handler: records the first touch point
pub fn make_on_touchstart(swipe: SwipeSignals) -> impl Fn(web_sys::TouchEvent) + Copy + 'static {
    move |ev: web_sys::TouchEvent| {
        if is_interactive_target(&ev) {
            return;
        }
        if let Some(touch) = ev.touches().get(0) {
            swipe.tracker_write.update(|tracker| tracker.begin(touch.client_x(), touch.client_y()));
        }
    }
}

/// Create touchend handler: classifies using the lifted touch point
pub fn make_on_touchend(
    swipe: SwipeSignals,
    on_swipe: Callback<SwipeDirection>,
) -> impl Fn(web_sys::TouchEvent) + Copy + 'static {
    move |ev: web_sys::TouchEvent| {
        if let Some(touch) = ev.changed_touches().get(0) {
            finish_swipe(&swipe, touch.client_x(), touch.client_y(), on_swipe);
        }
    }
}
