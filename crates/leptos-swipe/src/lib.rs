//! Leptos Swipe Utilities
//!
//! Horizontal swipe-to-reveal for Leptos using pointer events.
//! Uses a movement threshold to tell a horizontal swipe from a tap or a
//! vertical scroll, then reports the drag distance to the caller.

pub mod anchor;

pub use anchor::{resolve_anchor, AnchoredDrag, SwipeState};

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Events reported to the owner of a swipeable element
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SwipeEvent {
    /// Horizontal drag engaged
    Start,
    /// Horizontal distance from the press point
    Move { dx: f64 },
    /// Pointer lifted or cancelled after a drag
    Release,
}

/// Swipe tracking signals (one set per swipeable element)
#[derive(Clone, Copy)]
pub struct SwipeSignals {
    /// Pointer currently pressed on the element
    pub pointer_id_read: ReadSignal<Option<i32>>,
    pub pointer_id_write: WriteSignal<Option<i32>>,
    /// True once the press turned into a horizontal drag
    pub engaged_read: ReadSignal<bool>,
    pub engaged_write: WriteSignal<bool>,
    /// Press position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

/// Movement threshold in pixels to start swiping
const SWIPE_THRESHOLD_PX: i32 = 5;

/// What a pending press should turn into after moving (dx, dy)
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Engagement {
    /// Not moved far enough to decide
    Pending,
    /// Horizontal movement dominates: this is a swipe
    Swipe,
    /// Vertical movement dominates: leave it to the scroller
    Scroll,
}

/// Classify press movement for the single horizontal drag axis
pub fn classify_movement(dx: i32, dy: i32) -> Engagement {
    let (ax, ay) = (dx.abs(), dy.abs());
    if ax <= SWIPE_THRESHOLD_PX && ay <= SWIPE_THRESHOLD_PX {
        Engagement::Pending
    } else if ax > ay {
        Engagement::Swipe
    } else {
        Engagement::Scroll
    }
}

pub fn create_swipe_signals() -> SwipeSignals {
    let (pointer_id_read, pointer_id_write) = signal(None::<i32>);
    let (engaged_read, engaged_write) = signal(false);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    SwipeSignals {
        pointer_id_read,
        pointer_id_write,
        engaged_read,
        engaged_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

/// Forget the current press
fn end_press(sw: &SwipeSignals) {
    sw.pointer_id_write.set(None);
    sw.engaged_write.set(false);
}

/// Create pointerdown handler for the swipeable element
/// Records a pending press and captures the pointer
pub fn make_on_pointerdown(sw: SwipeSignals) -> impl Fn(web_sys::PointerEvent) + Copy + 'static {
    move |ev: web_sys::PointerEvent| {
        if !ev.is_primary() || ev.button() != 0 {
            return;
        }
        // Ignore presses that start on a button inside the element
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
        }
        if let Some(el) = ev.current_target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) {
            let _ = el.set_pointer_capture(ev.pointer_id());
        }
        sw.pointer_id_write.set(Some(ev.pointer_id()));
        sw.engaged_write.set(false);
        sw.start_x_write.set(ev.client_x());
        sw.start_y_write.set(ev.client_y());
    }
}

/// Create pointermove handler - engages the swipe and reports distance
pub fn make_on_pointermove<F>(sw: SwipeSignals, on_event: F) -> impl Fn(web_sys::PointerEvent) + Copy + 'static
where
    F: Fn(SwipeEvent) + Copy + 'static,
{
    move |ev: web_sys::PointerEvent| {
        if sw.pointer_id_read.get_untracked() != Some(ev.pointer_id()) {
            return;
        }
        let dx = ev.client_x() - sw.start_x_read.get_untracked();
        let dy = ev.client_y() - sw.start_y_read.get_untracked();

        if !sw.engaged_read.get_untracked() {
            match classify_movement(dx, dy) {
                Engagement::Pending => return,
                Engagement::Scroll => {
                    release_capture(&ev);
                    end_press(&sw);
                    return;
                }
                Engagement::Swipe => {
                    sw.engaged_write.set(true);
                    tracing::trace!(target: "swipe", pointer = ev.pointer_id(), "swipe engaged");
                    on_event(SwipeEvent::Start);
                }
            }
        }
        ev.prevent_default();
        on_event(SwipeEvent::Move { dx: f64::from(dx) });
    }
}

/// Create pointerup / pointercancel handler - settles an engaged swipe
pub fn make_on_pointerup<F>(sw: SwipeSignals, on_event: F) -> impl Fn(web_sys::PointerEvent) + Copy + 'static
where
    F: Fn(SwipeEvent) + Copy + 'static,
{
    move |ev: web_sys::PointerEvent| {
        if sw.pointer_id_read.get_untracked() != Some(ev.pointer_id()) {
            return;
        }
        let was_engaged = sw.engaged_read.get_untracked();
        release_capture(&ev);
        end_press(&sw);
        if was_engaged {
            on_event(SwipeEvent::Release);
        }
    }
}

fn release_capture(ev: &web_sys::PointerEvent) {
    if let Some(el) = ev.current_target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) {
        let _ = el.release_pointer_capture(ev.pointer_id());
    }
}
