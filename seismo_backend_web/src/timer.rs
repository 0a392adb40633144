// Copyright 2026 the Seismo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timer primitives over the browser's `setTimeout`/`setInterval`.
//!
//! [`Interval`] drives a fixed-period repeating callback; [`once`] schedules
//! a single delayed callback. Delays are wall-clock milliseconds with the
//! ordering guarantees of the host event loop and nothing more.

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::{Cell, RefCell};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

// Direct global bindings instead of `web_sys::Window` methods — avoids
// fetching (and unwrapping) the Window object at every call site.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = "setTimeout")]
    fn set_timeout(callback: &JsValue, delay_ms: i32) -> i32;

    #[wasm_bindgen(js_name = "clearTimeout")]
    fn clear_timeout(id: i32);

    #[wasm_bindgen(js_name = "setInterval")]
    fn set_interval(callback: &JsValue, period_ms: i32) -> i32;

    #[wasm_bindgen(js_name = "clearInterval")]
    fn clear_interval(id: i32);
}

fn clamp_ms(ms: u32) -> i32 {
    i32::try_from(ms).unwrap_or(i32::MAX)
}

/// Schedules `callback` to run once after `delay_ms` milliseconds.
///
/// Fire-and-forget: the closure frees itself after the call, and there is no
/// handle to cancel with.
pub fn once(delay_ms: u32, callback: impl FnOnce() + 'static) {
    let closure = Closure::once_into_js(callback);
    let _ = set_timeout(&closure, clamp_ms(delay_ms));
}

/// A `setInterval`-backed repeating callback.
///
/// Create with [`Interval::new`], then call [`start`](Self::start) to begin
/// receiving callbacks every period until [`stop`](Self::stop) is called or
/// the `Interval` is dropped. Callers that want a page-lifetime timer leak
/// the handle with `core::mem::forget`.
pub struct Interval {
    inner: Rc<IntervalInner>,
}

struct IntervalInner {
    /// The JS closure registered with `setInterval`.
    closure: RefCell<Option<Closure<dyn FnMut()>>>,

    /// The user-supplied callback invoked each period.
    callback: RefCell<Box<dyn FnMut()>>,

    /// Fixed period in milliseconds.
    period_ms: i32,

    /// Whether the timer is currently registered.
    running: Cell<bool>,

    /// The ID returned by `setInterval`, used by [`clear_interval`] when
    /// stopping.
    timer_id: Cell<i32>,
}

impl Interval {
    /// Creates a new `Interval` that is **not yet running**.
    pub fn new(callback: impl FnMut() + 'static, period_ms: u32) -> Self {
        Self {
            inner: Rc::new(IntervalInner {
                closure: RefCell::new(None),
                callback: RefCell::new(Box::new(callback)),
                period_ms: clamp_ms(period_ms),
                running: Cell::new(false),
                timer_id: Cell::new(0),
            }),
        }
    }

    /// Starts the timer.
    ///
    /// If already running, this is a no-op.
    pub fn start(&self) {
        if self.inner.running.get() {
            return;
        }
        self.inner.running.set(true);

        let inner = Rc::clone(&self.inner);
        let closure = Closure::wrap(Box::new(move || {
            if !inner.running.get() {
                return;
            }
            inner.callback.borrow_mut()();
        }) as Box<dyn FnMut()>);

        let id = set_interval(closure.as_ref().unchecked_ref(), self.inner.period_ms);
        self.inner.timer_id.set(id);
        *self.inner.closure.borrow_mut() = Some(closure);
    }

    /// Stops the timer.
    ///
    /// Can be restarted by calling [`start`](Self::start) again.
    pub fn stop(&self) {
        if !self.inner.running.get() {
            return;
        }
        self.inner.running.set(false);
        clear_interval(self.inner.timer_id.get());
    }

    /// Returns `true` if the timer is currently running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.inner.running.get()
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        self.stop();
        // Drop the JS closure so it doesn't leak.
        self.inner.closure.borrow_mut().take();
    }
}

impl core::fmt::Debug for Interval {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Interval")
            .field("period_ms", &self.inner.period_ms)
            .field("running", &self.inner.running.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_interval_is_not_running() {
        let interval = Interval::new(|| {}, 1000);
        assert!(!interval.is_running());
    }

    #[test]
    fn stop_before_start_is_a_noop() {
        let interval = Interval::new(|| {}, 1000);
        interval.stop();
        assert!(!interval.is_running());
    }

    #[test]
    fn clamp_saturates_large_delays() {
        assert_eq!(clamp_ms(1000), 1000);
        assert_eq!(clamp_ms(u32::MAX), i32::MAX);
    }
}
