// Copyright 2026 the Seismo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser glue for seismo.
//!
//! This crate provides integration with browser APIs:
//!
//! - [`Interval`]: fixed-period repeating callback over `setInterval`
//! - [`once`]: one-shot delayed callback over `setTimeout`
//! - [`ConsoleSink`]: [`DiagSink`](seismo_core::diag::DiagSink) writing to
//!   the devtools console
//! - [`probe_head`]: header-only reachability probe via `fetch`

#![no_std]

extern crate alloc;

mod console;
mod probe;
mod timer;

pub use console::ConsoleSink;
pub use probe::probe_head;
pub use timer::{Interval, once};

use alloc::string::String;

use wasm_bindgen::{JsCast as _, JsValue};

/// Extracts a human-readable message from a rejection value.
///
/// Prefers the `.message` of an `Error` (covers `DOMException`), then a
/// plain `message` property, then the value itself as a string.
#[must_use]
pub fn error_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    if let Ok(message) = js_sys::Reflect::get(value, &JsValue::from_str("message"))
        && let Some(message) = message.as_string()
    {
        return message;
    }
    value
        .as_string()
        .unwrap_or_else(|| alloc::format!("{value:?}"))
}
