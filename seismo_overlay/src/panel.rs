// Copyright 2026 the Seismo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Floating debug panel: three manual controls and a live status region.
//!
//! The panel is created and appended to `<body>` exactly once, at install
//! time. The status region's text state lives in
//! [`StatusRegion`](seismo_core::status::StatusRegion); this module only
//! mirrors it into the DOM after each change, so the suppression rule for
//! sticky play failures is decided in host-testable code.

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::RefCell;

use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{Document, Event, HtmlButtonElement, HtmlElement, HtmlVideoElement};

use seismo_backend_web::{Interval, error_message};
use seismo_core::diag::PlayAttempt;
use seismo_core::media::{NetworkState, ReadyState};
use seismo_core::status::StatusRegion;

use crate::{SharedSink, capture_snapshot};

const PANEL_CSS: &str = "position: fixed; bottom: 10px; right: 10px; background: rgba(0,0,0,0.8); \
    color: white; padding: 10px; border-radius: 5px; z-index: 9999; \
    font: 13px/1.3 system-ui, sans-serif;";
const HEADING_CSS: &str = "margin: 0 0 8px; font-size: 14px;";
const BUTTON_CSS: &str =
    "margin-right: 6px; padding: 3px 8px; border: 0; border-radius: 3px; cursor: pointer;";
const STATUS_CSS: &str =
    "margin-top: 10px; font-size: 12px; white-space: pre-wrap; max-width: 320px;";

const STATUS_REFRESH_PERIOD_MS: u32 = 1000;

type SharedRegion = Rc<RefCell<StatusRegion>>;

/// Builds the panel, wires its controls, appends it to the body, and starts
/// the periodic status refresh.
pub(crate) fn install(
    document: &Document,
    video: &HtmlVideoElement,
    sink: &SharedSink,
) -> Result<(), JsValue> {
    let panel = element(document, "div")?;
    style(&panel, PANEL_CSS)?;

    let heading = element(document, "h5")?;
    heading.set_text_content(Some("Video Debug Panel"));
    style(&heading, HEADING_CSS)?;
    panel.append_child(&heading)?;

    let play = button(document, "Force Play")?;
    let reload = button(document, "Reload Video")?;
    let info = button(document, "Log Info")?;
    panel.append_child(&play)?;
    panel.append_child(&reload)?;
    panel.append_child(&info)?;

    let status_el = element(document, "div")?;
    style(&status_el, STATUS_CSS)?;
    panel.append_child(&status_el)?;

    document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?
        .append_child(&panel)?;

    let region: SharedRegion = Rc::new(RefCell::new(StatusRegion::new()));

    wire_force_play(&play, video, sink, &region, &status_el)?;
    wire_reload(&reload, video, &region, &status_el)?;
    wire_log_info(&info, video, sink, &region, &status_el)?;
    start_refresh(video, &region, &status_el);

    Ok(())
}

/// Mirrors the region's current text into the status element.
fn mirror(region: &SharedRegion, status_el: &HtmlElement) {
    status_el.set_text_content(Some(region.borrow().text()));
}

fn wire_force_play(
    button: &HtmlButtonElement,
    video: &HtmlVideoElement,
    sink: &SharedSink,
    region: &SharedRegion,
    status_el: &HtmlElement,
) -> Result<(), JsValue> {
    let video = video.clone();
    let sink_cb = Rc::clone(sink);
    let region_cb = Rc::clone(region);
    let status_cb = status_el.clone();
    let cb = Closure::wrap(Box::new(move |_event: Event| {
        let sink = Rc::clone(&sink_cb);
        let region = Rc::clone(&region_cb);
        let status_el = status_cb.clone();
        match video.play() {
            Ok(promise) => {
                // Detached: the button handler never awaits the intent.
                spawn_local(async move {
                    match JsFuture::from(promise).await {
                        Ok(_) => {
                            sink.borrow_mut().play_attempt(&PlayAttempt {
                                succeeded: true,
                                reason: None,
                            });
                            region.borrow_mut().play_succeeded();
                        }
                        Err(err) => {
                            let reason = error_message(&err);
                            sink.borrow_mut().play_attempt(&PlayAttempt {
                                succeeded: false,
                                reason: Some(reason.clone()),
                            });
                            region.borrow_mut().play_failed(&reason);
                        }
                    }
                    mirror(&region, &status_el);
                });
            }
            Err(err) => {
                let reason = error_message(&err);
                sink.borrow_mut().play_attempt(&PlayAttempt {
                    succeeded: false,
                    reason: Some(reason.clone()),
                });
                region.borrow_mut().play_failed(&reason);
                mirror(&region, &status_el);
            }
        }
    }) as Box<dyn FnMut(_)>);
    button.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

fn wire_reload(
    button: &HtmlButtonElement,
    video: &HtmlVideoElement,
    region: &SharedRegion,
    status_el: &HtmlElement,
) -> Result<(), JsValue> {
    let video = video.clone();
    let region = Rc::clone(region);
    let status_el = status_el.clone();
    let cb = Closure::wrap(Box::new(move |_event: Event| {
        // Re-fetches the current source; does not change it.
        video.load();
        region.borrow_mut().reloaded();
        mirror(&region, &status_el);
    }) as Box<dyn FnMut(_)>);
    button.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

fn wire_log_info(
    button: &HtmlButtonElement,
    video: &HtmlVideoElement,
    sink: &SharedSink,
    region: &SharedRegion,
    status_el: &HtmlElement,
) -> Result<(), JsValue> {
    let video = video.clone();
    let sink = Rc::clone(sink);
    let region = Rc::clone(region);
    let status_el = status_el.clone();
    let cb = Closure::wrap(Box::new(move |_event: Event| {
        let snap = capture_snapshot(&video);
        sink.borrow_mut().info_snapshot(&snap);
        region.borrow_mut().show_snapshot(&snap);
        mirror(&region, &status_el);
    }) as Box<dyn FnMut(_)>);
    button.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Starts the one-second status refresh. The timer runs for the lifetime of
/// the page; there is no mechanism to stop it.
fn start_refresh(video: &HtmlVideoElement, region: &SharedRegion, status_el: &HtmlElement) {
    let video = video.clone();
    let region = Rc::clone(region);
    let status_el = status_el.clone();
    let interval = Interval::new(
        move || {
            let changed = region.borrow_mut().refresh(
                video.paused(),
                ReadyState::from_raw(video.ready_state()),
                NetworkState::from_raw(video.network_state()),
            );
            if changed {
                mirror(&region, &status_el);
            }
        },
        STATUS_REFRESH_PERIOD_MS,
    );
    interval.start();
    core::mem::forget(interval);
}

fn element(doc: &Document, tag: &str) -> Result<HtmlElement, JsValue> {
    Ok(doc.create_element(tag)?.unchecked_into())
}

fn button(doc: &Document, label: &str) -> Result<HtmlButtonElement, JsValue> {
    let b: HtmlButtonElement = doc.create_element("button")?.unchecked_into();
    b.set_text_content(Some(label));
    style(&b, BUTTON_CSS)?;
    Ok(b)
}

fn style(el: &web_sys::Element, css: &str) -> Result<(), JsValue> {
    el.set_attribute("style", css)
}
