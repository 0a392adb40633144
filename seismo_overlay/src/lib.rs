// Copyright 2026 the Seismo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Media diagnostics overlay.
//!
//! Instruments a page-hosted `<video id="mainVideo">` element and its
//! `.playlist-item` nodes with diagnostic logging: one listener per media
//! lifecycle event, a deep-dive error listener that probes the source URL,
//! playlist click wrapping, a codec-support probe, an autoplay check, and a
//! floating debug panel with manual play/reload/info controls.
//!
//! The overlay never owns the media element: it observes, records through a
//! [`DiagSink`], and occasionally invokes `play()`/`load()` on the user's
//! behalf. A missing video element makes installation a no-op; nothing the
//! overlay does is fatal to the host page, and nothing is retried.
//!
//! Build with: `wasm-pack build --target web seismo_overlay`
//!
//! [`DiagSink`]: seismo_core::diag::DiagSink

#![no_std]

extern crate alloc;

mod panel;

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::String;
use core::cell::RefCell;

use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Event, HtmlElement, HtmlVideoElement, MouseEvent};

use seismo_backend_web::{ConsoleSink, error_message, once, probe_head};
use seismo_core::diag::{
    CodecSupportReport, DiagSink, ElementFound, MediaErrorDetail, MediaEventKind,
    MediaEventRecord, PlaylistClick, PlaylistEntry, PlaylistScan, ProbeFailure, SetupFailure,
    SwitchSnapshot,
};
use seismo_core::media::{
    CodecSupport, MediaErrorInfo, NetworkState, ReadyState, assess_autoplay,
};
use seismo_core::snapshot::MediaSnapshot;

const VIDEO_ELEMENT_ID: &str = "mainVideo";
const PLAYLIST_ITEM_SELECTOR: &str = ".playlist-item";
const VIDEO_URL_ATTR: &str = "data-video-url";
const VIDEO_TITLE_ATTR: &str = "data-video-title";
const ACTIVE_CLASS: &str = "active";

const MIME_MP4: &str = "video/mp4";
const MIME_WEBM: &str = "video/webm";
const MIME_OGG: &str = "video/ogg";

/// Heuristic wait for the browser to apply a new source after a playlist
/// click. Not synchronized with any load-completion signal; slow networks
/// may snapshot before the switch settles.
const SWITCH_SNAPSHOT_DELAY_MS: u32 = 100;

/// Shared handle to the record sink. Every closure the overlay installs
/// holds one; the overlay lives as long as the page, so nothing is ever
/// unhooked.
pub type SharedSink = Rc<RefCell<dyn DiagSink>>;

/// Entry point: installs the overlay against the current document, logging
/// to the devtools console.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() -> Result<(), JsValue> {
    let document = web_sys::window()
        .expect("window")
        .document()
        .expect("document");
    install(&document, Rc::new(RefCell::new(ConsoleSink::new())))
}

/// Installs the overlay: listeners, playlist instrumentation, probes, and
/// the debug panel.
///
/// When the video element is missing, emits a single
/// [`SetupFailure`] record and returns without attaching anything.
pub fn install(document: &Document, sink: SharedSink) -> Result<(), JsValue> {
    let Some(video) = document
        .get_element_by_id(VIDEO_ELEMENT_ID)
        .and_then(|el| el.dyn_into::<HtmlVideoElement>().ok())
    else {
        sink.borrow_mut().setup_failure(&SetupFailure {
            element_id: String::from(VIDEO_ELEMENT_ID),
        });
        return Ok(());
    };

    sink.borrow_mut().element_found(&ElementFound {
        src: video.src(),
        ready_state: ReadyState::from_raw(video.ready_state()),
        network_state: NetworkState::from_raw(video.network_state()),
    });

    attach_event_log(&video, &sink)?;
    attach_error_probe(&video, &sink)?;
    instrument_playlist(document, &video, &sink)?;
    report_codec_support(&video, &sink);
    report_autoplay(&video, &sink);
    panel::install(document, &video, &sink)?;

    Ok(())
}

/// Reads the element's error value into a record field.
pub(crate) fn media_error_info(video: &HtmlVideoElement) -> Option<MediaErrorInfo> {
    video.error().map(|err| MediaErrorInfo {
        code: err.code(),
        message: err.message(),
    })
}

/// Captures the fixed ten-field snapshot behind *Log Info*.
pub(crate) fn capture_snapshot(video: &HtmlVideoElement) -> MediaSnapshot {
    MediaSnapshot {
        src: video.src(),
        duration: video.duration(),
        current_time: video.current_time(),
        paused: video.paused(),
        ended: video.ended(),
        ready_state: ReadyState::from_raw(video.ready_state()),
        network_state: NetworkState::from_raw(video.network_state()),
        video_width: video.video_width(),
        video_height: video.video_height(),
        error: media_error_info(video),
    }
}

/// Registers one logging listener per observed media event.
fn attach_event_log(video: &HtmlVideoElement, sink: &SharedSink) -> Result<(), JsValue> {
    for kind in MediaEventKind::ALL {
        let video_cb = video.clone();
        let sink_cb = Rc::clone(sink);
        let listener = Closure::wrap(Box::new(move |_event: Event| {
            let record = MediaEventRecord::from_raw(
                kind,
                video_cb.current_time(),
                video_cb.duration(),
                video_cb.ready_state(),
                video_cb.network_state(),
                media_error_info(&video_cb),
            );
            sink_cb.borrow_mut().media_event(&record);
        }) as Box<dyn FnMut(_)>);
        video.add_event_listener_with_callback(kind.as_str(), listener.as_ref().unchecked_ref())?;
        // Listeners live as long as the page.
        listener.forget();
    }
    Ok(())
}

/// Registers the dedicated error listener: decoded detail plus a detached
/// reachability probe of the current source.
fn attach_error_probe(video: &HtmlVideoElement, sink: &SharedSink) -> Result<(), JsValue> {
    let video_cb = video.clone();
    let sink_cb = Rc::clone(sink);
    let listener = Closure::wrap(Box::new(move |_event: Event| {
        sink_cb.borrow_mut().media_error(&MediaErrorDetail {
            error: media_error_info(&video_cb),
            src: video_cb.src(),
            current_src: video_cb.current_src(),
        });

        let url = video_cb.src();
        if url.is_empty() {
            return;
        }
        let sink = Rc::clone(&sink_cb);
        spawn_local(async move {
            match probe_head(&url).await {
                Ok(report) => sink.borrow_mut().probe_result(&report),
                Err(err) => {
                    let reason = error_message(&err);
                    sink.borrow_mut().probe_failed(&ProbeFailure { url, reason });
                }
            }
        });
    }) as Box<dyn FnMut(_)>);
    video.add_event_listener_with_callback(
        MediaEventKind::Error.as_str(),
        listener.as_ref().unchecked_ref(),
    )?;
    listener.forget();
    Ok(())
}

/// Enumerates playlist items present at load time and wraps their click
/// handlers. Items added later are not instrumented.
fn instrument_playlist(
    document: &Document,
    video: &HtmlVideoElement,
    sink: &SharedSink,
) -> Result<(), JsValue> {
    let items = document.query_selector_all(PLAYLIST_ITEM_SELECTOR)?;
    sink.borrow_mut().playlist_scan(&PlaylistScan {
        count: items.length() as usize,
    });

    for index in 0..items.length() {
        let Some(item) = items
            .get(index)
            .and_then(|node| node.dyn_into::<HtmlElement>().ok())
        else {
            continue;
        };
        let title = item.get_attribute(VIDEO_TITLE_ATTR);
        let url = item.get_attribute(VIDEO_URL_ATTR);
        let is_active = item.class_list().contains(ACTIVE_CLASS);
        let index = index as usize;

        sink.borrow_mut().playlist_item(&PlaylistEntry {
            index,
            title: title.clone(),
            url: url.clone(),
            is_active,
        });
        wrap_click_handler(&item, index, title, url, video, sink);
    }
    Ok(())
}

/// Wrap-and-delegate click decoration: log the click intent, invoke the
/// original handler unmodified (same `this` binding, same event argument),
/// then schedule the post-click snapshot after the fixed delay.
fn wrap_click_handler(
    item: &HtmlElement,
    index: usize,
    title: Option<String>,
    url: Option<String>,
    video: &HtmlVideoElement,
    sink: &SharedSink,
) {
    let original = item.onclick();
    let this: JsValue = item.clone().into();
    let video_cb = video.clone();
    let sink_cb = Rc::clone(sink);
    let wrapped = Closure::wrap(Box::new(move |event: MouseEvent| {
        sink_cb.borrow_mut().playlist_click(&PlaylistClick {
            index,
            title: title.clone(),
            url: url.clone(),
        });

        if let Some(original) = original.as_ref() {
            let _ = original.call1(&this, event.as_ref());
        }

        let video = video_cb.clone();
        let sink = Rc::clone(&sink_cb);
        once(SWITCH_SNAPSHOT_DELAY_MS, move || {
            sink.borrow_mut().switch_snapshot(&SwitchSnapshot {
                src: video.src(),
                ready_state: ReadyState::from_raw(video.ready_state()),
                error: media_error_info(&video),
            });
        });
    }) as Box<dyn FnMut(_)>);
    item.set_onclick(Some(wrapped.as_ref().unchecked_ref()));
    wrapped.forget();
}

/// Queries the three fixed MIME strings and reports the tri-state answers.
fn report_codec_support(video: &HtmlVideoElement, sink: &SharedSink) {
    let report = CodecSupportReport {
        mp4: CodecSupport::parse(&video.can_play_type(MIME_MP4)),
        webm: CodecSupport::parse(&video.can_play_type(MIME_WEBM)),
        ogg: CodecSupport::parse(&video.can_play_type(MIME_OGG)),
    };
    sink.borrow_mut().codec_support(&report);
}

/// One-shot autoplay assessment at install time.
fn report_autoplay(video: &HtmlVideoElement, sink: &SharedSink) {
    let verdict = assess_autoplay(
        video.autoplay(),
        video.paused(),
        ReadyState::from_raw(video.ready_state()),
    );
    if let Some(verdict) = verdict {
        sink.borrow_mut().autoplay(verdict);
    }
}
