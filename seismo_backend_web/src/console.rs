// Copyright 2026 the Seismo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Devtools-console sink.
//!
//! [`ConsoleSink`] implements [`DiagSink`] and writes each record to the
//! browser console: a short label plus a structured object, so records stay
//! expandable in devtools. The info snapshot goes through `console.table`.

use alloc::format;
use alloc::string::String;

use js_sys::{Object, Reflect};
use wasm_bindgen::prelude::*;

use seismo_core::diag::{
    CodecSupportReport, DiagSink, ElementFound, MediaErrorDetail, MediaEventRecord, PlayAttempt,
    PlaylistClick, PlaylistEntry, PlaylistScan, ProbeFailure, ProbeReport, SetupFailure,
    SwitchSnapshot,
};
use seismo_core::media::{AutoplayVerdict, MediaErrorInfo};
use seismo_core::snapshot::MediaSnapshot;

// Direct global bindings instead of `web_sys::console` — keeps the web-sys
// feature surface down to the DOM types the overlay actually manipulates.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = "log")]
    fn log_message(message: &str);

    #[wasm_bindgen(js_namespace = console, js_name = "log")]
    fn log_with_data(message: &str, data: &JsValue);

    #[wasm_bindgen(js_namespace = console, js_name = "warn")]
    fn warn_message(message: &str);

    #[wasm_bindgen(js_namespace = console, js_name = "error")]
    fn error_message_only(message: &str);

    #[wasm_bindgen(js_namespace = console, js_name = "error")]
    fn error_with_data(message: &str, data: &JsValue);

    #[wasm_bindgen(js_namespace = console, js_name = "table")]
    fn table_data(data: &JsValue);
}

fn obj(pairs: &[(&str, JsValue)]) -> JsValue {
    let out = Object::new();
    for (key, value) in pairs {
        let _ = Reflect::set(&out, &JsValue::from_str(key), value);
    }
    out.into()
}

fn error_js(error: Option<&MediaErrorInfo>) -> JsValue {
    match error {
        Some(err) => obj(&[
            ("code", err.code.into()),
            ("name", err.code_name().into()),
            ("message", JsValue::from_str(&err.message)),
        ]),
        None => JsValue::NULL,
    }
}

fn opt_str(value: Option<&String>) -> JsValue {
    match value {
        Some(s) => JsValue::from_str(s),
        None => JsValue::NULL,
    }
}

/// A [`DiagSink`] that writes records to the browser console.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    /// Creates a console sink.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DiagSink for ConsoleSink {
    fn setup_failure(&mut self, r: &SetupFailure) {
        error_message_only(&format!("Video element #{} not found", r.element_id));
    }

    fn element_found(&mut self, r: &ElementFound) {
        log_with_data(
            "Video element found",
            &obj(&[
                ("src", JsValue::from_str(&r.src)),
                ("readyState", r.ready_state.raw().into()),
                ("networkState", r.network_state.raw().into()),
            ]),
        );
    }

    fn media_event(&mut self, r: &MediaEventRecord) {
        log_with_data(
            &format!("VIDEO EVENT: {}", r.kind.as_str()),
            &obj(&[
                ("currentTime", r.current_time.into()),
                ("duration", r.duration.into()),
                ("readyState", r.ready_state.raw().into()),
                ("networkState", r.network_state.raw().into()),
                ("error", error_js(r.error.as_ref())),
            ]),
        );
    }

    fn media_error(&mut self, r: &MediaErrorDetail) {
        error_with_data(
            "VIDEO ERROR DETAILS",
            &obj(&[
                ("error", error_js(r.error.as_ref())),
                ("src", JsValue::from_str(&r.src)),
                ("currentSrc", JsValue::from_str(&r.current_src)),
            ]),
        );
    }

    fn probe_result(&mut self, r: &ProbeReport) {
        log_with_data(
            "Video URL check",
            &obj(&[
                ("url", JsValue::from_str(&r.url)),
                ("status", r.status.into()),
                ("statusText", JsValue::from_str(&r.status_text)),
                ("contentType", opt_str(r.content_type.as_ref())),
                ("contentLength", opt_str(r.content_length.as_ref())),
            ]),
        );
    }

    fn probe_failed(&mut self, r: &ProbeFailure) {
        error_with_data(
            "Failed to fetch video URL",
            &obj(&[
                ("url", JsValue::from_str(&r.url)),
                ("reason", JsValue::from_str(&r.reason)),
            ]),
        );
    }

    fn playlist_scan(&mut self, r: &PlaylistScan) {
        log_message(&format!("Found {} playlist items", r.count));
    }

    fn playlist_item(&mut self, r: &PlaylistEntry) {
        log_with_data(
            &format!("Playlist item {}", r.index + 1),
            &obj(&[
                ("title", opt_str(r.title.as_ref())),
                ("url", opt_str(r.url.as_ref())),
                ("isActive", r.is_active.into()),
            ]),
        );
    }

    fn playlist_click(&mut self, r: &PlaylistClick) {
        log_with_data(
            &format!(
                "Playlist item clicked: {}",
                r.title.as_deref().unwrap_or("<untitled>")
            ),
            &obj(&[("url", opt_str(r.url.as_ref()))]),
        );
    }

    fn switch_snapshot(&mut self, r: &SwitchSnapshot) {
        log_with_data(
            "After playlist click",
            &obj(&[
                ("newSrc", JsValue::from_str(&r.src)),
                ("readyState", r.ready_state.raw().into()),
                ("error", error_js(r.error.as_ref())),
            ]),
        );
    }

    fn codec_support(&mut self, r: &CodecSupportReport) {
        log_with_data(
            "Video codec support",
            &obj(&[
                ("mp4", JsValue::from_str(r.mp4.as_canplay_str())),
                ("webm", JsValue::from_str(r.webm.as_canplay_str())),
                ("ogg", JsValue::from_str(r.ogg.as_canplay_str())),
            ]),
        );
    }

    fn autoplay(&mut self, verdict: AutoplayVerdict) {
        match verdict {
            AutoplayVerdict::Working => log_message("Video autoplay is working"),
            AutoplayVerdict::PossiblyBlocked => {
                warn_message("Video autoplay might be blocked by browser");
            }
        }
    }

    fn play_attempt(&mut self, r: &PlayAttempt) {
        if r.succeeded {
            log_message("Video play() succeeded");
        } else {
            error_with_data(
                "Video play() failed",
                &obj(&[("reason", opt_str(r.reason.as_ref()))]),
            );
        }
    }

    fn info_snapshot(&mut self, r: &MediaSnapshot) {
        table_data(&obj(&[
            ("src", JsValue::from_str(&r.src)),
            ("duration", r.duration.into()),
            ("currentTime", r.current_time.into()),
            ("paused", r.paused.into()),
            ("ended", r.ended.into()),
            ("readyState", r.ready_state.raw().into()),
            ("networkState", r.network_state.raw().into()),
            ("videoWidth", r.video_width.into()),
            ("videoHeight", r.video_height.into()),
            ("error", error_js(r.error.as_ref())),
        ]));
    }
}
