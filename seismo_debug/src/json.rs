// Copyright 2026 the Seismo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON Lines export.
//!
//! [`JsonLinesSink`] writes one JSON object per record, suitable for piping
//! into log tooling. Field names mirror the record structs; a `record` field
//! carries the kind discriminator.

use std::io::Write;

use serde_json::{Value, json};

use seismo_core::diag::{
    CodecSupportReport, DiagSink, ElementFound, MediaErrorDetail, MediaEventRecord, PlayAttempt,
    PlaylistClick, PlaylistEntry, PlaylistScan, ProbeFailure, ProbeReport, SetupFailure,
    SwitchSnapshot,
};
use seismo_core::media::{AutoplayVerdict, MediaErrorInfo};
use seismo_core::snapshot::MediaSnapshot;

/// Writes one JSON object per record to a [`Write`](std::io::Write)
/// destination.
pub struct JsonLinesSink<W: Write> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for JsonLinesSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonLinesSink").finish_non_exhaustive()
    }
}

impl<W: Write> JsonLinesSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn emit(&mut self, value: &Value) {
        let _ = serde_json::to_writer(&mut self.writer, value);
        let _ = self.writer.write_all(b"\n");
    }
}

/// JSON values cannot carry NaN; map it to null as browsers do.
fn finite_or_null(v: f64) -> Value {
    if v.is_finite() { json!(v) } else { Value::Null }
}

fn error_value(error: Option<&MediaErrorInfo>) -> Value {
    match error {
        Some(err) => json!({
            "code": err.code,
            "name": err.code_name(),
            "message": err.message,
        }),
        None => Value::Null,
    }
}

impl<W: Write> DiagSink for JsonLinesSink<W> {
    fn setup_failure(&mut self, r: &SetupFailure) {
        self.emit(&json!({
            "record": "setup_failure",
            "element_id": r.element_id,
        }));
    }

    fn element_found(&mut self, r: &ElementFound) {
        self.emit(&json!({
            "record": "element_found",
            "src": r.src,
            "ready_state": r.ready_state.raw(),
            "network_state": r.network_state.raw(),
        }));
    }

    fn media_event(&mut self, r: &MediaEventRecord) {
        self.emit(&json!({
            "record": "media_event",
            "event": r.kind.as_str(),
            "current_time": finite_or_null(r.current_time),
            "duration": finite_or_null(r.duration),
            "ready_state": r.ready_state.raw(),
            "network_state": r.network_state.raw(),
            "error": error_value(r.error.as_ref()),
        }));
    }

    fn media_error(&mut self, r: &MediaErrorDetail) {
        self.emit(&json!({
            "record": "media_error",
            "error": error_value(r.error.as_ref()),
            "src": r.src,
            "current_src": r.current_src,
        }));
    }

    fn probe_result(&mut self, r: &ProbeReport) {
        self.emit(&json!({
            "record": "probe_result",
            "url": r.url,
            "status": r.status,
            "status_text": r.status_text,
            "content_type": r.content_type,
            "content_length": r.content_length,
        }));
    }

    fn probe_failed(&mut self, r: &ProbeFailure) {
        self.emit(&json!({
            "record": "probe_failed",
            "url": r.url,
            "reason": r.reason,
        }));
    }

    fn playlist_scan(&mut self, r: &PlaylistScan) {
        self.emit(&json!({
            "record": "playlist_scan",
            "count": r.count,
        }));
    }

    fn playlist_item(&mut self, r: &PlaylistEntry) {
        self.emit(&json!({
            "record": "playlist_item",
            "index": r.index,
            "title": r.title,
            "url": r.url,
            "is_active": r.is_active,
        }));
    }

    fn playlist_click(&mut self, r: &PlaylistClick) {
        self.emit(&json!({
            "record": "playlist_click",
            "index": r.index,
            "title": r.title,
            "url": r.url,
        }));
    }

    fn switch_snapshot(&mut self, r: &SwitchSnapshot) {
        self.emit(&json!({
            "record": "switch_snapshot",
            "src": r.src,
            "ready_state": r.ready_state.raw(),
            "error": error_value(r.error.as_ref()),
        }));
    }

    fn codec_support(&mut self, r: &CodecSupportReport) {
        self.emit(&json!({
            "record": "codec_support",
            "mp4": r.mp4.as_canplay_str(),
            "webm": r.webm.as_canplay_str(),
            "ogg": r.ogg.as_canplay_str(),
        }));
    }

    fn autoplay(&mut self, verdict: AutoplayVerdict) {
        let working = matches!(verdict, AutoplayVerdict::Working);
        self.emit(&json!({
            "record": "autoplay",
            "working": working,
        }));
    }

    fn play_attempt(&mut self, r: &PlayAttempt) {
        self.emit(&json!({
            "record": "play_attempt",
            "succeeded": r.succeeded,
            "reason": r.reason,
        }));
    }

    fn info_snapshot(&mut self, r: &MediaSnapshot) {
        self.emit(&json!({
            "record": "info_snapshot",
            "src": r.src,
            "duration": finite_or_null(r.duration),
            "current_time": finite_or_null(r.current_time),
            "paused": r.paused,
            "ended": r.ended,
            "ready_state": r.ready_state.raw(),
            "network_state": r.network_state.raw(),
            "video_width": r.video_width,
            "video_height": r.video_height,
            "error": error_value(r.error.as_ref()),
        }));
    }
}

#[cfg(test)]
mod tests {
    use seismo_core::diag::MediaEventKind;
    use seismo_core::media::CodecSupport;

    use super::*;

    fn capture(f: impl FnOnce(&mut JsonLinesSink<Vec<u8>>)) -> Vec<Value> {
        let mut sink = JsonLinesSink::new(Vec::new());
        f(&mut sink);
        String::from_utf8(sink.writer)
            .expect("utf8 output")
            .lines()
            .map(|line| serde_json::from_str(line).expect("valid json line"))
            .collect()
    }

    #[test]
    fn one_object_per_record() {
        let values = capture(|sink| {
            for kind in MediaEventKind::ALL {
                sink.media_event(&MediaEventRecord::from_raw(kind, 0.0, f64::NAN, 0, 0, None));
            }
        });
        assert_eq!(values.len(), 23);
        assert_eq!(values[0]["record"], "media_event");
        assert_eq!(values[0]["event"], "loadstart");
        // NaN duration maps to null.
        assert!(values[0]["duration"].is_null());
    }

    #[test]
    fn error_object_carries_code_and_name() {
        let values = capture(|sink| {
            sink.media_error(&MediaErrorDetail {
                error: Some(MediaErrorInfo {
                    code: 2,
                    message: "network".to_string(),
                }),
                src: "https://x/a.mp4".to_string(),
                current_src: String::new(),
            });
        });
        assert_eq!(values[0]["error"]["code"], 2);
        assert_eq!(values[0]["error"]["name"], "MEDIA_ERR_NETWORK");
    }

    #[test]
    fn codec_report_is_verbatim() {
        let values = capture(|sink| {
            sink.codec_support(&CodecSupportReport {
                mp4: CodecSupport::Probably,
                webm: CodecSupport::Maybe,
                ogg: CodecSupport::NotSupported,
            });
        });
        assert_eq!(values[0]["mp4"], "probably");
        assert_eq!(values[0]["webm"], "maybe");
        assert_eq!(values[0]["ogg"], "");
    }

    #[test]
    fn missing_playlist_attributes_are_null() {
        let values = capture(|sink| {
            sink.playlist_item(&PlaylistEntry {
                index: 0,
                title: None,
                url: None,
                is_active: false,
            });
        });
        assert!(values[0]["title"].is_null());
        assert!(values[0]["url"].is_null());
    }
}
