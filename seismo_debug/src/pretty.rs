// Copyright 2026 the Seismo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable diagnostic output.
//!
//! [`PrettyPrintSink`] implements [`DiagSink`] and writes one line per record
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use seismo_core::diag::{
    CodecSupportReport, DiagSink, ElementFound, MediaErrorDetail, MediaEventRecord, PlayAttempt,
    PlaylistClick, PlaylistEntry, PlaylistScan, ProbeFailure, ProbeReport, SetupFailure,
    SwitchSnapshot,
};
use seismo_core::media::{AutoplayVerdict, MediaErrorInfo};
use seismo_core::snapshot::MediaSnapshot;

/// Writes human-readable diagnostic lines to a [`Write`](std::io::Write)
/// destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }
}

fn error_label(error: Option<&MediaErrorInfo>) -> String {
    match error {
        Some(err) => format!("code {} ({})", err.code, err.code_name()),
        None => "-".to_string(),
    }
}

fn attr_label(value: Option<&String>) -> &str {
    value.map_or("<missing>", String::as_str)
}

impl<W: Write> DiagSink for PrettyPrintSink<W> {
    fn setup_failure(&mut self, r: &SetupFailure) {
        let _ = writeln!(self.writer, "[setup] element #{} not found", r.element_id);
    }

    fn element_found(&mut self, r: &ElementFound) {
        let _ = writeln!(
            self.writer,
            "[setup] element found src={} ready={} net={}",
            r.src,
            r.ready_state.raw(),
            r.network_state.raw(),
        );
    }

    fn media_event(&mut self, r: &MediaEventRecord) {
        let _ = writeln!(
            self.writer,
            "[event] {} t={:.3}s dur={:.3}s ready={} net={} err={}",
            r.kind.as_str(),
            r.current_time,
            r.duration,
            r.ready_state.raw(),
            r.network_state.raw(),
            error_label(r.error.as_ref()),
        );
    }

    fn media_error(&mut self, r: &MediaErrorDetail) {
        let msg = r.error.as_ref().map_or("", |e| e.message.as_str());
        let _ = writeln!(
            self.writer,
            "[error] {} msg={:?} src={} currentSrc={}",
            error_label(r.error.as_ref()),
            msg,
            r.src,
            r.current_src,
        );
    }

    fn probe_result(&mut self, r: &ProbeReport) {
        let _ = writeln!(
            self.writer,
            "[probe] url={} status={} {} type={} length={}",
            r.url,
            r.status,
            r.status_text,
            attr_label(r.content_type.as_ref()),
            attr_label(r.content_length.as_ref()),
        );
    }

    fn probe_failed(&mut self, r: &ProbeFailure) {
        let _ = writeln!(self.writer, "[probe] url={} FAILED: {}", r.url, r.reason);
    }

    fn playlist_scan(&mut self, r: &PlaylistScan) {
        let _ = writeln!(self.writer, "[playlist] {} items", r.count);
    }

    fn playlist_item(&mut self, r: &PlaylistEntry) {
        let active = if r.is_active { " active" } else { "" };
        let _ = writeln!(
            self.writer,
            "[playlist] item {} title={:?} url={}{}",
            r.index + 1,
            attr_label(r.title.as_ref()),
            attr_label(r.url.as_ref()),
            active,
        );
    }

    fn playlist_click(&mut self, r: &PlaylistClick) {
        let _ = writeln!(
            self.writer,
            "[playlist] click {} title={:?} url={}",
            r.index + 1,
            attr_label(r.title.as_ref()),
            attr_label(r.url.as_ref()),
        );
    }

    fn switch_snapshot(&mut self, r: &SwitchSnapshot) {
        let _ = writeln!(
            self.writer,
            "[playlist] after-click src={} ready={} err={}",
            r.src,
            r.ready_state.raw(),
            error_label(r.error.as_ref()),
        );
    }

    fn codec_support(&mut self, r: &CodecSupportReport) {
        let _ = writeln!(
            self.writer,
            "[codec] mp4={:?} webm={:?} ogg={:?}",
            r.mp4.as_canplay_str(),
            r.webm.as_canplay_str(),
            r.ogg.as_canplay_str(),
        );
    }

    fn autoplay(&mut self, verdict: AutoplayVerdict) {
        let label = match verdict {
            AutoplayVerdict::Working => "working",
            AutoplayVerdict::PossiblyBlocked => "possibly blocked by browser",
        };
        let _ = writeln!(self.writer, "[autoplay] {label}");
    }

    fn play_attempt(&mut self, r: &PlayAttempt) {
        if r.succeeded {
            let _ = writeln!(self.writer, "[play] succeeded");
        } else {
            let _ = writeln!(
                self.writer,
                "[play] FAILED: {}",
                r.reason.as_deref().unwrap_or("unknown"),
            );
        }
    }

    fn info_snapshot(&mut self, r: &MediaSnapshot) {
        let _ = writeln!(
            self.writer,
            "[info] src={} dur={:.3}s t={:.3}s paused={} ended={} ready={} net={} {}x{} err={}",
            r.src,
            r.duration,
            r.current_time,
            r.paused,
            r.ended,
            r.ready_state.raw(),
            r.network_state.raw(),
            r.video_width,
            r.video_height,
            error_label(r.error.as_ref()),
        );
    }
}

#[cfg(test)]
mod tests {
    use seismo_core::diag::MediaEventKind;
    use seismo_core::media::{CodecSupport, NetworkState, ReadyState};

    use super::*;

    fn capture(f: impl FnOnce(&mut PrettyPrintSink<Vec<u8>>)) -> String {
        let mut sink = PrettyPrintSink::with_writer(Vec::new());
        f(&mut sink);
        String::from_utf8(sink.writer).expect("utf8 output")
    }

    #[test]
    fn one_line_per_media_event() {
        let out = capture(|sink| {
            for kind in MediaEventKind::ALL {
                sink.media_event(&MediaEventRecord::from_raw(kind, 0.5, 10.0, 2, 1, None));
            }
        });
        assert_eq!(out.lines().count(), 23);
        assert!(out.contains("[event] canplaythrough t=0.500s"));
    }

    #[test]
    fn error_line_carries_decoded_code() {
        let out = capture(|sink| {
            sink.media_error(&MediaErrorDetail {
                error: Some(MediaErrorInfo {
                    code: 4,
                    message: "no source".to_string(),
                }),
                src: "https://x/a.mp4".to_string(),
                current_src: "https://x/a.mp4".to_string(),
            });
        });
        assert!(out.contains("code 4 (MEDIA_ERR_SRC_NOT_SUPPORTED)"));
        assert!(out.contains("msg=\"no source\""));
    }

    #[test]
    fn probe_lines_for_both_outcomes() {
        let out = capture(|sink| {
            sink.probe_result(&ProbeReport {
                url: "https://x/a.mp4".to_string(),
                status: 200,
                status_text: "OK".to_string(),
                content_type: Some("video/mp4".to_string()),
                content_length: Some("1024".to_string()),
            });
            sink.probe_failed(&ProbeFailure {
                url: "https://x/b.mp4".to_string(),
                reason: "Failed to fetch".to_string(),
            });
        });
        assert!(out.contains("status=200 OK type=video/mp4 length=1024"));
        assert!(out.contains("url=https://x/b.mp4 FAILED: Failed to fetch"));
    }

    #[test]
    fn playlist_lines_use_one_based_positions() {
        let out = capture(|sink| {
            sink.playlist_scan(&PlaylistScan { count: 2 });
            sink.playlist_item(&PlaylistEntry {
                index: 0,
                title: Some("A".to_string()),
                url: Some("https://x/a.mp4".to_string()),
                is_active: true,
            });
        });
        assert!(out.contains("[playlist] 2 items"));
        assert!(out.contains("item 1 title=\"A\" url=https://x/a.mp4 active"));
    }

    #[test]
    fn codec_line_is_verbatim_tri_state() {
        let out = capture(|sink| {
            sink.codec_support(&CodecSupportReport {
                mp4: CodecSupport::Probably,
                webm: CodecSupport::Maybe,
                ogg: CodecSupport::NotSupported,
            });
        });
        assert!(out.contains("mp4=\"probably\" webm=\"maybe\" ogg=\"\""));
    }

    #[test]
    fn info_line_has_all_ten_fields() {
        let out = capture(|sink| {
            sink.info_snapshot(&MediaSnapshot {
                src: "https://x/a.mp4".to_string(),
                duration: 12.0,
                current_time: 3.0,
                paused: false,
                ended: false,
                ready_state: ReadyState::HaveEnoughData,
                network_state: NetworkState::Idle,
                video_width: 640,
                video_height: 360,
                error: None,
            });
        });
        assert!(out.contains(
            "src=https://x/a.mp4 dur=12.000s t=3.000s paused=false ended=false ready=4 net=1 640x360 err=-"
        ));
    }
}
