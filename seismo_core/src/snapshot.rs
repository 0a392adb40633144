// Copyright 2026 the Seismo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The ten-field element snapshot behind the panel's *Log Info* control.

use alloc::string::String;
use core::fmt::Write as _;

use crate::media::{MediaErrorInfo, NetworkState, ReadyState};

/// A point-in-time capture of the media element's observable fields.
///
/// The field set is fixed: src, duration, currentTime, paused, ended,
/// readyState, networkState, videoWidth, videoHeight, error.
#[derive(Clone, Debug, PartialEq)]
pub struct MediaSnapshot {
    /// The `src` attribute value.
    pub src: String,
    /// Media duration in seconds (NaN until metadata arrives).
    pub duration: f64,
    /// Playback position in seconds.
    pub current_time: f64,
    /// Whether playback is paused.
    pub paused: bool,
    /// Whether playback has ended.
    pub ended: bool,
    /// Decoded ready state.
    pub ready_state: ReadyState,
    /// Decoded network state.
    pub network_state: NetworkState,
    /// Intrinsic frame width in pixels (0 until metadata arrives).
    pub video_width: u32,
    /// Intrinsic frame height in pixels (0 until metadata arrives).
    pub video_height: u32,
    /// The element's error value, if any.
    pub error: Option<MediaErrorInfo>,
}

impl MediaSnapshot {
    /// Renders the snapshot as one `key: value` line per field, in the
    /// fixed field order.
    #[must_use]
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "src: {}", self.src);
        let _ = writeln!(out, "duration: {:.3}", self.duration);
        let _ = writeln!(out, "currentTime: {:.3}", self.current_time);
        let _ = writeln!(out, "paused: {}", self.paused);
        let _ = writeln!(out, "ended: {}", self.ended);
        let _ = writeln!(
            out,
            "readyState: {} ({})",
            self.ready_state.raw(),
            self.ready_state.name()
        );
        let _ = writeln!(
            out,
            "networkState: {} ({})",
            self.network_state.raw(),
            self.network_state.name()
        );
        let _ = writeln!(out, "videoWidth: {}", self.video_width);
        let _ = writeln!(out, "videoHeight: {}", self.video_height);
        match &self.error {
            Some(err) => {
                let _ = writeln!(
                    out,
                    "error: code {} ({}) {}",
                    err.code,
                    err.code_name(),
                    err.message
                );
            }
            None => {
                let _ = writeln!(out, "error: none");
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString as _;

    use super::*;

    fn sample() -> MediaSnapshot {
        MediaSnapshot {
            src: "https://x/a.mp4".to_string(),
            duration: 60.5,
            current_time: 1.0,
            paused: true,
            ended: false,
            ready_state: ReadyState::HaveEnoughData,
            network_state: NetworkState::Idle,
            video_width: 1920,
            video_height: 1080,
            error: None,
        }
    }

    #[test]
    fn render_contains_all_ten_fields() {
        let text = sample().render_text();
        for key in [
            "src:",
            "duration:",
            "currentTime:",
            "paused:",
            "ended:",
            "readyState:",
            "networkState:",
            "videoWidth:",
            "videoHeight:",
            "error:",
        ] {
            assert!(text.contains(key), "missing field {key}");
        }
    }

    #[test]
    fn render_decodes_states_and_values() {
        let text = sample().render_text();
        assert!(text.contains("src: https://x/a.mp4"));
        assert!(text.contains("readyState: 4 (HAVE_ENOUGH_DATA)"));
        assert!(text.contains("networkState: 1 (NETWORK_IDLE)"));
        assert!(text.contains("videoWidth: 1920"));
        assert!(text.contains("error: none"));
    }

    #[test]
    fn render_shows_error_detail() {
        let mut snap = sample();
        snap.error = Some(MediaErrorInfo {
            code: 4,
            message: "no supported source".to_string(),
        });
        let text = snap.render_text();
        assert!(text.contains("error: code 4 (MEDIA_ERR_SRC_NOT_SUPPORTED) no supported source"));
    }

    #[test]
    fn render_tolerates_nan_duration() {
        let mut snap = sample();
        snap.duration = f64::NAN;
        assert!(snap.render_text().contains("duration: NaN"));
    }
}
