// Copyright 2026 the Seismo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Diagnostic records and the sink that receives them.
//!
//! This module defines one struct per record kind and a [`DiagSink`] trait
//! with per-record methods that the overlay calls at each observation point.
//! All method bodies default to no-ops, so implementing only the records you
//! care about is fine.
//!
//! Every record is a plain value: the overlay reads the element's fields at
//! the moment of observation, decodes them through [`media`](crate::media),
//! and hands the finished record to the sink. Sinks never reach back into
//! the DOM.

use alloc::string::String;

use crate::media::{
    AutoplayVerdict, CodecSupport, MediaErrorInfo, NetworkState, ReadyState,
};
use crate::snapshot::MediaSnapshot;

// ---------------------------------------------------------------------------
// Media event names
// ---------------------------------------------------------------------------

/// The fixed set of media lifecycle events the overlay listens to.
///
/// [`ALL`](Self::ALL) enumerates every variant; [`as_str`](Self::as_str)
/// returns the DOM event name used for listener registration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MediaEventKind {
    /// `loadstart`
    LoadStart,
    /// `progress`
    Progress,
    /// `suspend`
    Suspend,
    /// `abort`
    Abort,
    /// `error`
    Error,
    /// `emptied`
    Emptied,
    /// `stalled`
    Stalled,
    /// `loadedmetadata`
    LoadedMetadata,
    /// `loadeddata`
    LoadedData,
    /// `canplay`
    CanPlay,
    /// `canplaythrough`
    CanPlayThrough,
    /// `playing`
    Playing,
    /// `waiting`
    Waiting,
    /// `seeking`
    Seeking,
    /// `seeked`
    Seeked,
    /// `ended`
    Ended,
    /// `durationchange`
    DurationChange,
    /// `timeupdate`
    TimeUpdate,
    /// `play`
    Play,
    /// `pause`
    Pause,
    /// `ratechange`
    RateChange,
    /// `resize`
    Resize,
    /// `volumechange`
    VolumeChange,
}

impl MediaEventKind {
    /// Every observed event kind, in registration order.
    pub const ALL: [Self; 23] = [
        Self::LoadStart,
        Self::Progress,
        Self::Suspend,
        Self::Abort,
        Self::Error,
        Self::Emptied,
        Self::Stalled,
        Self::LoadedMetadata,
        Self::LoadedData,
        Self::CanPlay,
        Self::CanPlayThrough,
        Self::Playing,
        Self::Waiting,
        Self::Seeking,
        Self::Seeked,
        Self::Ended,
        Self::DurationChange,
        Self::TimeUpdate,
        Self::Play,
        Self::Pause,
        Self::RateChange,
        Self::Resize,
        Self::VolumeChange,
    ];

    /// Returns the DOM event name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LoadStart => "loadstart",
            Self::Progress => "progress",
            Self::Suspend => "suspend",
            Self::Abort => "abort",
            Self::Error => "error",
            Self::Emptied => "emptied",
            Self::Stalled => "stalled",
            Self::LoadedMetadata => "loadedmetadata",
            Self::LoadedData => "loadeddata",
            Self::CanPlay => "canplay",
            Self::CanPlayThrough => "canplaythrough",
            Self::Playing => "playing",
            Self::Waiting => "waiting",
            Self::Seeking => "seeking",
            Self::Seeked => "seeked",
            Self::Ended => "ended",
            Self::DurationChange => "durationchange",
            Self::TimeUpdate => "timeupdate",
            Self::Play => "play",
            Self::Pause => "pause",
            Self::RateChange => "ratechange",
            Self::Resize => "resize",
            Self::VolumeChange => "volumechange",
        }
    }

    /// Looks up a kind by its DOM event name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }
}

// ---------------------------------------------------------------------------
// Record structs
// ---------------------------------------------------------------------------

/// Emitted once per firing of any observed media event.
#[derive(Clone, Debug, PartialEq)]
pub struct MediaEventRecord {
    /// Which event fired.
    pub kind: MediaEventKind,
    /// Playback position in seconds at observation time.
    pub current_time: f64,
    /// Media duration in seconds (NaN until metadata arrives).
    pub duration: f64,
    /// Decoded ready state.
    pub ready_state: ReadyState,
    /// Decoded network state.
    pub network_state: NetworkState,
    /// The element's error value, if any.
    pub error: Option<MediaErrorInfo>,
}

impl MediaEventRecord {
    /// Builds a record from the element's raw field values.
    #[must_use]
    pub fn from_raw(
        kind: MediaEventKind,
        current_time: f64,
        duration: f64,
        ready_raw: u16,
        network_raw: u16,
        error: Option<MediaErrorInfo>,
    ) -> Self {
        Self {
            kind,
            current_time,
            duration,
            ready_state: ReadyState::from_raw(ready_raw),
            network_state: NetworkState::from_raw(network_raw),
            error,
        }
    }
}

/// Emitted when the required media element is missing and setup aborts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SetupFailure {
    /// The fixed identifier that failed to resolve.
    pub element_id: String,
}

/// Emitted once after the media element is found, before listeners attach.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementFound {
    /// The element's source URL at setup time.
    pub src: String,
    /// Decoded ready state at setup time.
    pub ready_state: ReadyState,
    /// Decoded network state at setup time.
    pub network_state: NetworkState,
}

/// Emitted by the dedicated error listener, richer than the generic
/// [`MediaEventRecord`] for the same firing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MediaErrorDetail {
    /// The element's error value, if still present.
    pub error: Option<MediaErrorInfo>,
    /// The `src` attribute value.
    pub src: String,
    /// The effective source (`currentSrc`).
    pub current_src: String,
}

/// Emitted when the diagnostic HEAD probe completes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProbeReport {
    /// The probed URL.
    pub url: String,
    /// HTTP status code.
    pub status: u16,
    /// HTTP status text.
    pub status_text: String,
    /// `content-type` response header, if present.
    pub content_type: Option<String>,
    /// `content-length` response header, if present.
    pub content_length: Option<String>,
}

/// Emitted when the diagnostic HEAD probe itself cannot complete.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProbeFailure {
    /// The probed URL.
    pub url: String,
    /// Reason extracted from the rejection.
    pub reason: String,
}

/// Emitted once after playlist enumeration with the number of items found.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlaylistScan {
    /// Number of playlist item nodes present at setup time.
    pub count: usize,
}

/// Emitted once per playlist item found at setup time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlaylistEntry {
    /// Zero-based position within the scanned collection.
    pub index: usize,
    /// Declared video title, if the attribute is present.
    pub title: Option<String>,
    /// Declared video URL, if the attribute is present.
    pub url: Option<String>,
    /// Whether the item carries the active marker class.
    pub is_active: bool,
}

/// Emitted when an instrumented playlist item is clicked, before the
/// original handler runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlaylistClick {
    /// Zero-based position within the scanned collection.
    pub index: usize,
    /// Declared video title, if the attribute was present at setup.
    pub title: Option<String>,
    /// Declared video URL, if the attribute was present at setup.
    pub url: Option<String>,
}

/// Emitted a fixed delay after a playlist click, to confirm whether the
/// source switch took effect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SwitchSnapshot {
    /// The element's source URL after the delay.
    pub src: String,
    /// Decoded ready state after the delay.
    pub ready_state: ReadyState,
    /// The element's error value after the delay, if any.
    pub error: Option<MediaErrorInfo>,
}

/// Emitted once at setup with the three fixed codec-support answers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CodecSupportReport {
    /// `canPlayType("video/mp4")`.
    pub mp4: CodecSupport,
    /// `canPlayType("video/webm")`.
    pub webm: CodecSupport,
    /// `canPlayType("video/ogg")`.
    pub ogg: CodecSupport,
}

/// Emitted when a Force Play attempt settles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayAttempt {
    /// Whether the play intent resolved.
    pub succeeded: bool,
    /// Rejection reason when it did not.
    pub reason: Option<String>,
}

// ---------------------------------------------------------------------------
// DiagSink trait
// ---------------------------------------------------------------------------

/// Receives diagnostic records from the overlay.
///
/// All methods have default no-op implementations, so you only need to
/// override the records you care about.
pub trait DiagSink {
    /// Called when setup aborts because the media element is missing.
    fn setup_failure(&mut self, r: &SetupFailure) {
        _ = r;
    }

    /// Called once after the media element is found.
    fn element_found(&mut self, r: &ElementFound) {
        _ = r;
    }

    /// Called when any observed media event fires.
    fn media_event(&mut self, r: &MediaEventRecord) {
        _ = r;
    }

    /// Called by the dedicated error listener with decoded detail.
    fn media_error(&mut self, r: &MediaErrorDetail) {
        _ = r;
    }

    /// Called when the diagnostic HEAD probe completes.
    fn probe_result(&mut self, r: &ProbeReport) {
        _ = r;
    }

    /// Called when the diagnostic HEAD probe fails.
    fn probe_failed(&mut self, r: &ProbeFailure) {
        _ = r;
    }

    /// Called once after playlist enumeration.
    fn playlist_scan(&mut self, r: &PlaylistScan) {
        _ = r;
    }

    /// Called once per playlist item found at setup time.
    fn playlist_item(&mut self, r: &PlaylistEntry) {
        _ = r;
    }

    /// Called when an instrumented playlist item is clicked.
    fn playlist_click(&mut self, r: &PlaylistClick) {
        _ = r;
    }

    /// Called after the fixed post-click delay with the switch outcome.
    fn switch_snapshot(&mut self, r: &SwitchSnapshot) {
        _ = r;
    }

    /// Called once at setup with the codec-support answers.
    fn codec_support(&mut self, r: &CodecSupportReport) {
        _ = r;
    }

    /// Called once at setup when the element is marked autoplay.
    fn autoplay(&mut self, verdict: AutoplayVerdict) {
        _ = verdict;
    }

    /// Called when a Force Play attempt settles.
    fn play_attempt(&mut self, r: &PlayAttempt) {
        _ = r;
    }

    /// Called when the panel's Log Info control captures a snapshot.
    fn info_snapshot(&mut self, r: &MediaSnapshot) {
        _ = r;
    }
}

/// A [`DiagSink`] that discards all records.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl DiagSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use alloc::string::ToString as _;
    use alloc::vec::Vec;

    use super::*;

    #[test]
    fn event_set_has_twenty_three_names() {
        assert_eq!(MediaEventKind::ALL.len(), 23);
    }

    #[test]
    fn event_names_are_distinct() {
        for (i, a) in MediaEventKind::ALL.iter().enumerate() {
            for b in &MediaEventKind::ALL[i + 1..] {
                assert_ne!(a.as_str(), b.as_str(), "duplicate event name");
            }
        }
    }

    #[test]
    fn event_names_round_trip() {
        for kind in MediaEventKind::ALL {
            assert_eq!(MediaEventKind::from_name(kind.as_str()), Some(kind));
        }
        assert_eq!(MediaEventKind::from_name("click"), None);
    }

    #[test]
    fn record_from_raw_preserves_fields() {
        let record = MediaEventRecord::from_raw(
            MediaEventKind::Playing,
            1.25,
            60.0,
            4,
            1,
            Some(MediaErrorInfo {
                code: 2,
                message: "network".to_string(),
            }),
        );
        assert_eq!(record.kind, MediaEventKind::Playing);
        assert_eq!(record.current_time, 1.25);
        assert_eq!(record.duration, 60.0);
        assert_eq!(record.ready_state, ReadyState::HaveEnoughData);
        assert_eq!(record.network_state, NetworkState::Idle);
        assert_eq!(record.error.as_ref().map(|e| e.code), Some(2));
    }

    #[test]
    fn noop_sink_accepts_every_record() {
        let mut sink = NoopSink;
        sink.setup_failure(&SetupFailure {
            element_id: "mainVideo".to_string(),
        });
        sink.media_event(&MediaEventRecord::from_raw(
            MediaEventKind::LoadStart,
            0.0,
            f64::NAN,
            0,
            2,
            None,
        ));
        sink.codec_support(&CodecSupportReport {
            mp4: CodecSupport::Probably,
            webm: CodecSupport::Maybe,
            ogg: CodecSupport::NotSupported,
        });
        sink.autoplay(AutoplayVerdict::PossiblyBlocked);
    }

    #[test]
    fn sink_dispatch_is_per_record() {
        struct CountingSink {
            events: Vec<MediaEventKind>,
        }
        impl DiagSink for CountingSink {
            fn media_event(&mut self, r: &MediaEventRecord) {
                self.events.push(r.kind);
            }
        }

        let mut sink = CountingSink { events: Vec::new() };
        for kind in MediaEventKind::ALL {
            sink.media_event(&MediaEventRecord::from_raw(kind, 0.0, 0.0, 0, 0, None));
        }
        assert_eq!(sink.events.len(), 23);
        assert_eq!(sink.events.as_slice(), MediaEventKind::ALL.as_slice());
    }
}
