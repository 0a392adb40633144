// Copyright 2026 the Seismo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed views of the media element's browser-defined state values.
//!
//! The browser exposes ready state, network state, and error codes as small
//! integers. These enums decode them once, at the observation point, so every
//! record downstream carries a name alongside the raw value. Decoding is
//! total: values outside the documented range saturate rather than fail,
//! since a diagnostics layer must never reject what the browser reports.

use alloc::string::String;

// ---------------------------------------------------------------------------
// Ready state
// ---------------------------------------------------------------------------

/// How much media data is available, per `HTMLMediaElement.readyState`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ReadyState {
    /// No information about the media resource (0).
    HaveNothing,
    /// Metadata (duration, dimensions) is available (1).
    HaveMetadata,
    /// Data for the current position is available (2).
    HaveCurrentData,
    /// Data for the current position and at least a little ahead (3).
    HaveFutureData,
    /// Enough data to play through without stalling (4).
    HaveEnoughData,
}

impl ReadyState {
    /// Decodes a raw `readyState` value. Values above 4 saturate to
    /// [`HaveEnoughData`](Self::HaveEnoughData).
    #[must_use]
    pub const fn from_raw(raw: u16) -> Self {
        match raw {
            0 => Self::HaveNothing,
            1 => Self::HaveMetadata,
            2 => Self::HaveCurrentData,
            3 => Self::HaveFutureData,
            _ => Self::HaveEnoughData,
        }
    }

    /// Returns the raw integer value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        match self {
            Self::HaveNothing => 0,
            Self::HaveMetadata => 1,
            Self::HaveCurrentData => 2,
            Self::HaveFutureData => 3,
            Self::HaveEnoughData => 4,
        }
    }

    /// Returns the browser constant name, e.g. `HAVE_ENOUGH_DATA`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::HaveNothing => "HAVE_NOTHING",
            Self::HaveMetadata => "HAVE_METADATA",
            Self::HaveCurrentData => "HAVE_CURRENT_DATA",
            Self::HaveFutureData => "HAVE_FUTURE_DATA",
            Self::HaveEnoughData => "HAVE_ENOUGH_DATA",
        }
    }
}

// ---------------------------------------------------------------------------
// Network state
// ---------------------------------------------------------------------------

/// Fetch status of the media resource, per `HTMLMediaElement.networkState`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NetworkState {
    /// The element has not started selecting a resource (0).
    Empty,
    /// A resource is selected but not currently loading (1).
    Idle,
    /// The browser is downloading data (2).
    Loading,
    /// No supported resource was found (3).
    NoSource,
}

impl NetworkState {
    /// Decodes a raw `networkState` value. Values above 3 saturate to
    /// [`NoSource`](Self::NoSource).
    #[must_use]
    pub const fn from_raw(raw: u16) -> Self {
        match raw {
            0 => Self::Empty,
            1 => Self::Idle,
            2 => Self::Loading,
            _ => Self::NoSource,
        }
    }

    /// Returns the raw integer value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        match self {
            Self::Empty => 0,
            Self::Idle => 1,
            Self::Loading => 2,
            Self::NoSource => 3,
        }
    }

    /// Returns the browser constant name, e.g. `NETWORK_IDLE`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Empty => "NETWORK_EMPTY",
            Self::Idle => "NETWORK_IDLE",
            Self::Loading => "NETWORK_LOADING",
            Self::NoSource => "NETWORK_NO_SOURCE",
        }
    }
}

// ---------------------------------------------------------------------------
// Media error
// ---------------------------------------------------------------------------

/// Decoded `MediaError.code` values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MediaErrorCode {
    /// Fetching aborted at the user's request (1).
    Aborted,
    /// A network error interrupted fetching (2).
    Network,
    /// Decoding failed after the resource was usable (3).
    Decode,
    /// The resource or provider is not supported (4).
    SrcNotSupported,
}

impl MediaErrorCode {
    /// Decodes a raw error code; returns `None` for values outside 1..=4.
    #[must_use]
    pub const fn from_raw(raw: u16) -> Option<Self> {
        match raw {
            1 => Some(Self::Aborted),
            2 => Some(Self::Network),
            3 => Some(Self::Decode),
            4 => Some(Self::SrcNotSupported),
            _ => None,
        }
    }

    /// Returns the browser constant name, e.g. `MEDIA_ERR_DECODE`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aborted => "MEDIA_ERR_ABORTED",
            Self::Network => "MEDIA_ERR_NETWORK",
            Self::Decode => "MEDIA_ERR_DECODE",
            Self::SrcNotSupported => "MEDIA_ERR_SRC_NOT_SUPPORTED",
        }
    }
}

/// The error value observed on the media element: raw code plus the
/// browser-supplied message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MediaErrorInfo {
    /// Raw `MediaError.code` value, preserved verbatim.
    pub code: u16,
    /// Browser-supplied error message (often empty).
    pub message: String,
}

impl MediaErrorInfo {
    /// Returns the decoded code, if it is one of the four documented values.
    #[must_use]
    pub const fn kind(&self) -> Option<MediaErrorCode> {
        MediaErrorCode::from_raw(self.code)
    }

    /// Returns the constant name for the code, or `MEDIA_ERR_UNKNOWN`.
    #[must_use]
    pub const fn code_name(&self) -> &'static str {
        match self.kind() {
            Some(kind) => kind.name(),
            None => "MEDIA_ERR_UNKNOWN",
        }
    }
}

// ---------------------------------------------------------------------------
// Codec support
// ---------------------------------------------------------------------------

/// Tri-state result of a `canPlayType` query.
///
/// The browser answers with one of three strings: `"probably"`, `"maybe"`,
/// or `""`. [`parse`](Self::parse) and [`as_canplay_str`](Self::as_canplay_str)
/// round-trip those strings verbatim.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CodecSupport {
    /// The type is almost certainly playable (`"probably"`).
    Probably,
    /// The type might be playable (`"maybe"`).
    Maybe,
    /// The type is not playable (`""`).
    NotSupported,
}

impl CodecSupport {
    /// Parses a `canPlayType` answer. Anything other than the two positive
    /// answers is treated as not supported.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "probably" => Self::Probably,
            "maybe" => Self::Maybe,
            _ => Self::NotSupported,
        }
    }

    /// Renders the level back to the exact `canPlayType` string.
    #[must_use]
    pub const fn as_canplay_str(self) -> &'static str {
        match self {
            Self::Probably => "probably",
            Self::Maybe => "maybe",
            Self::NotSupported => "",
        }
    }
}

// ---------------------------------------------------------------------------
// Autoplay heuristic
// ---------------------------------------------------------------------------

/// One-shot autoplay assessment made at overlay setup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AutoplayVerdict {
    /// The element is marked autoplay and was observed playing with
    /// sufficient buffered readiness.
    Working,
    /// The element is marked autoplay but is not in that state; the browser
    /// may be blocking autoplay.
    PossiblyBlocked,
}

/// Assesses autoplay at setup time. Returns `None` when the element is not
/// marked autoplay; the heuristic says nothing about such elements.
///
/// "Sufficient readiness" means at least [`ReadyState::HaveFutureData`].
#[must_use]
pub fn assess_autoplay(autoplay: bool, paused: bool, ready: ReadyState) -> Option<AutoplayVerdict> {
    if !autoplay {
        return None;
    }
    if !paused && ready >= ReadyState::HaveFutureData {
        Some(AutoplayVerdict::Working)
    } else {
        Some(AutoplayVerdict::PossiblyBlocked)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use alloc::string::ToString as _;

    use super::*;

    #[test]
    fn ready_state_round_trips_documented_values() {
        for raw in 0..=4 {
            assert_eq!(ReadyState::from_raw(raw).raw(), raw);
        }
    }

    #[test]
    fn ready_state_saturates_above_range() {
        assert_eq!(ReadyState::from_raw(9), ReadyState::HaveEnoughData);
    }

    #[test]
    fn network_state_round_trips_documented_values() {
        for raw in 0..=3 {
            assert_eq!(NetworkState::from_raw(raw).raw(), raw);
        }
    }

    #[test]
    fn media_error_code_rejects_out_of_range() {
        assert_eq!(MediaErrorCode::from_raw(0), None);
        assert_eq!(MediaErrorCode::from_raw(5), None);
        assert_eq!(
            MediaErrorCode::from_raw(4),
            Some(MediaErrorCode::SrcNotSupported)
        );
    }

    #[test]
    fn media_error_info_decodes_name() {
        let info = MediaErrorInfo {
            code: 3,
            message: "decode failed".to_string(),
        };
        assert_eq!(info.code_name(), "MEDIA_ERR_DECODE");

        let unknown = MediaErrorInfo {
            code: 7,
            message: String::new(),
        };
        assert_eq!(unknown.kind(), None);
        assert_eq!(unknown.code_name(), "MEDIA_ERR_UNKNOWN");
    }

    #[test]
    fn codec_support_round_trips_canplay_strings() {
        for raw in ["probably", "maybe", ""] {
            assert_eq!(CodecSupport::parse(raw).as_canplay_str(), raw);
        }
    }

    #[test]
    fn codec_support_treats_garbage_as_unsupported() {
        assert_eq!(CodecSupport::parse("no"), CodecSupport::NotSupported);
    }

    #[test]
    fn autoplay_unset_yields_no_verdict() {
        assert_eq!(
            assess_autoplay(false, true, ReadyState::HaveNothing),
            None
        );
    }

    #[test]
    fn autoplay_playing_with_buffered_data_is_working() {
        assert_eq!(
            assess_autoplay(true, false, ReadyState::HaveFutureData),
            Some(AutoplayVerdict::Working)
        );
        assert_eq!(
            assess_autoplay(true, false, ReadyState::HaveEnoughData),
            Some(AutoplayVerdict::Working)
        );
    }

    #[test]
    fn autoplay_paused_or_unbuffered_is_possibly_blocked() {
        assert_eq!(
            assess_autoplay(true, true, ReadyState::HaveEnoughData),
            Some(AutoplayVerdict::PossiblyBlocked)
        );
        assert_eq!(
            assess_autoplay(true, false, ReadyState::HaveCurrentData),
            Some(AutoplayVerdict::PossiblyBlocked)
        );
    }
}
