// Copyright 2026 the Seismo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Status-region text state for the debug panel.
//!
//! The region is written by several independent callbacks (panel buttons,
//! the periodic refresh, play-intent callbacks) with last-write-wins
//! semantics and a single priority rule: after a play failure the periodic
//! refresh is suppressed so the failure message stays visible until some
//! other write replaces it. There is no auto-clear timeout.

use alloc::format;
use alloc::string::String;

use crate::media::{NetworkState, ReadyState};
use crate::snapshot::MediaSnapshot;

/// Text state of the panel's status region.
///
/// The overlay mirrors [`text`](Self::text) into the DOM after every state
/// change; this type itself never touches the DOM.
#[derive(Clone, Debug, Default)]
pub struct StatusRegion {
    text: String,
    sticky_failure: bool,
}

impl StatusRegion {
    /// Creates an empty region.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current status text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Records a resolved play intent.
    pub fn play_succeeded(&mut self) {
        self.sticky_failure = false;
        self.text = String::from("Play succeeded");
    }

    /// Records a rejected play intent. The message is sticky: it survives
    /// periodic refreshes until another write replaces it.
    pub fn play_failed(&mut self, reason: &str) {
        self.sticky_failure = true;
        self.text = format!("Play failed: {reason}");
    }

    /// Records a manual reload of the current source.
    pub fn reloaded(&mut self) {
        self.sticky_failure = false;
        self.text = String::from("Video reloaded");
    }

    /// Shows a full element snapshot.
    pub fn show_snapshot(&mut self, snap: &MediaSnapshot) {
        self.sticky_failure = false;
        self.text = snap.render_text();
    }

    /// Applies the periodic refresh. Returns `false` (text unchanged) when a
    /// sticky play failure is being preserved.
    pub fn refresh(&mut self, paused: bool, ready: ReadyState, network: NetworkState) -> bool {
        if self.sticky_failure {
            return false;
        }
        let state = if paused { "Paused" } else { "Playing" };
        self.text = format!(
            "State: {state} | Ready: {} | Network: {}",
            ready.raw(),
            network.raw()
        );
        true
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString as _;

    use super::*;
    use crate::media::MediaErrorInfo;

    fn snap() -> MediaSnapshot {
        MediaSnapshot {
            src: "https://x/a.mp4".to_string(),
            duration: 10.0,
            current_time: 0.0,
            paused: false,
            ended: false,
            ready_state: ReadyState::HaveEnoughData,
            network_state: NetworkState::Loading,
            video_width: 0,
            video_height: 0,
            error: None,
        }
    }

    #[test]
    fn refresh_formats_compact_state_line() {
        let mut region = StatusRegion::new();
        assert!(region.refresh(true, ReadyState::HaveEnoughData, NetworkState::Idle));
        assert_eq!(region.text(), "State: Paused | Ready: 4 | Network: 1");

        assert!(region.refresh(false, ReadyState::HaveCurrentData, NetworkState::Loading));
        assert_eq!(region.text(), "State: Playing | Ready: 2 | Network: 2");
    }

    #[test]
    fn play_failure_is_sticky_across_refreshes() {
        let mut region = StatusRegion::new();
        region.play_failed("NotAllowedError");
        assert_eq!(region.text(), "Play failed: NotAllowedError");

        for _ in 0..5 {
            assert!(!region.refresh(true, ReadyState::HaveNothing, NetworkState::Empty));
            assert_eq!(region.text(), "Play failed: NotAllowedError");
        }
    }

    #[test]
    fn any_other_write_clears_stickiness() {
        let mut region = StatusRegion::new();
        region.play_failed("NotAllowedError");
        region.reloaded();
        assert_eq!(region.text(), "Video reloaded");
        assert!(region.refresh(true, ReadyState::HaveNothing, NetworkState::Empty));

        region.play_failed("NotAllowedError");
        region.play_succeeded();
        assert!(region.refresh(true, ReadyState::HaveNothing, NetworkState::Empty));

        region.play_failed("NotAllowedError");
        region.show_snapshot(&snap());
        assert!(region.refresh(true, ReadyState::HaveNothing, NetworkState::Empty));
    }

    #[test]
    fn snapshot_write_shows_rendered_fields() {
        let mut region = StatusRegion::new();
        let mut s = snap();
        s.error = Some(MediaErrorInfo {
            code: 2,
            message: "network".to_string(),
        });
        region.show_snapshot(&s);
        assert!(region.text().contains("error: code 2 (MEDIA_ERR_NETWORK) network"));
    }
}
