// Copyright 2026 the Seismo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core record types and sink trait for media-element diagnostics.
//!
//! `seismo_core` provides the typed diagnostic records that the overlay
//! emits while observing a page-hosted video element, plus the pure logic
//! the overlay delegates to (status-region priority, snapshot formatting,
//! state decoding). It is `no_std` compatible (with `alloc`) and has no
//! browser dependencies, so everything here runs under the host test
//! harness.
//!
//! # Architecture
//!
//! The overlay turns raw media-element observations into records and feeds
//! them to a sink:
//!
//! ```text
//!   Media element (events, error, playlist clicks, panel buttons)
//!       │
//!       ▼
//!   seismo_overlay (listeners, timers, panel)
//!       │ builds
//!       ▼
//!   record structs ──► DiagSink ──► ConsoleSink / PrettyPrintSink / JsonLinesSink
//! ```
//!
//! **[`diag`]** — One struct per record kind, the [`DiagSink`](diag::DiagSink)
//! trait with default no-op methods, and the fixed 23-name media event set.
//!
//! **[`media`]** — Typed views of the element's small-integer enumerations
//! (ready state, network state, error code) and the tri-state codec-support
//! level.
//!
//! **[`snapshot`]** — The ten-field element snapshot behind the panel's
//! *Log Info* control, with its text rendering.
//!
//! **[`status`]** — The status-region text state, including the sticky
//! play-failure priority rule that suppresses the periodic refresh.

#![no_std]

extern crate alloc;

pub mod diag;
pub mod media;
pub mod snapshot;
pub mod status;
