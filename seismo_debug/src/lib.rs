// Copyright 2026 the Seismo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pretty-printing and JSON Lines export for seismo diagnostics.
//!
//! This crate provides [`DiagSink`](seismo_core::diag::DiagSink)
//! implementations for development and post-mortem analysis on the host:
//!
//! - [`pretty::PrettyPrintSink`] — human-readable one-line-per-record output.
//! - [`json::JsonLinesSink`] — one JSON object per record, for tooling.
//!
//! The browser-side console sink lives in `seismo_backend_web`.

pub mod json;
pub mod pretty;
