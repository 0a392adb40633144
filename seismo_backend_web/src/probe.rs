// Copyright 2026 the Seismo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Header-only reachability probe via `fetch`.
//!
//! [`probe_head`] issues a HEAD request against a URL and reports the status
//! line plus the two headers that matter for media diagnosis (content type
//! and length). The caller decides what to do with a failure; the probe
//! itself never retries.

use alloc::string::String;

use wasm_bindgen::{JsCast as _, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

use seismo_core::diag::ProbeReport;

/// Issues a HEAD request against `url` and collects the response metadata.
///
/// The returned error is the raw rejection value (network unreachable, CORS
/// rejection, etc.); [`error_message`](crate::error_message) turns it into a
/// loggable string.
pub async fn probe_head(url: &str) -> Result<ProbeReport, JsValue> {
    let init = RequestInit::new();
    init.set_method("HEAD");
    let request = Request::new_with_str_and_init(url, &init)?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window object"))?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await?
        .dyn_into()?;

    let headers = response.headers();
    Ok(ProbeReport {
        url: String::from(url),
        status: response.status(),
        status_text: response.status_text(),
        content_type: header(&headers, "content-type"),
        content_length: header(&headers, "content-length"),
    })
}

fn header(headers: &Headers, name: &str) -> Option<String> {
    headers.get(name).ok().flatten()
}
