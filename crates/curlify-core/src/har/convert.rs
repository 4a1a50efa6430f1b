//! Turn HAR request entries into [`HttpRequest`]s.

use anyhow::{Context, Result};
use std::path::Path;

use crate::request::{Cookie, HttpRequest};

use super::parse::{HarLog, HarRequest};

/// Read a HAR file and convert every entry's request, in file order.
pub fn load_requests(path: &Path) -> Result<Vec<HttpRequest>> {
    let bytes =
        std::fs::read(path).with_context(|| format!("read HAR file: {}", path.display()))?;
    requests_from_slice(&bytes).with_context(|| format!("load HAR: {}", path.display()))
}

/// Parse HAR JSON and convert every entry's request.
pub fn requests_from_slice(bytes: &[u8]) -> Result<Vec<HttpRequest>> {
    let har: HarLog = serde_json::from_slice(bytes).context("parse HAR JSON")?;
    if har.log.entries.is_empty() {
        anyhow::bail!("HAR file has no entries");
    }
    let requests: Vec<HttpRequest> = har
        .log
        .entries
        .into_iter()
        .map(|entry| to_http_request(entry.request))
        .collect();
    tracing::debug!("converted {} HAR entries", requests.len());
    Ok(requests)
}

fn to_http_request(har: HarRequest) -> HttpRequest {
    let mut req = HttpRequest::new(har.method, har.url);
    let mut header_cookies = Vec::new();

    for h in har.headers {
        // HTTP/2 pseudo headers (`:authority`, `:path`, ...) have no curl equivalent.
        if h.name.starts_with(':') {
            continue;
        }
        if h.name.eq_ignore_ascii_case("cookie") {
            header_cookies.extend(Cookie::parse_header(&h.value));
            continue;
        }
        req.add_header(h.name, h.value);
    }

    if har.cookies.is_empty() {
        req.cookies = header_cookies;
    } else {
        req.cookies = har
            .cookies
            .into_iter()
            .map(|c| Cookie::new(c.name, c.value))
            .collect();
    }

    if let Some(text) = har.post_data.and_then(|p| p.text) {
        req = req.body(text);
    }

    req
}
