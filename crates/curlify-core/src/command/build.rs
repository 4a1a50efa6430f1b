//! Assemble the curl token list from a request.

use crate::cookie_jar::HttpClient;
use crate::request::{Body, HttpRequest};

use super::cookie::cookie_header;
use super::error::FormatError;
use super::escape::bash_escape;
use super::{CommandBuilder, CurlCommand, FormatOptions};

/// Format `req` as a curl command with default options.
///
/// If the request has a body it is read fully and replaced with an in-memory
/// copy, so the request can still be sent afterwards. When `client` carries a
/// cookie jar, its cookies for the request URL follow the request's own.
pub fn curl_command(
    req: &mut HttpRequest,
    client: Option<&HttpClient>,
) -> Result<CurlCommand, FormatError> {
    curl_command_with(req, client, &FormatOptions::default())
}

/// Like [`curl_command`], with explicit [`FormatOptions`].
pub fn curl_command_with(
    req: &mut HttpRequest,
    client: Option<&HttpClient>,
    opts: &FormatOptions,
) -> Result<CurlCommand, FormatError> {
    let mut cmd = CommandBuilder::default();

    cmd.push(opts.program.as_str());
    cmd.flag("-X", &req.method);

    if let Some(body) = req.body.as_mut() {
        let bytes = body.read_all().map_err(FormatError::BodyRead)?;
        let text = String::from_utf8_lossy(&bytes).into_owned();
        req.body = Some(Body::from_bytes(bytes));
        cmd.flag("-d", &text);
    }

    let mut keys: Vec<&String> = req.headers.keys().collect();
    keys.sort();
    for key in keys {
        let values = req.headers[key].join(" ");
        cmd.flag("-H", &format!("{}: {}", key, values));
    }

    let jar_cookies = client
        .and_then(|c| c.jar.as_ref())
        .map(|jar| jar.cookies(&req.url))
        .unwrap_or_default();
    if !jar_cookies.is_empty() {
        tracing::debug!("cookie jar supplied {} cookie(s) for {}", jar_cookies.len(), req.url);
    }
    if opts.empty_cookie_header || !req.cookies.is_empty() || !jar_cookies.is_empty() {
        cmd.flag("-H", &cookie_header(&req.cookies, &jar_cookies));
    }

    cmd.push(bash_escape(&req.url));

    let cmd = cmd.finish();
    tracing::debug!(
        method = %req.method,
        url = %req.url,
        tokens = cmd.tokens().len(),
        "formatted curl command"
    );
    Ok(cmd)
}
