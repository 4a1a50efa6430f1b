//! Value parsers for repeatable request flags.

use curlify_core::Cookie;

/// `Name: value` → (`Name`, `value`). The value may be empty.
pub fn parse_header(s: &str) -> Result<(String, String), String> {
    let (name, value) = s
        .split_once(':')
        .ok_or_else(|| format!("expected `Name: value`, got {s:?}"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("empty header name in {s:?}"));
    }
    Ok((name.to_string(), value.trim().to_string()))
}

/// `name=value` → [`Cookie`].
pub fn parse_cookie(s: &str) -> Result<Cookie, String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected `name=value`, got {s:?}"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("empty cookie name in {s:?}"));
    }
    Ok(Cookie::new(name, value))
}
