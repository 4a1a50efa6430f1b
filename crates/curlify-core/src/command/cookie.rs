//! Combined `Cookie:` header from request-attached and jar-supplied cookies.

use crate::request::Cookie;

/// Build `Cookie: n1=v1; n2=v2`, request cookies first, then jar cookies.
///
/// With no cookies at all the result is the bare `Cookie: `.
pub fn cookie_header(request_cookies: &[Cookie], jar_cookies: &[Cookie]) -> String {
    let pairs: Vec<String> = request_cookies
        .iter()
        .chain(jar_cookies)
        .map(Cookie::to_string)
        .collect();
    format!("Cookie: {}", pairs.join("; "))
}
