//! Cookie sources consulted in addition to the cookies attached to a request.
//!
//! The formatter only depends on [`CookieSource`]; [`MemoryCookieJar`] is a
//! simple insertion-ordered implementation used by the CLI (seeded from the
//! config file) and by tests.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::request::Cookie;

/// Lookup of stored cookies applicable to a URL.
pub trait CookieSource {
    /// Cookies for `url`, in the order they should be sent.
    fn cookies(&self, url: &str) -> Vec<Cookie>;
}

/// Optional client context passed alongside a request.
#[derive(Clone, Default)]
pub struct HttpClient {
    pub jar: Option<Arc<dyn CookieSource + Send + Sync>>,
}

impl HttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_jar(jar: impl CookieSource + Send + Sync + 'static) -> Self {
        Self {
            jar: Some(Arc::new(jar)),
        }
    }
}

impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpClient")
            .field("jar", &self.jar.as_ref().map(|_| ".."))
            .finish()
    }
}

/// A cookie as stored in the jar, scoped to a domain and path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredCookie {
    /// Host the cookie belongs to; subdomains match too. A leading `.` is ignored.
    pub domain: String,
    #[serde(default = "default_path")]
    pub path: String,
    pub name: String,
    pub value: String,
    /// Only sent to `https` URLs.
    #[serde(default)]
    pub secure: bool,
}

fn default_path() -> String {
    "/".to_string()
}

impl StoredCookie {
    pub fn new(
        domain: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            domain: domain.into(),
            path: default_path(),
            name: name.into(),
            value: value.into(),
            secure: false,
        }
    }

    fn matches(&self, url: &Url) -> bool {
        let Some(host) = url.host_str() else {
            return false;
        };
        if self.secure && url.scheme() != "https" {
            return false;
        }
        domain_matches(host, &self.domain) && path_matches(url.path(), &self.path)
    }
}

fn domain_matches(host: &str, domain: &str) -> bool {
    let host = host.to_ascii_lowercase();
    let domain = domain.trim_start_matches('.').to_ascii_lowercase();
    if domain.is_empty() {
        return false;
    }
    host == domain
        || host
            .strip_suffix(domain.as_str())
            .is_some_and(|prefix| prefix.ends_with('.'))
}

fn path_matches(request_path: &str, cookie_path: &str) -> bool {
    if cookie_path.is_empty() || cookie_path == "/" {
        return true;
    }
    match request_path.strip_prefix(cookie_path) {
        Some(rest) => rest.is_empty() || cookie_path.ends_with('/') || rest.starts_with('/'),
        None => false,
    }
}

/// In-memory cookie jar preserving insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemoryCookieJar {
    cookies: Vec<StoredCookie>,
}

impl MemoryCookieJar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a cookie. A cookie with the same domain, path and name is replaced in place.
    pub fn insert(&mut self, cookie: StoredCookie) {
        let existing = self.cookies.iter_mut().find(|c| {
            c.name == cookie.name && c.path == cookie.path && c.domain == cookie.domain
        });
        match existing {
            Some(slot) => *slot = cookie,
            None => self.cookies.push(cookie),
        }
    }

    pub fn len(&self) -> usize {
        self.cookies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }
}

impl FromIterator<StoredCookie> for MemoryCookieJar {
    fn from_iter<I: IntoIterator<Item = StoredCookie>>(iter: I) -> Self {
        let mut jar = MemoryCookieJar::new();
        for cookie in iter {
            jar.insert(cookie);
        }
        jar
    }
}

impl CookieSource for MemoryCookieJar {
    fn cookies(&self, url: &str) -> Vec<Cookie> {
        let Ok(url) = Url::parse(url) else {
            tracing::debug!("cookie jar: unparseable url {:?}, no cookies", url);
            return Vec::new();
        };
        self.cookies
            .iter()
            .filter(|c| c.matches(&url))
            .map(|c| Cookie::new(c.name.clone(), c.value.clone()))
            .collect()
    }
}
