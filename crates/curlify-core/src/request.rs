//! In-memory HTTP request model consumed by the formatter.
//!
//! The request is built by the caller (CLI flags, a HAR entry, or library
//! code) and only read by `curl_command`, except for the body which is
//! drained and then replaced with an in-memory copy.

use std::collections::HashMap;
use std::fmt;
use std::io::{self, Cursor, Read};

/// Header map: name (case-sensitive, as received) to its ordered values.
pub type Headers = HashMap<String, Vec<String>>;

/// A name/value cookie pair attached to a request or supplied by a jar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cookie {
    pub name: String,
    pub value: String,
}

impl Cookie {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Split a `Cookie` header value (`a=1; b=2`) into pairs.
    ///
    /// Fragments without `=` or with an empty name are skipped.
    pub fn parse_header(value: &str) -> Vec<Cookie> {
        value
            .split(';')
            .filter_map(|part| {
                let (name, value) = part.trim().split_once('=')?;
                let name = name.trim();
                if name.is_empty() {
                    return None;
                }
                Some(Cookie::new(name, value.trim()))
            })
            .collect()
    }
}

impl fmt::Display for Cookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

/// Read-once request body.
pub struct Body(Box<dyn Read + Send>);

impl Body {
    pub fn from_reader(reader: impl Read + Send + 'static) -> Self {
        Body(Box::new(reader))
    }

    /// Body backed by a cursor positioned at the start of `bytes`.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Body(Box::new(Cursor::new(bytes.into())))
    }

    /// Drain the underlying reader.
    pub fn read_all(&mut self) -> io::Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.0.read_to_end(&mut buf)?;
        Ok(buf)
    }
}

impl Read for Body {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.0.read(buf)
    }
}

impl fmt::Debug for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Body(..)")
    }
}

/// HTTP request as seen by the formatter.
#[derive(Debug)]
pub struct HttpRequest {
    pub method: String,
    /// Full URL, kept verbatim (it is never parsed by the formatter).
    pub url: String,
    pub headers: Headers,
    /// Cookies attached directly to the request, in order.
    pub cookies: Vec<Cookie>,
    pub body: Option<Body>,
}

impl HttpRequest {
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            headers: Headers::new(),
            cookies: Vec::new(),
            body: None,
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.add_header(name, value);
        self
    }

    pub fn cookie(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.add_cookie(Cookie::new(name, value));
        self
    }

    pub fn body(mut self, bytes: impl Into<Vec<u8>>) -> Self {
        self.set_body(Body::from_bytes(bytes));
        self
    }

    /// Append a value for `name`; existing values are kept.
    pub fn add_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.headers
            .entry(name.into())
            .or_default()
            .push(value.into());
    }

    pub fn add_cookie(&mut self, cookie: Cookie) {
        self.cookies.push(cookie);
    }

    pub fn set_body(&mut self, body: Body) {
        self.body = Some(body);
    }
}
