//! Request-to-curl formatting.
//!
//! Turns an [`HttpRequest`](crate::request::HttpRequest) into a token list
//! that, joined with spaces, reproduces the request as a `curl` invocation.
//! Token order is fixed: program, method, body, sorted headers, cookie
//! header, URL.

mod build;
mod cookie;
mod error;
mod escape;

use std::fmt;

pub use build::{curl_command, curl_command_with};
pub use cookie::cookie_header;
pub use error::FormatError;
pub use escape::bash_escape;

/// Program name emitted as the first token by default.
pub const DEFAULT_PROGRAM: &str = "curl";

/// Knobs for the formatter. The default reproduces the canonical output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// First token of the command.
    pub program: String,
    /// Emit `-H 'Cookie: '` even when there are no cookies at all.
    pub empty_cookie_header: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            empty_cookie_header: true,
        }
    }
}

/// A formatted curl invocation, one element per shell token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurlCommand {
    tokens: Vec<String>,
}

impl CurlCommand {
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn into_tokens(self) -> Vec<String> {
        self.tokens
    }
}

impl fmt::Display for CurlCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens.join(" "))
    }
}

/// Append-only token accumulator; sealed into a [`CurlCommand`] by `finish`.
#[derive(Debug, Default)]
struct CommandBuilder {
    tokens: Vec<String>,
}

impl CommandBuilder {
    fn push(&mut self, token: impl Into<String>) -> &mut Self {
        self.tokens.push(token.into());
        self
    }

    fn flag(&mut self, flag: &str, value: &str) -> &mut Self {
        self.push(flag).push(bash_escape(value))
    }

    fn finish(self) -> CurlCommand {
        CurlCommand {
            tokens: self.tokens,
        }
    }
}
