pub mod config;
pub mod logging;

pub mod command;
pub mod cookie_jar;
pub mod har;
pub mod request;

pub use command::{
    bash_escape, cookie_header, curl_command, curl_command_with, CurlCommand, FormatError,
    FormatOptions,
};
pub use cookie_jar::{CookieSource, HttpClient, MemoryCookieJar, StoredCookie};
pub use request::{Body, Cookie, Headers, HttpRequest};
