//! HAR (HTTP Archive) import: load the requests recorded by browser dev tools.
//!
//! Only the request half of each entry is used. Cookies come from the entry's
//! `cookies` list, or from its `Cookie` header when that list is empty, so a
//! formatted command never carries them twice.

mod convert;
mod parse;

pub use convert::{load_requests, requests_from_slice};
