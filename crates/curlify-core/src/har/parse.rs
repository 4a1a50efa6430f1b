//! Minimal HAR 1.2 structures: just the request side of each entry.

use serde::Deserialize;

/// Root HAR log (top-level wrapper).
#[derive(Debug, Deserialize)]
pub struct HarLog {
    pub log: HarRoot,
}

#[derive(Debug, Deserialize)]
pub struct HarRoot {
    pub entries: Vec<HarEntry>,
}

#[derive(Debug, Deserialize)]
pub struct HarEntry {
    pub request: HarRequest,
}

#[derive(Debug, Deserialize)]
pub struct HarRequest {
    #[serde(default = "default_method")]
    pub method: String,
    pub url: String,
    #[serde(default)]
    pub headers: Vec<HarNameValue>,
    #[serde(default)]
    pub cookies: Vec<HarNameValue>,
    #[serde(default, rename = "postData")]
    pub post_data: Option<HarPostData>,
}

#[derive(Debug, Deserialize)]
pub struct HarPostData {
    #[serde(default)]
    pub text: Option<String>,
}

/// Header or cookie entry (`{ "name": ..., "value": ... }`).
#[derive(Debug, Deserialize)]
pub struct HarNameValue {
    pub name: String,
    #[serde(default)]
    pub value: String,
}

fn default_method() -> String {
    "GET".to_string()
}
