//! `curlify request <url>` – format a request built from flags.

use anyhow::Result;
use curlify_core::{curl_command_with, Cookie, FormatOptions, HttpClient, HttpRequest};

#[derive(Debug)]
pub struct RequestArgs {
    pub url: String,
    pub method: String,
    pub headers: Vec<(String, String)>,
    pub data: Option<String>,
    pub cookies: Vec<Cookie>,
}

impl RequestArgs {
    pub fn into_request(self) -> HttpRequest {
        let mut req = HttpRequest::new(self.method, self.url);
        for (name, value) in self.headers {
            req.add_header(name, value);
        }
        req.cookies = self.cookies;
        if let Some(data) = self.data {
            req = req.body(data);
        }
        req
    }
}

pub fn run_request(
    args: RequestArgs,
    client: Option<&HttpClient>,
    opts: &FormatOptions,
) -> Result<()> {
    let mut req = args.into_request();
    let cmd = curl_command_with(&mut req, client, opts)?;
    println!("{cmd}");
    Ok(())
}
