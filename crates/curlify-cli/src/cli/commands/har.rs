//! `curlify har <path>` – format requests recorded in a HAR file.

use anyhow::{Context, Result};
use curlify_core::{curl_command_with, har, FormatOptions, HttpClient};
use std::path::Path;

pub fn run_har(
    path: &Path,
    entry: Option<usize>,
    client: Option<&HttpClient>,
    opts: &FormatOptions,
) -> Result<()> {
    let mut requests = har::load_requests(path)?;
    let total = requests.len();

    if let Some(index) = entry {
        if index >= total {
            anyhow::bail!("entry {index} out of range: HAR has {total} entries");
        }
        requests = vec![requests.swap_remove(index)];
    }

    for (i, mut req) in requests.into_iter().enumerate() {
        let cmd = curl_command_with(&mut req, client, opts)
            .with_context(|| format!("format entry {}", entry.unwrap_or(i)))?;
        println!("{cmd}");
    }
    Ok(())
}
