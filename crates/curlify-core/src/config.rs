use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::command::{FormatOptions, DEFAULT_PROGRAM};
use crate::cookie_jar::{MemoryCookieJar, StoredCookie};

/// Global configuration loaded from `~/.config/curlify/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurlifyConfig {
    /// Program name written as the first token of every command.
    #[serde(default = "default_program")]
    pub program: String,
    /// Emit `-H 'Cookie: '` when a request has no cookies at all.
    #[serde(default = "default_true")]
    pub empty_cookie_header: bool,
    /// Stored cookies applied to matching requests, in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cookies: Vec<StoredCookie>,
}

fn default_program() -> String {
    DEFAULT_PROGRAM.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for CurlifyConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            empty_cookie_header: true,
            cookies: Vec::new(),
        }
    }
}

impl CurlifyConfig {
    pub fn format_options(&self) -> FormatOptions {
        FormatOptions {
            program: self.program.clone(),
            empty_cookie_header: self.empty_cookie_header,
        }
    }

    /// Jar seeded from `[[cookies]]`, or None when the config has none.
    pub fn cookie_jar(&self) -> Option<MemoryCookieJar> {
        if self.cookies.is_empty() {
            return None;
        }
        Some(self.cookies.iter().cloned().collect())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("curlify")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<CurlifyConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = CurlifyConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit path.
pub fn load_from(path: &Path) -> Result<CurlifyConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
    let cfg: CurlifyConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cookie_jar::CookieSource;
    use std::io::Write;

    #[test]
    fn default_config_values() {
        let cfg = CurlifyConfig::default();
        assert_eq!(cfg.program, "curl");
        assert!(cfg.empty_cookie_header);
        assert!(cfg.cookies.is_empty());
        assert!(cfg.cookie_jar().is_none());
        assert_eq!(cfg.format_options(), FormatOptions::default());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = CurlifyConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: CurlifyConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.program, cfg.program);
        assert_eq!(parsed.empty_cookie_header, cfg.empty_cookie_header);
    }

    #[test]
    fn config_toml_empty_file_uses_defaults() {
        let cfg: CurlifyConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.program, "curl");
        assert!(cfg.empty_cookie_header);
    }

    #[test]
    fn config_toml_custom_values_and_cookies() {
        let toml = r#"
            program = "curl.exe"
            empty_cookie_header = false

            [[cookies]]
            domain = "example.com"
            name = "session"
            value = "abc"

            [[cookies]]
            domain = "api.example.com"
            path = "/v1"
            name = "token"
            value = "t"
            secure = true
        "#;
        let cfg: CurlifyConfig = toml::from_str(toml).unwrap();
        let opts = cfg.format_options();
        assert_eq!(opts.program, "curl.exe");
        assert!(!opts.empty_cookie_header);
        assert_eq!(cfg.cookies.len(), 2);
        assert_eq!(cfg.cookies[0].path, "/");
        assert!(!cfg.cookies[0].secure);
        assert!(cfg.cookies[1].secure);

        let jar = cfg.cookie_jar().unwrap();
        assert_eq!(jar.cookies("https://api.example.com/v1/users").len(), 2);
        assert_eq!(jar.cookies("http://example.com/").len(), 1);
    }

    #[test]
    fn load_from_reports_parse_errors() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"program = [").unwrap();
        f.flush().unwrap();
        let err = load_from(f.path()).unwrap_err();
        assert!(format!("{err:#}").contains("parse config"));
    }
}
