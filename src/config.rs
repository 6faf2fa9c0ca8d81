// Config file loading.
//
// The config file is a section-less INI file with flat `KEY = value` lines:
//
//     URL = https://blog.example.com
//     PASSWORD = hunter2
//     TIMEOUT = 30
//
// `URL` and `PASSWORD` are required. `TIMEOUT` (seconds) is optional.

use crate::error::{Error, Result};
use ini::{Ini, ParseOption};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

const URL_KEY: &str = "URL";
const PASSWORD_KEY: &str = "PASSWORD";
const TIMEOUT_KEY: &str = "TIMEOUT";

/// Endpoint and shared secret for the blog backend. Loaded once per run and
/// handed to the API client, never kept globally.
#[derive(Clone, PartialEq, Eq)]
pub struct BlogConfig {
    pub url: String,
    pub password: String,
    pub timeout: Option<Duration>,
}

impl fmt::Debug for BlogConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlogConfig")
            .field("url", &self.url)
            .field("password", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl BlogConfig {
    /// Read and validate the config file at `path`. Either both required
    /// keys are present or an error is returned; there is no partial result.
    pub fn load(path: &Path) -> Result<Self> {
        // Values are taken literally; a backslash in a password is not an escape.
        let options = ParseOption {
            enabled_escape: false,
            ..ParseOption::default()
        };
        let ini = Ini::load_from_file_opt(path, options).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })?;
        let section = ini.general_section();

        let required = |key: &'static str| -> Result<String> {
            match section.get(key).map(str::trim) {
                Some(value) if !value.is_empty() => Ok(value.to_string()),
                _ => Err(Error::MissingConfigKey {
                    path: path.to_path_buf(),
                    key,
                }),
            }
        };

        let url = required(URL_KEY)?.trim_end_matches('/').to_string();
        let password = required(PASSWORD_KEY)?;

        let timeout = match section.get(TIMEOUT_KEY).map(str::trim) {
            None | Some("") => None,
            Some(raw) => {
                let secs: u64 = raw.parse().map_err(|_| Error::InvalidConfigValue {
                    path: path.to_path_buf(),
                    key: TIMEOUT_KEY,
                    value: raw.to_string(),
                })?;
                Some(Duration::from_secs(secs))
            }
        };

        tracing::debug!(path = %path.display(), url = %url, "loaded config");

        Ok(BlogConfig {
            url,
            password,
            timeout,
        })
    }
}

/// `~/.photoblog/config.ini`, or a path relative to the working directory
/// when no home directory can be found.
pub fn default_config_path() -> PathBuf {
    let dir = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    dir.join(".photoblog").join("config.ini")
}
