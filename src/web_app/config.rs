// web_app/config.rs - Runtime settings for the REST client and the server
//
// Everything comes from environment variables (a `.env` file is honoured by
// the binaries through dotenv). Leptos' own site options stay in Cargo.toml.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::web_app::error::FinderError;

/// Items requested per "Load More" click
pub const DEFAULT_PAGE_SIZE: u32 = 3;
/// How many recent items the home page shows
pub const DEFAULT_RECENT_LIMIT: usize = 5;

const DEFAULT_API_URL: &str = "http://localhost:5000/api";
const DEFAULT_MAX_PAGE_SIZE: u32 = 50;
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Base URL of the REST service, e.g. `http://localhost:5000/api`
    pub api_base_url: String,
    pub page_size: u32,
    /// Upper bound applied to `take` coming from the browser
    pub max_page_size: u32,
    pub recent_limit: usize,
    /// `None` disables the client timeout
    pub request_timeout: Option<Duration>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            api_base_url: DEFAULT_API_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
            recent_limit: DEFAULT_RECENT_LIMIT,
            request_timeout: Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
        }
    }
}

impl Settings {
    /// Load settings from the process environment
    pub fn from_env() -> Result<Self, FinderError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, FinderError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Settings::default();

        let api_base_url = lookup("BULLWORK_API_URL")
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.api_base_url);

        if !(api_base_url.starts_with("http://") || api_base_url.starts_with("https://")) {
            return Err(FinderError::Config(format!(
                "BULLWORK_API_URL must be an http(s) URL, got `{}`",
                api_base_url
            )));
        }

        let page_size = parse_var(&lookup, "BULLWORK_PAGE_SIZE", defaults.page_size)?;
        if page_size == 0 {
            return Err(FinderError::Config("BULLWORK_PAGE_SIZE must be at least 1".to_string()));
        }
        let max_page_size = parse_var(&lookup, "BULLWORK_MAX_PAGE_SIZE", defaults.max_page_size)?
            .max(page_size);
        let recent_limit = parse_var(&lookup, "BULLWORK_RECENT_LIMIT", defaults.recent_limit)?;
        let timeout_secs = parse_var(&lookup, "BULLWORK_HTTP_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;

        Ok(Settings {
            api_base_url,
            page_size,
            max_page_size,
            recent_limit,
            request_timeout: (timeout_secs > 0).then(|| Duration::from_secs(timeout_secs)),
        })
    }

    /// Static-file base the service serves uploaded images from
    pub fn asset_base_url(&self) -> String {
        self.api_base_url
            .strip_suffix("/api")
            .unwrap_or(&self.api_base_url)
            .to_string()
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }

    pub fn clamp_take(&self, take: u32) -> u32 {
        take.min(self.max_page_size)
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> Result<T, FinderError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|_| FinderError::Config(format!("{} is not a valid number: `{}`", key, raw))),
        _ => Ok(default),
    }
}
