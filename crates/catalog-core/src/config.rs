//! Client configuration
//!
//! The browser build has no process environment, so overrides are baked in
//! at compile time through `option_env!`.

/// Default REST endpoint of the catalog backend.
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api/v1";

/// Default request timeout in seconds (native builds only; the browser's
/// fetch owns timeouts on wasm).
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default log filter.
pub const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base URL, without trailing slash
    pub api_base_url: String,
    pub timeout_secs: u64,
    pub log_level: log::LevelFilter,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl ClientConfig {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: normalize_base_url(&api_base_url.into()),
            ..Default::default()
        }
    }

    /// Read `MODEL_CATALOG_API_URL`, `MODEL_CATALOG_TIMEOUT_SECS` and
    /// `MODEL_CATALOG_LOG` as they were when the crate was compiled.
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("MODEL_CATALOG_API_URL"),
            option_env!("MODEL_CATALOG_TIMEOUT_SECS"),
            option_env!("MODEL_CATALOG_LOG"),
        )
    }

    fn from_values(url: Option<&str>, timeout: Option<&str>, log: Option<&str>) -> Self {
        Self {
            api_base_url: url
                .map(normalize_base_url)
                .filter(|u| !u.is_empty())
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            timeout_secs: timeout
                .and_then(|s| s.trim().parse().ok())
                .filter(|secs| *secs > 0)
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
            log_level: log
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(DEFAULT_LOG_LEVEL),
        }
    }

    /// Join an endpoint path (leading `/`) onto the base URL
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
