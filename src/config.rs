//! Client configuration resolved at build time.
//!
//! A WASM bundle has no process environment, so overrides are read with
//! `option_env!` when the crate is compiled.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_STORAGE_KEY: &str = "token";
pub const DEFAULT_NOTICE_TIMEOUT_MS: u32 = 3000;

/// Endpoints, storage key and UI timings shared through Leptos context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// API origin without a trailing slash, e.g. `http://localhost:5000`.
    pub api_base_url: String,
    /// Local-storage key holding the bearer credential.
    pub storage_key: String,
    /// How long a notice stays visible before auto-dismissal.
    pub notice_timeout_ms: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            notice_timeout_ms: DEFAULT_NOTICE_TIMEOUT_MS,
        }
    }
}

impl ClientConfig {
    /// Build config from compile-time environment.
    ///
    /// Optional:
    /// - `CAR_API_BASE_URL`: default `http://localhost:5000`
    /// - `CAR_STORAGE_KEY`: default `token`
    /// - `CAR_NOTICE_TIMEOUT_MS`: default 3000
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("CAR_API_BASE_URL"),
            option_env!("CAR_STORAGE_KEY"),
            option_env!("CAR_NOTICE_TIMEOUT_MS"),
        )
    }

    fn from_values(base_url: Option<&str>, storage_key: Option<&str>, notice_timeout_ms: Option<&str>) -> Self {
        let api_base_url = normalize_base_url(base_url.unwrap_or(DEFAULT_API_BASE_URL));
        let storage_key = storage_key
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .unwrap_or(DEFAULT_STORAGE_KEY)
            .to_owned();
        let notice_timeout_ms = notice_timeout_ms
            .and_then(|raw| raw.trim().parse::<u32>().ok())
            .unwrap_or(DEFAULT_NOTICE_TIMEOUT_MS);
        Self { api_base_url, storage_key, notice_timeout_ms }
    }

    /// Absolute URL for an API path such as `/api/cars`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.api_base_url)
    }
}

fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() { DEFAULT_API_BASE_URL.to_owned() } else { trimmed.to_owned() }
}
