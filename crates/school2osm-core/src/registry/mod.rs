//! Blocking access to the NSR v3 register with bounded retry and an optional
//! on-disk response cache.

mod cache;
mod client;
mod env;
mod retry;

use std::path::PathBuf;

pub use cache::ResponseCache;
pub use client::RegistryClient;
pub use env::read_non_empty_env;
pub use retry::{MAX_BACKOFF, backoff_delay, is_retryable_status, should_retry};

pub const DEFAULT_BASE_URL: &str = "https://data-nsr.udir.no/v3";
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;
pub const DEFAULT_MAX_RETRIES: u32 = 5;
pub const DEFAULT_RETRY_BASE_MS: u64 = 5_000;
pub const DEFAULT_PAGE_SIZE: u32 = 100;

pub const ENV_API_URL: &str = "SCHOOL2OSM_API_URL";
pub const ENV_TIMEOUT_MS: &str = "SCHOOL2OSM_TIMEOUT_MS";
pub const ENV_MAX_RETRIES: &str = "SCHOOL2OSM_MAX_RETRIES";
pub const ENV_RETRY_BASE_MS: &str = "SCHOOL2OSM_RETRY_BASE_MS";
pub const ENV_PAGE_SIZE: &str = "SCHOOL2OSM_PAGE_SIZE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    pub base_url: String,
    pub timeout_ms: u64,
    pub max_retries: u32,
    pub retry_base_ms: u64,
    pub page_size: u32,
    /// Response cache directory; `None` disables caching.
    pub cache_dir: Option<PathBuf>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            max_retries: DEFAULT_MAX_RETRIES,
            retry_base_ms: DEFAULT_RETRY_BASE_MS,
            page_size: DEFAULT_PAGE_SIZE,
            cache_dir: None,
        }
    }
}

impl RegistryConfig {
    /// Defaults overridden by the `SCHOOL2OSM_*` registry variables.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    pub fn apply_env(&mut self) {
        self.apply_env_with(env::read_non_empty_env);
    }

    /// Applies overrides from `lookup`. Values that do not parse are ignored.
    pub fn apply_env_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base_url) = lookup(ENV_API_URL) {
            self.base_url = base_url;
        }
        if let Some(timeout_ms) = env::parse_number::<u64>(lookup(ENV_TIMEOUT_MS)).filter(|ms| *ms > 0) {
            self.timeout_ms = timeout_ms;
        }
        if let Some(max_retries) = env::parse_number::<u32>(lookup(ENV_MAX_RETRIES)) {
            self.max_retries = max_retries;
        }
        if let Some(retry_base_ms) = env::parse_number::<u64>(lookup(ENV_RETRY_BASE_MS)) {
            self.retry_base_ms = retry_base_ms;
        }
        if let Some(page_size) = env::parse_number::<u32>(lookup(ENV_PAGE_SIZE)).filter(|size| *size > 0) {
            self.page_size = page_size;
        }
    }

    #[must_use]
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim().trim_end_matches('/')
    }
}
