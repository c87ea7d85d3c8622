use std::thread;
use std::time::Duration;

use log::{debug, warn};
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;

use crate::error::{CoreError, Result};
use crate::models::{SchoolRecord, UnitPage, UnitSummary};

use super::RegistryConfig;
use super::cache::ResponseCache;
use super::retry::{backoff_delay, should_retry};

#[derive(Clone)]
pub struct RegistryClient {
    config: RegistryConfig,
    http: Client,
    cache: Option<ResponseCache>,
}

impl std::fmt::Debug for RegistryClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistryClient")
            .field("base_url", &self.config.base_url)
            .field("cache", &self.cache.as_ref().map(ResponseCache::dir))
            .finish_non_exhaustive()
    }
}

impl RegistryClient {
    pub fn new(config: RegistryConfig) -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!("school2osm/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;
        let cache = config.cache_dir.clone().map(ResponseCache::new);
        Ok(Self {
            config,
            http,
            cache,
        })
    }

    #[must_use]
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    #[must_use]
    pub fn listing_url(&self) -> String {
        format!(
            "{}/enheter?sidenummer=1&antallPerSide={}",
            self.config.normalized_base_url(),
            self.config.page_size
        )
    }

    #[must_use]
    pub fn unit_url(&self, org_num: &str) -> String {
        format!("{}/enhet/{}", self.config.normalized_base_url(), org_num.trim())
    }

    /// First page of the unit listing. Further pages are not fetched.
    pub fn list_units(&self) -> Result<UnitPage> {
        let page: UnitPage = self.get_json(&self.listing_url())?;
        if page.has_more_pages() {
            warn!(
                "registry listing has {} pages; only page 1 ({} units) is converted",
                page.num_pages,
                page.units.len()
            );
        }
        Ok(page)
    }

    /// Active schools from the first listing page.
    pub fn relevant_units(&self) -> Result<Vec<UnitSummary>> {
        let page = self.list_units()?;
        Ok(page.relevant_units().cloned().collect())
    }

    pub fn unit_details(&self, org_num: &str) -> Result<SchoolRecord> {
        if org_num.trim().is_empty() {
            return Err(CoreError::Validation(
                "organization number must not be empty".to_string(),
            ));
        }
        self.get_json(&self.unit_url(org_num))
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        if let Some(cache) = &self.cache {
            if let Some(body) = cache.get(url)? {
                match serde_json::from_str(&body) {
                    Ok(value) => {
                        debug!("cache hit: {url}");
                        return Ok(value);
                    }
                    Err(err) => {
                        warn!("discarding unreadable cache entry for {url}: {err}");
                        cache.remove(url)?;
                    }
                }
            } else {
                debug!("cache miss: {url}");
            }
        }

        let body = self.fetch_with_retry(url)?;
        let value = serde_json::from_str(&body)?;
        if let Some(cache) = &self.cache {
            cache.put(url, &body)?;
        }
        Ok(value)
    }

    fn fetch_with_retry(&self, url: &str) -> Result<String> {
        let mut attempt = 0;
        loop {
            match self.fetch_once(url) {
                Ok(body) => return Ok(body),
                Err(err) if should_retry(&err, attempt, self.config.max_retries) => {
                    let delay = backoff_delay(self.config.retry_base_ms, attempt);
                    attempt += 1;
                    warn!(
                        "GET {url} failed ({err}); retry {attempt}/{} in {delay:?}",
                        self.config.max_retries
                    );
                    thread::sleep(delay);
                }
                Err(err) => return Err(err),
            }
        }
    }

    fn fetch_once(&self, url: &str) -> Result<String> {
        let resp = self.http.get(url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(CoreError::Http {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(resp.text()?)
    }
}
