use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use school2osm_core::FailurePolicy;
use school2osm_core::registry::{RegistryConfig, read_non_empty_env};
use serde::Deserialize;

use crate::cli::GlobalArgs;

pub(crate) const DEFAULT_CACHE_DIR: &str = ".school2osm-cache";
pub(crate) const ENV_CACHE_DIR: &str = "SCHOOL2OSM_CACHE_DIR";
pub(crate) const ENV_NO_CACHE: &str = "SCHOOL2OSM_NO_CACHE";

/// Resolved settings: defaults, then the TOML file, then `SCHOOL2OSM_*`
/// variables, then command-line flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AppConfig {
    pub registry: RegistryConfig,
    pub cache_enabled: bool,
    pub cache_dir: PathBuf,
    pub policy: FailurePolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            registry: RegistryConfig::default(),
            cache_enabled: true,
            cache_dir: PathBuf::from(DEFAULT_CACHE_DIR),
            policy: FailurePolicy::default(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct FileConfig {
    registry: RegistrySection,
    cache: CacheSection,
    convert: ConvertSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RegistrySection {
    base_url: Option<String>,
    timeout_ms: Option<u64>,
    max_retries: Option<u32>,
    retry_base_ms: Option<u64>,
    page_size: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct CacheSection {
    enabled: Option<bool>,
    dir: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConvertSection {
    policy: Option<FailurePolicy>,
}

impl FileConfig {
    pub(crate) fn read(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }
}

impl AppConfig {
    pub(crate) fn load(flags: &GlobalArgs) -> Result<Self> {
        let file = flags.config.as_deref().map(FileConfig::read).transpose()?;
        Ok(Self::resolve(file, read_non_empty_env, flags))
    }

    pub(crate) fn resolve<F>(file: Option<FileConfig>, env: F, flags: &GlobalArgs) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(file) = file {
            config.apply_file(file);
        }

        config.registry.apply_env_with(&env);
        if let Some(dir) = env(ENV_CACHE_DIR) {
            config.cache_dir = PathBuf::from(dir);
        }
        if env(ENV_NO_CACHE).as_deref().is_some_and(is_truthy) {
            config.cache_enabled = false;
        }

        if let Some(api_url) = &flags.api_url {
            config.registry.base_url.clone_from(api_url);
        }
        if let Some(dir) = &flags.cache_dir {
            config.cache_dir.clone_from(dir);
        }
        if flags.no_cache {
            config.cache_enabled = false;
        }
        if let Some(policy) = flags.policy {
            config.policy = policy.into();
        }
        config
    }

    fn apply_file(&mut self, file: FileConfig) {
        let registry = file.registry;
        if let Some(base_url) = registry.base_url {
            self.registry.base_url = base_url;
        }
        if let Some(timeout_ms) = registry.timeout_ms.filter(|ms| *ms > 0) {
            self.registry.timeout_ms = timeout_ms;
        }
        if let Some(max_retries) = registry.max_retries {
            self.registry.max_retries = max_retries;
        }
        if let Some(retry_base_ms) = registry.retry_base_ms {
            self.registry.retry_base_ms = retry_base_ms;
        }
        if let Some(page_size) = registry.page_size.filter(|size| *size > 0) {
            self.registry.page_size = page_size;
        }
        if let Some(enabled) = file.cache.enabled {
            self.cache_enabled = enabled;
        }
        if let Some(dir) = file.cache.dir {
            self.cache_dir = dir;
        }
        if let Some(policy) = file.convert.policy {
            self.policy = policy;
        }
    }

    /// Registry settings with the cache directory filled in when caching is on.
    pub(crate) fn registry_config(&self) -> RegistryConfig {
        RegistryConfig {
            cache_dir: self.cache_enabled.then(|| self.cache_dir.clone()),
            ..self.registry.clone()
        }
    }
}

fn is_truthy(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
