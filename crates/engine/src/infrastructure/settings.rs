//! Environment-driven application configuration.

use std::path::PathBuf;

use crate::infrastructure::http::DEFAULT_HTTP_TIMEOUT_SECS;
use crate::infrastructure::local_store::FileStore;
use crate::infrastructure::srd_api::DEFAULT_API_BASE_URL;

pub const ENV_API_BASE_URL: &str = "CHARSMITH_API_BASE_URL";
pub const ENV_STORAGE_PATH: &str = "CHARSMITH_STORAGE_PATH";
pub const ENV_MAX_RETRIES: &str = "CHARSMITH_MAX_RETRIES";
pub const ENV_HTTP_TIMEOUT_SECS: &str = "CHARSMITH_HTTP_TIMEOUT_SECS";

/// Value of `CHARSMITH_STORAGE_PATH` that selects the volatile store.
pub const IN_MEMORY_STORAGE: &str = ":memory:";

pub const DEFAULT_MAX_RETRIES: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageLocation {
    InMemory,
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub storage: StorageLocation,
    pub max_retries: u32,
    pub http_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            storage: StorageLocation::File(FileStore::default_path()),
            max_retries: DEFAULT_MAX_RETRIES,
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }
}

impl AppConfig {
    /// Volatile configuration for tests and throwaway sessions.
    pub fn in_memory() -> Self {
        Self {
            storage: StorageLocation::InMemory,
            ..Self::default()
        }
    }

    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`, falling back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let api_base_url = lookup(ENV_API_BASE_URL)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.api_base_url);

        let storage = match lookup(ENV_STORAGE_PATH) {
            Some(v) if v == IN_MEMORY_STORAGE => StorageLocation::InMemory,
            Some(v) if !v.trim().is_empty() => StorageLocation::File(PathBuf::from(v)),
            _ => defaults.storage,
        };

        Self {
            api_base_url,
            storage,
            max_retries: parse_or(&lookup, ENV_MAX_RETRIES, defaults.max_retries),
            http_timeout_secs: parse_or(&lookup, ENV_HTTP_TIMEOUT_SECS, defaults.http_timeout_secs),
        }
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, name: &str, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display + Copy,
{
    match lookup(name) {
        Some(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!(variable = name, value = %raw, default = %default, "Invalid number, using default");
                default
            }
        },
        None => default,
    }
}
