//! Store client configuration.

use std::time::Duration;

use shoplist_core::ItemId;

/// Environment variable holding the backend base URL.
pub const BASE_URL_ENV: &str = "SHOPLIST_FIREBASE_URL";
/// Environment variable holding the per-request timeout in seconds.
pub const TIMEOUT_ENV: &str = "SHOPLIST_HTTP_TIMEOUT_SECS";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Name of the collection node under the base URL.
const COLLECTION: &str = "shop";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),
    #[error("invalid {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Where the remote collection lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    base_url: String,
    timeout: Duration,
}

impl StoreConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base_url = lookup(BASE_URL_ENV)
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing(BASE_URL_ENV))?;

        let mut config = Self::new(base_url.trim());
        if let Some(raw) = lookup(TIMEOUT_ENV) {
            let secs: u64 = raw.trim().parse().map_err(|_| ConfigError::Invalid {
                name: TIMEOUT_ENV,
                value: raw.clone(),
            })?;
            config = config.with_timeout(Duration::from_secs(secs));
        }
        Ok(config)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// `<base>/shop.json`: read the whole collection, or push a new item.
    pub fn collection_url(&self) -> String {
        format!("{}/{}.json", self.base_url, COLLECTION)
    }

    /// `<base>/shop/{id}.json`: replace or delete one item.
    pub fn item_url(&self, id: &ItemId) -> String {
        format!("{}/{}/{}.json", self.base_url, COLLECTION, id)
    }
}
