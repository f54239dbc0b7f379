use std::sync::Arc;
use std::time::Duration;

use crate::api::ApiClient;
use crate::app::error::{CorkboardError, Result};
use crate::config::Config;
use crate::fetcher::http_fetcher::HttpFetcher;
use crate::fetcher::Fetcher;

/// Wires configuration, the HTTP fetcher, and the typed API client together.
pub struct AppContext {
    pub api: ApiClient,
    pub album_id: i64,
}

impl AppContext {
    /// Build a context from a loaded config, with an optional base-URL
    /// override from the command line.
    pub fn new(config: &Config, base_url_override: Option<&str>) -> Result<Self> {
        let fetcher: Arc<dyn Fetcher + Send + Sync> = Arc::new(HttpFetcher::with_timeout(
            Duration::from_secs(config.api.timeout_secs),
        ));
        let base_url = base_url_override.unwrap_or(&config.api.base_url);
        Self::with_fetcher(fetcher, base_url, config.api.album_id)
    }

    pub fn with_fetcher(
        fetcher: Arc<dyn Fetcher + Send + Sync>,
        base_url: &str,
        album_id: i64,
    ) -> Result<Self> {
        if album_id <= 0 {
            return Err(CorkboardError::Config(format!(
                "album_id must be positive, got {album_id}"
            )));
        }
        let api = ApiClient::new(fetcher, base_url)?;
        Ok(Self { api, album_id })
    }
}
