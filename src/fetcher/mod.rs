pub mod http_fetcher;

use async_trait::async_trait;

use crate::app::Result;

/// One HTTP GET, returning the raw body on a 2xx response.
///
/// Implementations do not retry, cache, or deduplicate; transport failures
/// and non-2xx statuses both surface as errors.
#[async_trait]
pub trait Fetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}
