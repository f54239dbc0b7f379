//! Typed access to the remote data source.
//!
//! The remote API is an opaque, read-only JSON provider with three
//! resources: posts, per-post comments, and album photos. Each operation
//! issues exactly one GET through the [`Fetcher`] seam and parses the body;
//! nothing is cached or retried.

use std::sync::Arc;

use crate::app::Result;
use crate::domain::{Comment, Photo, PostRecord};
use crate::fetcher::Fetcher;

pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

pub struct ApiClient {
    fetcher: Arc<dyn Fetcher + Send + Sync>,
    base_url: String,
}

impl ApiClient {
    pub fn new(fetcher: Arc<dyn Fetcher + Send + Sync>, base_url: &str) -> Result<Self> {
        // Validate eagerly so a bad endpoint fails at startup, not mid-load.
        url::Url::parse(base_url)?;
        Ok(Self {
            fetcher,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `<base>/posts`.
    pub async fn posts(&self) -> Result<Vec<PostRecord>> {
        let url = format!("{}/posts", self.base_url);
        let body = self.fetcher.fetch(&url).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// GET `<base>/posts/{id}/comments`.
    pub async fn comments(&self, post_id: i64) -> Result<Vec<Comment>> {
        let url = format!("{}/posts/{}/comments", self.base_url, post_id);
        let body = self.fetcher.fetch(&url).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// GET `<base>/albums/{id}/photos`.
    pub async fn photos(&self, album_id: i64) -> Result<Vec<Photo>> {
        let url = format!("{}/albums/{}/photos", self.base_url, album_id);
        let body = self.fetcher.fetch(&url).await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::CorkboardError;
    use async_trait::async_trait;
    use std::collections::HashMap;

    struct CannedFetcher {
        responses: HashMap<String, Vec<u8>>,
    }

    #[async_trait]
    impl Fetcher for CannedFetcher {
        async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
            self.responses
                .get(url)
                .cloned()
                .ok_or_else(|| CorkboardError::Other(format!("no canned response for {url}")))
        }
    }

    fn client_with(responses: Vec<(&str, &str)>) -> ApiClient {
        let responses = responses
            .into_iter()
            .map(|(url, body)| (url.to_string(), body.as_bytes().to_vec()))
            .collect();
        ApiClient::new(Arc::new(CannedFetcher { responses }), "https://api.test").unwrap()
    }

    #[test]
    fn test_rejects_invalid_base_url() {
        struct NeverFetcher;
        #[async_trait]
        impl Fetcher for NeverFetcher {
            async fn fetch(&self, _url: &str) -> Result<Vec<u8>> {
                unreachable!()
            }
        }
        assert!(ApiClient::new(Arc::new(NeverFetcher), "not a url").is_err());
    }

    #[test]
    fn test_trailing_slash_is_normalized() {
        let client = ApiClient::new(
            Arc::new(CannedFetcher {
                responses: HashMap::new(),
            }),
            "https://api.test/",
        )
        .unwrap();
        assert_eq!(client.base_url(), "https://api.test");
    }

    #[tokio::test]
    async fn test_posts_parses_wire_records() {
        let client = client_with(vec![(
            "https://api.test/posts",
            r#"[{"userId":1,"id":1,"title":"a","body":"b"}]"#,
        )]);
        let posts = client.posts().await.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, 1);
    }

    #[tokio::test]
    async fn test_comments_hits_per_post_resource() {
        let client = client_with(vec![(
            "https://api.test/posts/3/comments",
            r#"[{"postId":3,"id":11,"name":"n","email":"e","body":"b"}]"#,
        )]);
        let comments = client.comments(3).await.unwrap();
        assert_eq!(comments[0].post_id, 3);
    }

    #[tokio::test]
    async fn test_malformed_body_is_an_error() {
        let client = client_with(vec![("https://api.test/posts", "not json")]);
        assert!(client.posts().await.is_err());
    }
}
