//! Typed client for the blog's REST API.
//!
//! All requests funnel through [`ApiClient::get_json`], which reads the body
//! once, checks the status, and decodes in one place. The post-list endpoint
//! answers with two different shapes depending on the query parameters sent;
//! [`ApiClient::list_posts`] normalizes both into a
//! [`PostPage`](folio_api_types::PostPage) before anything else sees the
//! result.

use std::time::Duration;

use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use thiserror::Error;

use folio_api_types::{Category, Post, PostListBody, PostPage};

/// Failures crossing the HTTP boundary.
///
/// `Url`, `Network` and `Status` are all flavors of a failed fetch; `Decode`
/// means the server answered 2xx with a body that does not match the wire
/// contract.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid request URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("network failure: {0}")]
    Network(#[from] reqwest::Error),
    #[error("server returned {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("malformed response body: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Query parameters understood by `GET /api/posts`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub query: Option<String>,
    pub category: Option<String>,
}

impl PostQuery {
    fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            pairs.push(("per_page", per_page.to_string()));
        }
        if let Some(query) = self.query.as_ref() {
            pairs.push(("q", query.clone()));
        }
        if let Some(category) = self.category.as_ref() {
            pairs.push(("category", category.clone()));
        }
        pairs
    }
}

/// Read-only HTTP client for the blog API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base: Url,
}

impl ApiClient {
    pub fn new(site: &str, timeout: Duration) -> Result<Self, FetchError> {
        let base = Url::parse(site)?.join("/")?;
        let client = Client::builder()
            .user_agent(Self::user_agent())
            .timeout(timeout)
            .build()?;
        Ok(Self { client, base })
    }

    pub fn user_agent() -> &'static str {
        concat!("folio/", env!("CARGO_PKG_VERSION"))
    }

    /// Fetch a slice of the post list, accepting either wire shape.
    pub async fn list_posts(&self, query: &PostQuery) -> Result<PostPage, FetchError> {
        let body: PostListBody = self.get_json("api/posts", &query.pairs()).await?;
        Ok(PostPage::from(body))
    }

    /// Fetch one post with its full content body.
    pub async fn post_detail(&self, id: &str) -> Result<Post, FetchError> {
        self.get_json(&format!("api/posts/{id}"), &[]).await
    }

    pub async fn categories(&self) -> Result<Vec<Category>, FetchError> {
        self.get_json("api/categories", &[]).await
    }

    pub async fn tags(&self) -> Result<Vec<String>, FetchError> {
        self.get_json("api/tags", &[]).await
    }

    fn url(&self, path: &str) -> Result<Url, FetchError> {
        self.base.join(path).map_err(FetchError::Url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> Result<T, FetchError> {
        let mut url = self.url(path)?;
        if !query.is_empty() {
            url.set_query(None);
            let mut qp = url.query_pairs_mut();
            for (key, value) in query {
                qp.append_pair(key, value);
            }
        }

        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        let bytes = resp.bytes().await?;
        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }
        serde_json::from_slice(&bytes).map_err(FetchError::Decode)
    }
}
