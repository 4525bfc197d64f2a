use std::time::Duration;

use futures_util::StreamExt;
use hub_logging::{hub_debug, hub_info};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use talent_core::{SearchRequest, SearchResult};
use url::Url;

use crate::{FailureKind, ListingSource, SearchError};

/// Search endpoint, relative to the service base URL.
pub const SEARCH_PATH: &str = "api/rag/search";

#[derive(Debug, Clone)]
pub struct SearchSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 5 * 1024 * 1024,
        }
    }
}

/// Talks to the search service: one POST per search, no retries.
#[derive(Debug, Clone)]
pub struct RemoteListingSource {
    client: reqwest::Client,
    endpoint: Url,
    settings: SearchSettings,
}

impl RemoteListingSource {
    pub fn new(settings: SearchSettings) -> Result<Self, SearchError> {
        let endpoint = search_endpoint(&settings.base_url)?;
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| SearchError::new(FailureKind::Network, err.to_string()))?;
        hub_info!("Search service endpoint: {}", endpoint);
        Ok(Self {
            client,
            endpoint,
            settings,
        })
    }

    async fn read_body(&self, response: reqwest::Response) -> Result<Vec<u8>, SearchError> {
        let max_bytes = self.settings.max_bytes;
        if let Some(content_len) = response.content_length() {
            if content_len > max_bytes {
                return Err(SearchError::new(
                    FailureKind::TooLarge {
                        max_bytes,
                        actual: Some(content_len),
                    },
                    "response too large",
                ));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > max_bytes {
                return Err(SearchError::new(
                    FailureKind::TooLarge {
                        max_bytes,
                        actual: Some(next_len),
                    },
                    "response too large",
                ));
            }
            bytes.extend_from_slice(&chunk);
        }
        Ok(bytes)
    }
}

#[async_trait::async_trait]
impl ListingSource for RemoteListingSource {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResult, SearchError> {
        let body = serde_json::to_vec(request)
            .map_err(|err| SearchError::new(FailureKind::Encode, err.to_string()))?;

        hub_debug!(
            "POST {} query_len={} top_k={}",
            self.endpoint,
            request.query.len(),
            request.top_k
        );
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                format!("{} returned {}", self.endpoint, status),
            ));
        }

        let bytes = self.read_body(response).await?;
        let result: SearchResult = serde_json::from_slice(&bytes)
            .map_err(|err| SearchError::new(FailureKind::Decode, err.to_string()))?;
        hub_debug!(
            "Search answered with {} professionals, {} jobs (cached={})",
            result.professionals.len(),
            result.jobs.len(),
            result.cached
        );
        Ok(result)
    }

    fn name(&self) -> &'static str {
        "remote"
    }
}

/// Joins [`SEARCH_PATH`] onto `base`, keeping any path prefix the base carries.
fn search_endpoint(base: &str) -> Result<Url, SearchError> {
    let mut url = Url::parse(base.trim())
        .map_err(|err| SearchError::new(FailureKind::InvalidUrl, format!("{base}: {err}")))?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(SearchError::new(
            FailureKind::InvalidUrl,
            format!("{base}: not an http(s) base url"),
        ));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url.join(SEARCH_PATH)
        .map_err(|err| SearchError::new(FailureKind::InvalidUrl, err.to_string()))
}

fn map_reqwest_error(err: reqwest::Error) -> SearchError {
    if err.is_timeout() {
        return SearchError::new(FailureKind::Timeout, err.to_string());
    }
    SearchError::new(FailureKind::Network, err.to_string())
}
