use async_trait::async_trait;
use dotenv::dotenv;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, COOKIE};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;
use tracing::{debug, info};

use crate::models::category::Category;
use crate::models::trail::TrailFilter;

/// Errors surfaced by the trail API client
#[derive(Debug, Error)]
pub enum TrailApiError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("upstream returned {status} for {url}")]
    Status { status: StatusCode, url: String },
}

/// Credentials carried over from the incoming page request.
///
/// Outgoing calls to the trail backend must present the caller's own
/// `Authorization` and `Cookie` headers so that per-user results (private
/// trails, location defaults) resolve for the right account.
#[derive(Debug, Clone, Default)]
pub struct RequestScope {
    authorization: Option<HeaderValue>,
    cookie: Option<HeaderValue>,
}

impl RequestScope {
    /// Capture the forwardable headers of an incoming request
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            authorization: headers.get(AUTHORIZATION).cloned(),
            cookie: headers.get(COOKIE).cloned(),
        }
    }

    pub fn authorization(&self) -> Option<&HeaderValue> {
        self.authorization.as_ref()
    }

    pub fn cookie(&self) -> Option<&HeaderValue> {
        self.cookie.as_ref()
    }

    fn apply(&self, mut request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if let Some(authorization) = &self.authorization {
            request = request.header(AUTHORIZATION, authorization.clone());
        }
        if let Some(cookie) = &self.cookie {
            request = request.header(COOKIE, cookie.clone());
        }
        request
    }
}

/// One page of trail search results.
///
/// The backend returns the matching trails alongside the pagination
/// cursor; this service only reads the cursor and passes the rest through.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrailSearchResponse {
    pub page: usize,
    pub total_pages: usize,
    #[serde(default)]
    pub items: Vec<serde_json::Value>,
}

/// Interface to the trail backend, injectable for testing
#[async_trait]
pub trait TrailApi: Send + Sync {
    /// Run a filtered, paginated trail search
    async fn search_trails(
        &self,
        filter: &TrailFilter,
        page: usize,
        scope: &RequestScope,
    ) -> Result<TrailSearchResponse, TrailApiError>;

    /// Refresh the shared categories listing.
    ///
    /// The resolved list feeds the category sidebar and filter menu; page
    /// loaders call this for its refresh side effect and may discard the
    /// returned value.
    async fn refresh_categories(
        &self,
        scope: &RequestScope,
    ) -> Result<Vec<Category>, TrailApiError>;
}

/// Client for the trail search and categories backends
pub struct TrailApiClient {
    client: Client,
    endpoint: String,
}

impl TrailApiClient {
    /// Create a new trail API client from environment variables
    pub fn new() -> Self {
        dotenv().ok();

        Self {
            client: Client::new(),
            endpoint: env::var("TRAILS_API_ENDPOINT")
                .unwrap_or_else(|_| "http://localhost:8090".to_string()),
        }
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for TrailApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TrailApi for TrailApiClient {
    async fn search_trails(
        &self,
        filter: &TrailFilter,
        page: usize,
        scope: &RequestScope,
    ) -> Result<TrailSearchResponse, TrailApiError> {
        let url = format!("{}/api/v1/trail/search?page={}", self.endpoint, page);

        info!("Making trail search request for page {}", page);
        debug!("API URL: {}", url);

        let request = self.client.post(&url).json(filter);

        let res = scope.apply(request).send().await?;
        info!("Trail search response received with status: {}", res.status());

        if !res.status().is_success() {
            return Err(TrailApiError::Status {
                status: res.status(),
                url,
            });
        }

        let response = res.json::<TrailSearchResponse>().await?;
        Ok(response)
    }

    async fn refresh_categories(
        &self,
        scope: &RequestScope,
    ) -> Result<Vec<Category>, TrailApiError> {
        let url = format!("{}/api/v1/category", self.endpoint);

        info!("Refreshing categories index");
        debug!("API URL: {}", url);

        let request = self.client.get(&url);

        let res = scope.apply(request).send().await?;
        info!("Categories response received with status: {}", res.status());

        if !res.status().is_success() {
            return Err(TrailApiError::Status {
                status: res.status(),
                url,
            });
        }

        let categories = res.json::<Vec<Category>>().await?;
        Ok(categories)
    }
}
