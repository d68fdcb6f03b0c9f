//! GlobalTreeSearch API HTTP client

use std::time::Duration;

use crate::error::{GtsError, Result};
use crate::types::GtsResponse;

const DEFAULT_BASE_URL: &str = "https://data.bgci.org";
const DEFAULT_USER_AGENT: &str = "gts-api-rs/0.1";

/// Client for the BGCI GlobalTreeSearch occurrence API
///
/// GlobalTreeSearch indexes occurrences by binomial only; the endpoint takes
/// genus and species as path segments and knows nothing about authors.
pub struct GtsClient {
    http: reqwest::Client,
    base_url: String,
}

impl GtsClient {
    /// Create a new client with default settings (30 second timeout)
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a new client with a custom base URL (used by tests)
    pub fn with_base_url(base_url: &str) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(DEFAULT_USER_AGENT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            base_url: base_url.to_string(),
        }
    }

    /// Fetch occurrence records for a binomial
    ///
    /// A name unknown to GlobalTreeSearch yields an empty `results` array,
    /// not an error status.
    pub async fn search(&self, genus: &str, species: &str) -> Result<GtsResponse> {
        let url = format!(
            "{}/treesearch/genus/{}/species/{}",
            self.base_url,
            urlencoding::encode(genus),
            urlencoding::encode(species)
        );

        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(GtsError::Status(response.status()));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl Default for GtsClient {
    fn default() -> Self {
        Self::new()
    }
}
