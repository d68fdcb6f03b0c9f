//! Kew API HTTP client

use crate::error::{PowoError, Result};
use crate::types::*;
use std::time::Duration;

/// Search terms for an IPNI name query
#[derive(Debug, Clone, Default)]
pub struct SearchQuery<'a> {
    pub genus: &'a str,
    pub species: &'a str,
    pub author: &'a str,
}

/// Client for the Kew name services: IPNI name search and POWO taxon lookup
///
/// IPNI provides nomenclatural search; POWO hangs taxonomic status, synonymy
/// and distribution data off the same identifiers.
pub struct PowoClient {
    http: reqwest::Client,
    search_base: String,
    taxon_base: String,
}

impl PowoClient {
    /// Base URL for the IPNI search API
    pub const SEARCH_BASE_URL: &'static str = "https://beta.ipni.org/api/1";
    /// Base URL for the POWO taxon API
    pub const TAXON_BASE_URL: &'static str = "https://powo.science.kew.org/api/2";

    /// Create a new client with default settings (30 second timeout)
    pub fn new() -> Self {
        Self::with_base_urls(Self::SEARCH_BASE_URL, Self::TAXON_BASE_URL)
    }

    /// Create a new client against custom base URLs (used by tests)
    pub fn with_base_urls(search_base: &str, taxon_base: &str) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            search_base: search_base.to_string(),
            taxon_base: taxon_base.to_string(),
        }
    }

    /// Search IPNI for name records matching genus, species and author
    ///
    /// Empty terms are omitted from the query. Results are restricted to
    /// names known to POWO, since only those can be looked up for synonymy.
    pub async fn search(&self, query: &SearchQuery<'_>) -> Result<SearchResponse> {
        let mut terms = Vec::new();
        if !query.genus.is_empty() {
            terms.push(format!("genus:{}", query.genus));
        }
        if !query.species.is_empty() {
            terms.push(format!("species:{}", query.species));
        }
        if !query.author.is_empty() {
            terms.push(format!("author:{}", query.author));
        }
        let q = terms.join(",");

        let url = format!(
            "{}/search?q={}&f=f_in_powo",
            self.search_base,
            urlencoding::encode(&q)
        );

        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(PowoError::Status(response.status()));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Look up a POWO taxon record by its fully-qualified IPNI identifier
    ///
    /// The record carries taxonomic status, the accepted-name pointer for
    /// synonyms, the synonym list for accepted names, and distribution data.
    pub async fn lookup(&self, fq_id: &str) -> Result<TaxonResponse> {
        let url = format!(
            "{}/taxon/{}?fields=distribution",
            self.taxon_base,
            urlencoding::encode(fq_id)
        );

        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(PowoError::Status(response.status()));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl Default for PowoClient {
    fn default() -> Self {
        Self::new()
    }
}
