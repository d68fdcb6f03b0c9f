//! Secondary authority adapter: GlobalTreeSearch occurrence lookup

use super::split_binomial;
use crate::error::SourceError;
use crate::retry::RetryPolicy;
use crate::source::LocationSource;
use crate::types::{Location, SourceId};
use async_trait::async_trait;
use gts_api::{GtsClient, GtsError};
use tracing::debug;

/// GlobalTreeSearch-backed location lookup
pub struct GtsSource {
    api: GtsClient,
    retry: RetryPolicy,
}

impl GtsSource {
    pub fn new() -> Self {
        Self::with_client(GtsClient::new(), RetryPolicy::default())
    }

    pub fn with_client(api: GtsClient, retry: RetryPolicy) -> Self {
        Self { api, retry }
    }
}

impl Default for GtsSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LocationSource for GtsSource {
    fn id(&self) -> SourceId {
        SourceId::Gts
    }

    async fn lookup_locations(&self, name: &str) -> Result<Vec<Location>, SourceError> {
        let (genus, species) = split_binomial(name).ok_or(SourceError::NotFound)?;

        let api = &self.api;
        let response = self
            .retry
            .run("gts search", || async move {
                api.search(genus, species).await.map_err(classify)
            })
            .await?;

        // An unknown name comes back as an empty results array ("no hit"),
        // which is simply zero locations here
        let locations: Vec<Location> = response
            .results
            .into_iter()
            .flat_map(|r| r.geolinks)
            .filter_map(|link| link.country.or(link.region))
            .map(|description| Location {
                description,
                source: SourceId::Gts,
                synonym: name.to_string(),
            })
            .collect();

        debug!(name, count = locations.len(), "GTS occurrences");
        Ok(locations)
    }
}

/// Map client failures onto the engine's error taxonomy
fn classify(e: GtsError) -> SourceError {
    match e {
        GtsError::Http(e) => SourceError::Transient(e.to_string()),
        GtsError::Status(code) if code.is_server_error() => {
            SourceError::Transient(format!("status {}", code))
        }
        GtsError::Status(code) if code.as_u16() == 404 => SourceError::NotFound,
        GtsError::Status(code) => SourceError::Malformed(format!("unexpected status {}", code)),
        GtsError::Json(e) => SourceError::Malformed(e.to_string()),
    }
}
