//! Primary authority adapter: IPNI search + POWO synonymy and distribution

use super::split_binomial;
use crate::error::SourceError;
use crate::retry::RetryPolicy;
use crate::source::{LocationSource, TaxonRecord, TaxonomyAuthority};
use crate::types::{Location, SourceId, Taxon, TaxonomicStatus};
use async_trait::async_trait;
use powo_api::{NameRecord, PowoClient, PowoError, RelatedName, SearchQuery, TaxonResponse};
use tracing::debug;

/// Kew-backed implementation of both capability traits
pub struct PowoSource {
    api: PowoClient,
    retry: RetryPolicy,
}

impl PowoSource {
    pub fn new() -> Self {
        Self::with_client(PowoClient::new(), RetryPolicy::default())
    }

    pub fn with_client(api: PowoClient, retry: RetryPolicy) -> Self {
        Self { api, retry }
    }
}

impl Default for PowoSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TaxonomyAuthority for PowoSource {
    async fn search_by_name(&self, name: &str, author: &str) -> Result<Vec<Taxon>, SourceError> {
        let (genus, species) = split_binomial(name).ok_or(SourceError::NotFound)?;
        let query = SearchQuery {
            genus,
            species,
            author,
        };

        let api = &self.api;
        let query = &query;
        let response = self
            .retry
            .run("ipni search", || async move {
                api.search(query).await.map_err(classify)
            })
            .await?;

        debug!(name, author, hits = response.results.len(), "IPNI search");
        Ok(response
            .results
            .into_iter()
            .filter_map(name_record_to_taxon)
            .collect())
    }

    async fn lookup_record(&self, taxon_id: &str) -> Result<TaxonRecord, SourceError> {
        let api = &self.api;
        let response = self
            .retry
            .run("powo lookup", || async move {
                api.lookup(taxon_id).await.map_err(classify)
            })
            .await?;

        taxon_response_to_record(response)
    }
}

#[async_trait]
impl LocationSource for PowoSource {
    fn id(&self) -> SourceId {
        SourceId::Powo
    }

    async fn lookup_locations(&self, name: &str) -> Result<Vec<Location>, SourceError> {
        let (genus, species) = split_binomial(name).ok_or(SourceError::NotFound)?;
        let query = SearchQuery {
            genus,
            species,
            author: "",
        };

        let api = &self.api;
        let query = &query;
        let response = self
            .retry
            .run("ipni search", || async move {
                api.search(query).await.map_err(classify)
            })
            .await?;

        let fq_id = response
            .results
            .into_iter()
            .find_map(|r| r.fq_id)
            .ok_or(SourceError::NotFound)?;

        let fq_id = fq_id.as_str();
        let taxon = self
            .retry
            .run("powo lookup", || async move {
                api.lookup(fq_id).await.map_err(classify)
            })
            .await?;

        let mut locations = Vec::new();
        if let Some(distribution) = taxon.distribution {
            let areas = distribution
                .natives
                .into_iter()
                .chain(distribution.introduced);
            for area in areas {
                if let Some(description) = area.name {
                    locations.push(Location {
                        description,
                        source: SourceId::Powo,
                        synonym: name.to_string(),
                    });
                }
            }
        }
        debug!(name, count = locations.len(), "POWO distribution");
        Ok(locations)
    }
}

/// Map client failures onto the engine's error taxonomy
fn classify(e: PowoError) -> SourceError {
    match e {
        // Bodies are read as text before parsing, so any reqwest error here
        // is network-level
        PowoError::Http(e) => SourceError::Transient(e.to_string()),
        PowoError::Status(code) if code.is_server_error() => {
            SourceError::Transient(format!("status {}", code))
        }
        PowoError::Status(code) if code.as_u16() == 404 => SourceError::NotFound,
        PowoError::Status(code) => SourceError::Malformed(format!("unexpected status {}", code)),
        PowoError::Json(e) => SourceError::Malformed(e.to_string()),
    }
}

fn name_record_to_taxon(record: NameRecord) -> Option<Taxon> {
    let id = record.fq_id?;
    let name = record.name?;
    let status = if record.accepted == Some(false) {
        TaxonomicStatus::Synonym
    } else {
        TaxonomicStatus::Accepted
    };
    Some(Taxon {
        name,
        author: record.authors.unwrap_or_default(),
        id,
        source: SourceId::Powo,
        status,
    })
}

fn related_to_taxon(related: RelatedName, status: TaxonomicStatus) -> Option<Taxon> {
    let id = related.fq_id?;
    let name = related.name?;
    let status = match related.taxonomic_status.as_deref() {
        Some("Accepted") => TaxonomicStatus::Accepted,
        Some("Synonym") => TaxonomicStatus::Synonym,
        _ => status,
    };
    Some(Taxon {
        name,
        author: related.author.unwrap_or_default(),
        id,
        source: SourceId::Powo,
        status,
    })
}

fn taxon_response_to_record(response: TaxonResponse) -> Result<TaxonRecord, SourceError> {
    let (Some(id), Some(name)) = (response.fq_id, response.name) else {
        return Err(SourceError::Malformed(
            "taxon record missing fqId or name".to_string(),
        ));
    };

    let status = match response.taxonomic_status.as_deref() {
        Some("Synonym") => TaxonomicStatus::Synonym,
        _ => TaxonomicStatus::Accepted,
    };

    let taxon = Taxon {
        name,
        author: response.authors.unwrap_or_default(),
        id,
        source: SourceId::Powo,
        status,
    };

    let accepted = response
        .accepted
        .and_then(|r| related_to_taxon(r, TaxonomicStatus::Accepted));
    let synonyms = response
        .synonyms
        .into_iter()
        .filter_map(|r| related_to_taxon(r, TaxonomicStatus::Synonym))
        .collect();

    Ok(TaxonRecord {
        taxon,
        accepted,
        synonyms,
    })
}
