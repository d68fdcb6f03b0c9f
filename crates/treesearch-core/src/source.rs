//! Capability traits implemented by the authority adapters

use crate::error::SourceError;
use crate::types::{Location, SourceId, Taxon};
use async_trait::async_trait;

/// A full taxon record as held by the primary authority
#[derive(Debug, Clone)]
pub struct TaxonRecord {
    pub taxon: Taxon,
    /// For synonyms, the accepted name this record points to
    pub accepted: Option<Taxon>,
    /// Synonym list, populated on accepted-name records
    pub synonyms: Vec<Taxon>,
}

/// Location lookup by name; both authorities provide this
#[async_trait]
pub trait LocationSource: Send + Sync {
    fn id(&self) -> SourceId;

    /// Locations the source reports for a scientific name
    ///
    /// Returns `SourceError::NotFound` when the source explicitly reports no
    /// such name; an empty vector means the name is known but has no
    /// recorded locations.
    async fn lookup_locations(&self, name: &str) -> Result<Vec<Location>, SourceError>;
}

/// Name search and taxon lookup; only the primary authority provides this
#[async_trait]
pub trait TaxonomyAuthority: Send + Sync {
    /// Candidate taxa for a (name, author) pair; the author term may be empty
    async fn search_by_name(&self, name: &str, author: &str) -> Result<Vec<Taxon>, SourceError>;

    /// Full record, including accepted pointer and synonym list
    async fn lookup_record(&self, taxon_id: &str) -> Result<TaxonRecord, SourceError>;
}
