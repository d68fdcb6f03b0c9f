//! In-memory mock authorities for unit tests

use crate::error::SourceError;
use crate::source::{LocationSource, TaxonRecord, TaxonomyAuthority};
use crate::types::{Location, SourceId, Taxon};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Scripted primary authority
///
/// Candidates are keyed by query name, records by taxon identifier, and
/// locations by name. Unscripted names behave like an authority that knows
/// nothing about them.
#[derive(Default)]
pub struct MockAuthority {
    candidates: HashMap<String, Vec<Taxon>>,
    records: HashMap<String, TaxonRecord>,
    locations: HashMap<String, Result<Vec<Location>, SourceError>>,
    search_error: Option<SourceError>,
}

impl MockAuthority {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn candidates(mut self, name: &str, candidates: Vec<Taxon>) -> Self {
        self.candidates.insert(name.to_string(), candidates);
        self
    }

    pub fn record(mut self, record: TaxonRecord) -> Self {
        self.records.insert(record.taxon.id.clone(), record);
        self
    }

    pub fn locations(mut self, name: &str, descriptions: &[&str]) -> Self {
        let locations = descriptions
            .iter()
            .map(|d| Location {
                description: d.to_string(),
                source: SourceId::Powo,
                synonym: name.to_string(),
            })
            .collect();
        self.locations.insert(name.to_string(), Ok(locations));
        self
    }

    /// Make every search call fail with the given error
    pub fn failing_search(mut self, error: SourceError) -> Self {
        self.search_error = Some(error);
        self
    }
}

#[async_trait]
impl TaxonomyAuthority for MockAuthority {
    async fn search_by_name(&self, name: &str, _author: &str) -> Result<Vec<Taxon>, SourceError> {
        if let Some(error) = &self.search_error {
            return Err(error.clone());
        }
        Ok(self.candidates.get(name).cloned().unwrap_or_default())
    }

    async fn lookup_record(&self, taxon_id: &str) -> Result<TaxonRecord, SourceError> {
        self.records
            .get(taxon_id)
            .cloned()
            .ok_or(SourceError::NotFound)
    }
}

#[async_trait]
impl LocationSource for MockAuthority {
    fn id(&self) -> SourceId {
        SourceId::Powo
    }

    async fn lookup_locations(&self, name: &str) -> Result<Vec<Location>, SourceError> {
        match self.locations.get(name) {
            Some(result) => result.clone(),
            None => Err(SourceError::NotFound),
        }
    }
}

/// Scripted location-only source with a call log
pub struct MockSource {
    id: SourceId,
    responses: HashMap<String, Result<Vec<String>, SourceError>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockSource {
    pub fn new(id: SourceId) -> Self {
        Self {
            id,
            responses: HashMap::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn locations(mut self, name: &str, descriptions: &[&str]) -> Self {
        self.responses.insert(
            name.to_string(),
            Ok(descriptions.iter().map(|d| d.to_string()).collect()),
        );
        self
    }

    pub fn error(mut self, name: &str, error: SourceError) -> Self {
        self.responses.insert(name.to_string(), Err(error));
        self
    }

    /// Handle onto the log of names this source was asked about
    pub fn call_log(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl LocationSource for MockSource {
    fn id(&self) -> SourceId {
        self.id
    }

    async fn lookup_locations(&self, name: &str) -> Result<Vec<Location>, SourceError> {
        self.calls.lock().unwrap().push(name.to_string());
        match self.responses.get(name) {
            Some(Ok(descriptions)) => Ok(descriptions
                .iter()
                .map(|d| Location {
                    description: d.clone(),
                    source: self.id,
                    synonym: name.to_string(),
                })
                .collect()),
            Some(Err(error)) => Err(error.clone()),
            None => Err(SourceError::NotFound),
        }
    }
}
