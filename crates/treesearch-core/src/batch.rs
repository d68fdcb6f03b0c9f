//! Batch orchestration: one pipeline run per query, failures isolated per row

use crate::error::ResolveError;
use crate::source::{LocationSource, TaxonomyAuthority};
use crate::types::{ResolutionStatus, SearchResult, SpeciesQuery, SynonymSet};
use crate::{aggregate, merge, resolver, synonyms};
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use tracing::{info, warn};

const DEFAULT_CONCURRENCY: usize = 4;

/// Drives the pipeline for one or many queries
///
/// Queries are independent: a taxonomic failure on one row is captured in
/// that row's result and the batch carries on. Queries run concurrently up
/// to a bounded in-flight limit; results keep input order. The only state
/// shared between queries is the immutable pair of source handles.
pub struct Orchestrator {
    primary: Arc<dyn TaxonomyAuthority>,
    sources: Vec<Arc<dyn LocationSource>>,
    concurrency: usize,
}

impl Orchestrator {
    /// Build an orchestrator over the primary authority and the secondary
    /// location-only source
    ///
    /// The primary serves both name resolution and location lookup, so it
    /// must implement both capabilities.
    pub fn new<P, S>(primary: Arc<P>, secondary: Arc<S>) -> Self
    where
        P: TaxonomyAuthority + LocationSource + 'static,
        S: LocationSource + 'static,
    {
        Self {
            sources: vec![
                Arc::clone(&primary) as Arc<dyn LocationSource>,
                secondary as Arc<dyn LocationSource>,
            ],
            primary: primary as Arc<dyn TaxonomyAuthority>,
            concurrency: DEFAULT_CONCURRENCY,
        }
    }

    /// Cap on concurrently processed queries
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Process a batch; one result per query, input order preserved
    pub async fn run(&self, queries: Vec<SpeciesQuery>) -> Vec<SearchResult> {
        stream::iter(queries)
            .map(|query| self.run_one(query))
            .buffered(self.concurrency)
            .collect()
            .await
    }

    /// Full pipeline for a single query: resolve, expand, aggregate, merge
    pub async fn run_one(&self, query: SpeciesQuery) -> SearchResult {
        info!(name = %query.name(), author = query.author(), "processing query");

        let taxon = match resolver::resolve(self.primary.as_ref(), &query).await {
            Ok(taxon) => taxon,
            Err(ResolveError::NotFound) => {
                info!(name = %query.name(), "no matching name record");
                return SearchResult::unresolved(query, ResolutionStatus::NotFound);
            }
            Err(ResolveError::Ambiguous(candidates)) => {
                let names: Vec<String> = candidates.iter().map(|t| t.to_string()).collect();
                warn!(
                    name = %query.name(),
                    candidates = names.join(" | "),
                    "ambiguous name, not guessing; supply a more specific author to disambiguate"
                );
                return SearchResult::unresolved(query, ResolutionStatus::Ambiguous(names));
            }
            Err(ResolveError::Source(e)) => {
                warn!(name = %query.name(), error = %e, "name resolution call failed");
                return SearchResult::unresolved(query, ResolutionStatus::Failed(e.to_string()));
            }
        };

        let synonyms = match synonyms::expand(self.primary.as_ref(), &taxon).await {
            Ok(set) => set,
            Err(e) => {
                // Locations for the resolved name alone are still a usable
                // result, so degrade rather than fail the row
                warn!(taxon = %taxon, error = %e, "synonym expansion failed, using resolved name only");
                SynonymSet::from_accepted(taxon.clone())
            }
        };

        let (raw, sources) = aggregate::aggregate(&self.sources, &synonyms).await;
        let locations = merge::merge(raw);
        info!(
            taxon = %taxon,
            synonyms = synonyms.len(),
            locations = locations.len(),
            "query complete"
        );

        SearchResult {
            query,
            taxon: Some(taxon),
            synonyms,
            locations,
            resolution: ResolutionStatus::Resolved,
            sources,
        }
    }
}
