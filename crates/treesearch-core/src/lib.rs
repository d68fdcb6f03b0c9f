//! Synonym-aware location search engine for tree species
//!
//! Resolves a species name plus author citation to its accepted taxon via
//! the primary authority (IPNI/POWO), expands it into the full synonym set,
//! aggregates distribution records for every synonym from both authorities
//! (POWO and BGCI GlobalTreeSearch), and merges the results with provenance.
//!
//! The pipeline tolerates partial source failure: a source that stays down
//! after retries is reported as unavailable for that query while the other
//! source's results are still returned. Per-row taxonomic failures never
//! abort a batch.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use treesearch_core::{GtsSource, Orchestrator, PowoSource, SpeciesQuery};
//!
//! # async fn example() {
//! let orchestrator = Orchestrator::new(Arc::new(PowoSource::new()), Arc::new(GtsSource::new()));
//! let query = SpeciesQuery::new(vec!["Pinus".into(), "pinea".into()], "L.");
//! let result = orchestrator.run_one(query).await;
//! for location in &result.locations {
//!     println!("{} (via {} from {})", location.description, location.synonym, location.source);
//! }
//! # }
//! ```

mod aggregate;
mod batch;
mod error;
mod merge;
mod resolver;
mod retry;
mod source;
mod sources;
mod synonyms;
#[cfg(test)]
mod testing;
mod types;

pub use aggregate::aggregate;
pub use batch::Orchestrator;
pub use error::{ResolveError, SourceError};
pub use merge::{merge, normalize_key};
pub use resolver::resolve;
pub use retry::RetryPolicy;
pub use source::{LocationSource, TaxonRecord, TaxonomyAuthority};
pub use sources::{GtsSource, PowoSource};
pub use synonyms::expand;
pub use types::{
    Location, ResolutionStatus, SearchResult, SourceId, SourceStatus, SpeciesQuery, SynonymSet,
    Taxon, TaxonomicStatus,
};
