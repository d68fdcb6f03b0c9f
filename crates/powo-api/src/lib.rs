//! Rust client for the Kew name services
//!
//! This crate provides type-safe bindings to two endpoints published by the
//! Royal Botanic Gardens, Kew:
//!
//! - IPNI (International Plant Names Index) name search, used to resolve a
//!   (genus, species, author) triple to a stable identifier
//! - POWO (Plants of the World Online) taxon lookup, which returns taxonomic
//!   status, synonymy and distribution data for that identifier
//!
//! # Example
//!
//! ```no_run
//! use powo_api::{PowoClient, SearchQuery};
//!
//! # async fn example() -> Result<(), powo_api::PowoError> {
//! let client = PowoClient::new();
//!
//! let found = client
//!     .search(&SearchQuery { genus: "Pinus", species: "pinea", author: "L." })
//!     .await?;
//! if let Some(record) = found.results.first() {
//!     if let Some(fq_id) = &record.fq_id {
//!         let taxon = client.lookup(fq_id).await?;
//!         println!("{:?}: {} synonyms", taxon.name, taxon.synonyms.len());
//!     }
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod types;

pub use client::{PowoClient, SearchQuery};
pub use error::{PowoError, Result};
pub use types::{
    Distribution, DistributionArea, NameRecord, RelatedName, SearchResponse, TaxonResponse,
};
