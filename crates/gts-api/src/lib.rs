//! Rust client for the BGCI GlobalTreeSearch API
//!
//! [GlobalTreeSearch](https://www.bgci.org/global_tree_search.php) publishes
//! country-level occurrence data for tree species, queried by binomial.
//!
//! # Example
//!
//! ```no_run
//! use gts_api::GtsClient;
//!
//! # async fn example() -> Result<(), gts_api::GtsError> {
//! let client = GtsClient::new();
//! let response = client.search("Pinus", "pinea").await?;
//! for result in &response.results {
//!     for link in &result.geolinks {
//!         println!("{:?}", link.country);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod types;

pub use client::GtsClient;
pub use error::{GtsError, Result};
pub use types::{GtsGeolink, GtsResponse, GtsResult};
