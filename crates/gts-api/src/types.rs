//! Data types for GlobalTreeSearch responses

use serde::Deserialize;

/// Response from the `/treesearch/genus/{genus}/species/{species}` endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct GtsResponse {
    #[serde(default)]
    pub results: Vec<GtsResult>,
}

/// One matched name with its occurrence links
#[derive(Debug, Clone, Deserialize)]
pub struct GtsResult {
    pub taxon: Option<String>,
    pub author: Option<String>,
    /// Geographic occurrence records for this name
    #[serde(rename = "TSGeolinks", default)]
    pub geolinks: Vec<GtsGeolink>,
}

/// A single occurrence record, usually country-level
#[derive(Debug, Clone, Deserialize)]
pub struct GtsGeolink {
    pub country: Option<String>,
    pub region: Option<String>,
    pub origin: Option<String>,
}
