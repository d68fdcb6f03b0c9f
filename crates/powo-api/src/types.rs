//! Data types for IPNI search and POWO taxon lookup responses
//!
//! These structs mirror the Kew API responses. Some fields may not be used
//! but are kept for completeness and future use.

use serde::Deserialize;

/// Response from the IPNI `/search` endpoint
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    #[serde(default)]
    pub total_results: u64,
    #[serde(default)]
    pub results: Vec<NameRecord>,
}

/// A single name record from an IPNI search
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameRecord {
    /// Fully-qualified IPNI identifier, e.g. "urn:lsid:ipni.org:names:676604-1"
    pub fq_id: Option<String>,
    pub name: Option<String>,
    pub authors: Option<String>,
    pub rank: Option<String>,
    /// Whether POWO considers this name accepted
    pub accepted: Option<bool>,
    pub kingdom: Option<String>,
    pub family: Option<String>,
    pub in_powo: Option<bool>,
}

/// Response from the POWO `/taxon/{fqId}` endpoint
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxonResponse {
    pub fq_id: Option<String>,
    pub name: Option<String>,
    pub authors: Option<String>,
    /// "Accepted" or "Synonym"
    pub taxonomic_status: Option<String>,
    /// Present when this record is a synonym: the accepted name it points to
    pub accepted: Option<RelatedName>,
    #[serde(default)]
    pub synonyms: Vec<RelatedName>,
    pub distribution: Option<Distribution>,
}

/// A related name (accepted pointer or synonym list entry)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedName {
    pub fq_id: Option<String>,
    pub name: Option<String>,
    pub author: Option<String>,
    pub taxonomic_status: Option<String>,
}

/// Distribution block of a POWO taxon record
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Distribution {
    #[serde(default)]
    pub natives: Vec<DistributionArea>,
    #[serde(default)]
    pub introduced: Vec<DistributionArea>,
}

/// A single TDWG-coded geographic area
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionArea {
    pub name: Option<String>,
    pub tdwg_code: Option<String>,
    pub tdwg_level: Option<u8>,
    pub feature_id: Option<String>,
}
