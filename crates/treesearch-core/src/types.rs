//! Domain types for synonym-aware location search

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an external taxonomic authority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceId {
    /// Plants of the World Online / IPNI (Kew) - synonymy and distribution
    Powo,
    /// BGCI GlobalTreeSearch - occurrence lookup by binomial
    Gts,
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Powo => write!(f, "powo"),
            Self::Gts => write!(f, "gts"),
        }
    }
}

/// Taxonomic status of a name as reported by an authority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaxonomicStatus {
    Accepted,
    Synonym,
}

/// One species lookup as supplied by the user
///
/// Immutable after construction. Extra fields from CSV input are carried
/// through untouched and re-emitted on output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeciesQuery {
    name_parts: Vec<String>,
    author: String,
    extra: Vec<(String, String)>,
}

impl SpeciesQuery {
    pub fn new(name_parts: Vec<String>, author: impl Into<String>) -> Self {
        Self {
            name_parts,
            author: author.into(),
            extra: Vec::new(),
        }
    }

    pub fn with_extra(mut self, extra: Vec<(String, String)>) -> Self {
        self.extra = extra;
        self
    }

    /// Full name, parts joined with single spaces
    pub fn name(&self) -> String {
        self.name_parts.join(" ")
    }

    pub fn name_parts(&self) -> &[String] {
        &self.name_parts
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn extra(&self) -> &[(String, String)] {
        &self.extra
    }
}

/// A species-level name record from an authority
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Taxon {
    /// Canonical scientific name, e.g. "Pinus pinea"
    pub name: String,
    /// Author citation, e.g. "L."
    pub author: String,
    /// Stable identifier assigned by the source authority
    pub id: String,
    pub source: SourceId,
    pub status: TaxonomicStatus,
}

impl fmt::Display for Taxon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.author.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{} {}", self.name, self.author)
        }
    }
}

/// Ordered synonym set; the taxon it was expanded from comes first
///
/// No two entries share an authority identifier.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SynonymSet {
    taxa: Vec<Taxon>,
}

impl SynonymSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set seeded with the accepted taxon as its first element
    pub fn from_accepted(taxon: Taxon) -> Self {
        Self { taxa: vec![taxon] }
    }

    /// Append a taxon, skipping identifiers already present
    pub fn push(&mut self, taxon: Taxon) {
        if !self.taxa.iter().any(|t| t.id == taxon.id) {
            self.taxa.push(taxon);
        }
    }

    /// First element of the set
    ///
    /// Sets produced by synonym expansion (or seeded via
    /// [`SynonymSet::from_accepted`]) always put the accepted taxon first;
    /// a set assembled with bare [`SynonymSet::push`] calls carries no such
    /// guarantee.
    pub fn accepted(&self) -> Option<&Taxon> {
        self.taxa.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Taxon> {
        self.taxa.iter()
    }

    pub fn len(&self) -> usize {
        self.taxa.len()
    }

    pub fn is_empty(&self) -> bool {
        self.taxa.is_empty()
    }
}

/// A reported geographic area, with the provenance that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Place description as reported by the source (original casing kept)
    pub description: String,
    /// Authority that reported it
    pub source: SourceId,
    /// Synonym name under which it was found
    pub synonym: String,
}

/// Per-source outcome of one query's location aggregation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceStatus {
    /// Every call to this source succeeded
    Success,
    /// Some calls succeeded, some failed
    Partial,
    /// Every call to this source failed
    Unavailable,
}

impl fmt::Display for SourceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Partial => write!(f, "partial"),
            Self::Unavailable => write!(f, "unavailable"),
        }
    }
}

/// How name resolution for one query ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolutionStatus {
    Resolved,
    /// The primary authority reported no match
    NotFound,
    /// Several candidates, none an exact match; lists all candidate names
    Ambiguous(Vec<String>),
    /// The resolution call itself failed (network, schema drift)
    Failed(String),
}

impl fmt::Display for ResolutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resolved => write!(f, "resolved"),
            Self::NotFound => write!(f, "not found"),
            Self::Ambiguous(candidates) => {
                write!(f, "ambiguous ({})", candidates.join(" | "))
            }
            Self::Failed(msg) => write!(f, "failed: {}", msg),
        }
    }
}

/// Terminal output of the core for one query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub query: SpeciesQuery,
    pub taxon: Option<Taxon>,
    pub synonyms: SynonymSet,
    /// Deduplicated locations, provenance retained per entry
    pub locations: Vec<Location>,
    pub resolution: ResolutionStatus,
    /// Per-source status in lookup order; empty when no aggregation ran
    pub sources: Vec<(SourceId, SourceStatus)>,
}

impl SearchResult {
    /// Result for a query that never made it past name resolution
    pub fn unresolved(query: SpeciesQuery, resolution: ResolutionStatus) -> Self {
        Self {
            query,
            taxon: None,
            synonyms: SynonymSet::new(),
            locations: Vec::new(),
            resolution,
            sources: Vec::new(),
        }
    }

    pub fn status_of(&self, source: SourceId) -> Option<SourceStatus> {
        self.sources
            .iter()
            .find(|(id, _)| *id == source)
            .map(|(_, status)| *status)
    }
}
