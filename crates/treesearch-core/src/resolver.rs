//! Name resolution against the primary authority
//!
//! Policy: precision over recall. A species list used for conservation
//! tracking must not silently resolve to the wrong taxon, so a multi-hit
//! search without an exact (name, author) match fails loudly with the
//! candidate list instead of picking a best guess.

use crate::error::ResolveError;
use crate::source::TaxonomyAuthority;
use crate::types::{SpeciesQuery, Taxon};
use tracing::debug;

/// Collapse runs of whitespace to single spaces and trim the ends
pub(crate) fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Resolve a query to exactly one taxon
///
/// One candidate wins outright. With several, the only acceptable tie-break
/// is an exact match: name compared case-sensitively, author compared after
/// whitespace normalization.
pub async fn resolve(
    primary: &dyn TaxonomyAuthority,
    query: &SpeciesQuery,
) -> Result<Taxon, ResolveError> {
    let name = query.name();
    let mut candidates = primary.search_by_name(&name, query.author()).await?;
    debug!(name = %name, hits = candidates.len(), "name search");

    if candidates.is_empty() {
        return Err(ResolveError::NotFound);
    }
    if candidates.len() == 1 {
        return Ok(candidates.swap_remove(0));
    }

    let author = normalize_whitespace(query.author());
    let exact: Vec<usize> = candidates
        .iter()
        .enumerate()
        .filter(|(_, c)| c.name == name && normalize_whitespace(&c.author) == author)
        .map(|(i, _)| i)
        .collect();

    match exact.as_slice() {
        [index] => Ok(candidates.swap_remove(*index)),
        _ => Err(ResolveError::Ambiguous(candidates)),
    }
}
