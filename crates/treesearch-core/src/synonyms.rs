//! Synonym-set expansion via the primary authority

use crate::error::SourceError;
use crate::source::TaxonomyAuthority;
use crate::types::{SynonymSet, Taxon, TaxonomicStatus};
use tracing::{debug, info};

/// Expand a resolved taxon into its full synonym set
///
/// Synonym lists are indexed under accepted names, so a taxon that is itself
/// a synonym is first followed to its accepted name. The returned set always
/// starts with the accepted taxon; an empty synonym list (a monotypic
/// accepted name) is valid.
pub async fn expand(
    primary: &dyn TaxonomyAuthority,
    taxon: &Taxon,
) -> Result<SynonymSet, SourceError> {
    let mut record = primary.lookup_record(&taxon.id).await?;

    if record.taxon.status == TaxonomicStatus::Synonym {
        if let Some(accepted) = record.accepted.take() {
            info!(
                synonym = %record.taxon,
                accepted = %accepted,
                "name is itself a synonym, following accepted pointer"
            );
            record = primary.lookup_record(&accepted.id).await?;
        }
    }

    let mut set = SynonymSet::from_accepted(record.taxon);
    for synonym in record.synonyms {
        set.push(synonym);
    }
    debug!(accepted = ?set.accepted().map(|t| t.name.clone()), size = set.len(), "expanded synonym set");
    Ok(set)
}
