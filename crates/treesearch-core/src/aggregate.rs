//! Multi-source location aggregation with partial-failure tolerance

use crate::error::SourceError;
use crate::source::LocationSource;
use crate::types::{Location, SourceId, SourceStatus, SynonymSet};
use std::sync::Arc;
use tracing::{debug, warn};

#[derive(Default)]
struct Tally {
    succeeded: u32,
    failed: u32,
    /// Once a transient failure survives its retries the source is treated
    /// as down for the rest of this aggregation and further calls to it are
    /// skipped. Local to this call; other queries keep their own view.
    down: bool,
}

impl Tally {
    fn status(&self) -> SourceStatus {
        if self.failed == 0 {
            SourceStatus::Success
        } else if self.succeeded > 0 {
            SourceStatus::Partial
        } else {
            SourceStatus::Unavailable
        }
    }
}

/// Collect locations for every synonym from every source
///
/// Lookups run in synonym-set order, then source order, which keeps the raw
/// location sequence (and therefore the merged output) deterministic.
/// Per-(synonym, source) failures are absorbed: a not-found is zero locations
/// from that source for that name, a malformed response is logged and counted
/// against the source's status, and a transient failure that survived its
/// retries marks the source unavailable for the remainder of this query.
/// The aggregation itself never fails.
pub async fn aggregate(
    sources: &[Arc<dyn LocationSource>],
    synonyms: &SynonymSet,
) -> (Vec<Location>, Vec<(SourceId, SourceStatus)>) {
    let mut tallies: Vec<(SourceId, Tally)> = sources
        .iter()
        .map(|source| (source.id(), Tally::default()))
        .collect();
    let mut locations = Vec::new();

    for taxon in synonyms.iter() {
        for (source, (id, tally)) in sources.iter().zip(tallies.iter_mut()) {
            if tally.down {
                continue;
            }
            match source.lookup_locations(&taxon.name).await {
                Ok(found) => {
                    tally.succeeded += 1;
                    locations.extend(found);
                }
                Err(SourceError::NotFound) => {
                    tally.succeeded += 1;
                    debug!(source = %id, name = %taxon.name, "no locations from this source");
                }
                Err(SourceError::Malformed(msg)) => {
                    tally.failed += 1;
                    warn!(
                        source = %id,
                        name = %taxon.name,
                        error = %msg,
                        "authority response did not match expected schema"
                    );
                }
                Err(e @ SourceError::Transient(_)) => {
                    tally.failed += 1;
                    tally.down = true;
                    warn!(
                        source = %id,
                        name = %taxon.name,
                        error = %e,
                        "source unavailable, skipping it for the rest of this query"
                    );
                }
            }
        }
    }

    let statuses = tallies
        .into_iter()
        .map(|(id, tally)| (id, tally.status()))
        .collect();
    (locations, statuses)
}
