//! Deduplicated merging of location lists

use crate::types::Location;
use std::collections::HashSet;

/// Deduplication key: trimmed, whitespace-collapsed, case-folded
///
/// A heuristic inherited from the domain: place names are reported
/// inconsistently across sources. Two genuinely different places that
/// normalize identically will be merged; accepted limitation.
pub fn normalize_key(description: &str) -> String {
    description
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Remove duplicate locations by normalized key
///
/// The first-seen original (with its casing and provenance) is kept per key;
/// output order is first-seen order, so for a fixed input sequence the result
/// is deterministic.
pub fn merge(locations: Vec<Location>) -> Vec<Location> {
    let mut seen = HashSet::new();
    locations
        .into_iter()
        .filter(|location| seen.insert(normalize_key(&location.description)))
        .collect()
}
