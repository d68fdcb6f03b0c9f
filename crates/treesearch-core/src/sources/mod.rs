//! Authority adapters
//!
//! Each adapter wraps one leaf API client, converts its response types into
//! domain types, and owns the classification of its failures into
//! [`SourceError`](crate::error::SourceError) cases.

mod gts;
mod powo;

pub use gts::GtsSource;
pub use powo::PowoSource;

/// First two parts of a scientific name, or `None` for a non-binomial
fn split_binomial(name: &str) -> Option<(&str, &str)> {
    let mut parts = name.split_whitespace();
    let genus = parts.next()?;
    let species = parts.next()?;
    Some((genus, species))
}
