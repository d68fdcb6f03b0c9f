//! CSV input: one species query per data row

use anyhow::{bail, Context, Result};
use std::path::Path;
use treesearch_core::SpeciesQuery;

/// Read queries from a CSV file
///
/// The header must contain `Name` and `Author` columns (case-sensitive).
/// Every other column is carried through to the query's extra fields in
/// original order and re-emitted untouched on output.
pub fn read_queries(path: &Path) -> Result<Vec<SpeciesQuery>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Could not read file: {}", path.display()))?;

    let headers = reader.headers().context("Could not read CSV header")?.clone();
    let name_index = headers.iter().position(|h| h == "Name");
    let author_index = headers.iter().position(|h| h == "Author");
    let (Some(name_index), Some(author_index)) = (name_index, author_index) else {
        bail!(
            "Missing columns: expected at least \"Name\" and \"Author\", but got: {}",
            headers.iter().collect::<Vec<_>>().join(", ")
        );
    };

    let mut queries = Vec::new();
    for record in reader.records() {
        let record = record.context("Could not read CSV record")?;
        let name = record.get(name_index).unwrap_or("");
        let author = record.get(author_index).unwrap_or("");
        let extra = headers
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != name_index && *i != author_index)
            .map(|(i, header)| (header.to_string(), record.get(i).unwrap_or("").to_string()))
            .collect();

        let name_parts = name.split_whitespace().map(String::from).collect();
        queries.push(SpeciesQuery::new(name_parts, author).with_extra(extra));
    }

    Ok(queries)
}
