//! Result rendering: CSV file or console summary

use anyhow::{Context, Result};
use std::path::Path;
use treesearch_core::{ResolutionStatus, SearchResult, SourceId};

const FIXED_COLUMNS: [&str; 7] = [
    "Name",
    "Author",
    "Resolved Name",
    "Status",
    "Locations",
    "POWO Status",
    "GTS Status",
];

fn status_cell(result: &SearchResult, source: SourceId) -> String {
    result
        .status_of(source)
        .map(|status| status.to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn locations_cell(result: &SearchResult) -> String {
    result
        .locations
        .iter()
        .map(|l| l.description.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Write one CSV row per result: pass-through extras first, then the fixed
/// result columns
pub fn write_csv(path: &Path, results: &[SearchResult]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::NonNumeric)
        .from_path(path)
        .with_context(|| format!("Could not write results: {}", path.display()))?;

    let extra_headers: Vec<String> = results
        .first()
        .map(|r| r.query.extra().iter().map(|(h, _)| h.clone()).collect())
        .unwrap_or_default();
    let mut header = extra_headers;
    header.extend(FIXED_COLUMNS.iter().map(|c| c.to_string()));
    writer.write_record(&header)?;

    for result in results {
        let mut row: Vec<String> = result
            .query
            .extra()
            .iter()
            .map(|(_, value)| value.clone())
            .collect();
        row.push(result.query.name());
        row.push(result.query.author().to_string());
        row.push(
            result
                .taxon
                .as_ref()
                .map(|t| t.to_string())
                .unwrap_or_default(),
        );
        row.push(result.resolution.to_string());
        row.push(locations_cell(result));
        row.push(status_cell(result, SourceId::Powo));
        row.push(status_cell(result, SourceId::Gts));
        writer.write_record(&row)?;
    }

    writer.flush().context("Could not write results")?;
    Ok(())
}

/// Human-readable per-row summary for console mode
pub fn print_summary(results: &[SearchResult]) {
    for result in results {
        println!("{:-<80}", "");
        let title = if result.query.author().is_empty() {
            result.query.name()
        } else {
            format!("{} ({})", result.query.name(), result.query.author())
        };
        println!("{:^80}", title);
        println!("{:-<80}", "");

        match &result.resolution {
            ResolutionStatus::Resolved => {
                if let Some(taxon) = &result.taxon {
                    println!("Resolved as: {}", taxon);
                }
                println!("Synonyms considered: {}", result.synonyms.len());
                if result.locations.is_empty() {
                    println!("No known locations.");
                } else {
                    println!("Locations ({}):", result.locations.len());
                    for location in &result.locations {
                        println!(
                            "  {} ({}, via {})",
                            location.description, location.source, location.synonym
                        );
                    }
                }
            }
            ResolutionStatus::NotFound => {
                println!("No matching name record found.");
            }
            ResolutionStatus::Ambiguous(candidates) => {
                println!("Ambiguous name; supply a more specific author. Candidates:");
                for candidate in candidates {
                    println!("  {}", candidate);
                }
            }
            ResolutionStatus::Failed(message) => {
                println!("Lookup failed: {}", message);
            }
        }

        println!(
            "Source status: powo={}, gts={}",
            status_cell(result, SourceId::Powo),
            status_cell(result, SourceId::Gts)
        );
    }
}
