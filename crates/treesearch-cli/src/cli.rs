//! Command-line argument definitions

use clap::Parser;
use std::path::PathBuf;

/// Synonym-aware location search for tree species
///
/// Resolves a species name against IPNI/POWO, expands its synonym set, and
/// collects known locations for every synonym from both POWO and BGCI
/// GlobalTreeSearch.
#[derive(Debug, Parser)]
#[command(name = "treesearch", version, about)]
pub struct Cli {
    /// Genus of the species to look up
    #[arg(value_name = "GENUS", required_unless_present = "input")]
    pub genus: Option<String>,

    /// Species epithet
    #[arg(value_name = "SPECIES", required_unless_present = "input")]
    pub species: Option<String>,

    /// Author citation; remaining non-flag tokens are joined with spaces,
    /// e.g. `treesearch Abies alba Mill.` or `treesearch Larix decidua (L.) H. Karst.`
    #[arg(value_name = "AUTHOR")]
    pub author: Vec<String>,

    /// CSV file with "Name" and "Author" columns to process in batch
    #[arg(
        short,
        long,
        value_name = "FILE",
        conflicts_with_all = ["genus", "species", "author"]
    )]
    pub input: Option<PathBuf>,

    /// Write results as CSV to this file instead of printing a summary
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}
