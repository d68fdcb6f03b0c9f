//! treesearch - synonym-aware location search tool for tree species
//!
//! Resolves names against IPNI/POWO, expands synonym sets, and aggregates
//! locations from POWO and BGCI GlobalTreeSearch. Single-query mode takes
//! positional GENUS SPECIES AUTHOR tokens; batch mode reads a CSV.

mod cli;
mod input;
mod output;

use clap::Parser;
use std::process;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;
use treesearch_core::{GtsSource, Orchestrator, PowoSource, SpeciesQuery};

use crate::cli::Cli;

#[tokio::main]
async fn main() {
    // Logging defaults to warn; override with TREESEARCH_LOG or RUST_LOG
    let log_level = std::env::var("TREESEARCH_LOG").unwrap_or_else(|_| "warn".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let queries = match &cli.input {
        Some(path) => input::read_queries(path)?,
        None => {
            // clap guarantees genus and species are present without --input
            let name_parts = [cli.genus.as_deref(), cli.species.as_deref()]
                .into_iter()
                .flatten()
                .map(String::from)
                .collect();
            vec![SpeciesQuery::new(name_parts, cli.author.join(" "))]
        }
    };

    if queries.is_empty() {
        println!("No data.");
        return Ok(());
    }

    let orchestrator = Orchestrator::new(Arc::new(PowoSource::new()), Arc::new(GtsSource::new()));

    let started = Instant::now();
    let results = orchestrator.run(queries).await;
    info!(
        queries = results.len(),
        elapsed_secs = started.elapsed().as_secs_f64(),
        "batch complete"
    );

    // Unresolved rows are reported per row; only structural problems make
    // the process exit non-zero
    match &cli.output {
        Some(path) => {
            output::write_csv(path, &results)?;
            println!("Results written to {}", path.display());
        }
        None => output::print_summary(&results),
    }

    Ok(())
}
