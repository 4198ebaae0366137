use clap::Args;

use crate::cli::{IndexArgs, OutputFormat};
use crate::index::store::GenomeIndex;

#[derive(Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub index: IndexArgs,
}

/// Execute list subcommand
///
/// # Errors
///
/// Returns an error if the genomes cannot be loaded.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ListArgs, format: OutputFormat, _verbose: bool) -> anyhow::Result<()> {
    let index = args.index.build_index()?;

    match format {
        OutputFormat::Text => print_text(&index),
        OutputFormat::Json => print_json(&index)?,
        OutputFormat::Tsv => print_tsv(&index),
    }

    Ok(())
}

fn print_text(index: &GenomeIndex) {
    println!(
        "{} genomes, {} windows of {} bases",
        index.len(),
        index.occurrence_count(),
        index.min_search_length()
    );
    println!("{}", "=".repeat(60));
    for genome in index.genomes() {
        println!(
            "{:<40} {:>12} bases {:>12} windows",
            genome.name(),
            genome.length(),
            genome.window_count(index.min_search_length())
        );
    }
}

fn print_json(index: &GenomeIndex) -> anyhow::Result<()> {
    let genomes: Vec<serde_json::Value> = index
        .genomes()
        .iter()
        .map(|g| {
            serde_json::json!({
                "name": g.name(),
                "length": g.length(),
                "windows": g.window_count(index.min_search_length()),
            })
        })
        .collect();

    let output = serde_json::json!({
        "search_length": index.min_search_length(),
        "total_windows": index.occurrence_count(),
        "genomes": genomes,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv(index: &GenomeIndex) {
    println!("name\tlength\twindows");
    for genome in index.genomes() {
        println!(
            "{}\t{}\t{}",
            genome.name(),
            genome.length(),
            genome.window_count(index.min_search_length())
        );
    }
}
