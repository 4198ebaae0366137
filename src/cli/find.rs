use clap::Args;

use crate::cli::{IndexArgs, OutputFormat};
use crate::core::types::DnaMatch;
use crate::matching::engine::MatchingEngine;
use crate::utils::validation::find_invalid_base;

#[derive(Args)]
pub struct FindArgs {
    /// DNA fragment to search for
    #[arg(required = true)]
    pub fragment: String,

    #[command(flatten)]
    pub index: IndexArgs,

    /// Minimum match length (defaults to the search length)
    #[arg(short, long)]
    pub min_length: Option<usize>,

    /// Do not tolerate a SNP
    #[arg(long)]
    pub exact_only: bool,
}

/// Execute find subcommand
///
/// # Errors
///
/// Returns an error if the genomes cannot be loaded or the search arguments
/// are invalid.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: FindArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let fragment = args.fragment.to_ascii_uppercase();
    if let Some((pos, base)) = find_invalid_base(&fragment) {
        anyhow::bail!("Invalid base '{base}' at position {} of fragment", pos + 1);
    }

    let index = args.index.build_index()?;

    if verbose {
        eprintln!(
            "Indexed {} genomes ({} windows)",
            index.len(),
            index.occurrence_count()
        );
    }

    let min_length = args.min_length.unwrap_or(index.min_search_length());

    let engine = MatchingEngine::new(&index);
    let mut matches = engine.find_genomes_with_dna(&fragment, min_length, args.exact_only)?;
    matches.sort_by(|a, b| a.genome_name.cmp(&b.genome_name));

    if matches.is_empty() {
        eprintln!("No genomes contain {fragment} (minimum length {min_length}).");
        return Ok(());
    }

    match format {
        OutputFormat::Text => {
            print_text_results(&fragment, min_length, args.exact_only, &matches);
        }
        OutputFormat::Json => {
            print_json_results(&fragment, min_length, args.exact_only, &matches)?;
        }
        OutputFormat::Tsv => print_tsv_results(&matches),
    }

    Ok(())
}

fn print_text_results(
    fragment: &str,
    min_length: usize,
    exact_only: bool,
    matches: &[DnaMatch],
) {
    let mode = if exact_only { "exact" } else { "SNP-tolerant" };
    println!(
        "{} genomes contain {fragment} ({mode}, minimum length {min_length}):",
        matches.len()
    );
    for m in matches {
        println!(
            "  {}: length {} at position {}",
            m.genome_name, m.length, m.position
        );
    }
}

fn print_json_results(
    fragment: &str,
    min_length: usize,
    exact_only: bool,
    matches: &[DnaMatch],
) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "fragment": fragment,
        "minimum_length": min_length,
        "exact_match_only": exact_only,
        "matches": matches,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_results(matches: &[DnaMatch]) {
    println!("genome\tposition\tlength");
    for m in matches {
        println!("{}\t{}\t{}", m.genome_name, m.position, m.length);
    }
}
