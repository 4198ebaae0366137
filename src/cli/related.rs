use std::path::PathBuf;

use clap::Args;

use crate::cli::{IndexArgs, OutputFormat};
use crate::core::types::GenomeMatch;
use crate::matching::engine::{
    MatchingConfig, MatchingEngine, DEFAULT_FRAGMENT_MATCH_LENGTH, DEFAULT_MATCH_PERCENT_THRESHOLD,
};
use crate::parsing::genome::parse_genome_file;

#[derive(Args)]
pub struct RelatedArgs {
    /// Genome file holding the query genome(s)
    #[arg(required = true)]
    pub query: PathBuf,

    #[command(flatten)]
    pub index: IndexArgs,

    /// Length of the query windows sampled for matching
    #[arg(long, default_value_t = DEFAULT_FRAGMENT_MATCH_LENGTH)]
    pub fragment_length: usize,

    /// Do not tolerate a SNP
    #[arg(long)]
    pub exact_only: bool,

    /// Minimum percentage of matching windows (0-100)
    #[arg(short, long, default_value_t = DEFAULT_MATCH_PERCENT_THRESHOLD)]
    pub threshold: f64,

    /// Number of related genomes to show per query
    #[arg(short = 'n', long, default_value = "10")]
    pub max_matches: usize,
}

/// Related genomes for one query genome
struct QueryResult {
    query_name: String,
    matches: Vec<GenomeMatch>,
}

/// Execute related subcommand
///
/// # Errors
///
/// Returns an error if any file cannot be loaded or the fragment length is
/// shorter than the search length.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: RelatedArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    if !(0.0..=100.0).contains(&args.threshold) {
        anyhow::bail!("--threshold must be between 0 and 100, got {}", args.threshold);
    }

    let index = args.index.build_index()?;
    let queries = parse_genome_file(&args.query)
        .map_err(|e| anyhow::anyhow!("Failed to load {}: {e}", args.query.display()))?;

    if verbose {
        eprintln!(
            "Indexed {} genomes; {} query genomes, {}-base windows",
            index.len(),
            queries.len(),
            args.fragment_length
        );
    }

    let config = MatchingConfig {
        exact_match_only: args.exact_only,
        match_percent_threshold: args.threshold,
    };
    let engine = MatchingEngine::with_config(&index, config);

    let mut results = Vec::with_capacity(queries.len());
    for query in &queries {
        let mut matches = engine.related_genomes(query, args.fragment_length)?;
        matches.truncate(args.max_matches);
        results.push(QueryResult {
            query_name: query.name().to_string(),
            matches,
        });
    }

    match format {
        OutputFormat::Text => print_text_results(&results),
        OutputFormat::Json => print_json_results(&results, &args)?,
        OutputFormat::Tsv => print_tsv_results(&results),
    }

    Ok(())
}

fn print_text_results(results: &[QueryResult]) {
    for (i, result) in results.iter().enumerate() {
        if i > 0 {
            println!("\n{}", "─".repeat(60));
        }

        println!("\nQuery: {}", result.query_name);
        if result.matches.is_empty() {
            println!("   No related genomes found.");
            continue;
        }

        for (rank, m) in result.matches.iter().enumerate() {
            println!(
                "   #{} {}: {:.2}% ({})",
                rank + 1,
                m.genome_name,
                m.percent_match,
                m.level()
            );
        }
    }

    println!();
}

fn print_json_results(results: &[QueryResult], args: &RelatedArgs) -> anyhow::Result<()> {
    let output: Vec<serde_json::Value> = results
        .iter()
        .map(|r| {
            serde_json::json!({
                "query": r.query_name,
                "fragment_length": args.fragment_length,
                "exact_match_only": args.exact_only,
                "threshold": args.threshold,
                "matches": r.matches.iter().map(|m| serde_json::json!({
                    "genome_name": m.genome_name,
                    "percent_match": m.percent_match,
                    "level": m.level(),
                })).collect::<Vec<_>>(),
            })
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_results(results: &[QueryResult]) {
    println!("query\trank\tgenome\tpercent_match\tlevel");
    for r in results {
        for (rank, m) in r.matches.iter().enumerate() {
            println!(
                "{}\t{}\t{}\t{:.4}\t{}",
                r.query_name,
                rank + 1,
                m.genome_name,
                m.percent_match,
                m.level()
            );
        }
    }
}
