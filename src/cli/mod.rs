//! Command-line interface for genome-matcher.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **find**: Find the genomes containing a DNA fragment
//! - **related**: Rank the genomes most similar to each genome in a query file
//! - **list**: Show the genomes that would be indexed
//!
//! ## Usage
//!
//! ```text
//! # Find a fragment, tolerating one SNP
//! genome-matcher find GAAATACGATCTCGTACCGT --genomes data/*.txt
//!
//! # Exact matches only, 12-base index
//! genome-matcher find GAAATACGATCT --genomes data/*.txt --search-length 12 --exact-only
//!
//! # Related genomes, JSON output for scripting
//! genome-matcher related mystery.txt --genomes data/*.txt --threshold 5 --format json
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;

use crate::index::store::{GenomeIndex, DEFAULT_MIN_SEARCH_LENGTH};
use crate::parsing::genome::parse_genome_file;

pub mod find;
pub mod list;
pub mod related;

#[derive(Parser)]
#[command(name = "genome-matcher")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Find DNA fragments across genomes and rank related genomes")]
#[command(
    long_about = "genome-matcher indexes every fixed-length window of a set of genomes.\n\nIt can then:\n- Find the genomes containing a DNA fragment, tolerating one SNP\n- Estimate which genomes are most similar to a query genome"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find the genomes that contain a DNA fragment
    Find(find::FindArgs),

    /// Rank indexed genomes by similarity to query genomes
    Related(related::RelatedArgs),

    /// List the genomes loaded from genome files
    List(list::ListArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Genome files to index, shared by every subcommand
#[derive(clap::Args)]
pub struct IndexArgs {
    /// Genome files to index (plain or gzip-compressed)
    #[arg(short, long = "genomes", required = true, num_args = 1..)]
    pub genomes: Vec<PathBuf>,

    /// Length of the indexed windows; matches must be at least this long
    #[arg(short = 'L', long, default_value_t = DEFAULT_MIN_SEARCH_LENGTH)]
    pub search_length: usize,
}

impl IndexArgs {
    /// Load every genome file and index its genomes in command-line order
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be parsed or the search length is zero.
    pub fn build_index(&self) -> anyhow::Result<GenomeIndex> {
        let mut index = GenomeIndex::new(self.search_length)?;
        for path in &self.genomes {
            let genomes = parse_genome_file(path)
                .map_err(|e| anyhow::anyhow!("Failed to load {}: {e}", path.display()))?;
            for genome in genomes {
                index.add_genome(genome);
            }
        }

        info!(
            "Indexed {} genomes ({} windows of {} bases)",
            index.len(),
            index.occurrence_count(),
            index.min_search_length()
        );
        Ok(index)
    }
}
