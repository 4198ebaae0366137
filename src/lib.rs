//! # genome-matcher
//!
//! A library for finding DNA fragments across a collection of genomes and for
//! estimating which genomes are most closely related to a query genome.
//!
//! Every fixed-length window of every indexed genome is stored in a character
//! trie. Fragment searches probe the trie with the fragment's leading bases, then
//! extend each hit base by base. A single substituted base (SNP) is tolerated
//! anywhere but the first base unless exact matching is requested.
//!
//! ## Features
//!
//! - **SNP-tolerant search**: One mismatch per match, anchored on the first base
//! - **Best match per genome**: The longest qualifying match is reported for each genome
//! - **Related genomes**: Query genomes are sampled in fixed windows and indexed
//!   genomes ranked by the percentage of windows they match
//! - **Strict loading**: Genome files are validated base by base, gzip supported
//!
//! ## Example
//!
//! ```rust
//! use genome_matcher::{Genome, GenomeIndex, MatchingEngine};
//!
//! let mut index = GenomeIndex::new(2).unwrap();
//! index.add_genome(Genome::new("1", "ATGATCG"));
//! index.add_genome(Genome::new("2", "TCGACTCGG"));
//! index.add_genome(Genome::new("3", "TCTCGTTA"));
//!
//! let engine = MatchingEngine::new(&index);
//! let query = Genome::new("query", "ACTTATTCG");
//! let related = engine.find_related_genomes(&query, 3, true, 0.1).unwrap();
//!
//! for m in &related {
//!     println!("{}: {:.1}%", m.genome_name, m.percent_match);
//! }
//! assert_eq!(related[0].genome_name, "2");
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Genomes and match result types
//! - [`index`]: The SNP-tolerant trie and the genome window index
//! - [`matching`]: Fragment search and related-genome ranking
//! - [`parsing`]: Genome file loader
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod index;
pub mod matching;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::core::genome::Genome;
pub use crate::core::types::*;
pub use index::store::GenomeIndex;
pub use index::trie::Trie;
pub use matching::engine::{MatchingConfig, MatchingEngine};
