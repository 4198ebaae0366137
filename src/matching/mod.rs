//! Fragment search and related-genome estimation.
//!
//! - [`MatchingEngine::find_genomes_with_dna`](engine::MatchingEngine::find_genomes_with_dna):
//!   probes the index with the first `min_search_length` bases of a fragment,
//!   extends each hit base by base and keeps the longest match per genome
//! - [`MatchingEngine::find_related_genomes`](engine::MatchingEngine::find_related_genomes):
//!   samples a query genome in fixed-length windows and ranks indexed genomes by
//!   the percentage of windows they match
//!
//! ## SNP Tolerance
//!
//! Unless exact matching is requested, a match may contain a single substituted
//! base anywhere except the first base of the fragment. The allowance covers the
//! whole match, so a mismatch inside the indexed prefix leaves none for the
//! extension.
//!
//! ## Example
//!
//! ```rust
//! use genome_matcher::core::genome::Genome;
//! use genome_matcher::index::store::GenomeIndex;
//! use genome_matcher::matching::engine::MatchingEngine;
//!
//! let mut index = GenomeIndex::new(3).unwrap();
//! index.add_genome(Genome::new("fish", "CTGAGAGTTTCAGTC"));
//! index.add_genome(Genome::new("salmon", "GGCTCATGCTCG"));
//!
//! let engine = MatchingEngine::new(&index);
//! let matches = engine.find_genomes_with_dna("CTC", 3, true).unwrap();
//! assert_eq!(matches[0].genome_name, "salmon");
//! ```

pub mod engine;
pub mod scoring;

pub use engine::MatchError;
