//! Fragment index over a collection of genomes.
//!
//! Every window of `min_search_length` bases from every added genome is stored in
//! a [`Trie`](trie::Trie) keyed by the window sequence, with a
//! [`FragmentOccurrence`](store::FragmentOccurrence) recording where it came from.
//!
//! ## Example
//!
//! ```rust
//! use genome_matcher::core::genome::Genome;
//! use genome_matcher::index::store::GenomeIndex;
//!
//! let mut index = GenomeIndex::new(3).unwrap();
//! index.add_genome(Genome::new("salmon", "GGCTCATGCTCG"));
//!
//! let hits = index.candidates("CTC", true);
//! assert_eq!(hits.len(), 2);
//! ```

pub mod store;
pub mod trie;
