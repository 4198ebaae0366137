//! Core data types for fragment matching.
//!
//! - [`Genome`](genome::Genome): a named DNA sequence with bounds-checked extraction
//! - [`DnaMatch`](types::DnaMatch): where a queried fragment occurs in an indexed genome
//! - [`GenomeMatch`](types::GenomeMatch): how much of a query genome an indexed genome covers
//!
//! Sequences are plain ASCII strings over `{A, C, G, T, N}`.

pub mod genome;
pub mod types;
