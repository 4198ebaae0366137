//! Parsers for genome input files.
//!
//! The only supported format is the `>`-record genome file described in
//! [`genome`]; plain and gzip-compressed files are both accepted.
//!
//! ## Example
//!
//! ```rust,no_run
//! use genome_matcher::parsing::genome::{parse_genome_file, parse_genome_text};
//! use std::path::Path;
//!
//! let genomes = parse_genome_file(Path::new("Ferroplasma_acidarmanus.txt")).unwrap();
//!
//! let genomes = parse_genome_text(">fish\nCTGAGAGTTTCAGTC\n").unwrap();
//! ```

pub mod genome;
