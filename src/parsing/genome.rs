//! Loader for genome files.
//!
//! A genome file holds one or more records. Each record is a name line starting
//! with `>` followed by one or more lines of bases:
//!
//! ```text
//! >Halorubrum chaoviator strain DSM 19316
//! GCTCGACGCACTTACCGGCGCTCGAACGAGGTCTACCG
//! ACGCNNNNTACG
//! >Another genome
//! TTTAAACCG
//! ```
//!
//! Validation is strict: names must be non-empty, blank lines are rejected, and
//! sequence lines may only contain uppercase `A`, `C`, `G`, `T` and `N`. Any
//! violation fails the whole file.
//!
//! Supported compression: files ending in `.gz` or `.bgz` are decompressed with
//! gzip.

use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use thiserror::Error;
use tracing::info;

use crate::core::genome::Genome;
use crate::utils::validation::{check_genome_limit, find_invalid_base};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Line {line}: expected a '>' name line")]
    MissingHeader { line: usize },

    #[error("Line {line}: genome name is empty")]
    EmptyName { line: usize },

    #[error("Line {line}: blank lines are not allowed")]
    BlankLine { line: usize },

    #[error("Line {line}: invalid base '{base}'")]
    InvalidBase { line: usize, base: char },

    #[error("Genome '{name}' has no sequence")]
    EmptySequence { name: String },

    #[error("{0}")]
    TooManyGenomes(String),

    #[error("No genomes found")]
    Empty,
}

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
pub fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Load every genome in a file.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or the first format
/// violation found in its contents.
pub fn parse_genome_file(path: &Path) -> Result<Vec<Genome>, ParseError> {
    let file = std::fs::File::open(path)?;

    let genomes = if is_gzipped(path) {
        parse_genome_reader(BufReader::new(MultiGzDecoder::new(file)))?
    } else {
        parse_genome_reader(BufReader::new(file))?
    };

    info!("Loaded {} genomes from {}", genomes.len(), path.display());
    Ok(genomes)
}

/// Load genomes from in-memory text
///
/// # Errors
///
/// Returns the first format violation found in `text`.
pub fn parse_genome_text(text: &str) -> Result<Vec<Genome>, ParseError> {
    parse_genome_reader(text.as_bytes())
}

/// Load genomes from any buffered reader.
///
/// Lines may end in `\n` or `\r\n`; a final newline is optional. A lone
/// trailing `\r` on the last line is dropped as well.
///
/// # Errors
///
/// Returns `ParseError::Io` on read failure or the first format violation.
pub fn parse_genome_reader<R: BufRead>(reader: R) -> Result<Vec<Genome>, ParseError> {
    let mut genomes = Vec::new();
    let mut current: Option<(String, String)> = None;

    for (idx, line) in reader.lines().enumerate() {
        let raw = line?;
        let line = raw.strip_suffix('\r').unwrap_or(&raw);
        let line_number = idx + 1;

        if let Some(name) = line.strip_prefix('>') {
            if let Some((previous, sequence)) = current.take() {
                push_genome(&mut genomes, previous, sequence)?;
            }
            if name.is_empty() {
                return Err(ParseError::EmptyName { line: line_number });
            }
            current = Some((name.to_string(), String::new()));
            continue;
        }

        let Some((_, sequence)) = current.as_mut() else {
            return Err(ParseError::MissingHeader { line: line_number });
        };

        if line.is_empty() {
            return Err(ParseError::BlankLine { line: line_number });
        }
        if let Some((_, base)) = find_invalid_base(line) {
            return Err(ParseError::InvalidBase {
                line: line_number,
                base,
            });
        }
        sequence.push_str(line);
    }

    if let Some((name, sequence)) = current.take() {
        push_genome(&mut genomes, name, sequence)?;
    }

    if genomes.is_empty() {
        return Err(ParseError::Empty);
    }

    Ok(genomes)
}

fn push_genome(
    genomes: &mut Vec<Genome>,
    name: String,
    sequence: String,
) -> Result<(), ParseError> {
    if sequence.is_empty() {
        return Err(ParseError::EmptySequence { name });
    }

    // Check genome limit for DOS protection
    if let Some(message) = check_genome_limit(genomes.len()) {
        return Err(ParseError::TooManyGenomes(message));
    }

    genomes.push(Genome::new(name, sequence));
    Ok(())
}
