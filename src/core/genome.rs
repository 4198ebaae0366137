use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenomeError {
    #[error("Extraction of {length} bases at position {position} exceeds genome length {genome_length}")]
    OutOfRange {
        position: usize,
        length: usize,
        genome_length: usize,
    },
}

/// A named DNA sequence over the alphabet `{A, C, G, T, N}`.
///
/// Genomes are immutable once constructed. Validation of the name and bases is
/// the job of the loader in [`crate::parsing::genome`]; the constructor trusts
/// its input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genome {
    name: String,
    sequence: String,
}

impl Genome {
    pub fn new(name: impl Into<String>, sequence: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sequence: sequence.into(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    /// Number of bases in the genome
    #[must_use]
    pub fn length(&self) -> usize {
        self.sequence.len()
    }

    /// Extract `length` bases starting at `position`.
    ///
    /// # Errors
    ///
    /// Returns `GenomeError::OutOfRange` if `position + length` runs past the end
    /// of the sequence. Nothing is extracted on failure.
    pub fn extract(&self, position: usize, length: usize) -> Result<&str, GenomeError> {
        let out_of_range = || GenomeError::OutOfRange {
            position,
            length,
            genome_length: self.length(),
        };

        let end = position.checked_add(length).ok_or_else(out_of_range)?;
        self.sequence.get(position..end).ok_or_else(out_of_range)
    }

    /// Number of `window`-length slices that fit at distinct offsets
    #[must_use]
    pub fn window_count(&self, window: usize) -> usize {
        if window == 0 || window > self.length() {
            0
        } else {
            self.length() - window + 1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genome_accessors() {
        let genome = Genome::new("fish", "CTGAGAGTTTCAGTC");
        assert_eq!(genome.name(), "fish");
        assert_eq!(genome.length(), 15);
        assert_eq!(genome.sequence(), "CTGAGAGTTTCAGTC");
    }

    #[test]
    fn test_extract_within_bounds() {
        let genome = Genome::new("salmon", "GGCTCATGCTCG");
        assert_eq!(genome.extract(2, 3).unwrap(), "CTC");
        assert_eq!(genome.extract(0, 12).unwrap(), "GGCTCATGCTCG");
        assert_eq!(genome.extract(12, 0).unwrap(), "");
    }

    #[test]
    fn test_extract_out_of_range() {
        let genome = Genome::new("salmon", "GGCTCATGCTCG");
        assert_eq!(
            genome.extract(10, 3),
            Err(GenomeError::OutOfRange {
                position: 10,
                length: 3,
                genome_length: 12,
            })
        );
        assert!(genome.extract(13, 0).is_err());
        assert!(genome.extract(usize::MAX, 2).is_err());
    }

    #[test]
    fn test_window_count() {
        let genome = Genome::new("g", "ACGTACGT");
        assert_eq!(genome.window_count(3), 6);
        assert_eq!(genome.window_count(8), 1);
        assert_eq!(genome.window_count(9), 0);
        assert_eq!(genome.window_count(0), 0);
    }
}
