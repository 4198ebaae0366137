use thiserror::Error;
use tracing::{debug, warn};

use crate::core::genome::Genome;
use crate::index::trie::Trie;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    #[error("Minimum search length must be at least 1, got {0}")]
    InvalidSearchLength(usize),
}

/// Default length of the indexed prefix windows
pub const DEFAULT_MIN_SEARCH_LENGTH: usize = 10;

/// Where an indexed window occurs: genome index plus 0-based offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FragmentOccurrence {
    pub genome_index: usize,
    pub offset: usize,
}

/// The genome collection together with a trie of every fixed-length window.
///
/// Occurrences refer to genomes by their insertion index, so sequence data lives
/// only in `genomes` and is never copied into the trie payloads.
#[derive(Debug)]
pub struct GenomeIndex {
    min_search_length: usize,
    genomes: Vec<Genome>,
    trie: Trie<FragmentOccurrence>,
}

impl GenomeIndex {
    /// Create an empty index over windows of `min_search_length` bases.
    ///
    /// # Errors
    ///
    /// Returns `IndexError::InvalidSearchLength` if `min_search_length` is zero.
    pub fn new(min_search_length: usize) -> Result<Self, IndexError> {
        if min_search_length == 0 {
            return Err(IndexError::InvalidSearchLength(min_search_length));
        }

        Ok(Self {
            min_search_length,
            genomes: Vec::new(),
            trie: Trie::new(),
        })
    }

    /// Build an index over all of `genomes`, in order
    ///
    /// # Errors
    ///
    /// Returns `IndexError::InvalidSearchLength` if `min_search_length` is zero.
    pub fn from_genomes(
        min_search_length: usize,
        genomes: impl IntoIterator<Item = Genome>,
    ) -> Result<Self, IndexError> {
        let mut index = Self::new(min_search_length)?;
        for genome in genomes {
            index.add_genome(genome);
        }
        Ok(index)
    }

    /// Append a genome and index each of its `min_search_length` windows
    pub fn add_genome(&mut self, genome: Genome) {
        let genome_index = self.genomes.len();
        let windows = genome.window_count(self.min_search_length);

        if windows == 0 {
            warn!(
                "Genome '{}' ({} bases) is shorter than the search length {}; nothing indexed",
                genome.name(),
                genome.length(),
                self.min_search_length
            );
        }

        for offset in 0..windows {
            if let Ok(window) = genome.extract(offset, self.min_search_length) {
                self.trie.insert(
                    window,
                    FragmentOccurrence {
                        genome_index,
                        offset,
                    },
                );
            }
        }

        debug!(
            "Indexed genome '{}' as #{genome_index}: {windows} windows",
            genome.name()
        );
        self.genomes.push(genome);
    }

    /// Occurrences whose window matches `prefix` exactly or, unless
    /// `exact_match_only`, with one mismatch after the first base
    #[must_use]
    pub fn candidates(&self, prefix: &str, exact_match_only: bool) -> Vec<FragmentOccurrence> {
        self.trie.find(prefix, exact_match_only)
    }

    #[must_use]
    pub fn min_search_length(&self) -> usize {
        self.min_search_length
    }

    #[must_use]
    pub fn genomes(&self) -> &[Genome] {
        &self.genomes
    }

    #[must_use]
    pub fn genome(&self, genome_index: usize) -> Option<&Genome> {
        self.genomes.get(genome_index)
    }

    /// Number of indexed genomes
    #[must_use]
    pub fn len(&self) -> usize {
        self.genomes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.genomes.is_empty()
    }

    /// Number of windows stored in the trie across all genomes
    #[must_use]
    pub fn occurrence_count(&self) -> usize {
        self.trie.len()
    }

    /// Remove all genomes and windows, keeping the search length
    pub fn clear(&mut self) {
        self.trie.reset();
        self.genomes.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn occ(genome_index: usize, offset: usize) -> FragmentOccurrence {
        FragmentOccurrence {
            genome_index,
            offset,
        }
    }

    #[test]
    fn test_zero_search_length_rejected() {
        assert_eq!(
            GenomeIndex::new(0).unwrap_err(),
            IndexError::InvalidSearchLength(0)
        );
    }

    #[test]
    fn test_add_genome_indexes_every_window() {
        let mut index = GenomeIndex::new(3).unwrap();
        index.add_genome(Genome::new("a", "ACTG"));
        index.add_genome(Genome::new("b", "TCGACT"));
        index.add_genome(Genome::new("c", "TCTCG"));

        assert_eq!(index.len(), 3);
        assert_eq!(index.min_search_length(), 3);
        // 2 + 4 + 3 windows
        assert_eq!(index.occurrence_count(), 9);
        assert_eq!(index.genome(1).map(Genome::name), Some("b"));
        assert!(index.genome(3).is_none());

        assert_eq!(index.candidates("ACT", true), vec![occ(0, 0), occ(1, 3)]);
        assert_eq!(index.candidates("TCG", true), vec![occ(1, 0), occ(2, 2)]);
    }

    #[test]
    fn test_candidates_with_snip() {
        let index = GenomeIndex::from_genomes(3, vec![Genome::new("a", "ACTG")]).unwrap();
        assert_eq!(index.candidates("AGT", false), vec![occ(0, 0)]);
        assert!(index.candidates("AGT", true).is_empty());
        // Mismatch on the first base is never tolerated
        assert!(index.candidates("GCT", false).is_empty());
    }

    #[test]
    fn test_short_genome_is_stored_but_not_indexed() {
        let mut index = GenomeIndex::new(5).unwrap();
        index.add_genome(Genome::new("tiny", "ACG"));
        assert_eq!(index.len(), 1);
        assert_eq!(index.occurrence_count(), 0);
    }

    #[test]
    fn test_clear() {
        let mut index = GenomeIndex::from_genomes(2, vec![Genome::new("a", "ACGT")]).unwrap();
        index.clear();
        assert!(index.is_empty());
        assert_eq!(index.occurrence_count(), 0);
        assert!(index.candidates("AC", false).is_empty());
        assert_eq!(index.min_search_length(), 2);
    }
}
