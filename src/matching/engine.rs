use std::collections::HashMap;

use thiserror::Error;
use tracing::debug;

use crate::core::genome::{Genome, GenomeError};
use crate::core::types::{DnaMatch, GenomeMatch};
use crate::index::store::{FragmentOccurrence, GenomeIndex};
use crate::matching::scoring::{rank_genome_matches, WindowTally};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    #[error("Requested match length {requested} is below the index search length {minimum}")]
    MinimumLengthTooShort { requested: usize, minimum: usize },

    #[error("Fragment of {fragment_length} bases is shorter than the minimum match length {minimum_length}")]
    FragmentTooShort {
        fragment_length: usize,
        minimum_length: usize,
    },

    #[error("Query window could not be extracted: {0}")]
    Window(#[from] GenomeError),
}

/// Default window length used when sampling a query genome
pub const DEFAULT_FRAGMENT_MATCH_LENGTH: usize = 16;

/// Default percentage a genome must reach to be reported as related
pub const DEFAULT_MATCH_PERCENT_THRESHOLD: f64 = 20.0;

/// Configuration for related-genome searches
#[derive(Debug, Clone)]
pub struct MatchingConfig {
    /// Forbid the single tolerated SNP
    pub exact_match_only: bool,
    /// Minimum percentage (0-100) for a genome to be reported
    pub match_percent_threshold: f64,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            exact_match_only: false,
            match_percent_threshold: DEFAULT_MATCH_PERCENT_THRESHOLD,
        }
    }
}

/// Query front end over a [`GenomeIndex`]
pub struct MatchingEngine<'a> {
    index: &'a GenomeIndex,
    config: MatchingConfig,
}

impl<'a> MatchingEngine<'a> {
    /// Create a new matching engine with default configuration
    pub fn new(index: &'a GenomeIndex) -> Self {
        Self {
            index,
            config: MatchingConfig::default(),
        }
    }

    pub fn with_config(index: &'a GenomeIndex, config: MatchingConfig) -> Self {
        Self { index, config }
    }

    #[must_use]
    pub fn config(&self) -> &MatchingConfig {
        &self.config
    }

    /// Find the genomes containing `fragment`, tolerating at most one SNP
    /// across the whole match unless `exact_match_only` is set.
    ///
    /// At most one match is reported per genome: the longest, keeping the first
    /// one found on ties. Matches are at least `minimum_length` bases long and
    /// come back in discovery order.
    ///
    /// # Errors
    ///
    /// Returns `MatchError::MinimumLengthTooShort` if `minimum_length` is below
    /// the index search length, or `MatchError::FragmentTooShort` if the fragment
    /// is shorter than `minimum_length`.
    pub fn find_genomes_with_dna(
        &self,
        fragment: &str,
        minimum_length: usize,
        exact_match_only: bool,
    ) -> Result<Vec<DnaMatch>, MatchError> {
        let matches = self.best_matches(fragment, minimum_length, exact_match_only)?;
        Ok(matches.into_iter().map(|(_, m)| m).collect())
    }

    /// Best match per genome, paired with the matched genome's index
    fn best_matches(
        &self,
        fragment: &str,
        minimum_length: usize,
        exact_match_only: bool,
    ) -> Result<Vec<(usize, DnaMatch)>, MatchError> {
        let search_length = self.index.min_search_length();
        if minimum_length < search_length {
            return Err(MatchError::MinimumLengthTooShort {
                requested: minimum_length,
                minimum: search_length,
            });
        }
        if fragment.len() < minimum_length {
            return Err(MatchError::FragmentTooShort {
                fragment_length: fragment.len(),
                minimum_length,
            });
        }

        // A non-ASCII prefix cannot occur in any indexed genome
        let Some(prefix) = fragment.get(..search_length) else {
            return Ok(Vec::new());
        };
        let candidates = self.index.candidates(prefix, exact_match_only);

        // genome index -> slot in `matches`
        let mut best: HashMap<usize, usize> = HashMap::new();
        let mut matches: Vec<(usize, DnaMatch)> = Vec::new();

        for occurrence in &candidates {
            let Some(genome) = self.index.genome(occurrence.genome_index) else {
                continue;
            };

            let length =
                extend_match(genome, occurrence, fragment, search_length, exact_match_only);
            if length < minimum_length {
                continue;
            }

            match best.get(&occurrence.genome_index).copied() {
                None => {
                    best.insert(occurrence.genome_index, matches.len());
                    matches.push((
                        occurrence.genome_index,
                        DnaMatch {
                            genome_name: genome.name().to_string(),
                            position: occurrence.offset,
                            length,
                        },
                    ));
                }
                Some(slot) if matches[slot].1.length < length => {
                    matches[slot].1.position = occurrence.offset;
                    matches[slot].1.length = length;
                }
                Some(_) => {}
            }
        }

        debug!(
            "Fragment of {} bases: {} candidates, {} genomes matched",
            fragment.len(),
            candidates.len(),
            matches.len()
        );

        Ok(matches)
    }

    /// Rank indexed genomes by the percentage of `query` windows they match.
    ///
    /// The query is cut into consecutive, non-overlapping windows of
    /// `fragment_match_length` bases; a trailing partial window is ignored.
    /// Each window counts at most once per genome. Genomes at or above
    /// `match_percent_threshold` are returned sorted by descending percentage,
    /// then by name.
    ///
    /// # Errors
    ///
    /// Returns `MatchError::MinimumLengthTooShort` if `fragment_match_length` is
    /// below the index search length.
    pub fn find_related_genomes(
        &self,
        query: &Genome,
        fragment_match_length: usize,
        exact_match_only: bool,
        match_percent_threshold: f64,
    ) -> Result<Vec<GenomeMatch>, MatchError> {
        let search_length = self.index.min_search_length();
        if fragment_match_length < search_length {
            return Err(MatchError::MinimumLengthTooShort {
                requested: fragment_match_length,
                minimum: search_length,
            });
        }

        let window_count = query.length() / fragment_match_length;
        let mut tally = WindowTally::new(window_count);

        for i in 0..window_count {
            let window = query.extract(i * fragment_match_length, fragment_match_length)?;
            let matches = self.best_matches(window, fragment_match_length, exact_match_only)?;
            for (genome_index, _) in &matches {
                tally.record_hit(*genome_index);
            }
        }

        debug!(
            "Query '{}': {window_count} windows of {fragment_match_length} bases, {} genomes hit",
            query.name(),
            tally.genome_count()
        );

        Ok(rank_genome_matches(
            tally.into_percentages(self.index.genomes()),
            match_percent_threshold,
        ))
    }

    /// [`find_related_genomes`](Self::find_related_genomes) using the engine's
    /// configured SNP policy and threshold
    ///
    /// # Errors
    ///
    /// See [`find_related_genomes`](Self::find_related_genomes).
    pub fn related_genomes(
        &self,
        query: &Genome,
        fragment_match_length: usize,
    ) -> Result<Vec<GenomeMatch>, MatchError> {
        self.find_related_genomes(
            query,
            fragment_match_length,
            self.config.exact_match_only,
            self.config.match_percent_threshold,
        )
    }
}

/// Length of the match between `fragment` and the genome starting at
/// `occurrence`, given that the first `search_length` bases came from the trie.
///
/// A single mismatch is allowed over the whole span unless `exact_match_only`;
/// if the indexed prefix already differs from the fragment, that mismatch is
/// spent before extension begins.
fn extend_match(
    genome: &Genome,
    occurrence: &FragmentOccurrence,
    fragment: &str,
    search_length: usize,
    exact_match_only: bool,
) -> usize {
    let sequence = genome.sequence().as_bytes();
    let fragment = fragment.as_bytes();
    let start = occurrence.offset;

    let mut mismatch_allowed = !exact_match_only;
    if sequence[start..start + search_length] != fragment[..search_length] {
        mismatch_allowed = false;
    }

    let end = (start + fragment.len()).min(sequence.len());
    let mut length = search_length;
    for pos in start + search_length..end {
        if sequence[pos] == fragment[pos - start] {
            length += 1;
        } else if mismatch_allowed {
            mismatch_allowed = false;
            length += 1;
        } else {
            break;
        }
    }

    length
}
