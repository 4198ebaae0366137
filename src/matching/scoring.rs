use std::cmp::Ordering;
use std::collections::HashMap;

use crate::core::genome::Genome;
use crate::core::types::GenomeMatch;

/// Safely convert usize to f64 for percentage calculations
#[inline]
fn count_to_f64(count: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}

/// Per-genome count of query windows that produced a qualifying match.
///
/// Genomes are keyed by their index position, so genomes sharing a name are
/// tallied separately.
#[derive(Debug, Clone)]
pub struct WindowTally {
    window_count: usize,
    hits: HashMap<usize, usize>,
}

impl WindowTally {
    #[must_use]
    pub fn new(window_count: usize) -> Self {
        Self {
            window_count,
            hits: HashMap::new(),
        }
    }

    /// Count one window as matching the genome at `genome_index`
    pub fn record_hit(&mut self, genome_index: usize) {
        *self.hits.entry(genome_index).or_default() += 1;
    }

    #[must_use]
    pub fn hits(&self, genome_index: usize) -> usize {
        self.hits.get(&genome_index).copied().unwrap_or(0)
    }

    /// Number of genomes hit by at least one window
    #[must_use]
    pub fn genome_count(&self) -> usize {
        self.hits.len()
    }

    #[must_use]
    pub fn window_count(&self) -> usize {
        self.window_count
    }

    /// Convert hit counts to percentages of the window count, in no particular order.
    ///
    /// Names are resolved against `genomes`; indices outside it are skipped.
    #[must_use]
    pub fn into_percentages(self, genomes: &[Genome]) -> Vec<GenomeMatch> {
        if self.window_count == 0 {
            return Vec::new();
        }

        let total = count_to_f64(self.window_count);
        self.hits
            .into_iter()
            .filter_map(|(genome_index, hits)| {
                genomes.get(genome_index).map(|genome| GenomeMatch {
                    genome_name: genome.name().to_string(),
                    percent_match: count_to_f64(hits) / total * 100.0,
                })
            })
            .collect()
    }
}

/// Descending by percentage, then ascending by genome name
#[must_use]
pub fn compare_genome_matches(a: &GenomeMatch, b: &GenomeMatch) -> Ordering {
    b.percent_match
        .partial_cmp(&a.percent_match)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.genome_name.cmp(&b.genome_name))
}

/// Keep matches at or above `threshold` percent and sort them for presentation
#[must_use]
pub fn rank_genome_matches(matches: Vec<GenomeMatch>, threshold: f64) -> Vec<GenomeMatch> {
    let mut ranked: Vec<GenomeMatch> = matches
        .into_iter()
        .filter(|m| m.percent_match >= threshold)
        .collect();
    ranked.sort_by(compare_genome_matches);
    ranked
}
