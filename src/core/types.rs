use serde::{Deserialize, Serialize};

/// A stretch of an indexed genome that matches a queried fragment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnaMatch {
    /// Name of the genome containing the match
    pub genome_name: String,

    /// 0-based start of the match within the genome
    pub position: usize,

    /// Number of matched bases, including a tolerated SNP if any
    pub length: usize,
}

/// An indexed genome ranked by how much of a query genome it covers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenomeMatch {
    pub genome_name: String,

    /// Percentage (0-100) of sampled query windows that matched this genome
    pub percent_match: f64,
}

/// Coarse classification of a related-genome percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimilarityLevel {
    Low,
    Medium,
    High,
}

impl SimilarityLevel {
    #[must_use]
    pub fn from_percent(percent: f64) -> Self {
        if percent >= 90.0 {
            Self::High
        } else if percent >= 50.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

impl std::fmt::Display for SimilarityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "LOW"),
            Self::Medium => write!(f, "MEDIUM"),
            Self::High => write!(f, "HIGH"),
        }
    }
}

impl GenomeMatch {
    #[must_use]
    pub fn level(&self) -> SimilarityLevel {
        SimilarityLevel::from_percent(self.percent_match)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_similarity_level_thresholds() {
        assert_eq!(SimilarityLevel::from_percent(100.0), SimilarityLevel::High);
        assert_eq!(SimilarityLevel::from_percent(90.0), SimilarityLevel::High);
        assert_eq!(SimilarityLevel::from_percent(89.9), SimilarityLevel::Medium);
        assert_eq!(SimilarityLevel::from_percent(50.0), SimilarityLevel::Medium);
        assert_eq!(SimilarityLevel::from_percent(0.0), SimilarityLevel::Low);
    }

    #[test]
    fn test_genome_match_serializes() {
        let m = GenomeMatch {
            genome_name: "salmon".to_string(),
            percent_match: 50.0,
        };
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json["genome_name"], "salmon");
        assert_eq!(json["percent_match"], 50.0);
        assert_eq!(m.level(), SimilarityLevel::Medium);
    }
}
