//! Centralized validation and helper functions.

/// Maximum number of genomes allowed in a single file (DOS protection)
pub const MAX_GENOMES: usize = 100_000;

/// Bases permitted in a genome sequence
pub const VALID_BASES: &[u8] = b"ACGTN";

/// Check whether a byte is one of the permitted bases.
///
/// Only uppercase `A`, `C`, `G`, `T` and `N` are accepted.
///
/// # Examples
///
/// ```
/// use genome_matcher::utils::validation::is_valid_base;
///
/// assert!(is_valid_base(b'A'));
/// assert!(is_valid_base(b'N'));
/// assert!(!is_valid_base(b'a'));
/// assert!(!is_valid_base(b'U'));
/// ```
#[must_use]
pub fn is_valid_base(base: u8) -> bool {
    VALID_BASES.contains(&base)
}

/// Position and value of the first invalid base in `sequence`, if any
#[must_use]
pub fn find_invalid_base(sequence: &str) -> Option<(usize, char)> {
    sequence
        .bytes()
        .position(|b| !is_valid_base(b))
        .and_then(|idx| sequence[idx..].chars().next().map(|c| (idx, c)))
}

/// Check if adding another genome would exceed the maximum allowed.
///
/// Call this with the current count BEFORE adding a new genome.
/// Returns an error message if adding would exceed the limit, None if safe to add.
#[must_use]
pub fn check_genome_limit(count: usize) -> Option<String> {
    if count >= MAX_GENOMES {
        Some(format!(
            "Too many genomes: adding another would exceed maximum of {MAX_GENOMES}"
        ))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_invalid_base() {
        assert_eq!(find_invalid_base("ACGTN"), None);
        assert_eq!(find_invalid_base(""), None);
        assert_eq!(find_invalid_base("ACxGT"), Some((2, 'x')));
        assert_eq!(find_invalid_base("acgt"), Some((0, 'a')));
        assert_eq!(find_invalid_base("ACGé"), Some((3, 'é')));
    }

    #[test]
    fn test_check_genome_limit() {
        assert!(check_genome_limit(0).is_none());
        assert!(check_genome_limit(MAX_GENOMES - 1).is_none());
        assert!(check_genome_limit(MAX_GENOMES).is_some());
    }
}
