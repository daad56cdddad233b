// ============================================================================
// stats.rs - Wordlist Summary Statistics
// ============================================================================

use serde::Serialize;

/// Summary statistics over a finished candidate list.
///
/// Computed from the final ordered sequence, after truncation, so `total`
/// and `unique` always agree with what actually gets written out.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListStats {
    pub total: usize,
    pub unique: usize,
    pub min_length: usize,
    pub max_length: usize,
    pub average_length: f64,
}

impl ListStats {
    pub fn from_words(words: &[String]) -> Self {
        if words.is_empty() {
            return Self::default();
        }

        let total = words.len();
        let mut min_length = usize::MAX;
        let mut max_length = 0;
        let mut length_sum = 0usize;

        for word in words {
            let len = word.len();
            min_length = min_length.min(len);
            max_length = max_length.max(len);
            length_sum += len;
        }

        Self {
            total,
            // The list is set-derived; every element is distinct.
            unique: total,
            min_length,
            max_length,
            average_length: length_sum as f64 / total as f64,
        }
    }
}
