//! Keyword extraction and scoring.
//!
//! Picks the single token that best represents a sentence's visual
//! topic. This is a lexical heuristic, not semantic extraction: longer
//! content-bearing words score higher, and sentence-boundary words get
//! a bonus because they correlate with topical nouns in short
//! narration scripts.

use serde::{Deserialize, Serialize};

/// Common function words never selected as keywords.
const STOP_WORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "from", "into", "onto", "over", "under", "about", "after", "before", "between", "through",
    "during", "above", "below", "is", "are", "was", "were", "be", "been", "being", "am", "have",
    "has", "had", "having", "do", "does", "did", "doing", "will", "would", "shall", "should",
    "can", "could", "may", "might", "must", "this", "that", "these", "those", "there", "here",
    "when", "where", "which", "while", "what", "who", "whom", "whose", "why", "how", "all",
    "each", "every", "both", "some", "any", "more", "most", "other", "such", "only", "very",
    "just", "also", "then", "than", "once", "again", "they", "them", "their", "theirs", "your",
    "yours", "ours", "its", "itself", "him", "his", "her", "hers",
];

/// Scoring weights for keyword selection.
///
/// The defaults are the extraction contract: changing any of them
/// changes which keyword wins for the same sentence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScorerConfig {
    /// Tokens this long or shorter are dropped before scoring.
    pub short_token_cutoff: usize,
    /// Score contribution per character of token length.
    pub length_weight: f64,
    /// Bonus for the first surviving token.
    pub first_token_bonus: f64,
    /// Bonus for the last surviving token.
    pub last_token_bonus: f64,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            short_token_cutoff: 3,
            length_weight: 0.5,
            first_token_bonus: 2.0,
            last_token_bonus: 1.0,
        }
    }
}

/// Extracts the highest-scoring keyword from a sentence.
#[derive(Debug, Clone, Default)]
pub struct KeywordScorer {
    config: ScorerConfig,
}

impl KeywordScorer {
    pub fn new(config: ScorerConfig) -> Self {
        Self { config }
    }

    /// Extract the best keyword from a sentence, lowercased.
    ///
    /// Tokens are split on whitespace with non-alphanumeric edges
    /// trimmed, then filtered by length and the stop-word list. Each
    /// survivor at index `i` of `n` scores
    /// `len * length_weight + first_bonus (i == 0) + last_bonus (i == n-1)`;
    /// the maximum wins, ties going to the earliest token.
    ///
    /// Returns `None` when no token survives filtering; callers skip
    /// that sentence rather than emit an empty keyword.
    pub fn extract(&self, sentence: &str) -> Option<String> {
        let lowered = sentence.to_lowercase();
        let candidates: Vec<&str> = lowered
            .split_whitespace()
            .map(|t| t.trim_matches(|c: char| !c.is_alphanumeric()))
            .filter(|t| t.chars().count() > self.config.short_token_cutoff)
            .filter(|t| !STOP_WORDS.contains(t))
            .collect();

        let n = candidates.len();
        let mut best: Option<(f64, &str)> = None;
        for (i, token) in candidates.iter().enumerate() {
            let mut score = token.chars().count() as f64 * self.config.length_weight;
            if i == 0 {
                score += self.config.first_token_bonus;
            }
            if i == n - 1 {
                score += self.config.last_token_bonus;
            }
            // Strictly-greater comparison keeps the earliest token on ties
            if best.map_or(true, |(top, _)| score > top) {
                best = Some((score, token));
            }
        }

        best.map(|(_, token)| token.to_string())
    }
}
