//! Abbreviation-aware sentence segmentation.
//!
//! Splits narration scripts on runs of `.`, `!`, `?` while keeping
//! known abbreviations ("Dr.", "e.g.") intact. Abbreviation periods
//! are substituted with a sentinel character before the split and
//! restored afterwards, so they never trigger a boundary.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ScriptResult;

/// Characters that end a sentence.
const TERMINATORS: &[char] = &['.', '!', '?'];

/// Stand-in for abbreviation periods while splitting. Private-use
/// codepoint so it cannot collide with script text.
const MASKED_PERIOD: char = '\u{E000}';

/// A sentence produced by segmentation.
///
/// Never mutated after segmentation; re-segmenting replaces the whole
/// set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    /// Trimmed text with terminal punctuation retained.
    pub text: String,
    /// Ordinal position in the segmented sequence, starting at 0.
    pub index: usize,
}

/// Configuration for sentence segmentation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmenterConfig {
    /// Abbreviations whose periods must not split sentences.
    ///
    /// Stored lowercase with their trailing period; matching is
    /// case-insensitive.
    pub abbreviations: Vec<String>,
}

impl SegmenterConfig {
    /// Abbreviations masked by default.
    pub const DEFAULT_ABBREVIATIONS: &'static [&'static str] = &[
        "mr.", "mrs.", "ms.", "dr.", "prof.", "sr.", "jr.", "st.", "vs.", "etc.", "e.g.", "i.e.",
    ];

    /// Create a config from an abbreviation list.
    ///
    /// Entries are normalized to lowercase with a trailing period;
    /// blank entries are dropped.
    pub fn new<I, S>(abbreviations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let abbreviations = abbreviations
            .into_iter()
            .filter_map(|a| {
                let a = a.as_ref().trim().to_lowercase();
                if a.is_empty() || a == "." {
                    return None;
                }
                if a.ends_with('.') {
                    Some(a)
                } else {
                    Some(format!("{a}."))
                }
            })
            .collect();

        Self { abbreviations }
    }
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ABBREVIATIONS.iter().copied())
    }
}

/// Splits scripts into ordered sentences.
///
/// Stateless between calls: re-invoking with a new script recomputes
/// from scratch.
#[derive(Debug, Clone)]
pub struct Segmenter {
    mask_re: Option<Regex>,
}

impl Segmenter {
    /// Build a segmenter, compiling the abbreviation mask pattern once.
    pub fn new(config: &SegmenterConfig) -> ScriptResult<Self> {
        let mask_re = if config.abbreviations.is_empty() {
            None
        } else {
            let alternation = config
                .abbreviations
                .iter()
                .map(|a| regex::escape(a))
                .collect::<Vec<_>>()
                .join("|");
            Some(Regex::new(&format!(r"(?i)\b(?:{alternation})"))?)
        };

        Ok(Self { mask_re })
    }

    /// Split a script into trimmed sentences.
    ///
    /// Terminator runs stay with the sentence they end. Blank input
    /// yields an empty sequence; trailing text without a terminator
    /// still forms a final sentence.
    pub fn segment(&self, script: &str) -> Vec<Sentence> {
        let masked = match &self.mask_re {
            Some(re) => re.replace_all(script, |caps: &regex::Captures<'_>| {
                caps[0].replace('.', &MASKED_PERIOD.to_string())
            }),
            None => std::borrow::Cow::Borrowed(script),
        };

        let mut sentences = Vec::new();
        let mut current = String::new();
        let mut chars = masked.chars().peekable();

        while let Some(c) = chars.next() {
            current.push(c);
            if TERMINATORS.contains(&c) {
                // Absorb the rest of the terminator run ("...", "?!")
                while let Some(&next) = chars.peek() {
                    if !TERMINATORS.contains(&next) {
                        break;
                    }
                    current.push(next);
                    chars.next();
                }
                Self::flush(&mut current, &mut sentences);
            }
        }
        Self::flush(&mut current, &mut sentences);

        sentences
    }

    /// Restore masked periods, trim, and push if non-empty.
    fn flush(current: &mut String, sentences: &mut Vec<Sentence>) {
        let restored = current.replace(MASKED_PERIOD, ".");
        let text = restored.trim();
        if !text.is_empty() {
            sentences.push(Sentence {
                text: text.to_string(),
                index: sentences.len(),
            });
        }
        current.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_segmenter() -> Segmenter {
        Segmenter::new(&SegmenterConfig::default()).unwrap()
    }

    fn texts(sentences: &[Sentence]) -> Vec<&str> {
        sentences.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn test_abbreviation_does_not_split() {
        let sentences = default_segmenter().segment("Dr. Smith arrived. He left.");
        assert_eq!(texts(&sentences), vec!["Dr. Smith arrived.", "He left."]);
    }

    #[test]
    fn test_multiple_abbreviations_in_one_sentence() {
        let sentences =
            default_segmenter().segment("Mr. and Mrs. Smith met Dr. Jones. They talked.");
        assert_eq!(
            texts(&sentences),
            vec!["Mr. and Mrs. Smith met Dr. Jones.", "They talked."]
        );
    }

    #[test]
    fn test_masking_is_case_insensitive() {
        let sentences = default_segmenter().segment("DR. House operates. mr. Smith watches.");
        assert_eq!(
            texts(&sentences),
            vec!["DR. House operates.", "mr. Smith watches."]
        );
    }

    #[test]
    fn test_inner_period_abbreviation() {
        let sentences = default_segmenter().segment("Use tools, e.g. hammers. Then build.");
        assert_eq!(
            texts(&sentences),
            vec!["Use tools, e.g. hammers.", "Then build."]
        );
    }

    #[test]
    fn test_blank_input_yields_nothing() {
        assert!(default_segmenter().segment("").is_empty());
        assert!(default_segmenter().segment("   \n\t ").is_empty());
    }

    #[test]
    fn test_terminator_runs_stay_with_sentence() {
        let sentences = default_segmenter().segment("Wait... what?! Go now!");
        assert_eq!(texts(&sentences), vec!["Wait...", "what?!", "Go now!"]);
    }

    #[test]
    fn test_trailing_text_without_terminator() {
        let sentences = default_segmenter().segment("First one. and then some");
        assert_eq!(texts(&sentences), vec!["First one.", "and then some"]);
    }

    #[test]
    fn test_indices_are_ordinal() {
        let sentences = default_segmenter().segment("One. Two! Three?");
        let indices: Vec<usize> = sentences.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_empty_abbreviation_list_splits_everything() {
        let segmenter = Segmenter::new(&SegmenterConfig::new(Vec::<String>::new())).unwrap();
        let sentences = segmenter.segment("Dr. Smith left.");
        assert_eq!(texts(&sentences), vec!["Dr.", "Smith left."]);
    }

    #[test]
    fn test_config_normalizes_entries() {
        let config = SegmenterConfig::new(["Approx", "  CA. ", ""]);
        assert_eq!(config.abbreviations, vec!["approx.", "ca."]);
    }
}
