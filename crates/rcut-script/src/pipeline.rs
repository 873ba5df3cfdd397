//! Script-to-timeline pipeline.

use rcut_models::{KeywordEntry, Timeline};
use tracing::debug;

use crate::error::ScriptResult;
use crate::estimate::{ClampPolicy, SpeechRate};
use crate::scorer::{KeywordScorer, ScorerConfig};
use crate::segmenter::{Segmenter, SegmenterConfig};

/// End-to-end script analysis: segmentation, keyword extraction, and
/// duration estimation behind one entry point.
#[derive(Debug, Clone)]
pub struct ScriptAnalyzer {
    segmenter: Segmenter,
    scorer: KeywordScorer,
    rate: SpeechRate,
    clamp: ClampPolicy,
}

impl ScriptAnalyzer {
    /// Build an analyzer with the default rules.
    pub fn new() -> ScriptResult<Self> {
        Self::with_config(
            SegmenterConfig::default(),
            ScorerConfig::default(),
            SpeechRate::default(),
            ClampPolicy::default(),
        )
    }

    /// Build an analyzer with explicit configuration.
    pub fn with_config(
        segmenter: SegmenterConfig,
        scorer: ScorerConfig,
        rate: SpeechRate,
        clamp: ClampPolicy,
    ) -> ScriptResult<Self> {
        Ok(Self {
            segmenter: Segmenter::new(&segmenter)?,
            scorer: KeywordScorer::new(scorer),
            rate,
            clamp,
        })
    }

    /// Build a timeline from a narration script.
    ///
    /// One entry per sentence that yields a keyword, each with a fresh
    /// ID and a clamped spoken-duration estimate. An empty script, or
    /// one where no sentence survives extraction, produces an empty
    /// timeline rather than an error.
    pub fn build_timeline(&self, script: &str) -> Timeline {
        let sentences = self.segmenter.segment(script);
        debug!(sentence_count = sentences.len(), "Segmented script");

        let mut entries = Vec::new();
        for sentence in &sentences {
            let Some(keyword) = self.scorer.extract(&sentence.text) else {
                debug!(index = sentence.index, "No keyword for sentence, skipping");
                continue;
            };
            let duration = self.clamp.clamp(self.rate.spoken_secs(&sentence.text));
            entries.push(KeywordEntry::new(keyword, duration));
        }

        debug!(entry_count = entries.len(), "Built keyword timeline");
        Timeline::from_entries(entries)
    }

    /// Rough narration length of the whole script, from character count.
    pub fn estimated_narration_secs(&self, script: &str) -> u32 {
        self.rate.char_secs(script)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer() -> ScriptAnalyzer {
        ScriptAnalyzer::new().unwrap()
    }

    #[test]
    fn test_two_sentence_script() {
        let timeline = analyzer().build_timeline("I love mountains. I love the ocean.");

        let keywords: Vec<&str> = timeline
            .entries()
            .iter()
            .map(|e| e.keyword.as_str())
            .collect();
        assert_eq!(keywords, vec!["mountains", "love"]);
        assert!(timeline.entries().iter().all(|e| e.duration_secs == 5));
        assert_eq!(timeline.total_duration(), 10);
        assert!(!timeline.is_within_target(30, 2));
    }

    #[test]
    fn test_empty_script_gives_empty_timeline() {
        assert!(analyzer().build_timeline("").is_empty());
        assert!(analyzer().build_timeline("   ").is_empty());
    }

    #[test]
    fn test_unscoreable_sentences_are_skipped() {
        let timeline = analyzer().build_timeline("Go on. The mountains are calling.");

        assert_eq!(timeline.len(), 1);
        assert_eq!(timeline.entries()[0].keyword, "mountains");
    }

    #[test]
    fn test_all_sentences_unscoreable_gives_empty_timeline() {
        assert!(analyzer().build_timeline("Go on. Do it now!").is_empty());
    }

    #[test]
    fn test_long_sentence_duration_is_clamped() {
        let script = vec!["wonderful"; 40].join(" ");
        let timeline = analyzer().build_timeline(&script);

        assert_eq!(timeline.len(), 1);
        // 40 words at 150 wpm is 16s, clamped to 10
        assert_eq!(timeline.entries()[0].duration_secs, 10);
    }

    #[test]
    fn test_entry_ids_are_fresh_each_build() {
        let a = analyzer().build_timeline("I love mountains.");
        let b = analyzer().build_timeline("I love mountains.");
        assert_ne!(a.entries()[0].id, b.entries()[0].id);
    }

    #[test]
    fn test_narration_estimate_uses_char_count() {
        // 30 chars of script at 15 chars/sec
        assert_eq!(analyzer().estimated_narration_secs(&"a".repeat(30)), 2);
    }
}
