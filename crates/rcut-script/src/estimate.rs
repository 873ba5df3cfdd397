//! Spoken-duration estimation.
//!
//! Two independent estimators, both pure functions of text: a
//! word-rate estimate for per-sentence durations, and a cheap
//! character-count estimate used for whole-script narration length.

use serde::{Deserialize, Serialize};

/// Speech-rate constants for duration estimates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechRate {
    /// Average narration pace in words per minute.
    pub words_per_minute: u32,
    /// Characters of script per second of speech.
    pub chars_per_second_divisor: u32,
}

impl Default for SpeechRate {
    fn default() -> Self {
        Self {
            words_per_minute: 150,
            chars_per_second_divisor: 15,
        }
    }
}

impl SpeechRate {
    /// Estimate seconds of speech from the word count, rounded up.
    pub fn spoken_secs(&self, text: &str) -> u32 {
        let words = text.split_whitespace().count() as f64;
        (words / self.words_per_minute as f64 * 60.0).ceil() as u32
    }

    /// Character-count estimate of seconds of speech, rounded up.
    ///
    /// Coarser than [`spoken_secs`](Self::spoken_secs); used where only
    /// a rough whole-script figure is needed.
    pub fn char_secs(&self, text: &str) -> u32 {
        let chars = text.chars().count() as f64;
        (chars / self.chars_per_second_divisor as f64).ceil() as u32
    }
}

/// Clamp bounds for per-keyword durations.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ClampPolicy {
    pub min_secs: u32,
    pub max_secs: u32,
}

impl Default for ClampPolicy {
    fn default() -> Self {
        Self {
            min_secs: 5,
            max_secs: 10,
        }
    }
}

impl ClampPolicy {
    pub fn clamp(&self, secs: u32) -> u32 {
        secs.clamp(self.min_secs, self.max_secs)
    }
}
