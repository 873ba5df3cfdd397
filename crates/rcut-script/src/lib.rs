//! Script analysis for the RoughCut pipeline.
//!
//! Turns free-text narration into an ordered keyword timeline:
//! - Abbreviation-aware sentence segmentation
//! - Per-sentence keyword extraction and scoring
//! - Spoken-duration estimation and clamping

pub mod error;
pub mod estimate;
pub mod pipeline;
pub mod scorer;
pub mod segmenter;

// Re-export common types
pub use error::{ScriptError, ScriptResult};
pub use estimate::{ClampPolicy, SpeechRate};
pub use pipeline::ScriptAnalyzer;
pub use scorer::{KeywordScorer, ScorerConfig};
pub use segmenter::{Segmenter, SegmenterConfig, Sentence};
