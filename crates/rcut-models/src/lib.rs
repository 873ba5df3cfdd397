//! Shared data models for the RoughCut pipeline.
//!
//! This crate provides Serde-serializable types for:
//! - Keyword entries and the editable timeline
//! - Output formats and aspect ratios
//! - Resolved stock assets and the assembled rough cut

pub mod asset;
pub mod entry;
pub mod format;
pub mod timeline;

// Re-export common types
pub use asset::{ResolvedAsset, RoughCut};
pub use entry::{EntryId, KeywordEntry};
pub use format::{AspectRatio, AspectRatioParseError, VideoFormat, VideoFormatParseError};
pub use timeline::{TargetFit, Timeline, TimelineError, TimelineResult};
