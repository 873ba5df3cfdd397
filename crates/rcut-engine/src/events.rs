//! Generation progress events.
//!
//! Events are broadcast while a run executes so callers can render
//! progress without polling the run state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use rcut_models::EntryId;

use crate::run::RunStage;

/// Event emitted during a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GenerationEvent {
    /// Log message with timestamp
    Log {
        message: String,
        timestamp: DateTime<Utc>,
    },

    /// The run moved to a new stage
    StageChanged { stage: RunStage },

    /// Progress update within a stage (0-100)
    Progress { stage: RunStage, value: u8 },

    /// A timeline entry resolved to a stock asset
    AssetResolved {
        entry_id: EntryId,
        keyword: String,
        resolved: usize,
        expected: usize,
    },

    /// A keyword returned no candidates and was skipped
    KeywordSkipped { entry_id: EntryId, keyword: String },

    /// The run completed successfully
    Done { asset_count: usize },

    /// The run failed
    Failed { stage: RunStage, message: String },
}

impl GenerationEvent {
    /// Create a log event.
    pub fn log(message: impl Into<String>) -> Self {
        GenerationEvent::Log {
            message: message.into(),
            timestamp: Utc::now(),
        }
    }

    /// Create a stage change event.
    pub fn stage_changed(stage: RunStage) -> Self {
        GenerationEvent::StageChanged { stage }
    }

    /// Create a progress event. Values above 100 are clamped.
    pub fn progress(stage: RunStage, value: u8) -> Self {
        GenerationEvent::Progress {
            stage,
            value: value.min(100),
        }
    }

    /// Create an asset resolved event.
    pub fn asset_resolved(
        entry_id: EntryId,
        keyword: impl Into<String>,
        resolved: usize,
        expected: usize,
    ) -> Self {
        GenerationEvent::AssetResolved {
            entry_id,
            keyword: keyword.into(),
            resolved,
            expected,
        }
    }

    /// Create a keyword skipped event.
    pub fn keyword_skipped(entry_id: EntryId, keyword: impl Into<String>) -> Self {
        GenerationEvent::KeywordSkipped {
            entry_id,
            keyword: keyword.into(),
        }
    }

    /// Create a done event.
    pub fn done(asset_count: usize) -> Self {
        GenerationEvent::Done { asset_count }
    }

    /// Create a failed event.
    pub fn failed(stage: RunStage, message: impl Into<String>) -> Self {
        GenerationEvent::Failed {
            stage,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serialization() {
        let event = GenerationEvent::stage_changed(RunStage::Fetching);
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"stage_changed\""));
        assert!(json.contains("\"stage\":\"fetching\""));
    }

    #[test]
    fn test_progress_clamps_to_100() {
        let event = GenerationEvent::progress(RunStage::Processing, 180);
        if let GenerationEvent::Progress { value, .. } = event {
            assert_eq!(value, 100);
        } else {
            panic!("Expected Progress event");
        }
    }

    #[test]
    fn test_asset_resolved_counts() {
        let event = GenerationEvent::asset_resolved(EntryId::new(), "mountains", 2, 5);
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"resolved\":2"));
        assert!(json.contains("\"expected\":5"));
    }
}
