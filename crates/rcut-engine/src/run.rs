//! Run state for generation.
//!
//! A [`GenerationRun`] is a snapshot of one pass over a timeline: which
//! stage it is in, how far the current stage has progressed, and which
//! assets have resolved so far. Runs are ephemeral, a new run replaces
//! the previous one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use rcut_models::ResolvedAsset;

/// Unique identifier for a generation run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RunId(pub String);

impl RunId {
    /// Generate a new random run ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Create from an existing string.
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RunId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stage of a generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RunStage {
    /// No run is in flight
    #[default]
    Idle,
    /// Resolving timeline entries against the stock provider
    Fetching,
    /// Assembling resolved footage
    Processing,
    /// Producing the final cut
    Finalizing,
    /// Run completed successfully
    Done,
    /// Run failed with an error
    Failed,
}

impl RunStage {
    /// Get string representation of the stage.
    pub fn as_str(&self) -> &'static str {
        match self {
            RunStage::Idle => "idle",
            RunStage::Fetching => "fetching",
            RunStage::Processing => "processing",
            RunStage::Finalizing => "finalizing",
            RunStage::Done => "done",
            RunStage::Failed => "failed",
        }
    }

    /// Check if a run in this stage is actively making progress.
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            RunStage::Fetching | RunStage::Processing | RunStage::Finalizing
        )
    }

    /// Check if this is a terminal state (no more updates expected).
    pub fn is_terminal(&self) -> bool {
        matches!(self, RunStage::Done | RunStage::Failed)
    }
}

impl std::fmt::Display for RunStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Failure record captured when a run errors out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunFailure {
    /// Stage the run was in when the error occurred
    pub stage: RunStage,
    /// Human-readable error message
    pub message: String,
}

/// Snapshot of a single generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRun {
    /// Unique run identifier
    pub run_id: RunId,
    /// Current stage
    pub stage: RunStage,
    /// Progress within the current stage (0-100)
    pub progress: u8,
    /// Number of timeline entries the run was started with
    pub entry_count: usize,
    /// Entries still expected to resolve to an asset
    pub expected_assets: usize,
    /// Assets resolved so far, in timeline order
    pub resolved: Vec<ResolvedAsset>,
    /// Failure record if the run failed
    pub error: Option<RunFailure>,
    /// When the run was started
    pub started_at: DateTime<Utc>,
    /// When the run reached a terminal stage
    pub finished_at: Option<DateTime<Utc>>,
}

impl GenerationRun {
    /// Create an idle run with nothing in flight.
    pub fn idle() -> Self {
        Self {
            run_id: RunId::new(),
            stage: RunStage::Idle,
            progress: 0,
            entry_count: 0,
            expected_assets: 0,
            resolved: Vec::new(),
            error: None,
            started_at: Utc::now(),
            finished_at: None,
        }
    }

    /// Start a fresh run over `entry_count` timeline entries.
    pub fn start(entry_count: usize) -> Self {
        Self {
            run_id: RunId::new(),
            stage: RunStage::Fetching,
            progress: 0,
            entry_count,
            expected_assets: entry_count,
            resolved: Vec::new(),
            error: None,
            started_at: Utc::now(),
            finished_at: None,
        }
    }

    /// Move to a new stage, resetting stage progress to zero.
    pub fn enter_stage(&mut self, stage: RunStage) {
        self.stage = stage;
        self.progress = 0;
    }

    /// Update stage progress. Clamped to 100 and never moves backward.
    pub fn set_progress(&mut self, progress: u8) {
        self.progress = self.progress.max(progress.min(100));
    }

    /// Record an asset resolved during fetching.
    pub fn record_asset(&mut self, asset: ResolvedAsset) {
        self.resolved.push(asset);
    }

    /// Record a keyword that produced no candidates.
    pub fn record_skip(&mut self) {
        self.expected_assets = self.expected_assets.saturating_sub(1);
    }

    /// Mark the run as completed.
    pub fn complete(&mut self) {
        self.stage = RunStage::Done;
        self.progress = 100;
        self.finished_at = Some(Utc::now());
    }

    /// Mark the run as failed, keeping assets resolved before the error.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.error = Some(RunFailure {
            stage: self.stage,
            message: message.into(),
        });
        self.stage = RunStage::Failed;
        self.finished_at = Some(Utc::now());
    }

    /// Check if the run is actively in flight.
    pub fn is_active(&self) -> bool {
        self.stage.is_active()
    }

    /// Check if the run reached a terminal stage.
    pub fn is_terminal(&self) -> bool {
        self.stage.is_terminal()
    }
}
