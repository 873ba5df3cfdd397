//! The editable keyword timeline.
//!
//! Insertion order is playback order. Every mutating operation either
//! completes fully or leaves the timeline untouched.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::{EntryId, KeywordEntry};

pub type TimelineResult<T> = Result<T, TimelineError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimelineError {
    #[error("Keyword cannot be empty")]
    EmptyKeyword,

    #[error("Duration must be at least 1 second, got {0}")]
    DurationTooShort(u32),

    #[error("Index {index} out of range for timeline of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// How the timeline's allocated duration compares against a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetFit {
    /// Shorter than target minus tolerance
    Under,
    /// Within tolerance of the target
    Within,
    /// Longer than target plus tolerance
    Over,
}

impl TargetFit {
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetFit::Under => "under",
            TargetFit::Within => "within",
            TargetFit::Over => "over",
        }
    }
}

impl fmt::Display for TargetFit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Ordered sequence of keyword entries.
///
/// The target duration is not stored here; callers pass it to the
/// comparison methods. IDs are unique within a timeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    entries: Vec<KeywordEntry>,
}

impl Timeline {
    /// Create an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a timeline from pre-built entries, preserving their order.
    pub fn from_entries(entries: Vec<KeywordEntry>) -> Self {
        Self { entries }
    }

    /// Append a new entry.
    ///
    /// The keyword is trimmed and lowercased before validation. Returns
    /// the created entry.
    pub fn add(
        &mut self,
        keyword: impl Into<String>,
        duration_secs: u32,
    ) -> TimelineResult<KeywordEntry> {
        let keyword = keyword.into().trim().to_lowercase();
        if keyword.is_empty() {
            return Err(TimelineError::EmptyKeyword);
        }
        if duration_secs < 1 {
            return Err(TimelineError::DurationTooShort(duration_secs));
        }

        let entry = KeywordEntry::new(keyword, duration_secs);
        self.entries.push(entry.clone());
        Ok(entry)
    }

    /// Remove the entry with the given ID.
    ///
    /// Returns the removed entry, or `None` if no entry has that ID
    /// (removing an absent entry is a no-op, not an error).
    pub fn remove(&mut self, id: &EntryId) -> Option<KeywordEntry> {
        let pos = self.entries.iter().position(|e| &e.id == id)?;
        Some(self.entries.remove(pos))
    }

    /// Move the entry at `from` so it ends up at index `to`.
    ///
    /// Remove-then-insert semantics: the entry is taken out, the rest
    /// close ranks, then it is inserted at `to`. Out-of-range indices
    /// leave the timeline unchanged.
    pub fn reorder(&mut self, from: usize, to: usize) -> TimelineResult<()> {
        let len = self.entries.len();
        if from >= len {
            return Err(TimelineError::IndexOutOfRange { index: from, len });
        }
        if to >= len {
            return Err(TimelineError::IndexOutOfRange { index: to, len });
        }

        let entry = self.entries.remove(from);
        self.entries.insert(to, entry);
        Ok(())
    }

    /// Sum of entry durations in seconds.
    pub fn total_duration(&self) -> u32 {
        self.entries.iter().map(|e| e.duration_secs).sum()
    }

    /// Compare the allocated duration against a target.
    pub fn target_fit(&self, target_secs: u32, tolerance_secs: u32) -> TargetFit {
        let total = self.total_duration();
        if total < target_secs.saturating_sub(tolerance_secs) {
            TargetFit::Under
        } else if total > target_secs.saturating_add(tolerance_secs) {
            TargetFit::Over
        } else {
            TargetFit::Within
        }
    }

    /// Whether the allocated duration is within tolerance of the target.
    pub fn is_within_target(&self, target_secs: u32, tolerance_secs: u32) -> bool {
        self.target_fit(target_secs, tolerance_secs) == TargetFit::Within
    }

    /// Entries in playback order.
    pub fn entries(&self) -> &[KeywordEntry] {
        &self.entries
    }

    /// Look up an entry by ID.
    pub fn get(&self, id: &EntryId) -> Option<&KeywordEntry> {
        self.entries.iter().find(|e| &e.id == id)
    }

    /// Current playback position of an entry.
    pub fn position(&self, id: &EntryId) -> Option<usize> {
        self.entries.iter().position(|e| &e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
