//! Keyword entry definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a timeline entry.
///
/// Stable for the lifetime of the entry, including across reorders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub String);

impl EntryId {
    /// Generate a new random entry ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Create from an existing string.
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One keyword slot on the timeline.
///
/// The keyword drives the stock-footage search; the duration is how long
/// the matched clip holds on screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordEntry {
    /// Unique entry ID
    pub id: EntryId,

    /// Search keyword (lowercase, non-empty)
    pub keyword: String,

    /// On-screen duration in whole seconds
    pub duration_secs: u32,
}

impl KeywordEntry {
    /// Create an entry with a fresh ID.
    pub fn new(keyword: impl Into<String>, duration_secs: u32) -> Self {
        Self {
            id: EntryId::new(),
            keyword: keyword.into(),
            duration_secs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_ids_are_unique() {
        let a = KeywordEntry::new("mountains", 5);
        let b = KeywordEntry::new("mountains", 5);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_entry_id_serializes_transparently() {
        let id = EntryId::from_string("abc-123");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"abc-123\"");
    }

    #[test]
    fn test_entry_id_display() {
        let id = EntryId::from_string("abc-123");
        assert_eq!(id.to_string(), "abc-123");
        assert_eq!(id.as_str(), "abc-123");
    }
}
