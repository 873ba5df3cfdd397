//! Error types for script analysis.

use thiserror::Error;

pub type ScriptResult<T> = Result<T, ScriptError>;

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Invalid abbreviation mask pattern: {0}")]
    AbbreviationPattern(#[from] regex::Error),
}
