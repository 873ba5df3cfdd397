//! Engine error types.

use thiserror::Error;

use rcut_stock::StockError;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Engine errors.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The timeline has no entries to generate from.
    #[error("Timeline is empty, nothing to generate")]
    EmptyTimeline,

    /// A run is already in flight and must finish or be reset first.
    #[error("A generation run is already in progress")]
    RunActive,

    /// The stock provider failed during fetching.
    #[error("Stock search failed: {0}")]
    Search(#[from] StockError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_error_wraps_stock_error() {
        let err = EngineError::from(StockError::MissingKey);
        assert!(matches!(err, EngineError::Search(StockError::MissingKey)));
    }
}
