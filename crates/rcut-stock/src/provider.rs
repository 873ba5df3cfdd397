//! The search capability consumed by the generation engine.

use async_trait::async_trait;

use crate::error::StockResult;
use crate::types::StockCandidate;

/// A source of stock-footage candidates for a keyword.
///
/// An empty candidate list is a valid outcome (the keyword has no
/// footage); errors are reserved for transport and API failures.
#[async_trait]
pub trait StockProvider: Send + Sync {
    /// Search for clips matching a keyword, best matches first.
    async fn search(&self, keyword: &str) -> StockResult<Vec<StockCandidate>>;
}
