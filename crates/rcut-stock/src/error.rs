//! Stock search error types.

use thiserror::Error;

pub type StockResult<T> = Result<T, StockError>;

#[derive(Debug, Error)]
pub enum StockError {
    #[error("Stock API key is missing")]
    MissingKey,

    #[error("Search failed with status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl StockError {
    pub fn is_retryable(&self) -> bool {
        match self {
            StockError::Network(_) => true,
            StockError::Api { status, .. } => *status == 429 || *status >= 500,
            StockError::MissingKey => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_classification() {
        assert!(StockError::Api {
            status: 429,
            message: "rate limited".into()
        }
        .is_retryable());
        assert!(StockError::Api {
            status: 503,
            message: "down".into()
        }
        .is_retryable());
        assert!(!StockError::Api {
            status: 400,
            message: "bad query".into()
        }
        .is_retryable());
        assert!(!StockError::MissingKey.is_retryable());
    }
}
