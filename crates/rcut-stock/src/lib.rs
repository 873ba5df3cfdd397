//! Stock-footage search for the RoughCut pipeline.
//!
//! Provides the search capability the generation engine consumes: the
//! [`StockProvider`] trait plus the Pixabay-backed implementation.

pub mod error;
pub mod pixabay;
pub mod provider;
pub mod types;

pub use error::{StockError, StockResult};
pub use pixabay::{PixabayClient, PixabayConfig};
pub use provider::StockProvider;
pub use types::StockCandidate;
