//! Stock search types and the Pixabay wire schema.

use serde::{Deserialize, Serialize};

/// A stock clip candidate for one keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockCandidate {
    /// Provider-side identifier
    pub id: u64,

    /// Direct URL of the preview rendition
    pub preview_url: String,

    /// Native clip length in seconds
    pub native_duration_secs: u32,
}

/// Pixabay video search response body.
#[derive(Debug, Clone, Deserialize)]
pub struct PixabaySearchResponse {
    #[serde(default)]
    pub hits: Vec<PixabayHit>,
}

/// One video hit in a Pixabay search response.
#[derive(Debug, Clone, Deserialize)]
pub struct PixabayHit {
    pub id: u64,
    /// Native clip length in seconds
    pub duration: u32,
    pub videos: PixabayRenditions,
}

/// Per-size renditions of a hit.
#[derive(Debug, Clone, Deserialize)]
pub struct PixabayRenditions {
    pub large: PixabayRendition,
    pub medium: PixabayRendition,
    pub small: PixabayRendition,
}

/// A single downloadable rendition.
#[derive(Debug, Clone, Deserialize)]
pub struct PixabayRendition {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub size: u64,
}

impl From<PixabayHit> for StockCandidate {
    /// The small rendition is the preview, matching what the player
    /// streams.
    fn from(hit: PixabayHit) -> Self {
        Self {
            id: hit.id,
            preview_url: hit.videos.small.url,
            native_duration_secs: hit.duration,
        }
    }
}
