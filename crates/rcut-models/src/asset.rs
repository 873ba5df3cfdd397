//! Resolved stock assets and the assembled rough cut.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{AspectRatio, EntryId, VideoFormat};

/// A stock clip matched to one timeline entry.
///
/// References its entry by ID only; the entry itself stays in the
/// timeline the run was started from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedAsset {
    /// Entry this asset was resolved for
    pub entry_id: EntryId,

    /// Keyword the search ran with
    pub keyword: String,

    /// Direct URL of the selected rendition
    pub source_url: String,

    /// Full native duration of the stock clip in seconds
    pub native_duration_secs: u32,

    /// Seconds of screen time the timeline allocates to this clip
    pub allocated_secs: u32,

    /// Render aspect hint for the compositing step
    pub render_aspect: AspectRatio,
}

/// The assembled result of a generation run: an ordered cut list.
///
/// Assets appear in frozen-timeline order with skipped entries omitted.
/// Serialized as the downloadable manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoughCut {
    /// Output format the cut was generated for
    pub format: VideoFormat,

    /// Ordered clips
    pub assets: Vec<ResolvedAsset>,

    /// When the cut was assembled
    pub created_at: DateTime<Utc>,
}

impl RoughCut {
    /// Assemble a cut from resolved assets, preserving their order.
    pub fn new(format: VideoFormat, assets: Vec<ResolvedAsset>) -> Self {
        Self {
            format,
            assets,
            created_at: Utc::now(),
        }
    }

    /// The designated primary output: the first clip, if any.
    pub fn primary(&self) -> Option<&ResolvedAsset> {
        self.assets.first()
    }

    pub fn asset_count(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Total allocated screen time across clips.
    pub fn total_allocated_secs(&self) -> u32 {
        self.assets.iter().map(|a| a.allocated_secs).sum()
    }
}
