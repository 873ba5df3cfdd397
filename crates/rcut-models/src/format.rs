//! Output format and aspect ratio definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Target output format for the assembled cut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum VideoFormat {
    /// Vertical 9:16 for Shorts/Reels/TikTok
    #[default]
    Portrait,
    /// Standard 16:9 for YouTube
    Landscape,
}

impl VideoFormat {
    pub const ALL: &'static [VideoFormat] = &[VideoFormat::Portrait, VideoFormat::Landscape];

    pub fn as_str(&self) -> &'static str {
        match self {
            VideoFormat::Portrait => "portrait",
            VideoFormat::Landscape => "landscape",
        }
    }

    /// Render aspect for assets resolved under this format.
    pub fn aspect(&self) -> AspectRatio {
        match self {
            VideoFormat::Portrait => AspectRatio::PORTRAIT,
            VideoFormat::Landscape => AspectRatio::LANDSCAPE,
        }
    }
}

impl fmt::Display for VideoFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for VideoFormat {
    type Err = VideoFormatParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "portrait" | "vertical" => Ok(VideoFormat::Portrait),
            "landscape" | "horizontal" => Ok(VideoFormat::Landscape),
            _ => Err(VideoFormatParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Error)]
#[error("Unknown video format: {0}")]
pub struct VideoFormatParseError(String);

/// Aspect ratio specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AspectRatio {
    pub width: u32,
    pub height: u32,
}

impl AspectRatio {
    /// Standard portrait (9:16) for Shorts/Reels
    pub const PORTRAIT: AspectRatio = AspectRatio {
        width: 9,
        height: 16,
    };

    /// Standard landscape (16:9)
    pub const LANDSCAPE: AspectRatio = AspectRatio {
        width: 16,
        height: 9,
    };

    /// Create a new aspect ratio.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns the aspect ratio as a decimal.
    pub fn as_f64(&self) -> f64 {
        self.width as f64 / self.height as f64
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.width, self.height)
    }
}

impl FromStr for AspectRatio {
    type Err = AspectRatioParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').collect();
        if parts.len() != 2 {
            return Err(AspectRatioParseError::InvalidFormat(s.to_string()));
        }

        let width = parts[0]
            .parse()
            .map_err(|_| AspectRatioParseError::InvalidNumber(parts[0].to_string()))?;
        let height = parts[1]
            .parse()
            .map_err(|_| AspectRatioParseError::InvalidNumber(parts[1].to_string()))?;

        if width == 0 || height == 0 {
            return Err(AspectRatioParseError::ZeroValue);
        }

        Ok(AspectRatio { width, height })
    }
}

impl Default for AspectRatio {
    fn default() -> Self {
        Self::PORTRAIT
    }
}

#[derive(Debug, Error)]
pub enum AspectRatioParseError {
    #[error("Invalid aspect ratio format: {0}, expected 'W:H'")]
    InvalidFormat(String),
    #[error("Invalid number in aspect ratio: {0}")]
    InvalidNumber(String),
    #[error("Aspect ratio cannot have zero values")]
    ZeroValue,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parse() {
        assert_eq!("portrait".parse::<VideoFormat>().unwrap(), VideoFormat::Portrait);
        assert_eq!("LANDSCAPE".parse::<VideoFormat>().unwrap(), VideoFormat::Landscape);
        assert_eq!("vertical".parse::<VideoFormat>().unwrap(), VideoFormat::Portrait);
        assert!("square".parse::<VideoFormat>().is_err());
    }

    #[test]
    fn test_format_aspect() {
        assert_eq!(VideoFormat::Portrait.aspect(), AspectRatio::PORTRAIT);
        assert_eq!(VideoFormat::Landscape.aspect(), AspectRatio::LANDSCAPE);
        assert!(VideoFormat::Landscape.aspect().as_f64() > 1.0);
    }

    #[test]
    fn test_aspect_ratio_parse() {
        assert_eq!(
            "9:16".parse::<AspectRatio>().unwrap(),
            AspectRatio::PORTRAIT
        );
        assert_eq!(
            "16:9".parse::<AspectRatio>().unwrap(),
            AspectRatio::LANDSCAPE
        );
        assert!("invalid".parse::<AspectRatio>().is_err());
        assert!("0:16".parse::<AspectRatio>().is_err());
    }

    #[test]
    fn test_format_display() {
        assert_eq!(VideoFormat::Portrait.to_string(), "portrait");
        assert_eq!(AspectRatio::LANDSCAPE.to_string(), "16:9");
    }
}
