//! Runtime configuration shared by the desktop app and the CLI.
//!
//! Nothing is read from disk; binaries fill these from their command-line
//! arguments and fall back to the defaults below.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::counter::DEFAULT_DURATION;
use crate::schedule::FRAME_INTERVAL;

/// Device-pixel-ratio the card is captured at
pub const EXPORT_PIXEL_RATIO: f32 = 2.0;

/// Delay before the image-network site is opened after copying the card
pub const AUTO_OPEN_DELAY: Duration = Duration::from_secs(7);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportOptions {
    pub pixel_ratio: f32,
    /// Per-resource timeout for remote backgrounds and icons
    pub fetch_timeout: Duration,
    /// Skip remote resources entirely (they render blank)
    pub offline: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            pixel_ratio: EXPORT_PIXEL_RATIO,
            fetch_timeout: Duration::from_secs(10),
            offline: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationOptions {
    pub duration: Duration,
    pub frame_interval: Duration,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            duration: DEFAULT_DURATION,
            frame_interval: FRAME_INTERVAL,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShareOptions {
    /// Link attached to share captions and intents
    pub page_url: Option<String>,
    pub auto_open_delay: Duration,
}

impl Default for ShareOptions {
    fn default() -> Self {
        Self {
            page_url: None,
            auto_open_delay: AUTO_OPEN_DELAY,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WrapConfig {
    /// Where session files and downloads default to
    pub data_dir: Option<PathBuf>,
    pub export: ExportOptions,
    pub animation: AnimationOptions,
    pub share: ShareOptions,
}

impl WrapConfig {
    /// `data_dir`, or the platform cache dir
    pub fn resolved_data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(default_data_dir)
    }

    /// Where a fallback download lands: the user's download dir, else the data dir
    pub fn download_dir(&self) -> PathBuf {
        dirs::download_dir().unwrap_or_else(|| self.resolved_data_dir())
    }
}

/// Default data directory (~/.cache/devwrap on Linux)
pub fn default_data_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("devwrap")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WrapConfig::default();
        assert_eq!(config.export.pixel_ratio, 2.0);
        assert_eq!(config.animation.duration, Duration::from_secs(2));
        assert_eq!(config.share.auto_open_delay, Duration::from_secs(7));
        assert!(config.share.page_url.is_none());
    }

    #[test]
    fn test_explicit_data_dir_wins() {
        let config = WrapConfig {
            data_dir: Some(PathBuf::from("/tmp/wrap")),
            ..Default::default()
        };
        assert_eq!(config.resolved_data_dir(), PathBuf::from("/tmp/wrap"));
    }
}
