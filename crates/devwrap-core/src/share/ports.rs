//! Platform ports used by the share flow.
//!
//! The desktop app plugs in the real clipboard; everything here works
//! without a display and is what the CLI and tests use.

use std::path::{Path, PathBuf};
use std::process::Command;

use async_trait::async_trait;

use super::SharePayload;
use crate::error::ShareError;

/// Platform share sheet
#[async_trait]
pub trait NativeShare: Send + Sync {
    /// `Err(Unsupported)` when there is no sheet, `Err(Cancelled)` when dismissed
    async fn share(
        &self,
        payload: &SharePayload,
        png: &[u8],
        filename: &str,
    ) -> Result<(), ShareError>;
}

pub trait ClipboardPort: Send + Sync {
    fn copy_image(&self, png: &[u8]) -> Result<(), ShareError>;
    fn copy_text(&self, text: &str) -> Result<(), ShareError>;
}

/// Opens a URL in a new browser context
pub trait UrlOpener: Send + Sync {
    fn open(&self, url: &str) -> Result<(), ShareError>;
}

/// Writes an image to the user's download location
pub trait Downloader: Send + Sync {
    fn save(&self, filename: &str, png: &[u8]) -> Result<PathBuf, ShareError>;
}

/// Desktop platforms without a share sheet
#[derive(Debug, Clone, Copy, Default)]
pub struct NoNativeShare;

#[async_trait]
impl NativeShare for NoNativeShare {
    async fn share(&self, _: &SharePayload, _: &[u8], _: &str) -> Result<(), ShareError> {
        Err(ShareError::Unsupported)
    }
}

/// Headless sessions
#[derive(Debug, Clone, Copy, Default)]
pub struct NoClipboard;

impl ClipboardPort for NoClipboard {
    fn copy_image(&self, _: &[u8]) -> Result<(), ShareError> {
        Err(ShareError::Clipboard("no clipboard available".into()))
    }

    fn copy_text(&self, _: &str) -> Result<(), ShareError> {
        Err(ShareError::Clipboard("no clipboard available".into()))
    }
}

/// Hands URLs to the OS default browser
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOpener;

impl UrlOpener for SystemOpener {
    fn open(&self, url: &str) -> Result<(), ShareError> {
        let mut command = open_command(url);
        command
            .spawn()
            .map(|_| ())
            .map_err(|e| ShareError::Open {
                url: url.to_string(),
                reason: e.to_string(),
            })
    }
}

#[cfg(target_os = "macos")]
fn open_command(url: &str) -> Command {
    let mut command = Command::new("open");
    command.arg(url);
    command
}

#[cfg(target_os = "windows")]
fn open_command(url: &str) -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", "", url]);
    command
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn open_command(url: &str) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(url);
    command
}

/// Saves into a fixed directory, creating it if needed
#[derive(Debug, Clone)]
pub struct DirectoryDownloader {
    dir: PathBuf,
}

impl DirectoryDownloader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl Downloader for DirectoryDownloader {
    fn save(&self, filename: &str, png: &[u8]) -> Result<PathBuf, ShareError> {
        let path = self.dir.join(filename);
        std::fs::create_dir_all(&self.dir)
            .and_then(|_| std::fs::write(&path, png))
            .map_err(|e| ShareError::Download(e.to_string()))?;
        tracing::info!(path = %path.display(), "Saved wrap image");
        Ok(path)
    }
}
