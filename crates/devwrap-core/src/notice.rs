//! User-facing notices.
//!
//! Every outcome the user should hear about becomes a [`Notice`]; the front
//! end decides how to show it (toast, stderr line).

use std::fmt;

use crate::error::ExportError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoticeKind {
    #[default]
    Info,
    Success,
    /// Failure the user should act on
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn new(title: impl Into<String>, description: impl Into<String>, kind: NoticeKind) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            kind,
        }
    }

    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(title, description, NoticeKind::Info)
    }

    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(title, description, NoticeKind::Success)
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(title, description, NoticeKind::Destructive)
    }

    /// PNG written
    pub fn downloaded() -> Self {
        Self::success("Downloaded!", "Your wrap has been saved as an image.")
    }

    /// Export failed; nothing was written
    pub fn download_failed(err: &ExportError) -> Self {
        tracing::warn!("Export failed: {}", err);
        Self::destructive(
            "Download failed",
            "There was an error generating your image.",
        )
    }

    /// Caption and link placed on the clipboard
    pub fn link_copied() -> Self {
        Self::success("Link copied!", "Share this link with your friends.")
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Destructive
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_failure_is_destructive() {
        let notice = Notice::download_failed(&ExportError::Svg("bad".into()));
        assert!(notice.is_error());
        assert_eq!(notice.title, "Download failed");
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Notice::downloaded().to_string(),
            "Downloaded!: Your wrap has been saved as an image."
        );
    }
}
