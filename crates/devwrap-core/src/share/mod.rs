//! Share flow for an exported card.
//!
//! The native share sheet is tried first. When it is missing or dismissed
//! the user picks a network:
//!
//! - link networks get a prefilled intent URL,
//! - image networks get the PNG on the clipboard, or saved to the download
//!   location when the clipboard fails, and the site opens after
//!   [`ShareOptions::auto_open_delay`].
//!
//! The delayed open is a [`TaskHandle`] carried by the outcome; whoever shows
//! the instructions owns it and cancels it on dismissal.

mod payload;
mod ports;
mod target;

pub use payload::SharePayload;
pub use ports::{
    ClipboardPort, DirectoryDownloader, Downloader, NativeShare, NoClipboard, NoNativeShare,
    SystemOpener, UrlOpener,
};
pub use target::{ShareKind, ShareTarget};

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::config::ShareOptions;
use crate::error::ShareError;
use crate::notice::Notice;
use crate::schedule::{spawn_after, TaskHandle};
use crate::types::WrapProfile;

/// Result of sharing to one target
#[derive(Debug)]
pub enum ShareOutcome {
    /// The platform share sheet completed
    Native,
    /// Intent URL handed to the browser
    IntentOpened { target: ShareTarget, url: String },
    /// Image on the clipboard; the site opens when `pending_open` fires
    Copied {
        target: ShareTarget,
        opens_in: Duration,
        pending_open: TaskHandle,
    },
    /// Clipboard failed; image written to `path` for manual upload
    Saved {
        target: ShareTarget,
        path: PathBuf,
        opens_in: Duration,
        pending_open: TaskHandle,
    },
}

impl ShareOutcome {
    pub fn notice(&self) -> Notice {
        match self {
            Self::Native => Notice::success("Shared!", "Thanks for sharing your wrap."),
            Self::IntentOpened { target, .. } => Notice::info(
                format!("Opening {}", target.name()),
                "Finish your post in the browser.",
            ),
            Self::Copied {
                target, opens_in, ..
            } => Notice::success(
                "Image copied!",
                format!(
                    "Paste it into your {} post. Opening {} in {} seconds.",
                    target.name(),
                    target.name(),
                    opens_in.as_secs()
                ),
            ),
            Self::Saved { target, path, .. } => Notice::info(
                "Image saved",
                format!(
                    "Clipboard unavailable. Upload {} to {} manually.",
                    display_name(path),
                    target.name()
                ),
            ),
        }
    }

    /// Instructions for the share popup; empty when nothing is left to do
    pub fn steps(&self) -> Vec<String> {
        match self {
            Self::Native | Self::IntentOpened { .. } => Vec::new(),
            Self::Copied {
                target, opens_in, ..
            } => vec![
                "Your wrap image has been copied to the clipboard.".to_string(),
                format!("{} opens in {} seconds.", target.name(), opens_in.as_secs()),
                "Create a new post and paste the image (Ctrl/Cmd + V).".to_string(),
            ],
            Self::Saved {
                target,
                path,
                opens_in,
                ..
            } => vec![
                format!("Your wrap image was saved to {}.", path.display()),
                format!("{} opens in {} seconds.", target.name(), opens_in.as_secs()),
                "Create a new post and upload the saved image.".to_string(),
            ],
        }
    }

    pub fn pending_open(&self) -> Option<&TaskHandle> {
        match self {
            Self::Copied { pending_open, .. } | Self::Saved { pending_open, .. } => {
                Some(pending_open)
            }
            _ => None,
        }
    }

    /// Take ownership of the delayed open
    pub fn into_pending_open(self) -> Option<TaskHandle> {
        match self {
            Self::Copied { pending_open, .. } | Self::Saved { pending_open, .. } => {
                Some(pending_open)
            }
            _ => None,
        }
    }
}

fn display_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Share flow wired to its platform ports
#[derive(Clone)]
pub struct ShareFlow {
    native: Arc<dyn NativeShare>,
    clipboard: Arc<dyn ClipboardPort>,
    opener: Arc<dyn UrlOpener>,
    downloader: Arc<dyn Downloader>,
    options: ShareOptions,
}

impl ShareFlow {
    /// No share sheet or clipboard; URLs go to the system browser
    pub fn new(options: ShareOptions, downloader: Arc<dyn Downloader>) -> Self {
        Self {
            native: Arc::new(NoNativeShare),
            clipboard: Arc::new(NoClipboard),
            opener: Arc::new(SystemOpener),
            downloader,
            options,
        }
    }

    pub fn with_native(mut self, native: Arc<dyn NativeShare>) -> Self {
        self.native = native;
        self
    }

    pub fn with_clipboard(mut self, clipboard: Arc<dyn ClipboardPort>) -> Self {
        self.clipboard = clipboard;
        self
    }

    pub fn with_opener(mut self, opener: Arc<dyn UrlOpener>) -> Self {
        self.opener = opener;
        self
    }

    pub fn options(&self) -> &ShareOptions {
        &self.options
    }

    /// Caption for `profile` with the configured page URL
    pub fn payload(&self, profile: &WrapProfile) -> SharePayload {
        SharePayload::for_profile(profile, self.options.page_url.as_deref())
    }

    /// Try the platform share sheet.
    ///
    /// `Ok(false)` means fall back to picking a target: the sheet is missing
    /// or the user dismissed it.
    pub async fn try_native(
        &self,
        payload: &SharePayload,
        png: &[u8],
        filename: &str,
    ) -> Result<bool, ShareError> {
        match self.native.share(payload, png, filename).await {
            Ok(()) => Ok(true),
            Err(ShareError::Unsupported) => {
                tracing::debug!("Native share unsupported, falling back");
                Ok(false)
            }
            Err(ShareError::Cancelled) => {
                tracing::debug!("Native share cancelled, falling back");
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    /// Share to one network. Must run inside a tokio runtime.
    pub async fn share_to(
        &self,
        target: ShareTarget,
        payload: &SharePayload,
        png: &[u8],
        filename: &str,
    ) -> Result<ShareOutcome, ShareError> {
        match target.kind() {
            ShareKind::Link => {
                let url = target
                    .intent_url(payload)
                    .map(String::from)
                    .unwrap_or_else(|| target.site_url().to_string());
                if let Err(e) = self.opener.open(&url) {
                    tracing::warn!("Intent open failed: {}", e);
                }
                tracing::debug!(target = target.key(), "Opened share intent");
                Ok(ShareOutcome::IntentOpened { target, url })
            }
            ShareKind::Image => {
                let opens_in = self.options.auto_open_delay;
                match self.clipboard.copy_image(png) {
                    Ok(()) => {
                        tracing::debug!(target = target.key(), "Copied wrap image");
                        Ok(ShareOutcome::Copied {
                            target,
                            opens_in,
                            pending_open: self.open_later(target),
                        })
                    }
                    Err(e) => {
                        tracing::warn!("{}; saving for manual upload", e);
                        let path = self.downloader.save(filename, png)?;
                        Ok(ShareOutcome::Saved {
                            target,
                            path,
                            opens_in,
                            pending_open: self.open_later(target),
                        })
                    }
                }
            }
        }
    }

    /// Copy caption and link as text
    pub fn copy_link(&self, payload: &SharePayload) -> Result<Notice, ShareError> {
        self.clipboard.copy_text(&payload.full_text())?;
        Ok(Notice::link_copied())
    }

    fn open_later(&self, target: ShareTarget) -> TaskHandle {
        let opener = Arc::clone(&self.opener);
        spawn_after(self.options.auto_open_delay, move || {
            if let Err(e) = opener.open(target.site_url()) {
                tracing::warn!("Delayed open failed: {}", e);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use parking_lot::Mutex;

    #[derive(Default)]
    struct RecordingOpener(Mutex<Vec<String>>);

    impl UrlOpener for RecordingOpener {
        fn open(&self, url: &str) -> Result<(), ShareError> {
            self.0.lock().push(url.to_string());
            Ok(())
        }
    }

    struct FakeClipboard {
        works: bool,
        images: Mutex<usize>,
        text: Mutex<Option<String>>,
    }

    impl FakeClipboard {
        fn new(works: bool) -> Self {
            Self {
                works,
                images: Mutex::new(0),
                text: Mutex::new(None),
            }
        }
    }

    impl ClipboardPort for FakeClipboard {
        fn copy_image(&self, _png: &[u8]) -> Result<(), ShareError> {
            if !self.works {
                return Err(ShareError::Clipboard("denied".into()));
            }
            *self.images.lock() += 1;
            Ok(())
        }

        fn copy_text(&self, text: &str) -> Result<(), ShareError> {
            *self.text.lock() = Some(text.to_string());
            Ok(())
        }
    }

    struct FakeNative(Result<(), ShareError>);

    #[async_trait]
    impl NativeShare for FakeNative {
        async fn share(&self, _: &SharePayload, _: &[u8], _: &str) -> Result<(), ShareError> {
            self.0.clone()
        }
    }

    struct FailingDownloader;

    impl Downloader for FailingDownloader {
        fn save(&self, _: &str, _: &[u8]) -> Result<PathBuf, ShareError> {
            Err(ShareError::Download("read-only".into()))
        }
    }

    fn payload() -> SharePayload {
        SharePayload::for_profile(&WrapProfile::default(), Some("https://example.com"))
    }

    fn flow(
        clipboard: Arc<FakeClipboard>,
        opener: Arc<RecordingOpener>,
        downloader: Arc<dyn Downloader>,
    ) -> ShareFlow {
        ShareFlow::new(ShareOptions::default(), downloader)
            .with_clipboard(clipboard)
            .with_opener(opener)
    }

    #[tokio::test]
    async fn test_native_fallback_on_unsupported_and_cancel() {
        let tmp = tempfile::tempdir().unwrap();
        let base = ShareFlow::new(
            ShareOptions::default(),
            Arc::new(DirectoryDownloader::new(tmp.path())),
        );

        let unsupported = base.clone();
        assert!(!unsupported.try_native(&payload(), &[], "a.png").await.unwrap());

        let cancelled = base
            .clone()
            .with_native(Arc::new(FakeNative(Err(ShareError::Cancelled))));
        assert!(!cancelled.try_native(&payload(), &[], "a.png").await.unwrap());

        let works = base.with_native(Arc::new(FakeNative(Ok(()))));
        assert!(works.try_native(&payload(), &[], "a.png").await.unwrap());
    }

    #[tokio::test]
    async fn test_link_target_opens_intent_now() {
        let opener = Arc::new(RecordingOpener::default());
        let flow = flow(
            Arc::new(FakeClipboard::new(true)),
            opener.clone(),
            Arc::new(FailingDownloader),
        );

        let outcome = flow
            .share_to(ShareTarget::Reddit, &payload(), b"png", "a.png")
            .await
            .unwrap();
        assert!(matches!(outcome, ShareOutcome::IntentOpened { .. }));
        assert!(outcome.pending_open().is_none());

        let opened = opener.0.lock();
        assert_eq!(opened.len(), 1);
        assert!(opened[0].starts_with("https://www.reddit.com/submit?"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_image_target_copies_then_opens_after_delay() {
        let opener = Arc::new(RecordingOpener::default());
        let clipboard = Arc::new(FakeClipboard::new(true));
        let flow = flow(clipboard.clone(), opener.clone(), Arc::new(FailingDownloader));

        let outcome = flow
            .share_to(ShareTarget::Instagram, &payload(), b"png", "a.png")
            .await
            .unwrap();
        assert!(matches!(outcome, ShareOutcome::Copied { .. }));
        assert_eq!(*clipboard.images.lock(), 1);
        assert_eq!(outcome.steps().len(), 3);

        tokio::time::sleep(Duration::from_millis(6_900)).await;
        assert!(opener.0.lock().is_empty());
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(*opener.0.lock(), vec!["https://www.instagram.com/".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_clipboard_failure_saves_for_upload() {
        let tmp = tempfile::tempdir().unwrap();
        let opener = Arc::new(RecordingOpener::default());
        let flow = flow(
            Arc::new(FakeClipboard::new(false)),
            opener.clone(),
            Arc::new(DirectoryDownloader::new(tmp.path())),
        );

        let outcome = flow
            .share_to(ShareTarget::TikTok, &payload(), b"png", "wrap.png")
            .await
            .unwrap();
        match &outcome {
            ShareOutcome::Saved { path, .. } => assert_eq!(std::fs::read(path).unwrap(), b"png"),
            other => panic!("expected Saved, got {:?}", other),
        }
        assert!(outcome.notice().description.contains("wrap.png"));

        tokio::time::sleep(Duration::from_secs(8)).await;
        assert_eq!(*opener.0.lock(), vec!["https://www.tiktok.com/upload".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dismissing_popup_cancels_open() {
        let opener = Arc::new(RecordingOpener::default());
        let flow = flow(
            Arc::new(FakeClipboard::new(true)),
            opener.clone(),
            Arc::new(FailingDownloader),
        );

        let outcome = flow
            .share_to(ShareTarget::Instagram, &payload(), b"png", "a.png")
            .await
            .unwrap();
        drop(outcome);

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert!(opener.0.lock().is_empty());
    }

    #[tokio::test]
    async fn test_download_failure_is_an_error() {
        let flow = flow(
            Arc::new(FakeClipboard::new(false)),
            Arc::new(RecordingOpener::default()),
            Arc::new(FailingDownloader),
        );
        let err = flow
            .share_to(ShareTarget::Instagram, &payload(), b"png", "a.png")
            .await
            .unwrap_err();
        assert_eq!(err, ShareError::Download("read-only".into()));
    }

    #[test]
    fn test_copy_link() {
        let clipboard = Arc::new(FakeClipboard::new(true));
        let flow = flow(
            clipboard.clone(),
            Arc::new(RecordingOpener::default()),
            Arc::new(FailingDownloader),
        );
        let notice = flow.copy_link(&payload()).unwrap();
        assert_eq!(notice.title, "Link copied!");
        assert!(clipboard
            .text
            .lock()
            .as_deref()
            .unwrap()
            .ends_with("https://example.com"));
    }
}
