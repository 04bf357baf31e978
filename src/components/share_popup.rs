//! Share Popup Component
//!
//! Tries the platform share sheet first, then offers one button per
//! network. For image networks the popup keeps the outcome (and with it the
//! delayed site open) until it is dismissed, which cancels a pending open.

use std::borrow::Cow;
use std::sync::Arc;

use devwrap_core::share::{ClipboardPort, DirectoryDownloader, ShareKind};
use devwrap_core::{
    export_filename, Notice, ShareError, ShareFlow, ShareOutcome, ShareTarget, WrapProfile,
};
use dioxus::prelude::*;

use crate::context::{push_notice, use_config, use_toasts};

/// System clipboard via arboard
struct DesktopClipboard;

impl ClipboardPort for DesktopClipboard {
    fn copy_image(&self, png: &[u8]) -> Result<(), ShareError> {
        let rgba = image::load_from_memory(png)
            .map_err(|e| ShareError::Clipboard(e.to_string()))?
            .to_rgba8();
        let (width, height) = rgba.dimensions();
        let data = arboard::ImageData {
            width: width as usize,
            height: height as usize,
            bytes: Cow::Owned(rgba.into_raw()),
        };
        arboard::Clipboard::new()
            .and_then(|mut clipboard| clipboard.set_image(data))
            .map_err(|e| ShareError::Clipboard(e.to_string()))
    }

    fn copy_text(&self, text: &str) -> Result<(), ShareError> {
        arboard::Clipboard::new()
            .and_then(|mut clipboard| clipboard.set_text(text.to_string()))
            .map_err(|e| ShareError::Clipboard(e.to_string()))
    }
}

#[component]
pub fn SharePopup(profile: WrapProfile, png: Arc<Vec<u8>>, on_close: EventHandler<()>) -> Element {
    let config = use_config();
    let mut toasts = use_toasts();

    let flow = use_hook(|| {
        let downloader = Arc::new(DirectoryDownloader::new(config.download_dir()));
        ShareFlow::new(config.share.clone(), downloader).with_clipboard(Arc::new(DesktopClipboard))
    });
    let payload = use_hook(|| flow.payload(&profile));
    let filename = use_hook(|| export_filename(&profile));

    // Owns the pending site open; replacing or dropping it cancels the open
    let mut outcome: Signal<Option<ShareOutcome>> = use_signal(|| None);
    let mut native_checked = use_signal(|| false);

    use_hook({
        let flow = flow.clone();
        let payload = payload.clone();
        let filename = filename.clone();
        let png = png.clone();
        move || {
            spawn(async move {
                match flow.try_native(&payload, &png, &filename).await {
                    Ok(true) => {
                        push_notice(&mut toasts, ShareOutcome::Native.notice());
                        on_close.call(());
                    }
                    Ok(false) => native_checked.set(true),
                    Err(e) => {
                        tracing::warn!("Native share failed: {}", e);
                        native_checked.set(true);
                    }
                }
            });
        }
    });

    let share_to = {
        let flow = flow.clone();
        let payload = payload.clone();
        let filename = filename.clone();
        let png = png.clone();
        move |target: ShareTarget| {
            let flow = flow.clone();
            let payload = payload.clone();
            let filename = filename.clone();
            let png = png.clone();
            spawn(async move {
                match flow.share_to(target, &payload, &png, &filename).await {
                    Ok(result) => {
                        push_notice(&mut toasts, result.notice());
                        if target.kind() == ShareKind::Image {
                            outcome.set(Some(result));
                        }
                    }
                    Err(e) => {
                        tracing::error!("Share to {} failed: {}", target, e);
                        push_notice(
                            &mut toasts,
                            Notice::destructive("Share failed", e.to_string()),
                        );
                    }
                }
            });
        }
    };

    let copy_link = {
        let flow = flow.clone();
        let payload = payload.clone();
        move |_| match flow.copy_link(&payload) {
            Ok(notice) => push_notice(&mut toasts, notice),
            Err(e) => push_notice(&mut toasts, Notice::destructive("Copy failed", e.to_string())),
        }
    };

    let close = move |_| {
        if let Some(pending) = outcome.write().take() {
            tracing::debug!(?pending, "Share instructions dismissed");
        }
        on_close.call(());
    };

    let steps = outcome.read().as_ref().map(ShareOutcome::steps);

    rsx! {
        div { class: "modal-backdrop", onclick: close,
            div {
                class: "modal share-popup",
                onclick: move |evt| evt.stop_propagation(),

                header { class: "modal-header",
                    h2 { class: "section-header", "Share your wrap" }
                    p { class: "body-text", "{payload.title}" }
                }

                if let Some(steps) = steps {
                    ol { class: "share-steps",
                        for step in steps {
                            li { "{step}" }
                        }
                    }
                    button { class: "btn-primary", onclick: close, "Got it" }
                } else if native_checked() {
                    div { class: "share-targets",
                        for target in ShareTarget::ALL {
                            button {
                                key: "{target.key()}",
                                class: "share-target share-{target.key()}",
                                onclick: {
                                    let share_to = share_to.clone();
                                    move |_| share_to(target)
                                },
                                "{target.name()}"
                            }
                        }
                    }
                    button { class: "btn-ghost", onclick: copy_link, "Copy link" }
                } else {
                    p { class: "body-text", "Opening share sheet..." }
                }
            }
        }
    }
}
