//! Wrap page - the finished card with download and share.
//!
//! Both actions capture the card at its live on-screen size; a card that
//! has not mounted yet exports as an empty box and fails cleanly.

use std::rc::Rc;
use std::sync::Arc;

use devwrap_core::{
    export, export_filename, render, CardBounds, ExportError, ExportedImage, HttpFetcher, Notice,
    OfflineFetcher, ResourceFetcher, SessionStore, WrapConfig,
};
use dioxus::prelude::*;
use rfd::FileDialog;

use crate::app::Route;
use crate::components::{SharePopup, WrapCard};
use crate::context::{push_notice, use_config, use_session, use_toasts};

#[component]
pub fn Wrap() -> Element {
    let navigator = use_navigator();
    let session = use_session();
    let config = use_config();
    let mut toasts = use_toasts();

    let profile = use_hook(move || session.load_profile().unwrap_or_default());
    let card = use_hook({
        let profile = profile.clone();
        move || render(&profile)
    });

    let mut card_node: Signal<Option<Rc<MountedData>>> = use_signal(|| None);
    let mut busy = use_signal(|| false);
    let mut share_png: Signal<Option<Arc<Vec<u8>>>> = use_signal(|| None);

    let download = {
        let card = card.clone();
        let config = config.clone();
        let filename = export_filename(&profile);
        move |_| {
            if busy() {
                return;
            }
            busy.set(true);
            let card = card.clone();
            let config = config.clone();
            let filename = filename.clone();
            spawn(async move {
                match capture(&card, card_node(), &config).await {
                    Ok(image) => {
                        if let Some(notice) = save_png(image, filename, &config).await {
                            push_notice(&mut toasts, notice);
                        }
                    }
                    Err(e) => push_notice(&mut toasts, Notice::download_failed(&e)),
                }
                busy.set(false);
            });
        }
    };

    let share = {
        let card = card.clone();
        let config = config.clone();
        move |_| {
            if busy() {
                return;
            }
            busy.set(true);
            let card = card.clone();
            let config = config.clone();
            spawn(async move {
                match capture(&card, card_node(), &config).await {
                    Ok(image) => share_png.set(Some(Arc::new(image.into_png()))),
                    Err(e) => push_notice(&mut toasts, Notice::download_failed(&e)),
                }
                busy.set(false);
            });
        }
    };

    rsx! {
        main { class: "wrap-page",
            WrapCard {
                card: card.clone(),
                duration: config.animation.duration,
                frame_interval: config.animation.frame_interval,
                on_mounted: move |node: Rc<MountedData>| card_node.set(Some(node)),
            }

            div { class: "wrap-actions",
                button {
                    class: "btn-ghost",
                    onclick: move |_| { navigator.push(Route::Create {}); },
                    "Edit"
                }
                button {
                    class: "btn-primary",
                    disabled: busy(),
                    onclick: download,
                    if busy() { "Working..." } else { "Download PNG" }
                }
                button {
                    class: "btn-secondary",
                    disabled: busy(),
                    onclick: share,
                    "Share"
                }
            }

            if let Some(png) = share_png() {
                SharePopup {
                    profile: profile.clone(),
                    png,
                    on_close: move |_| share_png.set(None),
                }
            }
        }
    }
}

/// Rasterize the card at the size it currently has on screen
async fn capture(
    card: &devwrap_core::CardView,
    node: Option<Rc<MountedData>>,
    config: &WrapConfig,
) -> Result<ExportedImage, ExportError> {
    let bounds = match node {
        Some(node) => match node.get_client_rect().await {
            Ok(rect) => CardBounds::new(rect.width(), rect.height()),
            Err(e) => {
                tracing::warn!("Could not measure card: {:?}", e);
                CardBounds::new(0.0, 0.0)
            }
        },
        None => CardBounds::new(0.0, 0.0),
    };

    let fetcher: Box<dyn ResourceFetcher> = match HttpFetcher::new(config.export.fetch_timeout) {
        Ok(http) => Box::new(http),
        Err(e) => {
            tracing::warn!("HTTP client unavailable, exporting without remote images: {}", e);
            Box::new(OfflineFetcher)
        }
    };

    export(card, bounds, fetcher.as_ref(), &config.export).await
}

/// Ask where to save and write the PNG. `None` when the dialog is dismissed.
async fn save_png(image: ExportedImage, filename: String, config: &WrapConfig) -> Option<Notice> {
    let dir = config.download_dir();
    let picked = tokio::task::spawn_blocking(move || {
        FileDialog::new()
            .add_filter("PNG image", &["png"])
            .set_directory(dir)
            .set_file_name(filename)
            .set_title("Save wrap")
            .save_file()
    })
    .await;

    let path = match picked {
        Ok(Some(path)) => path,
        Ok(None) => return None,
        Err(e) => {
            tracing::error!("Save dialog failed: {}", e);
            return Some(Notice::destructive("Download failed", e.to_string()));
        }
    };

    match tokio::fs::write(&path, image.png()).await {
        Ok(()) => {
            tracing::info!(path = %path.display(), "Wrap downloaded");
            Some(Notice::downloaded())
        }
        Err(e) => {
            tracing::error!("Failed to write {}: {}", path.display(), e);
            Some(Notice::destructive("Download failed", e.to_string()))
        }
    }
}
