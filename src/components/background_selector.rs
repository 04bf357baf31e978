//! Background Selector Component
//!
//! Theme default, one of the personality's templates, or an uploaded image.
//! An upload wins over a template when both are set.

use devwrap_core::theme::templates_for;
use devwrap_core::upload::load_image_file;
use devwrap_core::{FieldUpdate, Notice, Personality};
use dioxus::prelude::*;
use rfd::FileDialog;

use crate::context::{push_notice, use_toasts};

#[component]
pub fn BackgroundSelector(
    personality: Personality,
    /// Selected template URL
    template: Option<String>,
    /// Uploaded image as a data URI
    custom: Option<String>,
    on_change: EventHandler<FieldUpdate>,
) -> Element {
    let mut toasts = use_toasts();
    let mut uploading = use_signal(|| false);

    let handle_upload = move |_| {
        uploading.set(true);

        spawn(async move {
            // Blocking dialog and file read, kept off the UI thread
            let picked = tokio::task::spawn_blocking(|| {
                FileDialog::new()
                    .add_filter("images", &["png", "jpg", "jpeg", "gif", "webp", "svg"])
                    .set_title("Choose a background")
                    .pick_file()
                    .map(load_image_file)
            })
            .await;

            match picked {
                Ok(Some(Ok(uri))) => on_change.call(FieldUpdate::CustomImage(Some(uri))),
                Ok(Some(Err(e))) => {
                    tracing::warn!("Background upload failed: {}", e);
                    push_notice(&mut toasts, Notice::destructive("Upload failed", e.to_string()));
                }
                Ok(None) => {}
                Err(e) => tracing::error!("File picker error: {}", e),
            }
            uploading.set(false);
        });
    };

    let using_default = template.is_none() && custom.is_none();

    rsx! {
        div { class: "background-selector",
            div { class: "template-grid",
                button {
                    r#type: "button",
                    class: if using_default { "template-option active" } else { "template-option" },
                    onclick: move |_| on_change.call(FieldUpdate::ClearBackground),
                    span { class: "template-name", "Theme default" }
                }
                for t in templates_for(personality) {
                    button {
                        key: "{t.id}",
                        r#type: "button",
                        class: if custom.is_none() && template.as_deref() == Some(t.url) { "template-option active" } else { "template-option" },
                        style: "background-image: url('{t.url}');",
                        onclick: move |_| on_change.call(FieldUpdate::Template(Some(t.url.to_string()))),
                        span { class: "template-name", "{t.name}" }
                    }
                }
            }

            div { class: "upload-row",
                button {
                    r#type: "button",
                    class: "btn-secondary",
                    disabled: uploading(),
                    onclick: handle_upload,
                    if uploading() { "Loading..." } else { "Upload your own" }
                }
                if let Some(uri) = custom.as_ref() {
                    div { class: "upload-preview", style: "background-image: url('{uri}');" }
                    button {
                        r#type: "button",
                        class: "btn-ghost",
                        onclick: move |_| on_change.call(FieldUpdate::CustomImage(None)),
                        "Remove"
                    }
                }
            }
        }
    }
}
