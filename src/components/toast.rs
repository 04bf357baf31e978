//! Toast Stack Component
//!
//! Renders queued notices in the corner; each one dismisses itself.

use std::time::Duration;

use devwrap_core::{Notice, NoticeKind};
use dioxus::prelude::*;

use crate::context::use_toasts;

const TOAST_LIFETIME: Duration = Duration::from_secs(4);

#[component]
pub fn ToastStack() -> Element {
    let toasts = use_toasts();

    rsx! {
        div { class: "toast-stack",
            for notice in toasts.read().iter().cloned() {
                Toast { key: "{notice}", notice }
            }
        }
    }
}

#[component]
fn Toast(notice: Notice) -> Element {
    let mut toasts = use_toasts();

    let dismiss = {
        let notice = notice.clone();
        move || {
            let mut queue = toasts.write();
            if let Some(pos) = queue.iter().position(|n| *n == notice) {
                queue.remove(pos);
            }
        }
    };

    // Timer dies with the component if the toast is closed by hand
    use_hook({
        let mut dismiss = dismiss.clone();
        move || {
            spawn(async move {
                tokio::time::sleep(TOAST_LIFETIME).await;
                dismiss();
            });
        }
    });

    let class = match notice.kind {
        NoticeKind::Info => "toast",
        NoticeKind::Success => "toast toast-success",
        NoticeKind::Destructive => "toast toast-destructive",
    };

    rsx! {
        div { class: "{class}", role: "status",
            div { class: "toast-body",
                p { class: "toast-title", "{notice.title}" }
                p { class: "toast-description", "{notice.description}" }
            }
            button {
                class: "toast-close",
                onclick: {
                    let mut dismiss = dismiss.clone();
                    move |_| dismiss()
                },
                "×"
            }
        }
    }
}
