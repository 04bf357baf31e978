use std::sync::Arc;

use devwrap_core::{MemorySessionStore, Notice};
use dioxus::prelude::*;

use crate::components::ToastStack;
use crate::context::SharedSession;
use crate::pages::{Create, Landing, Wrap};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Period picker
/// - `/create` - Stats form
/// - `/wrap` - Rendered card with download and share
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/create")]
    Create {},
    #[route("/wrap")]
    Wrap {},
}

/// Root application component.
///
/// Provides global styles, the session, config, toasts and routing.
#[component]
pub fn App() -> Element {
    // The session lives as long as the window
    let session: SharedSession = use_hook(|| Arc::new(MemorySessionStore::new()));
    let toasts: Signal<Vec<Notice>> = use_signal(Vec::new);

    use_context_provider(|| session);
    use_context_provider(|| toasts);
    use_context_provider(crate::get_config);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
        ToastStack {}
    }
}
