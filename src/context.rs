//! Context hooks for the desktop app.
//!
//! ## Usage
//!
//! ```ignore
//! let session = use_session();
//! let profile = session.load_profile().unwrap_or_default();
//!
//! let mut toasts = use_toasts();
//! push_notice(&mut toasts, Notice::downloaded());
//! ```

use std::sync::Arc;

use devwrap_core::{MemorySessionStore, Notice, WrapConfig};
use dioxus::prelude::*;

/// Session store shared by every page
pub type SharedSession = Arc<MemorySessionStore>;

/// Hook to access the wrap session.
pub fn use_session() -> SharedSession {
    use_context::<SharedSession>()
}

/// Hook to access the toast queue.
pub fn use_toasts() -> Signal<Vec<Notice>> {
    use_context::<Signal<Vec<Notice>>>()
}

/// Hook to access the runtime configuration.
pub fn use_config() -> WrapConfig {
    use_context::<WrapConfig>()
}

/// Queue a notice for the toast stack. A notice already on screen is not repeated.
pub fn push_notice(toasts: &mut Signal<Vec<Notice>>, notice: Notice) {
    tracing::debug!(%notice, "Toast");
    let mut queue = toasts.write();
    if !queue.contains(&notice) {
        queue.push(notice);
    }
}
