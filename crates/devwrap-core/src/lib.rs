//! Software Engineer Wrap Core Library
//!
//! Personal coding stats rendered as a shareable, themed card.
//!
//! ## Overview
//!
//! A user picks a period (a year or a single month), fills in their stats
//! (lines of code, commits, coffees, tools, role) and a visual personality.
//! The library turns that profile into a [`CardView`], animates the numeric
//! cells with an ease-out counter, and rasterizes the card into a PNG that can
//! be downloaded or shared.
//!
//! ## Pipeline
//!
//! ```text
//! FormStore ──submit──▶ SessionStore ──load──▶ WrapProfile
//!                                                  │
//!                                   render() ◀─────┘
//!                                      │
//!                                  CardView ──▶ export() ──▶ PNG bytes
//!                                      │                        │
//!                               CounterAnimation           ShareFlow
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use devwrap_core::{
//!     export, export_filename, render, CardBounds, FormStore, MemorySessionStore, OfflineFetcher,
//! };
//!
//! let store = MemorySessionStore::new();
//! let mut form = FormStore::load(&store);
//! form.set_stat(devwrap_core::StatField::LinesOfCode, "25000");
//! form.submit(&store)?;
//!
//! let card = render(form.profile());
//! let image = export(&card, CardBounds::DESIGN, &OfflineFetcher, &Default::default()).await?;
//! std::fs::write(export_filename(form.profile()), image.png())?;
//! ```

pub mod config;
pub mod counter;
pub mod error;
pub mod export;
pub mod form;
pub mod icons;
pub mod logging;
pub mod notice;
pub mod render;
pub mod schedule;
pub mod share;
pub mod storage;
pub mod theme;
pub mod types;
pub mod upload;

// Re-exports
pub use config::{AnimationOptions, ExportOptions, ShareOptions, WrapConfig};
pub use counter::{format_compact, CounterAnimation, CounterState};
pub use error::{ExportError, ResourceError, ShareError, StorageError, WrapError, WrapResult};
pub use export::{
    export, export_filename, CardBounds, ExportedImage, HttpFetcher, OfflineFetcher,
    ResourceFetcher,
};
pub use form::{FieldUpdate, FormStore, StatField, ToggleOutcome};
pub use icons::{AppIcon, LanguageIcon};
pub use logging::LogFormat;
pub use notice::{Notice, NoticeKind};
pub use render::{render, CardView, IconStrip, PeriodLabel, StatCell, StatValue};
pub use schedule::TaskHandle;
pub use share::{ShareFlow, ShareOutcome, SharePayload, ShareTarget};
pub use storage::{FileSessionStore, MemorySessionStore, SessionStore};
pub use theme::{lookup, BackgroundTemplate, ThemeConfig};
pub use types::*;
