//! Core types for Software Engineer Wrap

mod options;
mod period;
mod personality;
mod profile;
mod selection;

pub use options::{APP_OPTIONS, BUDDY_OPTIONS, IDE_OPTIONS, LANGUAGE_OPTIONS, ROLE_OPTIONS};
pub use period::{month_name, PeriodSelection, PeriodType};
pub use personality::Personality;
pub use profile::{parse_count, WrapProfile};
pub(crate) use profile::non_blank;
pub use selection::Selection;
