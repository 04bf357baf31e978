//! App chrome styling. Card palettes come from the core theme registry.

mod styles;

pub use styles::GLOBAL_STYLES;
