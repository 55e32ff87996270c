//! Theme presets: named bundles of partial design configuration.
//!
//! A preset overrides only the fields it names; everything else in the
//! current [`DesignConfig`](crate::model::DesignConfig) survives the merge.

mod catalog;
mod preset;

pub use catalog::{preset_by_id, THEME_PRESETS};
pub use preset::{PresetDesign, ThemePreset};
