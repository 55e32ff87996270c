//! Theme presets: named partial design overrides.

use serde::{Deserialize, Serialize};

use crate::model::{
    ButtonShadow, ButtonType, DesignConfig, HeaderSize, ProfileLayout, TitleStyle, WallpaperType,
};

/// A partial [`DesignConfig`]: every field optional.
///
/// `None` means "leave the current value alone". This makes the merge
/// explicit per field, so valid-but-zero values like a rounding of 0
/// override just as reliably as any other.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PresetDesign {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_layout: Option<ProfileLayout>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_size: Option<HeaderSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_style: Option<TitleStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_font: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_text_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallpaper_type: Option<WallpaperType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallpaper_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_type: Option<ButtonType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_rounding: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_shadow: Option<ButtonShadow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_text_color: Option<String>,
}

impl PresetDesign {
    /// Shallow-merges this partial over `current`, field by field.
    ///
    /// Pure and total: absent fields keep their prior value, present fields
    /// win, nothing else changes.
    pub fn apply_to(&self, current: &DesignConfig) -> DesignConfig {
        let mut merged = current.clone();
        if let Some(value) = self.profile_layout {
            merged.profile_layout = value;
        }
        if let Some(value) = self.header_size {
            merged.header_size = value;
        }
        if let Some(value) = self.title_style {
            merged.title_style = value;
        }
        if let Some(value) = &self.title_font {
            merged.title_font = value.clone();
        }
        if let Some(value) = &self.title_color {
            merged.title_color = value.clone();
        }
        if let Some(value) = &self.font_family {
            merged.font_family = value.clone();
        }
        if let Some(value) = &self.page_text_color {
            merged.page_text_color = value.clone();
        }
        if let Some(value) = self.wallpaper_type {
            merged.wallpaper_type = value;
        }
        if let Some(value) = &self.wallpaper_value {
            merged.wallpaper_value = value.clone();
        }
        if let Some(value) = self.button_type {
            merged.button_type = value;
        }
        if let Some(value) = self.button_rounding {
            merged.button_rounding = value;
        }
        if let Some(value) = self.button_shadow {
            merged.button_shadow = value;
        }
        if let Some(value) = &self.button_color {
            merged.button_color = value.clone();
        }
        if let Some(value) = &self.button_text_color {
            merged.button_text_color = value.clone();
        }
        merged
    }
}

/// A named, immutable design bundle from the preset catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemePreset {
    pub id: String,
    pub name: String,
    pub design: PresetDesign,
}

impl ThemePreset {
    /// Applies this preset to `current`. See [`PresetDesign::apply_to`].
    pub fn apply(&self, current: &DesignConfig) -> DesignConfig {
        self.design.apply_to(current)
    }
}
