//! Design configuration: the style parameters controlling presentation.
//!
//! Every enum here deserializes from any string. Unrecognized names degrade
//! to the documented safe default instead of failing, so a legacy or
//! hand-edited snapshot can never take the session down.

use serde::{Deserialize, Serialize};

/// Overall arrangement of the profile header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ProfileLayout {
    #[default]
    Classic,
    Hero,
}

impl ProfileLayout {
    pub fn from_name(name: &str) -> Self {
        match name {
            "hero" => Self::Hero,
            _ => Self::Classic,
        }
    }
}

impl From<String> for ProfileLayout {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

/// Avatar sizing in the profile header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum HeaderSize {
    #[default]
    Small,
    Large,
}

impl HeaderSize {
    pub fn from_name(name: &str) -> Self {
        match name {
            "large" => Self::Large,
            _ => Self::Small,
        }
    }
}

impl From<String> for HeaderSize {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

/// Whether the page title renders as text or a logo image.
///
/// Carried in the schema for forward compatibility. No resolution rule
/// consults it yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum TitleStyle {
    #[default]
    Text,
    Logo,
}

impl TitleStyle {
    pub fn from_name(name: &str) -> Self {
        match name {
            "logo" => Self::Logo,
            _ => Self::Text,
        }
    }
}

impl From<String> for TitleStyle {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

/// Cosmetic grouping for the wallpaper picker.
///
/// Advisory metadata only: rendering always uses [`DesignConfig::wallpaper_value`]
/// verbatim, whatever the type says. The pairing is never cross-checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum WallpaperType {
    #[default]
    Fill,
    Gradient,
    Blur,
    Pattern,
    Image,
}

impl WallpaperType {
    pub fn from_name(name: &str) -> Self {
        match name {
            "gradient" => Self::Gradient,
            "blur" => Self::Blur,
            "pattern" => Self::Pattern,
            "image" => Self::Image,
            _ => Self::Fill,
        }
    }
}

impl From<String> for WallpaperType {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

/// Visual treatment of link buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ButtonType {
    #[default]
    Solid,
    Glass,
    Outline,
}

impl ButtonType {
    pub fn from_name(name: &str) -> Self {
        match name {
            "glass" => Self::Glass,
            "outline" => Self::Outline,
            _ => Self::Solid,
        }
    }
}

impl From<String> for ButtonType {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

/// Drop shadow level for link buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ButtonShadow {
    #[default]
    None,
    Subtle,
    Strong,
    Hard,
}

impl ButtonShadow {
    /// Parses a shadow name. Anything outside the four known levels is
    /// treated as `None`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "subtle" => Self::Subtle,
            "strong" => Self::Strong,
            "hard" => Self::Hard,
            _ => Self::None,
        }
    }
}

impl From<String> for ButtonShadow {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

/// The single source of truth for page presentation.
///
/// Color fields and `wallpaper_value` hold raw CSS values and are passed
/// through to rendering unvalidated. `button_rounding` is kept in the
/// 0 to 30 pixel range by the editing session; the resolver re-clamps it
/// for values constructed directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DesignConfig {
    pub profile_layout: ProfileLayout,
    pub header_size: HeaderSize,
    pub title_style: TitleStyle,
    pub title_font: String,
    pub title_color: String,
    /// Body font for the bio and link buttons.
    pub font_family: String,
    pub page_text_color: String,
    pub wallpaper_type: WallpaperType,
    pub wallpaper_value: String,
    pub button_type: ButtonType,
    pub button_rounding: i32,
    pub button_shadow: ButtonShadow,
    pub button_color: String,
    pub button_text_color: String,
}

impl Default for DesignConfig {
    fn default() -> Self {
        Self {
            profile_layout: ProfileLayout::Classic,
            header_size: HeaderSize::Small,
            title_style: TitleStyle::Text,
            title_font: "DM Sans".to_string(),
            title_color: "#18181b".to_string(),
            font_family: "Inter".to_string(),
            page_text_color: "#71717a".to_string(),
            wallpaper_type: WallpaperType::Fill,
            wallpaper_value: "#F8F9FB".to_string(),
            button_type: ButtonType::Solid,
            button_rounding: 16,
            button_shadow: ButtonShadow::Subtle,
            button_color: "#18181b".to_string(),
            button_text_color: "#ffffff".to_string(),
        }
    }
}
