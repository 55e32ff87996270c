//! The built-in preset catalog.
//!
//! Process-wide constants: presets are built once and never mutated at
//! runtime. Applying one goes through [`ThemePreset::apply`].

use once_cell::sync::Lazy;

use super::preset::{PresetDesign, ThemePreset};
use crate::model::{ButtonShadow, ButtonType, WallpaperType};

/// All built-in presets, in catalog order.
pub static THEME_PRESETS: Lazy<Vec<ThemePreset>> = Lazy::new(|| {
    vec![
        ThemePreset {
            id: "midnight-luxury".to_string(),
            name: "Midnight Luxury".to_string(),
            design: PresetDesign {
                wallpaper_type: Some(WallpaperType::Fill),
                wallpaper_value: Some("#0f172a".to_string()),
                button_color: Some("#334155".to_string()),
                button_text_color: Some("#f8fafc".to_string()),
                title_color: Some("#ffffff".to_string()),
                page_text_color: Some("#94a3b8".to_string()),
                button_rounding: Some(12),
                button_shadow: Some(ButtonShadow::Strong),
                button_type: Some(ButtonType::Solid),
                ..PresetDesign::default()
            },
        },
        ThemePreset {
            id: "soft-lavender".to_string(),
            name: "Soft Lavender".to_string(),
            design: PresetDesign {
                wallpaper_type: Some(WallpaperType::Fill),
                wallpaper_value: Some("#f5f3ff".to_string()),
                button_color: Some("#8129D9".to_string()),
                button_text_color: Some("#ffffff".to_string()),
                title_color: Some("#4c1d95".to_string()),
                page_text_color: Some("#7c3aed".to_string()),
                button_rounding: Some(30),
                button_shadow: Some(ButtonShadow::Subtle),
                button_type: Some(ButtonType::Solid),
                ..PresetDesign::default()
            },
        },
        ThemePreset {
            id: "neon-matrix".to_string(),
            name: "Neon Matrix".to_string(),
            design: PresetDesign {
                wallpaper_type: Some(WallpaperType::Fill),
                wallpaper_value: Some("#000000".to_string()),
                button_color: Some("#00ff41".to_string()),
                button_text_color: Some("#000000".to_string()),
                title_color: Some("#00ff41".to_string()),
                page_text_color: Some("#00ff41".to_string()),
                button_rounding: Some(4),
                button_shadow: Some(ButtonShadow::Hard),
                font_family: Some("Roboto Mono".to_string()),
                button_type: Some(ButtonType::Solid),
                ..PresetDesign::default()
            },
        },
        ThemePreset {
            id: "glassmorphism-blue".to_string(),
            name: "Glass Ocean".to_string(),
            design: PresetDesign {
                wallpaper_type: Some(WallpaperType::Gradient),
                wallpaper_value: Some(
                    "linear-gradient(135deg, #1e3a8a 0%, #3b82f6 100%)".to_string(),
                ),
                button_color: Some("rgba(255, 255, 255, 0.1)".to_string()),
                button_text_color: Some("#ffffff".to_string()),
                title_color: Some("#ffffff".to_string()),
                page_text_color: Some("#dbeafe".to_string()),
                button_rounding: Some(16),
                button_shadow: Some(ButtonShadow::None),
                button_type: Some(ButtonType::Glass),
                ..PresetDesign::default()
            },
        },
        ThemePreset {
            id: "minimal-zen".to_string(),
            name: "Minimal Zen".to_string(),
            design: PresetDesign {
                wallpaper_type: Some(WallpaperType::Fill),
                wallpaper_value: Some("#ffffff".to_string()),
                button_color: Some("#18181b".to_string()),
                button_text_color: Some("#ffffff".to_string()),
                title_color: Some("#18181b".to_string()),
                page_text_color: Some("#71717a".to_string()),
                button_rounding: Some(0),
                button_shadow: Some(ButtonShadow::None),
                button_type: Some(ButtonType::Solid),
                ..PresetDesign::default()
            },
        },
        ThemePreset {
            id: "sunset-gradient".to_string(),
            name: "Sunset Glow".to_string(),
            design: PresetDesign {
                wallpaper_type: Some(WallpaperType::Gradient),
                wallpaper_value: Some("linear-gradient(to top, #f97316, #ef4444)".to_string()),
                button_color: Some("#ffffff".to_string()),
                button_text_color: Some("#991b1b".to_string()),
                title_color: Some("#ffffff".to_string()),
                page_text_color: Some("#fee2e2".to_string()),
                button_rounding: Some(12),
                button_shadow: Some(ButtonShadow::Strong),
                button_type: Some(ButtonType::Solid),
                ..PresetDesign::default()
            },
        },
        ThemePreset {
            id: "pastel-pink".to_string(),
            name: "Pastel Dream".to_string(),
            design: PresetDesign {
                wallpaper_type: Some(WallpaperType::Fill),
                wallpaper_value: Some("#fdf2f8".to_string()),
                button_color: Some("#f472b6".to_string()),
                button_text_color: Some("#ffffff".to_string()),
                title_color: Some("#be185d".to_string()),
                page_text_color: Some("#db2777".to_string()),
                button_rounding: Some(20),
                button_shadow: Some(ButtonShadow::Subtle),
                button_type: Some(ButtonType::Solid),
                ..PresetDesign::default()
            },
        },
        ThemePreset {
            id: "industrial-gray".to_string(),
            name: "Industrial".to_string(),
            design: PresetDesign {
                wallpaper_type: Some(WallpaperType::Fill),
                wallpaper_value: Some("#27272a".to_string()),
                button_color: Some("#fbbf24".to_string()),
                button_text_color: Some("#18181b".to_string()),
                title_color: Some("#fbbf24".to_string()),
                page_text_color: Some("#a1a1aa".to_string()),
                button_rounding: Some(4),
                button_shadow: Some(ButtonShadow::Hard),
                button_type: Some(ButtonType::Solid),
                ..PresetDesign::default()
            },
        },
    ]
});

/// Looks up a preset by its catalog id.
pub fn preset_by_id(id: &str) -> Option<&'static ThemePreset> {
    THEME_PRESETS.iter().find(|preset| preset.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DesignConfig;

    #[test]
    fn test_catalog_has_eight_presets() {
        assert_eq!(THEME_PRESETS.len(), 8);
    }

    #[test]
    fn test_catalog_ids_are_unique() {
        for (i, a) in THEME_PRESETS.iter().enumerate() {
            for b in THEME_PRESETS.iter().skip(i + 1) {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_preset_by_id() {
        let preset = preset_by_id("neon-matrix").unwrap();
        assert_eq!(preset.name, "Neon Matrix");
        assert_eq!(preset.design.font_family.as_deref(), Some("Roboto Mono"));
        assert!(preset_by_id("nope").is_none());
    }

    #[test]
    fn test_neon_matrix_keeps_unlisted_fields() {
        let current = DesignConfig::default();
        let merged = preset_by_id("neon-matrix").unwrap().apply(&current);
        assert_eq!(merged.wallpaper_value, "#000000");
        assert_eq!(merged.button_rounding, 4);
        // The preset names no title font, so the prior one survives.
        assert_eq!(merged.title_font, current.title_font);
        assert_eq!(merged.header_size, current.header_size);
    }

    #[test]
    fn test_glass_ocean_is_the_only_glass_preset() {
        let glass: Vec<_> = THEME_PRESETS
            .iter()
            .filter(|preset| preset.design.button_type == Some(crate::model::ButtonType::Glass))
            .collect();
        assert_eq!(glass.len(), 1);
        assert_eq!(glass[0].id, "glassmorphism-blue");
    }
}
