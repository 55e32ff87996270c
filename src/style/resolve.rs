//! The style resolver: design configuration to concrete presentation.
//!
//! [`resolve`] is the one place where design parameters become visual
//! attributes. Both renderers call it on every redraw, so it is pure,
//! deterministic, and total: no I/O, no caching, no failure path. Values
//! outside the legal domain degrade to safe defaults instead of erroring.

use std::fmt;

use super::fonts::resolve_font;
use crate::model::{ButtonShadow, ButtonType, DesignConfig};

/// Which rendering context the resolution is for.
///
/// The two surfaces share every rule; only the glass intensity, the glass
/// blur radius, and the hard shadow offset differ, the public page being
/// the slightly heavier treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    /// The phone-frame preview inside the editor.
    Preview,
    /// The shareable public page.
    Public,
}

impl Surface {
    fn glass_fill(self) -> &'static str {
        match self {
            Self::Preview => "rgba(255,255,255,0.1)",
            Self::Public => "rgba(255,255,255,0.15)",
        }
    }

    fn glass_blur(self) -> Pixels {
        match self {
            Self::Preview => Pixels(12),
            Self::Public => Pixels(16),
        }
    }

    fn hard_shadow(self) -> &'static str {
        match self {
            Self::Preview => "6px 6px 0px 0px rgba(0,0,0,0.8)",
            Self::Public => "8px 8px 0px 0px rgba(0,0,0,0.8)",
        }
    }
}

/// A pixel-denominated length. Displays with its unit attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Pixels(pub u32);

impl fmt::Display for Pixels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.0)
    }
}

/// Upper bound of the button rounding domain, in pixels.
pub const MAX_BUTTON_ROUNDING: i32 = 30;

/// Button face fill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonFill {
    Color(String),
    Transparent,
}

impl ButtonFill {
    pub fn css(&self) -> &str {
        match self {
            Self::Color(color) => color,
            Self::Transparent => "transparent",
        }
    }
}

/// Button border stroke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonBorder {
    None,
    Solid { width: Pixels, color: String },
}

impl ButtonBorder {
    pub fn css(&self) -> String {
        match self {
            Self::None => "none".to_string(),
            Self::Solid { width, color } => format!("{width} solid {color}"),
        }
    }
}

/// Effect applied behind the button face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backdrop {
    None,
    Blur(Pixels),
}

impl Backdrop {
    pub fn css(&self) -> String {
        match self {
            Self::None => "none".to_string(),
            Self::Blur(radius) => format!("blur({radius})"),
        }
    }
}

/// The visual make-up of a link button: fill, border, backdrop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonVisual {
    pub fill: ButtonFill,
    pub border: ButtonBorder,
    pub backdrop: Backdrop,
}

/// Renderer-ready presentation attributes for one surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedStyle {
    /// The page background, passed through from `wallpaper_value` verbatim.
    /// `wallpaper_type` is not consulted.
    pub background: String,
    pub button: ButtonVisual,
    /// CSS box-shadow for link buttons.
    pub shadow: &'static str,
    /// Button corner radius, clamped to `[0, MAX_BUTTON_ROUNDING]`.
    pub rounding: Pixels,
    pub title_font: &'static str,
    pub body_font: &'static str,
}

/// Resolves a design configuration into concrete presentation attributes.
///
/// Idempotent and side-effect free: equal inputs give structurally equal
/// output, so callers re-resolve on every redraw rather than caching.
///
/// ```rust
/// use linkpulse::model::DesignConfig;
/// use linkpulse::style::{resolve, Surface};
///
/// let design = DesignConfig::default();
/// assert_eq!(resolve(&design, Surface::Public), resolve(&design, Surface::Public));
/// ```
pub fn resolve(design: &DesignConfig, surface: Surface) -> ResolvedStyle {
    let button = match design.button_type {
        ButtonType::Solid => ButtonVisual {
            fill: ButtonFill::Color(design.button_color.clone()),
            border: ButtonBorder::None,
            backdrop: Backdrop::None,
        },
        ButtonType::Glass => ButtonVisual {
            fill: ButtonFill::Color(surface.glass_fill().to_string()),
            border: ButtonBorder::Solid {
                width: Pixels(1),
                color: "rgba(255,255,255,0.2)".to_string(),
            },
            backdrop: Backdrop::Blur(surface.glass_blur()),
        },
        ButtonType::Outline => ButtonVisual {
            fill: ButtonFill::Transparent,
            border: ButtonBorder::Solid {
                width: Pixels(2),
                color: design.button_color.clone(),
            },
            backdrop: Backdrop::None,
        },
    };

    ResolvedStyle {
        background: design.wallpaper_value.clone(),
        button,
        shadow: shadow_spec(design.button_shadow, surface),
        rounding: clamp_rounding(design.button_rounding),
        title_font: resolve_font(&design.title_font),
        body_font: resolve_font(&design.font_family),
    }
}

fn shadow_spec(shadow: ButtonShadow, surface: Surface) -> &'static str {
    match shadow {
        ButtonShadow::None => "none",
        ButtonShadow::Subtle => "0 4px 6px -1px rgba(0,0,0,0.05)",
        ButtonShadow::Strong => "0 10px 25px -5px rgba(0,0,0,0.15)",
        ButtonShadow::Hard => surface.hard_shadow(),
    }
}

fn clamp_rounding(rounding: i32) -> Pixels {
    Pixels(rounding.clamp(0, MAX_BUTTON_ROUNDING) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ButtonShadow;

    #[test]
    fn test_resolution_is_idempotent() {
        let design = DesignConfig::default();
        for surface in [Surface::Preview, Surface::Public] {
            assert_eq!(resolve(&design, surface), resolve(&design, surface));
        }
    }

    #[test]
    fn test_solid_button() {
        let design = DesignConfig {
            button_type: ButtonType::Solid,
            button_color: "#334155".to_string(),
            ..DesignConfig::default()
        };
        let resolved = resolve(&design, Surface::Public);
        assert_eq!(resolved.button.fill.css(), "#334155");
        assert_eq!(resolved.button.border, ButtonBorder::None);
        assert_eq!(resolved.button.backdrop, Backdrop::None);
    }

    #[test]
    fn test_glass_button_differs_per_surface() {
        let design = DesignConfig {
            button_type: ButtonType::Glass,
            ..DesignConfig::default()
        };
        let preview = resolve(&design, Surface::Preview);
        let public = resolve(&design, Surface::Public);

        assert_eq!(preview.button.fill.css(), "rgba(255,255,255,0.1)");
        assert_eq!(public.button.fill.css(), "rgba(255,255,255,0.15)");
        assert_eq!(preview.button.backdrop.css(), "blur(12px)");
        assert_eq!(public.button.backdrop.css(), "blur(16px)");
        assert_eq!(
            preview.button.border.css(),
            "1px solid rgba(255,255,255,0.2)"
        );
        assert_eq!(preview.button.border, public.button.border);
    }

    #[test]
    fn test_outline_button_uses_button_color_for_stroke() {
        let design = DesignConfig {
            button_type: ButtonType::Outline,
            button_color: "#00ff41".to_string(),
            ..DesignConfig::default()
        };
        let resolved = resolve(&design, Surface::Preview);
        assert_eq!(resolved.button.fill, ButtonFill::Transparent);
        assert_eq!(resolved.button.border.css(), "2px solid #00ff41");
        assert_eq!(resolved.button.backdrop, Backdrop::None);
    }

    #[test]
    fn test_shadow_levels() {
        let mut design = DesignConfig::default();

        design.button_shadow = ButtonShadow::None;
        assert_eq!(resolve(&design, Surface::Public).shadow, "none");

        design.button_shadow = ButtonShadow::Subtle;
        assert_eq!(
            resolve(&design, Surface::Public).shadow,
            "0 4px 6px -1px rgba(0,0,0,0.05)"
        );

        design.button_shadow = ButtonShadow::Strong;
        assert_eq!(
            resolve(&design, Surface::Public).shadow,
            "0 10px 25px -5px rgba(0,0,0,0.15)"
        );

        design.button_shadow = ButtonShadow::Hard;
        assert_eq!(
            resolve(&design, Surface::Preview).shadow,
            "6px 6px 0px 0px rgba(0,0,0,0.8)"
        );
        assert_eq!(
            resolve(&design, Surface::Public).shadow,
            "8px 8px 0px 0px rgba(0,0,0,0.8)"
        );
    }

    #[test]
    fn test_unrecognized_shadow_name_resolves_like_none() {
        let mut design = DesignConfig::default();
        design.button_shadow = ButtonShadow::from_name("dramatic");
        let unknown = resolve(&design, Surface::Public);
        design.button_shadow = ButtonShadow::None;
        let none = resolve(&design, Surface::Public);
        assert_eq!(unknown.shadow, none.shadow);
    }

    #[test]
    fn test_rounding_clamps_both_ends() {
        let mut design = DesignConfig::default();

        design.button_rounding = -5;
        assert_eq!(resolve(&design, Surface::Preview).rounding, Pixels(0));

        design.button_rounding = 100;
        assert_eq!(resolve(&design, Surface::Preview).rounding, Pixels(30));

        design.button_rounding = 16;
        assert_eq!(resolve(&design, Surface::Preview).rounding, Pixels(16));
    }

    #[test]
    fn test_background_is_verbatim_passthrough() {
        let design = DesignConfig {
            wallpaper_value: "linear-gradient(to top, #f97316, #ef4444)".to_string(),
            ..DesignConfig::default()
        };
        // Same output whatever wallpaper_type claims.
        for wallpaper_type in ["fill", "gradient", "blur", "pattern", "image", "junk"] {
            let mut tagged = design.clone();
            tagged.wallpaper_type = crate::model::WallpaperType::from_name(wallpaper_type);
            assert_eq!(
                resolve(&tagged, Surface::Public).background,
                "linear-gradient(to top, #f97316, #ef4444)"
            );
        }
    }

    #[test]
    fn test_fonts_resolve_through_catalog() {
        let design = DesignConfig {
            title_font: "Playfair Display".to_string(),
            font_family: "No Such Font".to_string(),
            ..DesignConfig::default()
        };
        let resolved = resolve(&design, Surface::Public);
        assert_eq!(resolved.title_font, "'Playfair Display', serif");
        assert_eq!(resolved.body_font, "sans-serif");
    }

    #[test]
    fn test_pixels_display() {
        assert_eq!(Pixels(0).to_string(), "0px");
        assert_eq!(Pixels(30).to_string(), "30px");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::model::{ButtonShadow, ButtonType, WallpaperType};
    use proptest::prelude::*;

    fn arb_design() -> impl Strategy<Value = DesignConfig> {
        (
            prop_oneof![
                Just(ButtonType::Solid),
                Just(ButtonType::Glass),
                Just(ButtonType::Outline),
            ],
            prop_oneof![
                Just(ButtonShadow::None),
                Just(ButtonShadow::Subtle),
                Just(ButtonShadow::Strong),
                Just(ButtonShadow::Hard),
            ],
            any::<i32>(),
            "[#a-z0-9(),. ]{0,40}",
            "[#a-z0-9]{0,12}",
            "[A-Za-z ]{0,20}",
        )
            .prop_map(
                |(button_type, button_shadow, rounding, wallpaper, color, font)| DesignConfig {
                    button_type,
                    button_shadow,
                    button_rounding: rounding,
                    wallpaper_value: wallpaper,
                    button_color: color,
                    title_font: font.clone(),
                    font_family: font,
                    ..DesignConfig::default()
                },
            )
    }

    proptest! {
        #[test]
        fn resolution_is_deterministic(design in arb_design()) {
            for surface in [Surface::Preview, Surface::Public] {
                prop_assert_eq!(resolve(&design, surface), resolve(&design, surface));
            }
        }

        #[test]
        fn rounding_always_lands_in_domain(design in arb_design()) {
            let resolved = resolve(&design, Surface::Public);
            prop_assert!(resolved.rounding <= Pixels(MAX_BUTTON_ROUNDING as u32));
        }

        #[test]
        fn unknown_shadow_names_act_as_none(name in "[a-z]{1,12}") {
            prop_assume!(!matches!(name.as_str(), "none" | "subtle" | "strong" | "hard"));
            let mut design = DesignConfig::default();
            design.button_shadow = ButtonShadow::from_name(&name);
            let unknown = resolve(&design, Surface::Public);
            design.button_shadow = ButtonShadow::None;
            prop_assert_eq!(unknown.shadow, resolve(&design, Surface::Public).shadow);
        }

        #[test]
        fn background_passthrough_ignores_type(value in "[#a-z0-9(),. %-]{0,60}") {
            for type_name in ["fill", "gradient", "blur", "pattern", "image"] {
                let design = DesignConfig {
                    wallpaper_type: WallpaperType::from_name(type_name),
                    wallpaper_value: value.clone(),
                    ..DesignConfig::default()
                };
                prop_assert_eq!(&resolve(&design, Surface::Preview).background, &value);
            }
        }
    }
}
