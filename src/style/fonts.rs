//! The font catalog.

/// A named entry in the catalog: human name to font-family spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontFace {
    pub name: &'static str,
    pub family: &'static str,
}

/// Spec returned for names the catalog does not know.
pub const FALLBACK_FAMILY: &str = "sans-serif";

/// The fixed, ordered catalog of offered fonts.
pub const FONTS: &[FontFace] = &[
    FontFace {
        name: "DM Sans",
        family: "'DM Sans', sans-serif",
    },
    FontFace {
        name: "Inter",
        family: "'Inter', sans-serif",
    },
    FontFace {
        name: "Roboto Mono",
        family: "'Roboto Mono', monospace",
    },
    FontFace {
        name: "Playfair Display",
        family: "'Playfair Display', serif",
    },
];

/// Resolves a font name to its family spec.
///
/// Total over all strings: unknown names (user-typed, or left over from a
/// catalog that no longer lists them) get [`FALLBACK_FAMILY`]. Never fails.
///
/// ```rust
/// use linkpulse::style::resolve_font;
///
/// assert_eq!(resolve_font("Inter"), "'Inter', sans-serif");
/// assert_eq!(resolve_font("Comic Chaos"), "sans-serif");
/// ```
pub fn resolve_font(name: &str) -> &'static str {
    FONTS
        .iter()
        .find(|font| font.name == name)
        .map(|font| font.family)
        .unwrap_or(FALLBACK_FAMILY)
}
