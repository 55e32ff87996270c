//! Style resolution: the pure mapping from design configuration to
//! renderer-ready presentation.
//!
//! This is the one piece of logic both renderers share. Keeping it here,
//! behind [`resolve`], is what keeps the editor preview and the public page
//! visually in lockstep.

mod fonts;
mod resolve;

pub use fonts::{resolve_font, FontFace, FALLBACK_FAMILY, FONTS};
pub use resolve::{
    resolve, Backdrop, ButtonBorder, ButtonFill, ButtonVisual, Pixels, ResolvedStyle, Surface,
    MAX_BUTTON_ROUNDING,
};
