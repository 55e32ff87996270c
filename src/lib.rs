//! LinkPulse: a link-in-bio page builder.
//!
//! A user edits a profile, a list of links, and visual theming; the crate
//! renders both a live editor preview and a shareable public page from the
//! same state. The heart of it is the [`style`] module, the pure mapping
//! from a [`DesignConfig`] to concrete presentation that keeps the two
//! surfaces visually identical.
//!
//! - [`model`]: profile, links, design configuration, the [`AppState`] root
//! - [`theme`]: named presets that shallow-merge over the current design
//! - [`style`]: the font catalog and the style resolver
//! - [`editor`]: the editing session, committing a snapshot on every change
//! - [`enhance`]: the contract with the external copy-suggestion service
//! - [`render`]: minijinja templates for the preview and the public page
//! - [`store`]: whole-state JSON persistence under a versioned key
//!
//! # Example
//!
//! ```rust
//! use linkpulse::editor::EditorSession;
//! use linkpulse::render::PageRenderer;
//! use linkpulse::store::StateStore;
//! use linkpulse::theme::preset_by_id;
//!
//! # let dir = tempfile::tempdir().unwrap();
//! let store = StateStore::at(dir.path().join("state.json"));
//! let mut session = EditorSession::open(store);
//!
//! session.set_username("Ada Lovelace");
//! session.apply_preset(preset_by_id("neon-matrix").unwrap());
//!
//! let renderer = PageRenderer::new().unwrap();
//! let page = renderer.render_public(session.state()).unwrap();
//! assert!(page.contains("@adalovelace"));
//! ```

pub mod editor;
pub mod enhance;
pub mod model;
pub mod render;
pub mod store;
pub mod style;
pub mod theme;

pub use editor::EditorSession;
pub use enhance::{Enhancement, EnhancementService};
pub use model::{
    AppState, ButtonShadow, ButtonType, DesignConfig, HeaderSize, LinkItem, ProfileLayout,
    SocialLink, SocialPlatform, TitleStyle, UserProfile, WallpaperType,
};
pub use render::{PageContext, PageRenderer};
pub use store::{StateStore, StoreError, STORAGE_KEY};
pub use style::{resolve, resolve_font, ResolvedStyle, Surface};
pub use theme::{preset_by_id, PresetDesign, ThemePreset, THEME_PRESETS};
