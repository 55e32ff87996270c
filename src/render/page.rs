//! Pre-compiled page renderer.

use minijinja::{Environment, Error};

use super::context::PageContext;
use super::templates;
use crate::model::AppState;
use crate::style::Surface;

const PREVIEW_TEMPLATE: &str = "preview.html";
const PUBLIC_TEMPLATE: &str = "profile.html";

/// Renders the editor preview and the public page from an [`AppState`].
///
/// Templates are compiled once at construction and reused. Both render
/// paths build their context through [`PageContext::new`], so every
/// filtering and styling rule is shared; only the [`Surface`] differs.
///
/// # Example
///
/// ```rust
/// use linkpulse::model::AppState;
/// use linkpulse::render::PageRenderer;
///
/// let renderer = PageRenderer::new().unwrap();
/// let html = renderer.render_public(&AppState::default()).unwrap();
/// assert!(html.contains("@usuario"));
/// ```
pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    /// Creates a renderer with both page templates compiled.
    ///
    /// # Errors
    ///
    /// Returns an error if a template fails to compile.
    pub fn new() -> Result<Self, Error> {
        let mut env = Environment::new();
        env.add_template_owned(PREVIEW_TEMPLATE.to_string(), templates::PREVIEW.to_string())?;
        env.add_template_owned(PUBLIC_TEMPLATE.to_string(), templates::PUBLIC.to_string())?;
        Ok(Self { env })
    }

    /// Renders the phone-frame preview markup for the editor.
    pub fn render_preview(&self, state: &AppState) -> Result<String, Error> {
        self.render(PREVIEW_TEMPLATE, state, Surface::Preview)
    }

    /// Renders the full public page document.
    pub fn render_public(&self, state: &AppState) -> Result<String, Error> {
        self.render(PUBLIC_TEMPLATE, state, Surface::Public)
    }

    fn render(&self, name: &str, state: &AppState, surface: Surface) -> Result<String, Error> {
        let context = PageContext::new(state, surface);
        let template = self.env.get_template(name)?;
        template.render(&context)
    }
}
