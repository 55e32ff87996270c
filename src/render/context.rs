//! The serializable view both templates render from.

use serde::Serialize;

use crate::model::{AppState, DesignConfig, HeaderSize, ProfileLayout};
use crate::style::{resolve, Surface};

/// CSS-ready style strings for one surface, derived from the resolver plus
/// the config's color passthroughs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageStyle {
    pub background: String,
    pub title_color: String,
    pub page_text_color: String,
    pub title_font: String,
    pub body_font: String,
    pub button_background: String,
    pub button_text_color: String,
    pub button_border: String,
    pub button_backdrop: String,
    pub button_shadow: String,
    pub button_radius: String,
}

impl PageStyle {
    pub fn new(design: &DesignConfig, surface: Surface) -> Self {
        let resolved = resolve(design, surface);
        Self {
            background: resolved.background,
            title_color: design.title_color.clone(),
            page_text_color: design.page_text_color.clone(),
            title_font: resolved.title_font.to_string(),
            body_font: resolved.body_font.to_string(),
            button_background: resolved.button.fill.css().to_string(),
            button_text_color: design.button_text_color.clone(),
            button_border: resolved.button.border.css(),
            button_backdrop: resolved.button.backdrop.css(),
            button_shadow: resolved.shadow.to_string(),
            button_radius: resolved.rounding.to_string(),
        }
    }
}

/// A configured social slot. Unconfigured slots never make it in here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialEntry {
    pub platform: &'static str,
    pub url: String,
}

/// An enabled link, ready for markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkEntry {
    pub id: String,
    pub title: String,
    pub url: String,
}

/// Everything a page template needs, filtered and styled for one surface.
///
/// Building the context is where the rendering rules shared by both
/// surfaces live: socials with empty URLs are dropped, disabled links are
/// dropped, and an empty username falls back to the placeholder handle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageContext {
    pub name: String,
    pub username: String,
    pub bio: String,
    pub avatar: Option<String>,
    pub socials: Vec<SocialEntry>,
    pub links: Vec<LinkEntry>,
    pub hero_layout: bool,
    pub large_header: bool,
    pub show_branding: bool,
    pub style: PageStyle,
}

impl PageContext {
    pub fn new(state: &AppState, surface: Surface) -> Self {
        let profile = &state.profile;
        let username = if profile.username.is_empty() {
            "usuario".to_string()
        } else {
            profile.username.clone()
        };

        Self {
            name: profile.name.clone(),
            username,
            bio: profile.bio.clone(),
            avatar: profile.avatar.clone(),
            socials: profile
                .socials
                .iter()
                .filter(|social| social.is_configured())
                .map(|social| SocialEntry {
                    platform: social.platform.name(),
                    url: social.url.clone(),
                })
                .collect(),
            links: state
                .links
                .iter()
                .filter(|link| link.enabled)
                .map(|link| LinkEntry {
                    id: link.id.clone(),
                    title: link.title.clone(),
                    url: link.url.clone(),
                })
                .collect(),
            hero_layout: state.design.profile_layout == ProfileLayout::Hero,
            large_header: state.design.header_size == HeaderSize::Large,
            show_branding: state.show_branding,
            style: PageStyle::new(&state.design, surface),
        }
    }
}
