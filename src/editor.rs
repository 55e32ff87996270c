//! The editing session: the single owner of the live application state.
//!
//! All mutations go through [`EditorSession`], which commits a full
//! snapshot to its store after each one. Commits are fire-and-forget: a
//! failed write is logged and the session keeps going, since the in-memory
//! state is still authoritative and the next change rewrites the whole
//! blob anyway.
//!
//! The session is single-threaded and synchronous. Each operation runs to
//! completion before the next; the only asynchronous collaborator, the
//! enhancement service, is called through [`EditorSession::enhance`] behind
//! a re-entrancy guard.

use tracing::{debug, warn};

use crate::enhance::{self, EnhancementService};
use crate::model::{
    AppState, ButtonShadow, ButtonType, HeaderSize, LinkItem, ProfileLayout, TitleStyle,
    WallpaperType,
};
use crate::store::StateStore;
use crate::style::MAX_BUTTON_ROUNDING;
use crate::theme::ThemePreset;

pub struct EditorSession {
    state: AppState,
    store: StateStore,
    enhancing: bool,
}

impl EditorSession {
    /// Opens a session on the given store, loading the last snapshot or the
    /// default state when none exists.
    pub fn open(store: StateStore) -> Self {
        let state = store.load();
        Self {
            state,
            store,
            enhancing: false,
        }
    }

    /// Read-only view of the current state, for rendering.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    fn commit(&mut self) {
        if let Err(err) = self.store.save(&self.state) {
            warn!(error = %err, "failed to persist snapshot");
        }
    }

    // Profile -----------------------------------------------------------

    pub fn set_name(&mut self, name: &str) {
        self.state.profile.name = name.to_string();
        self.commit();
    }

    pub fn set_bio(&mut self, bio: &str) {
        self.state.profile.bio = bio.to_string();
        self.commit();
    }

    pub fn set_avatar(&mut self, avatar: Option<String>) {
        self.state.profile.avatar = avatar;
        self.commit();
    }

    /// Stores a sanitized username. Called on every keystroke, so the
    /// stored value is URL-safe at all times.
    pub fn set_username(&mut self, raw: &str) {
        self.state.profile.set_username(raw);
        self.commit();
    }

    /// Replaces the URL of the social slot at `slot`. The slot's platform
    /// never changes. Out-of-range slots are a no-op.
    pub fn set_social_url(&mut self, slot: usize, url: &str) {
        if let Some(social) = self.state.profile.socials.get_mut(slot) {
            social.url = url.to_string();
        }
        self.commit();
    }

    // Links -------------------------------------------------------------

    /// Appends a new placeholder link and returns its id.
    pub fn add_link(&mut self) -> String {
        let link = LinkItem::placeholder();
        let id = link.id.clone();
        self.state.links.push(link);
        self.commit();
        id
    }

    /// Removes the link with the given id. No-op when absent.
    pub fn delete_link(&mut self, id: &str) {
        self.state.links.retain(|link| link.id != id);
        self.commit();
    }

    pub fn set_link_title(&mut self, id: &str, title: &str) {
        if let Some(link) = self.link_mut(id) {
            link.title = title.to_string();
        }
        self.commit();
    }

    pub fn set_link_url(&mut self, id: &str, url: &str) {
        if let Some(link) = self.link_mut(id) {
            link.url = url.to_string();
        }
        self.commit();
    }

    pub fn set_link_enabled(&mut self, id: &str, enabled: bool) {
        if let Some(link) = self.link_mut(id) {
            link.enabled = enabled;
        }
        self.commit();
    }

    pub fn set_link_icon(&mut self, id: &str, icon: Option<String>) {
        if let Some(link) = self.link_mut(id) {
            link.icon = icon;
        }
        self.commit();
    }

    fn link_mut(&mut self, id: &str) -> Option<&mut LinkItem> {
        self.state.links.iter_mut().find(|link| link.id == id)
    }

    // Design ------------------------------------------------------------

    pub fn set_profile_layout(&mut self, layout: ProfileLayout) {
        self.state.design.profile_layout = layout;
        self.commit();
    }

    pub fn set_header_size(&mut self, size: HeaderSize) {
        self.state.design.header_size = size;
        self.commit();
    }

    pub fn set_title_style(&mut self, style: TitleStyle) {
        self.state.design.title_style = style;
        self.commit();
    }

    pub fn set_title_font(&mut self, font: &str) {
        self.state.design.title_font = font.to_string();
        self.commit();
    }

    pub fn set_font_family(&mut self, font: &str) {
        self.state.design.font_family = font.to_string();
        self.commit();
    }

    pub fn set_title_color(&mut self, color: &str) {
        self.state.design.title_color = color.to_string();
        self.commit();
    }

    pub fn set_page_text_color(&mut self, color: &str) {
        self.state.design.page_text_color = color.to_string();
        self.commit();
    }

    pub fn set_wallpaper_type(&mut self, wallpaper_type: WallpaperType) {
        self.state.design.wallpaper_type = wallpaper_type;
        self.commit();
    }

    pub fn set_wallpaper_value(&mut self, value: &str) {
        self.state.design.wallpaper_value = value.to_string();
        self.commit();
    }

    pub fn set_button_type(&mut self, button_type: ButtonType) {
        self.state.design.button_type = button_type;
        self.commit();
    }

    pub fn set_button_color(&mut self, color: &str) {
        self.state.design.button_color = color.to_string();
        self.commit();
    }

    pub fn set_button_text_color(&mut self, color: &str) {
        self.state.design.button_text_color = color.to_string();
        self.commit();
    }

    pub fn set_button_shadow(&mut self, shadow: ButtonShadow) {
        self.state.design.button_shadow = shadow;
        self.commit();
    }

    /// Sets the button rounding, clamped to the slider's 0 to 30 range.
    pub fn set_button_rounding(&mut self, rounding: i32) {
        self.state.design.button_rounding = rounding.clamp(0, MAX_BUTTON_ROUNDING);
        self.commit();
    }

    /// Merges a preset over the current design. Fields the preset does not
    /// name keep their current value.
    pub fn apply_preset(&mut self, preset: &ThemePreset) {
        self.state.design = preset.apply(&self.state.design);
        self.commit();
    }

    pub fn set_show_branding(&mut self, show: bool) {
        self.state.show_branding = show;
        self.commit();
    }

    // Enhancement -------------------------------------------------------

    /// Whether an enhancement request is currently in flight.
    pub fn is_enhancing(&self) -> bool {
        self.enhancing
    }

    /// Runs one enhancement round trip against `service`.
    ///
    /// Re-entrancy is gated by the in-progress flag: a second call while a
    /// request is outstanding does nothing and returns `false`. On success
    /// the suggested copy is folded in and committed; on failure the state
    /// is left exactly as it was and only the flag is cleared. There is no
    /// cancellation and no timeout here.
    pub fn enhance(&mut self, service: &dyn EnhancementService) -> bool {
        if self.enhancing {
            return false;
        }
        self.enhancing = true;
        let outcome = service.enhance(&self.state.profile, &self.state.links);
        self.enhancing = false;

        match outcome {
            Some(enhancement) => {
                enhance::apply(&mut self.state, enhancement);
                self.commit();
                true
            }
            None => {
                debug!("enhancement returned no result, content unchanged");
                false
            }
        }
    }
}
