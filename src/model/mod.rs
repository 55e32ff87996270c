//! Content and design data model.
//!
//! Pure data, no behavior beyond invariant-preserving mutators:
//!
//! - [`UserProfile`], [`SocialLink`], [`LinkItem`]: what the page shows
//! - [`DesignConfig`] and its enums: how the page looks
//! - [`AppState`]: the aggregate root, the unit of persistence and rendering

mod design;
mod link;
mod profile;
mod state;

pub use design::{
    ButtonShadow, ButtonType, DesignConfig, HeaderSize, ProfileLayout, TitleStyle, WallpaperType,
};
pub use link::LinkItem;
pub use profile::{sanitize_username, SocialLink, SocialPlatform, UserProfile};
pub use state::AppState;
