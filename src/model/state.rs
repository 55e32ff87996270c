//! The aggregate application state.

use serde::{Deserialize, Serialize};

use super::design::DesignConfig;
use super::link::LinkItem;
use super::profile::{SocialLink, SocialPlatform, UserProfile};

/// Everything the page builder knows: profile, links, design, and the
/// branding toggle.
///
/// This is both the unit of persistence and the input to rendering. The
/// editing session owns the one live value; the public page renders from a
/// read-only snapshot of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppState {
    pub profile: UserProfile,
    pub links: Vec<LinkItem>,
    pub design: DesignConfig,
    pub show_branding: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            profile: UserProfile {
                name: "Tu Nombre".to_string(),
                username: "usuario".to_string(),
                bio: "Bienvenido a mi espacio digital. Aquí puedes encontrar todos \
                      mis enlaces importantes y proyectos actuales."
                    .to_string(),
                avatar: Some(
                    "https://images.unsplash.com/photo-1535713875002-d1d0cf377fde\
                     ?auto=format&fit=crop&q=80&w=200"
                        .to_string(),
                ),
                socials: vec![
                    SocialLink::empty(SocialPlatform::Instagram),
                    SocialLink::empty(SocialPlatform::Whatsapp),
                    SocialLink::empty(SocialPlatform::Facebook),
                ],
            },
            links: vec![LinkItem {
                id: "1".to_string(),
                title: "¡Visita mi sitio web!".to_string(),
                url: "https://google.com".to_string(),
                enabled: true,
                icon: None,
                clicks: 0,
            }],
            design: DesignConfig::default(),
            show_branding: true,
        }
    }
}
