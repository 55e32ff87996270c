//! Profile data: who the page belongs to and where else to find them.

use serde::{Deserialize, Serialize};

/// The closed set of supported social networks.
///
/// Social slots are fixed: a slot's platform is assigned once and never
/// reassigned, only its URL changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Instagram,
    Facebook,
    Whatsapp,
    Twitter,
    Youtube,
}

impl SocialPlatform {
    /// Lowercase wire/display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Instagram => "instagram",
            Self::Facebook => "facebook",
            Self::Whatsapp => "whatsapp",
            Self::Twitter => "twitter",
            Self::Youtube => "youtube",
        }
    }
}

/// One social slot. An empty URL means "not configured" and renderers
/// must omit the entry entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: SocialPlatform,
    pub url: String,
}

impl SocialLink {
    pub fn empty(platform: SocialPlatform) -> Self {
        Self {
            platform,
            url: String::new(),
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.url.is_empty()
    }
}

/// The page owner's profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub name: String,
    /// URL-safe handle. Invariant: characters are drawn from `[a-z0-9._-]`,
    /// maintained by [`UserProfile::set_username`] at every mutation.
    pub username: String,
    pub bio: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub socials: Vec<SocialLink>,
}

impl UserProfile {
    /// Stores a sanitized form of `raw` as the username.
    ///
    /// Applied on every keystroke by the editor, so the stored value is
    /// valid at all times rather than only after a submit step.
    pub fn set_username(&mut self, raw: &str) {
        self.username = sanitize_username(raw);
    }
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: String::new(),
            username: String::new(),
            bio: String::new(),
            avatar: None,
            socials: Vec::new(),
        }
    }
}

/// Lowercases `raw` and strips every character outside `[a-z0-9._-]`.
pub fn sanitize_username(raw: &str) -> String {
    raw.chars()
        .flat_map(char::to_lowercase)
        .filter(|c| matches!(c, 'a'..='z' | '0'..='9' | '.' | '_' | '-'))
        .collect()
}
