//! Link entries: the list the whole page exists to show.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single link on the page.
///
/// Identity is stable: editing the title, URL, or enabled flag never changes
/// `id`. The click counter belongs to the public page's click-through and is
/// only carried here; nothing in this crate decrements or increments it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkItem {
    pub id: String,
    pub title: String,
    pub url: String,
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default)]
    pub clicks: u64,
}

impl LinkItem {
    /// A freshly added link with placeholder content and a new unique id.
    pub fn placeholder() -> Self {
        Self {
            id: Uuid::new_v4().simple().to_string(),
            title: "Nuevo Enlace".to_string(),
            url: "https://".to_string(),
            enabled: true,
            icon: None,
            clicks: 0,
        }
    }
}
