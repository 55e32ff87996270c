//! Profile enhancement: the contract with the external copywriting service.
//!
//! The concrete client (a generative text API) lives outside this crate.
//! What lives here is the boundary: the response shape, the failure
//! convention, and how an accepted response is folded into the state.

use serde::{Deserialize, Serialize};

use crate::model::{AppState, LinkItem, UserProfile};

/// A successful enhancement response.
///
/// `suggested_titles` follows the order of the links that were sent:
/// suggestion `i` targets link `i`. The pairing is positional, not keyed by
/// link id, so reordering links while a request is outstanding misdirects
/// the suggestions. Known limitation, kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enhancement {
    pub enhanced_bio: String,
    pub suggested_titles: Vec<String>,
}

/// An external service that suggests improved copy for a profile.
///
/// Implementations own all their failure modes: network errors, malformed
/// responses, and service errors are swallowed at this boundary and
/// reported as `None`. Callers treat `None` as "no change" and leave every
/// piece of state untouched.
pub trait EnhancementService {
    fn enhance(&self, profile: &UserProfile, links: &[LinkItem]) -> Option<Enhancement>;
}

/// Folds an accepted enhancement into the state.
///
/// The bio is replaced outright. Titles are replaced position by position;
/// a missing or empty suggestion leaves that link's title alone, and
/// surplus suggestions are ignored.
pub(crate) fn apply(state: &mut AppState, enhancement: Enhancement) {
    state.profile.bio = enhancement.enhanced_bio;
    for (link, title) in state.links.iter_mut().zip(enhancement.suggested_titles) {
        if !title.is_empty() {
            link.title = title;
        }
    }
}
