//! Page rendering for the two surfaces.
//!
//! - [`PageContext`]: the filtered, styled view both templates consume
//! - [`PageRenderer`]: pre-compiled minijinja templates for the editor
//!   preview and the public page
//!
//! No presentation logic lives in the templates themselves; everything
//! with a rule to it happens in the context builder and the style
//! resolver.

mod context;
mod page;
mod templates;

pub use context::{LinkEntry, PageContext, PageStyle, SocialEntry};
pub use page::PageRenderer;
