//! End-to-end flow: open a session, theme it, push values past the UI
//! limits, and check that both rendered surfaces agree with the resolver.

use linkpulse::editor::EditorSession;
use linkpulse::model::AppState;
use linkpulse::render::PageRenderer;
use linkpulse::store::StateStore;
use linkpulse::style::{resolve, Pixels, Surface};
use linkpulse::theme::preset_by_id;
use linkpulse::{Enhancement, EnhancementService, LinkItem, UserProfile};

fn session() -> (tempfile::TempDir, EditorSession) {
    let dir = tempfile::tempdir().unwrap();
    let store = StateStore::at(dir.path().join("state.json"));
    (dir, EditorSession::open(store))
}

#[test]
fn preset_then_out_of_range_rounding_resolves_clamped() {
    let (_dir, mut session) = session();

    session.apply_preset(preset_by_id("neon-matrix").unwrap());
    assert_eq!(session.state().design.wallpaper_value, "#000000");
    assert_eq!(session.state().design.button_rounding, 4);

    // Sidestep the editor's slider clamp entirely.
    let mut design = session.state().design.clone();
    design.button_rounding = 40;

    let resolved = resolve(&design, Surface::Public);
    assert_eq!(resolved.rounding, Pixels(30));
    assert_eq!(resolved.background, "#000000");
    assert_eq!(resolved.body_font, "'Roboto Mono', monospace");
}

#[test]
fn both_surfaces_render_the_same_resolution() {
    let (_dir, mut session) = session();
    session.apply_preset(preset_by_id("sunset-gradient").unwrap());
    session.set_username("Sunset Person!");

    let renderer = PageRenderer::new().unwrap();
    let preview = renderer.render_preview(session.state()).unwrap();
    let public = renderer.render_public(session.state()).unwrap();

    for html in [&preview, &public] {
        assert!(html.contains("linear-gradient(to top, #f97316, #ef4444)"));
        assert!(html.contains("border-radius: 12px"));
        assert!(html.contains("@sunsetperson"));
        assert!(html.contains("0 10px 25px -5px rgba(0,0,0,0.15)"));
    }
}

#[test]
fn session_state_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let store = StateStore::at(dir.path().join("state.json"));

    let mut session = EditorSession::open(store.clone());
    session.apply_preset(preset_by_id("minimal-zen").unwrap());
    let id = session.add_link();
    session.set_link_title(&id, "Mi portafolio");
    drop(session);

    let reopened = EditorSession::open(store);
    assert_eq!(reopened.state().design.wallpaper_value, "#ffffff");
    assert_eq!(reopened.state().design.button_rounding, 0);
    assert!(reopened
        .state()
        .links
        .iter()
        .any(|link| link.title == "Mi portafolio"));
}

struct CannedService;

impl EnhancementService for CannedService {
    fn enhance(&self, _profile: &UserProfile, links: &[LinkItem]) -> Option<Enhancement> {
        // One suggestion fewer than there are links.
        Some(Enhancement {
            enhanced_bio: "Copy that converts.".to_string(),
            suggested_titles: links
                .iter()
                .take(links.len().saturating_sub(1))
                .enumerate()
                .map(|(i, _)| format!("Suggestion {i}"))
                .collect(),
        })
    }
}

#[test]
fn enhancement_round_trip_through_the_session() {
    let (_dir, mut session) = session();
    session.add_link();
    session.add_link();
    let before: Vec<String> = session
        .state()
        .links
        .iter()
        .map(|link| link.title.clone())
        .collect();
    assert_eq!(before.len(), 3);

    assert!(session.enhance(&CannedService));

    let after: Vec<&str> = session
        .state()
        .links
        .iter()
        .map(|link| link.title.as_str())
        .collect();
    assert_eq!(after, ["Suggestion 0", "Suggestion 1", before[2].as_str()]);
    assert_eq!(session.state().profile.bio, "Copy that converts.");
}

#[test]
fn default_state_renders_out_of_the_box() {
    let renderer = PageRenderer::new().unwrap();
    let html = renderer.render_public(&AppState::default()).unwrap();
    assert!(html.contains("background: #F8F9FB"));
    assert!(html.contains("'DM Sans', sans-serif"));
    assert!(html.contains("border-radius: 16px"));
    assert!(html.contains("0 4px 6px -1px rgba(0,0,0,0.05)"));
}
