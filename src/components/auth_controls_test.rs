use leptos::prelude::*;
use leptos::reactive::owner::Owner;

use super::*;

fn render_controls(state: AuthViewState) -> String {
    Owner::new().with(|| {
        let auth = RwSignal::new(state);
        view! { <AuthControls auth/> }.to_html()
    })
}

/// Opening tag of the element whose attributes contain `marker`.
fn opening_tag<'a>(html: &'a str, marker: &str) -> &'a str {
    let at = html.find(marker).unwrap_or_else(|| panic!("{marker:?} missing from {html}"));
    let start = html[..at].rfind('<').unwrap_or(0);
    let end = at + html[at..].find('>').unwrap_or(html.len() - at);
    &html[start..end]
}

fn assert_display(html: &str, marker: &str, display: &str) {
    let tag = opening_tag(html, marker);
    assert!(tag.contains(&format!("display:{display}")), "{marker} expected {display}: {tag}");
}

#[test]
fn initial_render_shows_only_login() {
    let html = render_controls(AuthViewState::default());
    assert_display(&html, r#"id="loginBtn""#, "inline-block");
    assert_display(&html, r#"id="logoutBtn""#, "none");
    assert_display(&html, r#"class="profile-icon""#, "none");
}

#[test]
fn logged_in_render_shows_logout_and_profile() {
    let html = render_controls(AuthViewState { logged_in: true });
    assert_display(&html, r#"id="loginBtn""#, "none");
    assert_display(&html, r#"id="logoutBtn""#, "inline-block");
    assert_display(&html, r#"class="profile-icon""#, "inline-block");
}

#[test]
fn logout_after_login_renders_initial_state() {
    let mut state = AuthViewState::default();
    state.login();
    state.logout();
    assert_eq!(render_controls(state), render_controls(AuthViewState::default()));
}
