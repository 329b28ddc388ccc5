//! Login/logout buttons and the profile icon.
//!
//! DESIGN
//! ======
//! Visibility is derived from the passed-in `AuthViewState` on every render,
//! so redundant updates are harmless.

#[cfg(test)]
#[path = "auth_controls_test.rs"]
mod auth_controls_test;

use leptos::prelude::*;

use crate::state::auth::{AuthViewState, AuthVisibility, display_value};

#[component]
pub fn AuthControls(auth: RwSignal<AuthViewState>) -> impl IntoView {
    let visibility = Memo::new(move |_| AuthVisibility::from_state(auth.get()));

    view! {
        <button
            id="loginBtn"
            class="auth-btn"
            style:display=move || display_value(visibility.get().login_button)
            on:click=move |_| auth.update(AuthViewState::login)
        >
            "Login"
        </button>
        <button
            id="logoutBtn"
            class="auth-btn"
            style:display=move || display_value(visibility.get().logout_button)
            on:click=move |_| auth.update(AuthViewState::logout)
        >
            "Logout"
        </button>
        <span
            class="profile-icon"
            aria-label="Profile"
            style:display=move || display_value(visibility.get().profile_icon)
        >
            "👤"
        </span>
    }
}
