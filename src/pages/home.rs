//! Home page pieces: the sample turf grid and the login/logout toggle.
//!
//! The two are mounted into separate host elements, so each gets its own
//! root component. The auth signal is created by the root and passed down.

use leptos::prelude::*;

use crate::components::auth_controls::AuthControls;
use crate::components::turf_grid::TurfGrid;
use crate::state::auth::AuthViewState;
use crate::state::catalog::sample_turfs;

#[component]
pub fn HomeCatalog() -> impl IntoView {
    view! { <TurfGrid turfs=sample_turfs()/> }
}

#[component]
pub fn HomeAuth() -> impl IntoView {
    let auth = RwSignal::new(AuthViewState::default());
    view! { <AuthControls auth/> }
}
