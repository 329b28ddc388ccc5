//! Cosmetic login/logout view state for the home page.
//!
//! SYSTEM CONTEXT
//! ==============
//! There is no session behind this flag. The caller owns an
//! `RwSignal<AuthViewState>` and hands it to `AuthControls`; element
//! visibility is always recomputed from the flag alone.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// `display` value for a visible auth control.
pub const SHOWN: &str = "inline-block";
/// `display` value for a hidden auth control.
pub const HIDDEN: &str = "none";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AuthViewState {
    pub logged_in: bool,
}

impl AuthViewState {
    pub fn login(&mut self) {
        log::debug!("auth view: logged in");
        self.logged_in = true;
    }

    pub fn logout(&mut self) {
        log::debug!("auth view: logged out");
        self.logged_in = false;
    }
}

/// Which auth controls are visible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthVisibility {
    pub login_button: bool,
    pub logout_button: bool,
    pub profile_icon: bool,
}

impl AuthVisibility {
    /// Logged out shows the login button; logged in shows logout and profile.
    pub fn from_state(state: AuthViewState) -> Self {
        Self { login_button: !state.logged_in, logout_button: state.logged_in, profile_icon: state.logged_in }
    }
}

pub fn display_value(visible: bool) -> &'static str {
    if visible { SHOWN } else { HIDDEN }
}
