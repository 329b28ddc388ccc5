//! Mounting of page controllers into server-rendered host elements.
//!
//! SYSTEM CONTEXT
//! ==============
//! The booking server renders full pages. This bundle looks for known mount
//! points and attaches a Leptos root to each one it finds; pages without any
//! of them are left alone.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use crate::config::AppConfig;

/// Host elements this bundle can attach to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MountTarget {
    /// Venue "add turf" form.
    CreateTurf,
    /// Home page sample catalog.
    TurfGrid,
    /// Home page login/logout toggle.
    AuthControls,
}

impl MountTarget {
    pub const ALL: [Self; 3] = [Self::CreateTurf, Self::TurfGrid, Self::AuthControls];

    pub fn element_id(self) -> &'static str {
        match self {
            Self::CreateTurf => "createTurfRoot",
            Self::TurfGrid => "turfGrid",
            Self::AuthControls => "authControls",
        }
    }
}

/// Attach every controller whose mount point exists in the document.
pub fn mount_pages(config: &AppConfig) {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast as _;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("no document; nothing mounted");
            return;
        };
        for target in MountTarget::ALL {
            let Some(host) = document
                .get_element_by_id(target.element_id())
                .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
            else {
                log::debug!("mount point #{} absent", target.element_id());
                continue;
            };
            mount_target(target, host, config);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = config;
    }
}

#[cfg(feature = "csr")]
fn mount_target(target: MountTarget, host: web_sys::HtmlElement, config: &AppConfig) {
    use leptos::prelude::*;

    use crate::pages::create_turf::CreateTurfPage;
    use crate::pages::home::{HomeAuth, HomeCatalog};
    use crate::util::page_context::PageContext;

    match target {
        MountTarget::CreateTurf => {
            let ctx = match PageContext::from_document(config) {
                Ok(ctx) => ctx,
                Err(e) => {
                    log::error!("create turf form not mounted: {e}");
                    return;
                }
            };
            let config = config.clone();
            leptos::mount::mount_to(host, move || view! { <CreateTurfPage ctx config/> }).forget();
        }
        MountTarget::TurfGrid => leptos::mount::mount_to(host, HomeCatalog).forget(),
        MountTarget::AuthControls => leptos::mount::mount_to(host, HomeAuth).forget(),
    }
    log::debug!("mounted #{}", target.element_id());
}
