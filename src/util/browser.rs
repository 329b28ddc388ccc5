//! Thin wrappers over `window` side effects.
//!
//! Requires a browser environment; native builds no-op so callers stay
//! feature-agnostic.

/// Show a blocking `alert()` dialog.
pub fn alert(message: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        log::info!("alert: {message}");
    }
}

/// Point `location.href` at `url`.
pub fn navigate(url: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(url) {
                log::error!("navigation to {url} failed: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        log::info!("navigate: {url}");
    }
}
