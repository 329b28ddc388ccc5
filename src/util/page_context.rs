//! Values the host page renders for the create-turf form.
//!
//! SYSTEM CONTEXT
//! ==============
//! The booking server template provides the venue id in a `#venueId` input
//! and the anti-forgery token in a hidden input. Both are read once when the
//! form mounts.

#[cfg(test)]
#[path = "page_context_test.rs"]
mod page_context_test;

#[cfg(feature = "csr")]
use wasm_bindgen::JsCast as _;

use crate::config::AppConfig;

pub const VENUE_INPUT_ID: &str = "venueId";

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum PageContextError {
    #[error("browser document unavailable")]
    NoDocument,
    #[error("missing page element: {0}")]
    MissingElement(String),
    #[error("invalid venue id: {0:?}")]
    InvalidVenueId(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageContext {
    pub venue_id: i64,
    pub csrf_token: String,
}

/// Parse the venue id rendered by the server.
///
/// # Errors
///
/// [`PageContextError::InvalidVenueId`] unless the trimmed value is an integer.
pub fn parse_venue_id(raw: &str) -> Result<i64, PageContextError> {
    raw.trim().parse::<i64>().map_err(|_| PageContextError::InvalidVenueId(raw.to_owned()))
}

/// CSS selector for the hidden anti-forgery input.
pub fn csrf_selector(field_name: &str) -> String {
    format!("input[name=\"{field_name}\"]")
}

impl PageContext {
    /// Read the venue id and anti-forgery token from the current document.
    ///
    /// # Errors
    ///
    /// Returns [`PageContextError`] when an element is missing, the venue
    /// id does not parse, or no document exists.
    pub fn from_document(config: &AppConfig) -> Result<Self, PageContextError> {
        #[cfg(feature = "csr")]
        {
            let document = web_sys::window().and_then(|w| w.document()).ok_or(PageContextError::NoDocument)?;
            let venue_raw = document
                .get_element_by_id(VENUE_INPUT_ID)
                .and_then(|el| el.dyn_into::<web_sys::HtmlInputElement>().ok())
                .ok_or_else(|| PageContextError::MissingElement(format!("#{VENUE_INPUT_ID}")))?
                .value();
            let selector = csrf_selector(&config.csrf_field_name);
            let csrf_token = document
                .query_selector(&selector)
                .ok()
                .flatten()
                .and_then(|el| el.dyn_into::<web_sys::HtmlInputElement>().ok())
                .ok_or(PageContextError::MissingElement(selector))?
                .value();
            Ok(Self { venue_id: parse_venue_id(&venue_raw)?, csrf_token })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = config;
            Err(PageContextError::NoDocument)
        }
    }
}
