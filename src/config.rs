//! Page-level configuration embedded by the host server.
//!
//! The booking server may render a JSON block into the page:
//!
//! ```html
//! <script id="turfbook-config" type="application/json">
//!   {"venue_detail_path": "/host/venues/{venue_id}/"}
//! </script>
//! ```
//!
//! Every field is optional. A missing block yields [`AppConfig::default`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;

use serde::Deserialize;

/// Element id of the optional JSON config block.
pub const CONFIG_ELEMENT_ID: &str = "turfbook-config";

/// Placeholder substituted with the venue id in path templates.
pub const VENUE_ID_PLACEHOLDER: &str = "{venue_id}";

pub const DEFAULT_CREATE_TURF_PATH: &str = "/api/venues/{venue_id}/turf/";
pub const DEFAULT_VENUE_DETAIL_PATH: &str = "/host/venues/{venue_id}/";
pub const DEFAULT_CSRF_FIELD_NAME: &str = "csrfmiddlewaretoken";
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("{field} must contain {}", VENUE_ID_PLACEHOLDER)]
    MissingPlaceholder { field: &'static str },
    #[error("unknown log level: {0}")]
    InvalidLogLevel(String),
    #[error("browser document unavailable")]
    NoDocument,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// POST target for turf creation.
    pub create_turf_path: String,
    /// Redirect target after a turf is created.
    pub venue_detail_path: String,
    /// `name` attribute of the hidden anti-forgery input.
    pub csrf_field_name: String,
    /// Console log level (`error`, `warn`, `info`, `debug`, `trace`).
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            create_turf_path: DEFAULT_CREATE_TURF_PATH.to_owned(),
            venue_detail_path: DEFAULT_VENUE_DETAIL_PATH.to_owned(),
            csrf_field_name: DEFAULT_CSRF_FIELD_NAME.to_owned(),
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
        }
    }
}

impl AppConfig {
    /// Parse and validate a config block.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for malformed JSON, unknown fields, a path
    /// template without `{venue_id}`, or an unknown log level.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check path templates and the log level.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.create_turf_path.contains(VENUE_ID_PLACEHOLDER) {
            return Err(ConfigError::MissingPlaceholder { field: "create_turf_path" });
        }
        if !self.venue_detail_path.contains(VENUE_ID_PLACEHOLDER) {
            return Err(ConfigError::MissingPlaceholder { field: "venue_detail_path" });
        }
        log::Level::from_str(&self.log_level).map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))?;
        Ok(())
    }

    /// Configured log level, `Info` when unparseable.
    pub fn level(&self) -> log::Level {
        log::Level::from_str(&self.log_level).unwrap_or(log::Level::Info)
    }

    pub fn create_turf_url(&self, venue_id: i64) -> String {
        render_path(&self.create_turf_path, venue_id)
    }

    pub fn venue_detail_url(&self, venue_id: i64) -> String {
        render_path(&self.venue_detail_path, venue_id)
    }

    /// Read the config block from the current document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoDocument`] outside a browser, or a parse
    /// error when the block is present but invalid.
    pub fn load() -> Result<Self, ConfigError> {
        #[cfg(feature = "csr")]
        {
            let document = web_sys::window().and_then(|w| w.document()).ok_or(ConfigError::NoDocument)?;
            match document.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content()) {
                Some(raw) if !raw.trim().is_empty() => Self::from_json(&raw),
                _ => Ok(Self::default()),
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ConfigError::NoDocument)
        }
    }
}

pub(crate) fn render_path(template: &str, venue_id: i64) -> String {
    template.replace(VENUE_ID_PLACEHOLDER, &venue_id.to_string())
}
