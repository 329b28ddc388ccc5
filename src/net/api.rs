//! REST calls to the booking server.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: the HTTP client reports a transport error, since the
//! endpoint is only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<(), SubmitError>` instead of panics. Response bodies
//! are ignored; only the status decides the outcome.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::config::render_path;

use super::error::SubmitError;
use super::types::TurfCreationRequest;

/// Header carrying the anti-forgery token on state-changing requests.
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Seam between the create-turf flow and the network.
#[allow(async_fn_in_trait)]
pub trait TurfApi {
    /// Issue exactly one create request for `venue_id`.
    ///
    /// # Errors
    ///
    /// [`SubmitError::Rejected`] for a non-ok status,
    /// [`SubmitError::Transport`] when no response arrived.
    async fn create_turf(&self, venue_id: i64, request: &TurfCreationRequest) -> Result<(), SubmitError>;
}

/// Map a response status onto the submit result.
#[cfg(any(test, feature = "csr"))]
pub(crate) fn check_status(ok: bool, status: u16) -> Result<(), SubmitError> {
    if ok { Ok(()) } else { Err(SubmitError::Rejected { status }) }
}

/// `TurfApi` backed by the browser `fetch` API.
#[derive(Clone, Debug)]
pub struct HttpTurfApi {
    create_turf_path: String,
    csrf_token: String,
}

impl HttpTurfApi {
    /// `create_turf_path` is a template containing `{venue_id}`.
    pub fn new(create_turf_path: impl Into<String>, csrf_token: impl Into<String>) -> Self {
        Self { create_turf_path: create_turf_path.into(), csrf_token: csrf_token.into() }
    }

    fn endpoint(&self, venue_id: i64) -> String {
        render_path(&self.create_turf_path, venue_id)
    }
}

impl TurfApi for HttpTurfApi {
    async fn create_turf(&self, venue_id: i64, request: &TurfCreationRequest) -> Result<(), SubmitError> {
        let url = self.endpoint(venue_id);
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&url)
                .header(CSRF_HEADER, &self.csrf_token)
                .json(request)
                .map_err(|e| SubmitError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| SubmitError::Transport(e.to_string()))?;
            check_status(resp.ok(), resp.status())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (url, request, &self.csrf_token);
            Err(SubmitError::Transport("not available outside the browser".to_owned()))
        }
    }
}
