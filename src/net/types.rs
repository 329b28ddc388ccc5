//! Wire DTOs for the booking server's turf API.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// JSON body for `POST /api/venues/{venue_id}/turf/`.
///
/// Only built from input that already passed form validation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurfCreationRequest {
    pub turf_name: String,
    pub price_per_hr: f64,
    pub venue: i64,
}
