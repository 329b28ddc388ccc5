//! Create-turf form input, validation, and banner state.
//!
//! DESIGN
//! ======
//! The name check is a literal emptiness test with no trimming. The price is
//! trimmed and then strictly parsed as a decimal; anything non-finite or not
//! strictly positive is rejected. Both checks always run so both banners can
//! show after one submit.

#[cfg(test)]
#[path = "turf_form_test.rs"]
mod turf_form_test;

use crate::net::types::TurfCreationRequest;

/// Raw strings as typed into the form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawTurfForm {
    pub name: String,
    pub price: String,
}

/// Which fields failed validation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: bool,
    pub price: bool,
}

impl FieldErrors {
    pub fn any(self) -> bool {
        self.name || self.price
    }
}

/// Banner visibility under the form. All hidden at the start of a submit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FormFeedback {
    pub name_error: bool,
    pub price_error: bool,
    pub success: bool,
}

impl FormFeedback {
    pub fn invalid(errors: FieldErrors) -> Self {
        Self { name_error: errors.name, price_error: errors.price, success: false }
    }

    pub fn created() -> Self {
        Self { success: true, ..Self::default() }
    }
}

/// Parse an hourly price. `None` for empty, non-numeric, non-finite, or
/// non-positive input.
pub fn parse_price(raw: &str) -> Option<f64> {
    let value = raw.trim().parse::<f64>().ok()?;
    (value.is_finite() && value > 0.0).then_some(value)
}

/// Validate both fields, returning the accepted name and price.
///
/// # Errors
///
/// Returns [`FieldErrors`] with every failing field flagged.
pub fn validate(raw: &RawTurfForm) -> Result<(String, f64), FieldErrors> {
    let price = parse_price(&raw.price);
    let errors = FieldErrors { name: raw.name.is_empty(), price: price.is_none() };
    match price {
        Some(price) if !errors.any() => Ok((raw.name.clone(), price)),
        _ => Err(errors),
    }
}

/// Build the request body for a valid form.
///
/// # Errors
///
/// Propagates [`validate`] failures.
pub fn prepare_request(raw: &RawTurfForm, venue_id: i64) -> Result<TurfCreationRequest, FieldErrors> {
    let (turf_name, price_per_hr) = validate(raw)?;
    Ok(TurfCreationRequest { turf_name, price_per_hr, venue: venue_id })
}
