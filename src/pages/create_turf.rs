//! Create-turf page: validate, POST, then redirect or alert.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted into the venue's "add turf" page. The venue id and anti-forgery
//! token come from the host template via `PageContext`. Submits are not
//! deduplicated; two quick submits issue two requests.

#[cfg(test)]
#[path = "create_turf_test.rs"]
mod create_turf_test;

use std::time::Duration;

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::net::api::TurfApi;
use crate::net::error::SubmitError;
use crate::state::turf_form::{FieldErrors, FormFeedback, RawTurfForm, prepare_request};
use crate::util::page_context::PageContext;

/// Pause between the success banner and the redirect.
pub const REDIRECT_DELAY: Duration = Duration::from_millis(1500);

/// Result of one submit attempt.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    /// Local validation failed; nothing was sent.
    Invalid(FieldErrors),
    /// The server accepted the turf.
    Created { redirect_to: String },
    /// The request was sent and failed.
    Failed(SubmitError),
}

impl FormFeedback {
    /// Banners for an outcome applied to a freshly reset form.
    pub fn from_outcome(outcome: &SubmitOutcome) -> Self {
        let mut feedback = Self::default();
        feedback.apply(outcome);
        feedback
    }

    /// Fold an outcome into the banners currently shown.
    ///
    /// A created result only raises the success banner, so a request that
    /// lands after a later invalid resubmit leaves that submit's errors up.
    pub fn apply(&mut self, outcome: &SubmitOutcome) {
        match outcome {
            SubmitOutcome::Invalid(errors) => *self = Self::invalid(*errors),
            SubmitOutcome::Created { .. } => self.success = true,
            SubmitOutcome::Failed(_) => {}
        }
    }
}

/// Validate `raw` and, when valid, issue exactly one create request.
pub async fn submit_turf<A: TurfApi>(api: &A, raw: &RawTurfForm, ctx: &PageContext, config: &AppConfig) -> SubmitOutcome {
    let request = match prepare_request(raw, ctx.venue_id) {
        Ok(request) => request,
        Err(errors) => {
            log::info!("create turf blocked by validation: {errors:?}");
            return SubmitOutcome::Invalid(errors);
        }
    };

    log::debug!("creating turf {:?} for venue {}", request.turf_name, ctx.venue_id);
    match api.create_turf(ctx.venue_id, &request).await {
        Ok(()) => {
            log::info!("turf created for venue {}", ctx.venue_id);
            SubmitOutcome::Created { redirect_to: config.venue_detail_url(ctx.venue_id) }
        }
        Err(e) => {
            e.log();
            SubmitOutcome::Failed(e)
        }
    }
}

/// Apply the browser side effects of an outcome: alert on failure, delayed
/// redirect on success.
#[cfg_attr(not(feature = "csr"), allow(clippy::unused_async))]
async fn finish_submit(outcome: &SubmitOutcome) {
    match outcome {
        SubmitOutcome::Invalid(_) => {}
        SubmitOutcome::Created { redirect_to } => {
            #[cfg(feature = "csr")]
            gloo_timers::future::sleep(REDIRECT_DELAY).await;
            crate::util::browser::navigate(redirect_to);
        }
        SubmitOutcome::Failed(e) => crate::util::browser::alert(e.alert_message()),
    }
}

#[component]
pub fn CreateTurfPage(ctx: PageContext, config: AppConfig) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let feedback = RwSignal::new(FormFeedback::default());
    let api = crate::net::api::HttpTurfApi::new(config.create_turf_path.clone(), ctx.csrf_token.clone());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        feedback.set(FormFeedback::default());

        let raw = RawTurfForm { name: name.get_untracked(), price: price.get_untracked() };
        let api = api.clone();
        let ctx = ctx.clone();
        let config = config.clone();
        leptos::task::spawn_local(async move {
            let outcome = submit_turf(&api, &raw, &ctx, &config).await;
            feedback.update(|fb| fb.apply(&outcome));
            finish_submit(&outcome).await;
        });
    };

    view! {
        <form id="createTurfForm" class="create-turf-form" on:submit=on_submit>
            <label for="turfName">"Turf name"</label>
            <input
                id="turfName"
                type="text"
                placeholder="5-a-side"
                prop:value=move || name.get()
                on:input=move |ev| name.set(event_target_value(&ev))
            />
            <p id="nameError" class="form-error" style:display=move || banner_display(feedback.get().name_error)>
                "Please enter a turf name."
            </p>

            <label for="pricePerHour">"Price per hour"</label>
            <input
                id="pricePerHour"
                type="text"
                inputmode="decimal"
                placeholder="50"
                prop:value=move || price.get()
                on:input=move |ev| price.set(event_target_value(&ev))
            />
            <p id="priceError" class="form-error" style:display=move || banner_display(feedback.get().price_error)>
                "Please enter a valid price greater than zero."
            </p>

            <button type="submit" class="create-turf-form__submit">"Create Turf"</button>
            <p id="successMessage" class="form-success" style:display=move || banner_display(feedback.get().success)>
                "Turf created successfully! Redirecting..."
            </p>
        </form>
    }
}

fn banner_display(visible: bool) -> &'static str {
    if visible { "block" } else { "none" }
}
