//! Grid of turf cards in catalog order.

#[cfg(test)]
#[path = "turf_grid_test.rs"]
mod turf_grid_test;

use leptos::prelude::*;

use crate::components::turf_card::TurfCard;
use crate::state::catalog::CatalogItem;

/// One `TurfCard` per item, appended in input order. Mounted directly into
/// the host's `#turfGrid` container.
#[component]
pub fn TurfGrid(turfs: &'static [CatalogItem]) -> impl IntoView {
    turfs.iter().map(|turf| view! { <TurfCard turf=*turf/> }).collect_view()
}
