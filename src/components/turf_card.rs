//! Card for one catalog turf.

use leptos::prelude::*;

use crate::state::catalog::CatalogItem;

/// Image, name, location, price label, and a placeholder "Book Now" link.
#[component]
pub fn TurfCard(turf: CatalogItem) -> impl IntoView {
    view! {
        <div class="turf-card">
            <img src=turf.image_url alt=turf.name class="turf-image"/>
            <div class="turf-info">
                <h2 class="turf-name">{turf.name}</h2>
                <p class="turf-location">{turf.location}</p>
                <p class="turf-price">{turf.price_label}</p>
                <a href="#" class="book-btn">"Book Now"</a>
            </div>
        </div>
    }
}
