use leptos::prelude::*;
use leptos::reactive::owner::Owner;

use super::*;
use crate::state::catalog::sample_turfs;

fn render_grid() -> String {
    Owner::new().with(|| view! { <TurfGrid turfs=sample_turfs()/> }.to_html())
}

fn first_index(html: &str, needle: &str) -> usize {
    html.find(needle).unwrap_or_else(|| panic!("{needle:?} missing from {html}"))
}

/// Markup from `class_attr` to the next closing tag, inside the card for `name`.
fn element_text<'a>(html: &'a str, class_attr: &str, name: &str) -> &'a str {
    let card = first_index(html, &format!(r#"alt="{name}""#));
    let at = card + first_index(&html[card..], class_attr);
    let end = at + first_index(&html[at..], "</");
    &html[at..end]
}

#[test]
fn grid_renders_one_card_per_sample_turf() {
    let html = render_grid();
    assert_eq!(html.matches(r#"class="turf-card""#).count(), 4);
    assert_eq!(html.matches(r#"class="turf-image""#).count(), 4);
    assert_eq!(html.matches(r##"href="#""##).count(), 4);
    assert_eq!(html.matches("Book Now").count(), 4);
}

#[test]
fn grid_keeps_catalog_order() {
    let html = render_grid();
    let positions: Vec<_> = sample_turfs().iter().map(|t| first_index(&html, t.name)).collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "cards out of order: {positions:?}");
}

#[test]
fn each_card_shows_its_fields() {
    let html = render_grid();
    for turf in sample_turfs() {
        assert!(html.contains(&format!(r#"src="{}""#, turf.image_url)), "image for {}", turf.name);
        assert!(html.contains(&format!(r#"alt="{}""#, turf.name)), "alt for {}", turf.name);
        assert!(element_text(&html, r#"class="turf-name""#, turf.name).contains(turf.name));
        assert!(element_text(&html, r#"class="turf-location""#, turf.name).contains(turf.location));
        assert!(element_text(&html, r#"class="turf-price""#, turf.name).contains(turf.price_label));
    }
}

#[test]
fn card_fields_stay_inside_their_own_card() {
    let html = render_grid();
    let cards: Vec<_> = html.split(r#"class="turf-card""#).skip(1).collect();
    assert_eq!(cards.len(), 4);
    for (card, turf) in cards.iter().zip(sample_turfs()) {
        assert!(card.contains(turf.name) && card.contains(turf.location) && card.contains(turf.price_label));
    }
}
