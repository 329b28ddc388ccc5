//! Sample turf catalog shown on the home page.
//!
//! The list is compiled in; nothing is fetched.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

/// One display card's worth of data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CatalogItem {
    pub name: &'static str,
    pub location: &'static str,
    pub price_label: &'static str,
    pub image_url: &'static str,
}

const SAMPLE_TURFS: [CatalogItem; 4] = [
    CatalogItem {
        name: "Green Valley",
        location: "Downtown",
        price_label: "$50/hour",
        image_url: "https://via.placeholder.com/300x200.png?text=Green+Valley",
    },
    CatalogItem {
        name: "Sunset Fields",
        location: "Westside",
        price_label: "$45/hour",
        image_url: "https://via.placeholder.com/300x200.png?text=Sunset+Fields",
    },
    CatalogItem {
        name: "Riverside Pitch",
        location: "Eastside",
        price_label: "$55/hour",
        image_url: "https://via.placeholder.com/300x200.png?text=Riverside+Pitch",
    },
    CatalogItem {
        name: "Central Park",
        location: "Midtown",
        price_label: "$60/hour",
        image_url: "https://via.placeholder.com/300x200.png?text=Central+Park",
    },
];

/// Sample turfs in display order.
pub fn sample_turfs() -> &'static [CatalogItem] {
    &SAMPLE_TURFS
}
