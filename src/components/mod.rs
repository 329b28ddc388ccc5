//! Reusable UI components.

pub mod auth_controls;
pub mod turf_card;
pub mod turf_grid;
