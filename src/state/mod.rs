//! Plain-data state for the two page controllers.
//!
//! DESIGN
//! ======
//! Components hold these in `RwSignal`s; the rules that derive banners and
//! visibility from them live here so they can be tested without a document.

pub mod auth;
pub mod catalog;
pub mod turf_form;
