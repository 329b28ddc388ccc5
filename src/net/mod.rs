//! Networking for the create-turf endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the `TurfApi` seam and its `gloo-net` implementation, `types`
//! defines the request body, and `error` classifies submit failures.

pub mod api;
pub mod error;
pub mod types;
