//! Page modules for the screens this bundle mounts into.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its orchestration (submit flow, auth signal) and delegates
//! rendering details to `components`.

pub mod create_turf;
pub mod home;
