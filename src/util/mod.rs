//! Browser helpers shared by pages.

pub mod browser;
pub mod page_context;
