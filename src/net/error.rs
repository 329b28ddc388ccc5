//! Submit failure classification.
//!
//! ERROR HANDLING
//! ==============
//! The server body is never inspected. A failed submit is either a non-ok
//! status or a transport error, and each maps to one fixed alert message.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

pub const REJECTED_ALERT: &str = "Failed to create turf. Please try again.";
pub const TRANSPORT_ALERT: &str = "An error occurred while creating the turf.";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The server answered with a non-2xx status.
    #[error("create turf rejected: {status}")]
    Rejected { status: u16 },
    /// The request never produced a response.
    #[error("create turf transport error: {0}")]
    Transport(String),
}

impl SubmitError {
    /// Text for the blocking alert shown to the user.
    pub fn alert_message(&self) -> &'static str {
        match self {
            Self::Rejected { .. } => REJECTED_ALERT,
            Self::Transport(_) => TRANSPORT_ALERT,
        }
    }

    /// Emit the failure at the level matching its class.
    pub fn log(&self) {
        match self {
            Self::Rejected { .. } => log::warn!("{self}"),
            Self::Transport(_) => log::error!("{self}"),
        }
    }
}
