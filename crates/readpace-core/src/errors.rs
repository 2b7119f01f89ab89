//! Error types for the readpace engine.
//!
//! Only lifecycle violations are errors. Malformed user input is reported as
//! [`QuantityInputError`] or a `None` duration, and degenerate numeric inputs
//! produce defined values instead of failing.

use thiserror::Error;

use crate::enums::{DeadlineStatus, QuantityView};

/// Errors raised by the lifecycle engine.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A state machine transition was attempted that is not allowed.
    #[error("Invalid state transition: deadline from {from} to {to}")]
    InvalidTransition {
        from: DeadlineStatus,
        to: DeadlineStatus,
    },

    /// A deadline without status history was started in a non-initial state.
    #[error("Invalid initial status: a deadline cannot start as {0}")]
    InvalidInitialStatus(DeadlineStatus),

    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Rejection of a progress value typed into one of the quantity views.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuantityInputError {
    /// The text is not a number (or duration, for audio) in the given view.
    #[error("Cannot read '{input}' as a {view} value")]
    Unparseable { view: QuantityView, input: String },

    /// A percentage outside `0..=100`.
    #[error("Percentage '{input}' is outside 0-100")]
    PercentageOutOfRange { input: String },
}
