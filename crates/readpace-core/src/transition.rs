//! Status transition validation over a deadline's status history.
//!
//! The graph itself lives in [`DeadlineStatus::allowed_next_states`]; this
//! module resolves the current state from history and turns a rejected
//! request into [`CoreError::InvalidTransition`]. Callers must serialize the
//! read-validate-append sequence against concurrent writers themselves.

use chrono::{DateTime, Utc};

use crate::entities::{StatusEvent, StatusLog};
use crate::enums::DeadlineStatus;
use crate::errors::CoreError;

/// Check a single edge of the lifecycle graph.
///
/// # Errors
///
/// Returns `CoreError::InvalidTransition` if `requested` is not an allowed
/// next state of `current`.
pub fn validate_transition(
    current: DeadlineStatus,
    requested: DeadlineStatus,
) -> Result<(), CoreError> {
    if current.can_transition_to(requested) {
        Ok(())
    } else {
        tracing::debug!(from = %current, to = %requested, "rejected status transition");
        Err(CoreError::InvalidTransition {
            from: current,
            to: requested,
        })
    }
}

/// Validate `requested` against the latest status and build the event to append.
///
/// An empty history accepts only initial statuses (`pending`, `reading`).
///
/// # Errors
///
/// Returns `CoreError::InvalidTransition` for a disallowed edge and
/// `CoreError::InvalidInitialStatus` when an empty history is started in a
/// non-initial status.
pub fn request_transition(
    history: &StatusLog,
    requested: DeadlineStatus,
    at: DateTime<Utc>,
) -> Result<StatusEvent, CoreError> {
    match history.latest() {
        Some(latest) => validate_transition(latest.status, requested)?,
        None if requested.is_initial() => {}
        None => return Err(CoreError::InvalidInitialStatus(requested)),
    }
    Ok(StatusEvent::new(requested, at))
}

impl StatusLog {
    /// Status of the latest event.
    #[must_use]
    pub fn current(&self) -> Option<DeadlineStatus> {
        self.latest().map(|event| event.status)
    }

    /// Validate and append a transition, returning the appended event.
    ///
    /// # Errors
    ///
    /// Same as [`request_transition`]; the log is unchanged on error.
    pub fn transition(
        &mut self,
        requested: DeadlineStatus,
        at: DateTime<Utc>,
    ) -> Result<StatusEvent, CoreError> {
        let event = request_transition(self, requested, at)?;
        self.push(event);
        Ok(event)
    }
}
