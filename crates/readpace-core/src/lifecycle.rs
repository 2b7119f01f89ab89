//! Completion workflow coupling the status graph with progress.
//!
//! Completing a deadline also tops its progress up to the total. The
//! transition check stays progress-agnostic; this module builds the events a
//! caller persists around a successful `complete` transition.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Deadline, ProgressEvent, StatusEvent};
use crate::enums::DeadlineStatus;
use crate::errors::CoreError;
use crate::transition::request_transition;

/// Events to persist when completing a deadline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CompletionPlan {
    /// Present when current progress is below the total.
    pub top_up: Option<ProgressEvent>,
    pub status: StatusEvent,
}

/// Validate completing `deadline` at `at` and build the events to append.
///
/// # Errors
///
/// Returns `CoreError::InvalidTransition` when the latest status cannot move
/// to `complete`, or `CoreError::InvalidInitialStatus` without status history.
pub fn plan_completion(deadline: &Deadline, at: DateTime<Utc>) -> Result<CompletionPlan, CoreError> {
    let status = request_transition(&deadline.status, DeadlineStatus::Complete, at)?;

    let top_up = (deadline.current_progress() < deadline.total_quantity)
        .then(|| ProgressEvent::new(deadline.total_quantity, at));

    if top_up.is_some() {
        tracing::debug!(
            deadline = %deadline.id,
            from = deadline.current_progress(),
            to = deadline.total_quantity,
            "topping up progress on completion"
        );
    }

    Ok(CompletionPlan { top_up, status })
}

impl Deadline {
    /// Append a completion plan's events: progress first, then status.
    pub fn apply_completion(&mut self, plan: CompletionPlan) {
        if let Some(event) = plan.top_up {
            self.progress.push(event);
        }
        self.status.push(plan.status);
    }

    /// Plan and apply completion in one step.
    ///
    /// # Errors
    ///
    /// Same as [`plan_completion`]; the deadline is unchanged on error.
    pub fn complete(&mut self, at: DateTime<Utc>) -> Result<CompletionPlan, CoreError> {
        let plan = plan_completion(self, at)?;
        self.apply_completion(plan.clone());
        Ok(plan)
    }
}
