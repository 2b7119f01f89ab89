use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{BookFormat, DeadlineStatus, PaceUnit};
use crate::quantity::percentage_of;

use super::{ProgressLog, StatusLog};

/// A book the user is reading against a due date, with its event history.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Deadline {
    pub id: String,
    #[serde(default)]
    pub title: String,
    /// Pages for physical and ebook formats, minutes for audio.
    pub total_quantity: u32,
    pub format: BookFormat,
    pub deadline_date: NaiveDate,
    #[serde(default)]
    pub progress: ProgressLog,
    #[serde(default)]
    pub status: StatusLog,
}

impl Deadline {
    /// A deadline with empty progress and status history.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        total_quantity: u32,
        format: BookFormat,
        deadline_date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            total_quantity,
            format,
            deadline_date,
            progress: ProgressLog::new(),
            status: StatusLog::new(),
        }
    }

    /// Progress of the latest progress event, or 0 without history.
    #[must_use]
    pub fn current_progress(&self) -> u32 {
        self.progress
            .latest()
            .map_or(0, |event| event.current_progress)
    }

    /// Status of the latest status event.
    #[must_use]
    pub fn current_status(&self) -> Option<DeadlineStatus> {
        self.status.current()
    }

    #[must_use]
    pub fn remaining_quantity(&self) -> u32 {
        self.total_quantity.saturating_sub(self.current_progress())
    }

    /// Rounded percentage shown to the user.
    #[must_use]
    pub fn percent_complete(&self) -> u32 {
        percentage_of(self.current_progress(), self.total_quantity)
    }

    /// Whether the deadline can still change status. No history counts as active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.current_status().is_none_or(|status| !status.is_terminal())
    }

    #[must_use]
    pub const fn unit(&self) -> PaceUnit {
        self.format.unit()
    }
}
