use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::history::{EventLog, Timestamped};

/// Immutable snapshot of reading progress, in the deadline's unit.
///
/// `ignore_in_calcs` events still count for "current progress" but are left
/// out of pace history.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProgressEvent {
    pub current_progress: u32,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub ignore_in_calcs: bool,
}

impl ProgressEvent {
    #[must_use]
    pub const fn new(current_progress: u32, created_at: DateTime<Utc>) -> Self {
        Self {
            current_progress,
            created_at,
            ignore_in_calcs: false,
        }
    }

    /// A progress event excluded from pace history.
    #[must_use]
    pub const fn ignored(current_progress: u32, created_at: DateTime<Utc>) -> Self {
        Self {
            current_progress,
            created_at,
            ignore_in_calcs: true,
        }
    }
}

impl Timestamped for ProgressEvent {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

pub type ProgressLog = EventLog<ProgressEvent>;
