use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::DeadlineStatus;
use crate::history::{EventLog, Timestamped};

/// Immutable record of a lifecycle state change.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StatusEvent {
    pub status: DeadlineStatus,
    pub created_at: DateTime<Utc>,
}

impl StatusEvent {
    #[must_use]
    pub const fn new(status: DeadlineStatus, created_at: DateTime<Utc>) -> Self {
        Self { status, created_at }
    }
}

impl Timestamped for StatusEvent {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

pub type StatusLog = EventLog<StatusEvent>;
