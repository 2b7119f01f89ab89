//! Pace and feasibility tuning.

use readpace_core::pace::{
    DEFAULT_MIN_RELIABLE_DAYS, DEFAULT_WINDOW_DAYS, FeasibilityPolicy, HistoryWindow,
    TIGHT_PACE_MULTIPLIER,
};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

const fn default_tight_multiplier() -> f64 {
    TIGHT_PACE_MULTIPLIER
}

const fn default_window_days() -> u32 {
    DEFAULT_WINDOW_DAYS
}

const fn default_min_reliable_days() -> u32 {
    DEFAULT_MIN_RELIABLE_DAYS
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PaceConfig {
    /// Multiple of the average pace still classified as `tight`.
    #[serde(default = "default_tight_multiplier")]
    pub tight_multiplier: f64,

    /// Calendar days of history, ending today, used for the average pace.
    #[serde(default = "default_window_days")]
    pub window_days: u32,

    /// Distinct reading days needed before the average is reliable.
    #[serde(default = "default_min_reliable_days")]
    pub min_reliable_days: u32,
}

impl Default for PaceConfig {
    fn default() -> Self {
        Self {
            tight_multiplier: default_tight_multiplier(),
            window_days: default_window_days(),
            min_reliable_days: default_min_reliable_days(),
        }
    }
}

impl PaceConfig {
    #[must_use]
    pub const fn policy(&self) -> FeasibilityPolicy {
        FeasibilityPolicy::new(self.tight_multiplier)
    }

    #[must_use]
    pub const fn history_window(&self) -> HistoryWindow {
        HistoryWindow {
            window_days: self.window_days,
            min_reliable_days: self.min_reliable_days,
        }
    }

    /// Reject values that would make classification meaningless.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for a non-finite multiplier or one
    /// below 1, and for an empty history window.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.tight_multiplier.is_finite() || self.tight_multiplier < 1.0 {
            return Err(ConfigError::InvalidValue {
                field: "pace.tight_multiplier".into(),
                reason: format!("must be a finite number >= 1, got {}", self.tight_multiplier),
            });
        }
        if self.window_days == 0 {
            return Err(ConfigError::InvalidValue {
                field: "pace.window_days".into(),
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }
}
