//! Historical pace aggregation across a user's deadlines.
//!
//! Every progress event contributes the units gained since the previous event
//! of the same deadline (the first event counts from zero). Events flagged
//! `ignore_in_calcs` move the baseline without contributing, so a book
//! started halfway through does not inflate the pace. Decreases contribute
//! nothing. Days are UTC calendar days.

use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Deadline, PaceData, PaceSnapshot};

/// Default number of calendar days, ending today, that count toward pace.
pub const DEFAULT_WINDOW_DAYS: u32 = 14;

/// Default number of distinct reading days before a pace is trusted.
pub const DEFAULT_MIN_RELIABLE_DAYS: u32 = 3;

/// Which slice of history feeds the pace average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct HistoryWindow {
    pub window_days: u32,
    pub min_reliable_days: u32,
}

impl Default for HistoryWindow {
    fn default() -> Self {
        Self {
            window_days: DEFAULT_WINDOW_DAYS,
            min_reliable_days: DEFAULT_MIN_RELIABLE_DAYS,
        }
    }
}

impl HistoryWindow {
    /// First calendar day inside the window ending at `today`.
    fn start(&self, today: NaiveDate) -> NaiveDate {
        let span = u64::from(self.window_days.saturating_sub(1));
        today.checked_sub_days(Days::new(span)).unwrap_or(NaiveDate::MIN)
    }
}

impl PaceSnapshot {
    /// Aggregate reading and listening pace from progress history.
    ///
    /// Audio deadlines feed the listening pace, all other formats the reading pace.
    pub fn from_history<'a, I>(deadlines: I, today: NaiveDate, window: &HistoryWindow) -> Self
    where
        I: IntoIterator<Item = &'a Deadline>,
    {
        let mut reading = DailyTotals::default();
        let mut listening = DailyTotals::default();

        for deadline in deadlines {
            let totals = if deadline.format.is_audio() {
                &mut listening
            } else {
                &mut reading
            };
            totals.add_deadline(deadline, window.start(today), today);
        }

        Self {
            reading: reading.pace(today, window),
            listening: listening.pace(today, window),
        }
    }
}

#[derive(Debug, Default)]
struct DailyTotals {
    by_day: BTreeMap<NaiveDate, u64>,
}

impl DailyTotals {
    fn add_deadline(&mut self, deadline: &Deadline, start: NaiveDate, today: NaiveDate) {
        let mut previous = 0_u32;
        for event in deadline.progress.chronological() {
            let gained = event.current_progress.saturating_sub(previous);
            previous = event.current_progress;

            if event.ignore_in_calcs || gained == 0 {
                continue;
            }
            let day = event.created_at.date_naive();
            if day < start || day > today {
                continue;
            }
            *self.by_day.entry(day).or_default() += u64::from(gained);
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn pace(&self, today: NaiveDate, window: &HistoryWindow) -> PaceData {
        let Some(first_day) = self.by_day.keys().next() else {
            return PaceData::default();
        };

        let span_days = today.signed_duration_since(*first_day).num_days() + 1;
        let total: u64 = self.by_day.values().sum();
        let active_days = self.by_day.len();

        PaceData {
            average_pace: total as f64 / span_days.max(1) as f64,
            is_reliable: active_days >= window.min_reliable_days as usize,
        }
    }
}
