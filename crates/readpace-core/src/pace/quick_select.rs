//! Preset candidate dates for the date-change picker.

use chrono::{Datelike, Days, Months, NaiveDate};

use crate::enums::QuickSelect;

/// Candidate date for `kind`, counted from the later of `today` and the
/// current due date.
///
/// Day offsets are plain calendar-day arithmetic. Returns `None` only past
/// the end of the supported calendar.
#[must_use]
pub fn quick_select_date(
    today: NaiveDate,
    current_deadline: NaiveDate,
    kind: QuickSelect,
) -> Option<NaiveDate> {
    let base = today.max(current_deadline);
    match kind {
        QuickSelect::OneWeek => base.checked_add_days(Days::new(7)),
        QuickSelect::TwoWeeks => base.checked_add_days(Days::new(14)),
        QuickSelect::ThirtyDays => base.checked_add_days(Days::new(30)),
        QuickSelect::EndOfNextMonth => end_of_next_month(base),
    }
}

/// Every preset with its resolved date, in picker order.
#[must_use]
pub fn quick_select_options(
    today: NaiveDate,
    current_deadline: NaiveDate,
) -> Vec<(QuickSelect, NaiveDate)> {
    QuickSelect::ALL
        .into_iter()
        .filter_map(|kind| quick_select_date(today, current_deadline, kind).map(|date| (kind, date)))
        .collect()
}

fn end_of_next_month(base: NaiveDate) -> Option<NaiveDate> {
    base.with_day(1)?
        .checked_add_months(Months::new(2))?
        .pred_opt()
}
