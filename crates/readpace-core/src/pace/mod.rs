//! Pace-feasibility: what a due date demands, what the user usually manages,
//! and preset dates to try.

mod aggregate;
mod impact;
mod quick_select;

pub use aggregate::{DEFAULT_MIN_RELIABLE_DAYS, DEFAULT_WINDOW_DAYS, HistoryWindow};
pub use impact::{
    FeasibilityDisplay, FeasibilityPolicy, FeasibilityTheme, ImpactResult, TIGHT_PACE_MULTIPLIER,
    UNBOUNDED_PACE, compute_impact, compute_impact_for, days_between, feasibility_config,
};
pub use quick_select::{quick_select_date, quick_select_options};
