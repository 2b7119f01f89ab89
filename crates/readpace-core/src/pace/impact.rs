//! Date-change impact: the pace a candidate due date demands and whether it
//! is achievable given the user's history.

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Deadline, PaceData, PaceSnapshot};
use crate::enums::{BookFormat, Feasibility, PaceUnit};

/// How far above the average pace a requirement may go and still be `tight`.
pub const TIGHT_PACE_MULTIPLIER: f64 = 1.5;

/// Required pace reported when no days remain.
pub const UNBOUNDED_PACE: f64 = f64::MAX;

/// The tunable part of feasibility classification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FeasibilityPolicy {
    pub tight_multiplier: f64,
}

impl Default for FeasibilityPolicy {
    fn default() -> Self {
        Self {
            tight_multiplier: TIGHT_PACE_MULTIPLIER,
        }
    }
}

impl FeasibilityPolicy {
    #[must_use]
    pub const fn new(tight_multiplier: f64) -> Self {
        Self { tight_multiplier }
    }

    /// Classify `required` against `average` per day.
    #[must_use]
    pub fn classify(&self, required: f64, average: f64, days_remaining: i64) -> Feasibility {
        if days_remaining <= 0 {
            Feasibility::NotFeasible
        } else if required <= average {
            Feasibility::Comfortable
        } else if required <= average * self.tight_multiplier {
            Feasibility::Tight
        } else {
            Feasibility::NotFeasible
        }
    }
}

/// Outcome of moving a deadline to a candidate date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ImpactResult {
    pub days_remaining: i64,
    pub required_pace: f64,
    pub pace_change: f64,
    pub unit: PaceUnit,
    pub feasibility: Feasibility,
}

impl ImpactResult {
    /// Whether no reading days remain, making the required pace unbounded.
    #[must_use]
    pub fn is_unbounded(&self) -> bool {
        self.days_remaining <= 0
    }
}

/// Whole calendar days from `today` to `candidate`; negative for past dates.
#[must_use]
pub fn days_between(today: NaiveDate, candidate: NaiveDate) -> i64 {
    candidate.signed_duration_since(today).num_days()
}

/// Impact of moving `deadline` to `candidate`, using the deadline's current progress.
#[must_use]
pub fn compute_impact(
    candidate: NaiveDate,
    deadline: &Deadline,
    today: NaiveDate,
    pace: &PaceSnapshot,
    policy: &FeasibilityPolicy,
) -> ImpactResult {
    compute_impact_for(
        candidate,
        today,
        deadline.total_quantity,
        deadline.current_progress(),
        deadline.format,
        pace.for_format(deadline.format),
        policy,
    )
}

/// Impact computed from raw quantities instead of a [`Deadline`].
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn compute_impact_for(
    candidate: NaiveDate,
    today: NaiveDate,
    total_quantity: u32,
    current_progress: u32,
    format: BookFormat,
    pace: PaceData,
    policy: &FeasibilityPolicy,
) -> ImpactResult {
    let days_remaining = days_between(today, candidate);
    let remaining = total_quantity.saturating_sub(current_progress);

    let required_pace = if days_remaining > 0 {
        #[allow(clippy::cast_precision_loss)]
        let days = days_remaining as f64;
        f64::from(remaining) / days
    } else {
        tracing::debug!(days_remaining, "no reading days left before candidate date");
        UNBOUNDED_PACE
    };

    let average = pace.average_pace;
    ImpactResult {
        days_remaining,
        required_pace,
        pace_change: required_pace - average,
        unit: format.unit(),
        feasibility: policy.classify(required_pace, average, days_remaining),
    }
}

/// Label and theme color for one feasibility class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeasibilityDisplay<C> {
    pub label: &'static str,
    pub color: C,
}

/// Caller-supplied colors, one per feasibility class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeasibilityTheme<C> {
    pub comfortable: C,
    pub tight: C,
    pub not_feasible: C,
}

/// Map a classification to its label and theme color.
#[must_use]
pub fn feasibility_config<C: Clone>(
    feasibility: Feasibility,
    theme: &FeasibilityTheme<C>,
) -> FeasibilityDisplay<C> {
    let (label, color) = match feasibility {
        Feasibility::Comfortable => ("Comfortable pace", &theme.comfortable),
        Feasibility::Tight => ("Tight but doable", &theme.tight),
        Feasibility::NotFeasible => ("Not feasible", &theme.not_feasible),
    };
    FeasibilityDisplay {
        label,
        color: color.clone(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn impact(total: u32, progress: u32, days: i64, average: f64) -> ImpactResult {
        let today = date(2026, 3, 10);
        compute_impact_for(
            today + chrono::Duration::days(days),
            today,
            total,
            progress,
            BookFormat::Physical,
            PaceData::new(average, true),
            &FeasibilityPolicy::default(),
        )
    }

    #[test]
    fn comfortable_when_under_average() {
        let result = impact(200, 100, 30, 25.0);
        assert_eq!(result.days_remaining, 30);
        assert!((result.required_pace - 100.0 / 30.0).abs() < 1e-9);
        assert!(result.pace_change < 0.0);
        assert_eq!(result.unit, PaceUnit::Pages);
        assert_eq!(result.feasibility, Feasibility::Comfortable);
    }

    #[test]
    fn not_feasible_far_above_average() {
        let result = impact(1000, 100, 5, 25.0);
        assert!((result.required_pace - 180.0).abs() < f64::EPSILON);
        assert!((result.pace_change - 155.0).abs() < f64::EPSILON);
        assert_eq!(result.feasibility, Feasibility::NotFeasible);
    }

    #[test]
    fn tight_within_multiplier() {
        assert_eq!(impact(300, 0, 10, 25.0).feasibility, Feasibility::Tight);
        assert_eq!(impact(375, 0, 10, 25.0).feasibility, Feasibility::Tight);
        assert_eq!(impact(376, 0, 10, 25.0).feasibility, Feasibility::NotFeasible);
        assert_eq!(impact(250, 0, 10, 25.0).feasibility, Feasibility::Comfortable);
    }

    #[test]
    fn no_days_left_is_unbounded_and_not_feasible() {
        for days in [0, -3] {
            let result = impact(100, 100, days, 25.0);
            assert_eq!(result.days_remaining, days);
            assert!(result.is_unbounded());
            assert!((result.required_pace - UNBOUNDED_PACE).abs() < f64::EPSILON);
            assert!(result.pace_change.is_finite());
            assert_eq!(result.feasibility, Feasibility::NotFeasible);
        }
    }

    #[test]
    fn finished_book_is_comfortable_even_without_history() {
        let result = impact(300, 320, 4, 0.0);
        assert!(result.required_pace.abs() < f64::EPSILON);
        assert_eq!(result.feasibility, Feasibility::Comfortable);
    }

    #[test]
    fn zero_average_with_work_left_is_not_feasible() {
        assert_eq!(impact(300, 0, 30, 0.0).feasibility, Feasibility::NotFeasible);
    }

    #[test]
    fn policy_multiplier_is_overridable() {
        let strict = FeasibilityPolicy::new(1.0);
        assert_eq!(strict.classify(30.0, 25.0, 10), Feasibility::NotFeasible);
        let lenient = FeasibilityPolicy::new(3.0);
        assert_eq!(lenient.classify(70.0, 25.0, 10), Feasibility::Tight);
    }

    #[test]
    fn audio_uses_listening_pace_and_minutes() {
        let mut deadline = Deadline::new("dl-a", 600, BookFormat::Audio, date(2026, 4, 1));
        deadline
            .progress
            .push(crate::entities::ProgressEvent::new(300, chrono::Utc::now()));
        let pace = PaceSnapshot::new(PaceData::new(1.0, true), PaceData::new(60.0, true));
        let result = compute_impact(
            date(2026, 3, 20),
            &deadline,
            date(2026, 3, 10),
            &pace,
            &FeasibilityPolicy::default(),
        );
        assert_eq!(result.unit, PaceUnit::Minutes);
        assert!((result.required_pace - 30.0).abs() < f64::EPSILON);
        assert_eq!(result.feasibility, Feasibility::Comfortable);
    }

    #[test]
    fn days_ignore_month_lengths() {
        assert_eq!(days_between(date(2026, 2, 27), date(2026, 3, 1)), 2);
        assert_eq!(days_between(date(2026, 3, 1), date(2026, 2, 27)), -2);
    }

    #[test]
    fn feasibility_config_maps_theme() {
        let theme = FeasibilityTheme {
            comfortable: "green",
            tight: "amber",
            not_feasible: "red",
        };
        assert_eq!(
            feasibility_config(Feasibility::Tight, &theme),
            FeasibilityDisplay {
                label: "Tight but doable",
                color: "amber",
            }
        );
        assert_eq!(feasibility_config(Feasibility::NotFeasible, &theme).color, "red");
        assert_eq!(
            feasibility_config(Feasibility::Comfortable, &theme).label,
            "Comfortable pace"
        );
    }
}
