//! Serde roundtrip and JsonSchema validation tests for the engine's value types.

use chrono::{NaiveDate, TimeZone, Utc};
use schemars::schema_for;
use readpace_core::entities::*;
use readpace_core::enums::*;
use readpace_core::lifecycle::CompletionPlan;
use readpace_core::pace::{FeasibilityPolicy, HistoryWindow, ImpactResult, UNBOUNDED_PACE};
use readpace_core::quantity::QuantityViews;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            // Serde roundtrip
            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            // Schema validation
            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn sample_deadline() -> Deadline {
    let mut deadline = Deadline::new(
        "dl-9f2c",
        420,
        BookFormat::Audio,
        NaiveDate::from_ymd_opt(2026, 11, 30).unwrap(),
    );
    deadline.title = "The Long Listen".into();
    deadline.progress.push(ProgressEvent::ignored(
        60,
        Utc.with_ymd_and_hms(2026, 11, 1, 8, 0, 0).unwrap(),
    ));
    deadline.progress.push(ProgressEvent::new(
        150,
        Utc.with_ymd_and_hms(2026, 11, 3, 21, 15, 0).unwrap(),
    ));
    deadline.status.push(StatusEvent::new(
        DeadlineStatus::Pending,
        Utc.with_ymd_and_hms(2026, 10, 28, 9, 0, 0).unwrap(),
    ));
    deadline.status.push(StatusEvent::new(
        DeadlineStatus::Reading,
        Utc.with_ymd_and_hms(2026, 11, 1, 8, 0, 0).unwrap(),
    ));
    deadline
}

roundtrip_and_validate!(deadline_roundtrip, Deadline, sample_deadline());

roundtrip_and_validate!(
    progress_event_roundtrip,
    ProgressEvent,
    ProgressEvent::new(99, Utc::now())
);

roundtrip_and_validate!(
    status_event_roundtrip,
    StatusEvent,
    StatusEvent::new(DeadlineStatus::ToReview, Utc::now())
);

roundtrip_and_validate!(
    pace_snapshot_roundtrip,
    PaceSnapshot,
    PaceSnapshot::new(PaceData::new(24.5, true), PaceData::new(52.0, false))
);

roundtrip_and_validate!(
    impact_roundtrip,
    ImpactResult,
    ImpactResult {
        days_remaining: 12,
        required_pace: 22.5,
        pace_change: -2.5,
        unit: PaceUnit::Pages,
        feasibility: Feasibility::Comfortable,
    }
);

roundtrip_and_validate!(
    unbounded_impact_roundtrip,
    ImpactResult,
    ImpactResult {
        days_remaining: 0,
        required_pace: UNBOUNDED_PACE,
        pace_change: UNBOUNDED_PACE,
        unit: PaceUnit::Minutes,
        feasibility: Feasibility::NotFeasible,
    }
);

roundtrip_and_validate!(
    quantity_views_roundtrip,
    QuantityViews,
    QuantityViews::of(420, 600, BookFormat::Audio)
);

roundtrip_and_validate!(
    completion_plan_roundtrip,
    CompletionPlan,
    CompletionPlan {
        top_up: Some(ProgressEvent::new(300, Utc::now())),
        status: StatusEvent::new(DeadlineStatus::Complete, Utc::now()),
    }
);

roundtrip_and_validate!(
    policy_roundtrip,
    FeasibilityPolicy,
    FeasibilityPolicy::default()
);

roundtrip_and_validate!(window_roundtrip, HistoryWindow, HistoryWindow::default());

// --- Persistence shape ---

#[test]
fn deadline_history_defaults_when_absent() {
    let json = serde_json::json!({
        "id": "dl-1",
        "total_quantity": 300,
        "format": "physical",
        "deadline_date": "2026-12-01"
    });
    let deadline: Deadline = serde_json::from_value(json).unwrap();
    assert!(deadline.progress.is_empty());
    assert!(deadline.status.is_empty());
    assert_eq!(deadline.current_progress(), 0);
}

#[test]
fn event_logs_serialize_as_plain_arrays() {
    let value = serde_json::to_value(sample_deadline()).unwrap();
    assert!(value["progress"].is_array());
    assert_eq!(value["status"][1]["status"], "reading");
    assert_eq!(value["progress"][0]["ignore_in_calcs"], true);
}

// --- Schema rejection tests ---

#[test]
fn schema_rejects_unknown_status() {
    let schema = serde_json::to_value(schema_for!(StatusEvent)).unwrap();
    let invalid = serde_json::json!({
        "status": "abandoned",
        "created_at": "2026-02-08T12:00:00Z"
    });
    let errors = validate_against_schema(&schema, &invalid);
    assert!(!errors.is_empty(), "Should reject unknown status value");
}

#[test]
fn schema_rejects_deadline_without_total() {
    let schema = serde_json::to_value(schema_for!(Deadline)).unwrap();
    let invalid = serde_json::json!({
        "id": "dl-1",
        "format": "ebook",
        "deadline_date": "2026-12-01"
    });
    let errors = validate_against_schema(&schema, &invalid);
    assert!(
        !errors.is_empty(),
        "Should reject deadline without 'total_quantity'"
    );
}
