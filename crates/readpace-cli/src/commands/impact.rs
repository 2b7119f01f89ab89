use chrono::NaiveDate;
use readpace_config::ReadpaceConfig;
use readpace_core::entities::{PaceData, PaceSnapshot};
use readpace_core::enums::BookFormat;
use readpace_core::feasibility_config;
use readpace_core::pace::{
    FeasibilityDisplay, FeasibilityPolicy, FeasibilityTheme, ImpactResult, compute_impact_for,
};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ImpactArgs;
use crate::commands::shared::parse::{parse_date, parse_enum_or, resolve_today};
use crate::output::output;

const TERMINAL_THEME: FeasibilityTheme<&str> = FeasibilityTheme {
    comfortable: "green",
    tight: "yellow",
    not_feasible: "red",
};

#[derive(Debug, Serialize)]
struct ImpactResponse {
    candidate: NaiveDate,
    today: NaiveDate,
    #[serde(flatten)]
    impact: ImpactResult,
    display: FeasibilityDisplay<&'static str>,
}

struct ImpactInput {
    candidate: NaiveDate,
    today: NaiveDate,
    total: u32,
    progress: u32,
    format: BookFormat,
    pace: PaceSnapshot,
}

fn evaluate(input: &ImpactInput, policy: &FeasibilityPolicy) -> ImpactResponse {
    let impact = compute_impact_for(
        input.candidate,
        input.today,
        input.total,
        input.progress,
        input.format,
        input.pace.for_format(input.format),
        policy,
    );
    tracing::debug!(
        days_remaining = impact.days_remaining,
        feasibility = %impact.feasibility,
        "impact computed"
    );
    ImpactResponse {
        candidate: input.candidate,
        today: input.today,
        display: feasibility_config(impact.feasibility, &TERMINAL_THEME),
        impact,
    }
}

/// Handle `rpace impact`.
pub fn handle(args: &ImpactArgs, config: &ReadpaceConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let input = ImpactInput {
        candidate: parse_date(&args.date, "date")?,
        today: resolve_today(flags)?,
        total: args.total,
        progress: args.progress,
        format: parse_enum_or(
            args.book_format.as_deref(),
            "book format",
            config.general.default_format,
        )?,
        pace: PaceSnapshot::new(
            PaceData::new(args.reading_pace, true),
            PaceData::new(args.listening_pace, true),
        ),
    };
    output(&evaluate(&input, &config.pace.policy()), flags.format)
}
