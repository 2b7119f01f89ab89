use chrono::NaiveDate;
use readpace_core::enums::QuickSelect;
use readpace_core::pace::{quick_select_date, quick_select_options};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::QuickSelectArgs;
use crate::commands::shared::parse::{parse_date, parse_enum, resolve_today};
use crate::output::output;

#[derive(Debug, Serialize, PartialEq, Eq)]
struct QuickSelectOption {
    kind: QuickSelect,
    date: NaiveDate,
}

fn options(
    today: NaiveDate,
    current_deadline: NaiveDate,
    kind: Option<QuickSelect>,
) -> anyhow::Result<Vec<QuickSelectOption>> {
    if let Some(kind) = kind {
        let date = quick_select_date(today, current_deadline, kind)
            .ok_or_else(|| anyhow::anyhow!("{kind} from {current_deadline} is out of range"))?;
        return Ok(vec![QuickSelectOption { kind, date }]);
    }
    Ok(quick_select_options(today, current_deadline)
        .into_iter()
        .map(|(kind, date)| QuickSelectOption { kind, date })
        .collect())
}

/// Handle `rpace quick-select`.
pub fn handle(args: &QuickSelectArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let today = resolve_today(flags)?;
    let current_deadline = args
        .deadline_date
        .as_deref()
        .map_or(Ok(today), |raw| parse_date(raw, "deadline date"))?;
    let kind = args
        .kind
        .as_deref()
        .map(|raw| parse_enum(raw, "kind"))
        .transpose()?;
    output(&options(today, current_deadline, kind)?, flags.format)
}
