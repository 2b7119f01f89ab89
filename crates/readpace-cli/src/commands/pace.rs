use std::path::Path;

use chrono::NaiveDate;
use readpace_config::ReadpaceConfig;
use readpace_core::entities::{Deadline, PaceSnapshot};
use readpace_core::pace::HistoryWindow;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::PaceArgs;
use crate::commands::shared::input::load_deadlines;
use crate::commands::shared::parse::resolve_today;
use crate::output::output;

#[derive(Debug, Serialize)]
struct PaceResponse {
    today: NaiveDate,
    window: HistoryWindow,
    deadlines: usize,
    #[serde(flatten)]
    pace: PaceSnapshot,
}

fn aggregate(deadlines: &[Deadline], today: NaiveDate, window: HistoryWindow) -> PaceResponse {
    PaceResponse {
        today,
        window,
        deadlines: deadlines.len(),
        pace: PaceSnapshot::from_history(deadlines, today, &window),
    }
}

/// Handle `rpace pace`.
pub fn handle(args: &PaceArgs, config: &ReadpaceConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut window = config.pace.history_window();
    if let Some(days) = args.window_days {
        anyhow::ensure!(days > 0, "--window-days must be at least 1");
        window.window_days = days;
    }
    let deadlines = load_deadlines(Path::new(&args.deadlines))?;
    output(&aggregate(&deadlines, resolve_today(flags)?, window), flags.format)
}
