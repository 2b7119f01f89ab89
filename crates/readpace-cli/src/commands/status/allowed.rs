use readpace_core::enums::DeadlineStatus;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::output::output;

#[derive(Debug, Serialize)]
struct AllowedResponse {
    status: DeadlineStatus,
    terminal: bool,
    next: &'static [DeadlineStatus],
}

pub fn run(status: &str, flags: &GlobalFlags) -> anyhow::Result<()> {
    let status: DeadlineStatus = parse_enum(status, "status")?;
    output(
        &AllowedResponse {
            status,
            terminal: status.is_terminal(),
            next: status.allowed_next_states(),
        },
        flags.format,
    )
}
