use readpace_core::enums::DeadlineStatus;
use readpace_core::validate_transition;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::output::output;

#[derive(Debug, Serialize)]
struct CheckResponse {
    from: DeadlineStatus,
    to: DeadlineStatus,
    allowed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

fn check(from: DeadlineStatus, to: DeadlineStatus) -> CheckResponse {
    let outcome = validate_transition(from, to);
    CheckResponse {
        from,
        to,
        allowed: outcome.is_ok(),
        reason: outcome.err().map(|error| error.to_string()),
    }
}

pub fn run(from: &str, to: &str, flags: &GlobalFlags) -> anyhow::Result<()> {
    let from = parse_enum(from, "status")?;
    let to = parse_enum(to, "status")?;
    output(&check(from, to), flags.format)
}
