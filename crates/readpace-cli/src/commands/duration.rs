use readpace_core::{format_duration, parse_duration};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::DurationCommands;
use crate::output::output;

#[derive(Debug, Serialize, PartialEq, Eq)]
struct ParsedDuration {
    input: String,
    minutes: Option<u32>,
    formatted: Option<String>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct FormattedDuration {
    minutes: i64,
    formatted: String,
}

fn parse(input: &str) -> ParsedDuration {
    let minutes = parse_duration(input);
    if minutes.is_none() {
        tracing::info!(input, "duration not recognized");
    }
    ParsedDuration {
        input: input.to_string(),
        minutes,
        formatted: minutes.map(|m| format_duration(i64::from(m))),
    }
}

/// Handle `rpace duration`.
pub fn handle(action: &DurationCommands, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        DurationCommands::Parse { input } => output(&parse(input), flags.format),
        DurationCommands::Format { minutes } => output(
            &FormattedDuration {
                minutes: *minutes,
                formatted: format_duration(*minutes),
            },
            flags.format,
        ),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::parse;

    #[test]
    fn parse_reports_minutes_and_canonical_form() {
        let parsed = parse("3:02");
        assert_eq!(parsed.minutes, Some(182));
        assert_eq!(parsed.formatted.as_deref(), Some("3h 2m"));
    }

    #[test]
    fn unrecognized_text_yields_null_minutes() {
        let parsed = parse("soon");
        assert_eq!(parsed.minutes, None);
        assert_eq!(parsed.formatted, None);
    }
}
