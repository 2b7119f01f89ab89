//! Free-form duration parsing and canonical formatting.
//!
//! Audio quantities are stored as whole minutes. Users type them in many
//! shapes (`3:02`, `3h 2m`, `2.5 hours`, `45`), so parsing accepts a small
//! grammar and formatting always produces the canonical `Xh Ym` form.
//!
//! Parsing never panics or errors: unrecognized input yields `None` and the
//! caller decides how to react.

use std::sync::LazyLock;

use regex::Regex;

const HOUR_TOKEN: &str = "(?:hours|hour|hrs|hr|h)";
const MINUTE_TOKEN: &str = "(?:minutes|minute|mins|min|m)";

/// Fraction digits beyond this cannot move the floored minute value.
const MAX_FRACTION_DIGITS: usize = 18;

static CLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+):(\d{1,2})(?::(\d{1,2}))?$").expect("valid clock regex"));

static HOURS_MINUTES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^(\d+) ?{HOUR_TOKEN}(?: ?(\d+) ?{MINUTE_TOKEN})?$"
    ))
    .expect("valid hours regex")
});

static DECIMAL_HOURS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^(\d+)[.,](\d+) ?{HOUR_TOKEN}$")).expect("valid decimal regex")
});

static MINUTES_ONLY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^(\d+) ?{MINUTE_TOKEN}$")).expect("valid minutes regex")
});

static BARE_MINUTES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+$").expect("valid integer regex"));

/// Parse a human duration into whole minutes.
///
/// Returns `Some(0)` for empty input and `None` for anything outside the
/// accepted grammar, including values that overflow `u32`.
#[must_use]
pub fn parse_duration(input: &str) -> Option<u32> {
    let normalized = normalize(input);
    if normalized.is_empty() {
        return Some(0);
    }

    let parsed = parse_normalized(&normalized);
    if parsed.is_none() {
        tracing::debug!(input, "unrecognized duration");
    }
    parsed
}

/// Render minutes as `Xh`, `Ym` or `Xh Ym`. Zero and negative values render as `0m`.
#[must_use]
pub fn format_duration(minutes: i64) -> String {
    if minutes <= 0 {
        return String::from("0m");
    }

    let hours = minutes / 60;
    let rest = minutes % 60;
    match (hours, rest) {
        (0, m) => format!("{m}m"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h {m}m"),
    }
}

fn normalize(input: &str) -> String {
    input
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

fn parse_normalized(input: &str) -> Option<u32> {
    if let Some(caps) = CLOCK.captures(input) {
        let hours = number(&caps[1])?;
        let minutes = number(&caps[2])?;
        // Seconds are validated but truncated.
        let seconds = caps.get(3).map_or(Some(0), |m| number(m.as_str()))?;
        if minutes >= 60 || seconds >= 60 {
            return None;
        }
        return hours.checked_mul(60)?.checked_add(minutes);
    }

    if let Some(caps) = HOURS_MINUTES.captures(input) {
        let hours = number(&caps[1])?;
        let minutes = caps.get(2).map_or(Some(0), |m| number(m.as_str()))?;
        return hours.checked_mul(60)?.checked_add(minutes);
    }

    if let Some(caps) = DECIMAL_HOURS.captures(input) {
        let hours = number(&caps[1])?;
        let fraction = fraction_minutes(&caps[2])?;
        return hours.checked_mul(60)?.checked_add(fraction);
    }

    if let Some(caps) = MINUTES_ONLY.captures(input) {
        return number(&caps[1]);
    }

    if BARE_MINUTES.is_match(input) {
        return number(input);
    }

    None
}

fn number(digits: &str) -> Option<u32> {
    digits.parse().ok()
}

/// Minutes contributed by the digits after the decimal separator, floored.
///
/// The fraction is positional: `5` is half an hour, `05` is three minutes.
fn fraction_minutes(digits: &str) -> Option<u32> {
    let digits = &digits[..digits.len().min(MAX_FRACTION_DIGITS)];
    let numerator: u128 = digits.parse().ok()?;
    let scale = 10_u128.checked_pow(u32::try_from(digits.len()).ok()?)?;
    u32::try_from(numerator * 60 / scale).ok()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("3h 2m", Some(182))]
    #[case("3h2m", Some(182))]
    #[case("3 hours 2 minutes", Some(182))]
    #[case("3hr 2min", Some(182))]
    #[case("3HRS 2MINS", Some(182))]
    #[case("3h", Some(180))]
    #[case("3 hour", Some(180))]
    #[case("3:02", Some(182))]
    #[case("03:02:15", Some(182))]
    #[case("0:59:59", Some(59))]
    #[case("2.5h", Some(150))]
    #[case("2,5h", Some(150))]
    #[case("0.05h", Some(3))]
    #[case("1.75 hours", Some(105))]
    #[case("1.333h", Some(79))]
    #[case("45", Some(45))]
    #[case("45m", Some(45))]
    #[case("45 min", Some(45))]
    #[case("45minutes", Some(45))]
    #[case("", Some(0))]
    #[case("   ", Some(0))]
    #[case("  3h    2m  ", Some(182))]
    fn parses_accepted_grammar(#[case] input: &str, #[case] expected: Option<u32>) {
        assert_eq!(parse_duration(input), expected, "input: {input:?}");
    }

    #[rstest]
    #[case("garbage")]
    #[case("3:60")]
    #[case("3:02:75")]
    #[case("3:2:1:0")]
    #[case("2.5")]
    #[case("2.5m")]
    #[case("-45")]
    #[case("h")]
    #[case("3m 2h")]
    #[case("3h 2m 1s")]
    #[case("99999999999")]
    #[case("71582789h")]
    fn rejects_everything_else(#[case] input: &str) {
        assert_eq!(parse_duration(input), None, "input: {input:?}");
    }

    #[rstest]
    #[case(0, "0m")]
    #[case(-15, "0m")]
    #[case(45, "45m")]
    #[case(60, "1h")]
    #[case(90, "1h 30m")]
    #[case(120, "2h")]
    #[case(1_441, "24h 1m")]
    fn formats_canonically(#[case] minutes: i64, #[case] expected: &str) {
        assert_eq!(format_duration(minutes), expected);
    }

    #[test]
    fn format_is_stable_through_parse() {
        for n in 0..=10_000_i64 {
            let formatted = format_duration(n);
            let reparsed = parse_duration(&formatted).expect("canonical form parses");
            assert_eq!(format_duration(i64::from(reparsed)), formatted);
        }
    }

    #[test]
    fn long_fractions_are_truncated_not_rejected() {
        assert_eq!(parse_duration("1.0500000000000000000000001h"), Some(63));
    }
}
