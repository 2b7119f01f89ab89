use chrono::{NaiveDate, Utc};
use serde::de::DeserializeOwned;

use crate::cli::GlobalFlags;

/// Parse a snake_case enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().to_lowercase().replace('-', "_");
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// Parse an optional enum flag, falling back to a configured default.
pub fn parse_enum_or<T>(raw: Option<&str>, field: &str, default: T) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    raw.map_or(Ok(default), |value| parse_enum(value, field))
}

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(raw: &str, field: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

/// The `--today` override, or the current UTC date.
pub fn resolve_today(flags: &GlobalFlags) -> anyhow::Result<NaiveDate> {
    flags
        .today
        .as_deref()
        .map_or_else(|| Ok(Utc::now().date_naive()), |raw| parse_date(raw, "today"))
}
