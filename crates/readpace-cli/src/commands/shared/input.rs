use std::path::Path;

use anyhow::Context;
use readpace_core::entities::Deadline;

/// Read a single deadline document.
pub fn load_deadline(path: &Path) -> anyhow::Result<Deadline> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read deadline file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse deadline file {}", path.display()))
}

/// Read an array of deadlines, or a single deadline object.
pub fn load_deadlines(path: &Path) -> anyhow::Result<Vec<Deadline>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read deadlines file {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse deadlines file {}", path.display()))?;
    let deadlines = if value.is_array() {
        serde_json::from_value(value)?
    } else {
        vec![serde_json::from_value(value)?]
    };
    Ok(deadlines)
}

/// Rewrite a deadline document in place.
pub fn save_deadline(path: &Path, deadline: &Deadline) -> anyhow::Result<()> {
    let rendered = serde_json::to_string_pretty(deadline)?;
    std::fs::write(path, rendered + "\n")
        .with_context(|| format!("failed to write deadline file {}", path.display()))?;
    tracing::debug!(path = %path.display(), id = %deadline.id, "deadline saved");
    Ok(())
}
