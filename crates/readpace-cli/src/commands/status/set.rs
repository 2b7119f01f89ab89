use std::path::Path;

use chrono::Utc;
use readpace_core::entities::Deadline;
use readpace_core::enums::DeadlineStatus;

use crate::cli::GlobalFlags;
use crate::commands::shared::input::{load_deadline, save_deadline};
use crate::commands::shared::parse::parse_enum;
use crate::output::output;

fn apply(deadline: &mut Deadline, requested: DeadlineStatus) -> anyhow::Result<()> {
    let event = deadline.status.transition(requested, Utc::now())?;
    tracing::info!(id = %deadline.id, status = %event.status, "status changed");
    Ok(())
}

pub fn run(path: &str, status: &str, flags: &GlobalFlags) -> anyhow::Result<()> {
    let requested = parse_enum(status, "status")?;
    let path = Path::new(path);
    let mut deadline = load_deadline(path)?;
    apply(&mut deadline, requested)?;
    save_deadline(path, &deadline)?;
    output(&deadline, flags.format)
}
