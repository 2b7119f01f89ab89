use std::path::Path;

use chrono::Utc;
use readpace_core::entities::Deadline;
use readpace_core::lifecycle::CompletionPlan;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::input::{load_deadline, save_deadline};
use crate::output::output;

#[derive(Debug, Serialize)]
struct CompleteResponse {
    plan: CompletionPlan,
    deadline: Deadline,
}

pub fn run(path: &str, flags: &GlobalFlags) -> anyhow::Result<()> {
    let path = Path::new(path);
    let mut deadline = load_deadline(path)?;
    let plan = deadline.complete(Utc::now())?;
    tracing::info!(
        id = %deadline.id,
        topped_up = plan.top_up.is_some(),
        "deadline completed"
    );
    save_deadline(path, &deadline)?;
    output(&CompleteResponse { plan, deadline }, flags.format)
}
