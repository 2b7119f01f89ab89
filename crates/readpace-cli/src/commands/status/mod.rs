mod allowed;
mod check;
mod complete;
mod set;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::StatusCommands;

/// Handle `rpace status`.
pub fn handle(action: &StatusCommands, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        StatusCommands::Check { from, to } => check::run(from, to, flags),
        StatusCommands::Allowed { status } => allowed::run(status, flags),
        StatusCommands::Set { deadline, status } => set::run(deadline, status, flags),
        StatusCommands::Complete { deadline } => complete::run(deadline, flags),
    }
}
