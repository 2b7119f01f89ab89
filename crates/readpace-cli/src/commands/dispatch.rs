use readpace_config::ReadpaceConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(
    command: Commands,
    config: &ReadpaceConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Duration { action } => commands::duration::handle(&action, flags),
        Commands::Progress { action } => commands::progress::handle(&action, config, flags),
        Commands::Status { action } => commands::status::handle(&action, flags),
        Commands::Impact(args) => commands::impact::handle(&args, config, flags),
        Commands::Pace(args) => commands::pace::handle(&args, config, flags),
        Commands::QuickSelect(args) => commands::quick_select::handle(&args, flags),
    }
}
