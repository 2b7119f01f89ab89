use clap::Subcommand;

/// Deadline status commands.
#[derive(Clone, Debug, Subcommand)]
pub enum StatusCommands {
    /// Check whether one status may follow another.
    Check {
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
    },
    /// List the statuses reachable from a status.
    Allowed { status: String },
    /// Append a status change to a deadline stored as JSON.
    Set {
        /// Deadline JSON file, rewritten in place on success
        #[arg(long)]
        deadline: String,
        status: String,
    },
    /// Mark a deadline complete, topping progress up to the total.
    Complete {
        /// Deadline JSON file, rewritten in place on success
        #[arg(long)]
        deadline: String,
    },
}
