use clap::{Args, Subcommand};

use crate::cli::subcommands::{DurationCommands, ProgressCommands, StatusCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Parse and format listening durations.
    Duration {
        #[command(subcommand)]
        action: DurationCommands,
    },
    /// Progress entry in absolute, percentage or remaining terms.
    Progress {
        #[command(subcommand)]
        action: ProgressCommands,
    },
    /// Deadline status transitions.
    Status {
        #[command(subcommand)]
        action: StatusCommands,
    },
    /// Impact of moving a deadline to a new date.
    Impact(ImpactArgs),
    /// Average daily pace derived from progress history.
    Pace(PaceArgs),
    /// Preset candidate dates for a date change.
    QuickSelect(QuickSelectArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ImpactArgs {
    /// Candidate due date (YYYY-MM-DD)
    #[arg(long)]
    pub date: String,

    /// Total pages or minutes in the book
    #[arg(long)]
    pub total: u32,

    /// Current progress in pages or minutes
    #[arg(long, default_value_t = 0)]
    pub progress: u32,

    /// Book format: physical, ebook, audio (defaults to config)
    #[arg(long = "book-format")]
    pub book_format: Option<String>,

    /// Average pages per day
    #[arg(long, default_value_t = 0.0)]
    pub reading_pace: f64,

    /// Average listening minutes per day
    #[arg(long, default_value_t = 0.0)]
    pub listening_pace: f64,
}

#[derive(Clone, Debug, Args)]
pub struct PaceArgs {
    /// JSON file holding an array of deadlines with progress history
    #[arg(long)]
    pub deadlines: String,

    /// Override the configured history window in days
    #[arg(long)]
    pub window_days: Option<u32>,
}

#[derive(Clone, Debug, Args)]
pub struct QuickSelectArgs {
    /// Preset: one-week, two-weeks, thirty-days, end-of-next-month (all when omitted)
    #[arg(long)]
    pub kind: Option<String>,

    /// Current due date (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    pub deadline_date: Option<String>,
}
