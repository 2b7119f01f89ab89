use clap::Subcommand;

/// Listening duration commands.
#[derive(Clone, Debug, Subcommand)]
pub enum DurationCommands {
    /// Parse free-form text such as `3h 2m`, `3:02` or `2.5h` into minutes.
    Parse { input: String },
    /// Format whole minutes as `Xh Ym`.
    Format {
        #[arg(allow_negative_numbers = true)]
        minutes: i64,
    },
}
