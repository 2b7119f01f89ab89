use clap::Subcommand;

/// Progress entry commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ProgressCommands {
    /// Convert text typed in one view into the committed absolute progress.
    Reconcile {
        /// View the value was typed in: absolute, percentage, remaining (defaults to config)
        #[arg(long)]
        view: Option<String>,
        /// Raw text as typed
        #[arg(long, allow_hyphen_values = true)]
        value: String,
        #[arg(long)]
        total: u32,
        /// Book format: physical, ebook, audio (defaults to config)
        #[arg(long = "book-format")]
        book_format: Option<String>,
    },
    /// Render a committed progress value in every view.
    Show {
        #[arg(long)]
        current: u32,
        #[arg(long)]
        total: u32,
        #[arg(long = "book-format")]
        book_format: Option<String>,
    },
}
