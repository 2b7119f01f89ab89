use readpace_config::ReadpaceConfig;
use readpace_core::enums::{BookFormat, QuantityView};
use readpace_core::quantity::QuantityViews;
use readpace_core::reconcile_quantity;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProgressCommands;
use crate::commands::shared::parse::parse_enum_or;
use crate::output::output;

fn reconcile(
    view: QuantityView,
    value: &str,
    total: u32,
    format: BookFormat,
) -> anyhow::Result<QuantityViews> {
    let committed = reconcile_quantity(view, value, total, format)?;
    tracing::debug!(%view, value, committed, "progress reconciled");
    Ok(QuantityViews::of(committed, total, format))
}

/// Handle `rpace progress`.
pub fn handle(
    action: &ProgressCommands,
    config: &ReadpaceConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ProgressCommands::Reconcile {
            view,
            value,
            total,
            book_format,
        } => {
            let view = parse_enum_or(view.as_deref(), "view", config.general.default_view)?;
            let format = parse_enum_or(
                book_format.as_deref(),
                "book format",
                config.general.default_format,
            )?;
            output(&reconcile(view, value, *total, format)?, flags.format)
        }
        ProgressCommands::Show {
            current,
            total,
            book_format,
        } => {
            let format = parse_enum_or(
                book_format.as_deref(),
                "book format",
                config.general.default_format,
            )?;
            output(&QuantityViews::of(*current, *total, format), flags.format)
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use readpace_core::enums::{BookFormat, QuantityView};

    use super::reconcile;

    #[test]
    fn remaining_audio_renders_every_view() {
        let views = reconcile(QuantityView::Remaining, "3h 0m", 600, BookFormat::Audio).unwrap();
        assert_eq!(views.current_progress, 420);
        assert_eq!(views.absolute, "7h");
        assert_eq!(views.percentage, "70");
        assert_eq!(views.remaining, "3h");
    }

    #[test]
    fn rejected_input_surfaces_the_message() {
        let err = reconcile(QuantityView::Percentage, "150", 400, BookFormat::Physical)
            .expect_err("out of range");
        assert_eq!(err.to_string(), "Percentage '150' is outside 0-100");
    }
}
