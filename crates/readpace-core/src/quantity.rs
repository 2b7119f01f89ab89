//! Progress entry in three interchangeable views.
//!
//! The canonical value is always `current_progress` in the deadline's unit.
//! The absolute, percentage and remaining views are projections of it, and
//! each view's input is converted back to a `current_progress` on commit.
//!
//! Percentage commits floor: 33% of 300 pages is 99, never 100, so a user is
//! never credited with progress they have not reached.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::duration::{format_duration, parse_duration};
use crate::enums::{BookFormat, QuantityView};
use crate::errors::QuantityInputError;

/// Rounded percentage of `total` that `current` represents. A zero total is 0%.
#[must_use]
pub fn percentage_of(current: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    let current = u64::from(current);
    let total = u64::from(total);
    // Round half up in integer space.
    let rounded = (current * 200 + total) / (total * 2);
    u32::try_from(rounded).unwrap_or(u32::MAX)
}

/// Progress reached at `percentage` of `total`, floored to a whole unit.
///
/// `percentage` must already be validated to lie in `0..=100`.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::suboptimal_flops
)]
pub fn quantity_from_percentage(percentage: f64, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    // Multiply before dividing so integral percentages stay exact.
    let raw = (percentage * f64::from(total) / 100.0).floor();
    raw.clamp(0.0, f64::from(total)) as u32
}

/// Text shown in `view` for the canonical progress value.
#[must_use]
pub fn display_quantity(view: QuantityView, current: u32, total: u32, format: BookFormat) -> String {
    match view {
        QuantityView::Absolute => display_units(current, format),
        QuantityView::Percentage => percentage_of(current, total).to_string(),
        QuantityView::Remaining => display_units(total.saturating_sub(current), format),
    }
}

/// Convert text typed into `view` to the `current_progress` it commits.
///
/// # Errors
///
/// Returns [`QuantityInputError::Unparseable`] when the text is not a value
/// of the view (durations for audio, whole numbers otherwise), and
/// [`QuantityInputError::PercentageOutOfRange`] for percentages outside
/// `0..=100`. Nothing should be committed in either case.
pub fn reconcile_quantity(
    view: QuantityView,
    value: &str,
    total: u32,
    format: BookFormat,
) -> Result<u32, QuantityInputError> {
    match view {
        QuantityView::Absolute => parse_units(view, value, format),
        QuantityView::Percentage => {
            let percentage = parse_percentage(value)?;
            Ok(quantity_from_percentage(percentage, total))
        }
        QuantityView::Remaining => {
            let remaining = parse_units(view, value, format)?;
            Ok(total.saturating_sub(remaining))
        }
    }
}

/// All three views of one progress value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct QuantityViews {
    pub current_progress: u32,
    pub absolute: String,
    pub percentage: String,
    pub remaining: String,
}

impl QuantityViews {
    #[must_use]
    pub fn of(current: u32, total: u32, format: BookFormat) -> Self {
        Self {
            current_progress: current,
            absolute: display_quantity(QuantityView::Absolute, current, total, format),
            percentage: display_quantity(QuantityView::Percentage, current, total, format),
            remaining: display_quantity(QuantityView::Remaining, current, total, format),
        }
    }
}

fn display_units(value: u32, format: BookFormat) -> String {
    if format.is_audio() {
        format_duration(i64::from(value))
    } else {
        value.to_string()
    }
}

fn parse_units(view: QuantityView, value: &str, format: BookFormat) -> Result<u32, QuantityInputError> {
    let trimmed = value.trim();
    let parsed = if trimmed.is_empty() {
        None
    } else if format.is_audio() {
        parse_duration(trimmed)
    } else {
        trimmed.parse::<u32>().ok()
    };

    parsed.ok_or_else(|| {
        tracing::debug!(%view, input = value, "rejected quantity input");
        QuantityInputError::Unparseable {
            view,
            input: value.to_string(),
        }
    })
}

fn parse_percentage(value: &str) -> Result<f64, QuantityInputError> {
    let trimmed = value.trim();
    let number = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();
    let percentage: f64 = number
        .replace(',', ".")
        .parse()
        .ok()
        .filter(|p: &f64| p.is_finite())
        .ok_or_else(|| QuantityInputError::Unparseable {
            view: QuantityView::Percentage,
            input: value.to_string(),
        })?;

    if !(0.0..=100.0).contains(&percentage) {
        tracing::debug!(input = value, "percentage out of range");
        return Err(QuantityInputError::PercentageOutOfRange {
            input: value.to_string(),
        });
    }
    Ok(percentage)
}

/// Editable progress field that keeps one view in sync with the canonical value.
///
/// Valid input commits immediately. Invalid input leaves the canonical value
/// untouched and, on blur, the text snaps back to the last valid rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantityField {
    total: u32,
    format: BookFormat,
    view: QuantityView,
    current: u32,
    text: String,
    focused: bool,
}

impl QuantityField {
    #[must_use]
    pub fn new(current: u32, total: u32, format: BookFormat, view: QuantityView) -> Self {
        Self {
            total,
            format,
            view,
            current,
            text: display_quantity(view, current, total, format),
            focused: false,
        }
    }

    pub const fn focus(&mut self) {
        self.focused = true;
    }

    /// Record typed text and commit it if valid.
    ///
    /// # Errors
    ///
    /// Returns the reconciliation error; the canonical value is unchanged.
    pub fn input(&mut self, text: &str) -> Result<u32, QuantityInputError> {
        text.clone_into(&mut self.text);
        let committed = reconcile_quantity(self.view, text, self.total, self.format)?;
        self.current = committed;
        Ok(committed)
    }

    /// Leave the field, re-rendering the text from the canonical value.
    pub fn blur(&mut self) {
        self.focused = false;
        self.refresh();
    }

    pub fn switch_view(&mut self, view: QuantityView) {
        self.view = view;
        self.refresh();
    }

    /// Replace the canonical value from outside, e.g. after a save.
    pub fn set_current(&mut self, current: u32) {
        self.current = current;
        if !self.focused {
            self.refresh();
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub const fn current(&self) -> u32 {
        self.current
    }

    #[must_use]
    pub const fn view(&self) -> QuantityView {
        self.view
    }

    #[must_use]
    pub const fn is_focused(&self) -> bool {
        self.focused
    }

    fn refresh(&mut self) {
        self.text = display_quantity(self.view, self.current, self.total, self.format);
    }
}
