//! Status enums, book formats, and classification types for readpace.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! [`DeadlineStatus`] provides `allowed_next_states()` so the lifecycle graph is
//! enforced in one place.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// DeadlineStatus
// ---------------------------------------------------------------------------

/// Lifecycle status of a reading deadline.
///
/// ```text
/// pending → reading → paused → reading
///                   → to_review → complete
///                               → did_not_finish
///                   → did_not_finish
///                   → complete
/// pending → rejected
/// pending → withdrew
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DeadlineStatus {
    Pending,
    Reading,
    Paused,
    ToReview,
    Complete,
    DidNotFinish,
    Rejected,
    Withdrew,
}

impl DeadlineStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [Self; 8] = [
        Self::Pending,
        Self::Reading,
        Self::Paused,
        Self::ToReview,
        Self::Complete,
        Self::DidNotFinish,
        Self::Rejected,
        Self::Withdrew,
    ];

    /// Valid next states from the current state.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Pending => &[Self::Reading, Self::Rejected, Self::Withdrew],
            Self::Reading => &[
                Self::Paused,
                Self::ToReview,
                Self::DidNotFinish,
                Self::Complete,
            ],
            Self::Paused => &[Self::Reading],
            Self::ToReview => &[Self::Complete, Self::DidNotFinish],
            Self::Complete | Self::DidNotFinish | Self::Rejected | Self::Withdrew => &[],
        }
    }

    /// Check whether transitioning to `next` is allowed.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    /// Terminal states have no outgoing transitions.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        self.allowed_next_states().is_empty()
    }

    /// Statuses a deadline may be created with when it has no history yet.
    #[must_use]
    pub const fn is_initial(self) -> bool {
        matches!(self, Self::Pending | Self::Reading)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Reading => "reading",
            Self::Paused => "paused",
            Self::ToReview => "to_review",
            Self::Complete => "complete",
            Self::DidNotFinish => "did_not_finish",
            Self::Rejected => "rejected",
            Self::Withdrew => "withdrew",
        }
    }
}

impl fmt::Display for DeadlineStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// BookFormat
// ---------------------------------------------------------------------------

/// Physical form of the book. Audio quantities are minutes, everything else pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum BookFormat {
    #[default]
    Physical,
    Ebook,
    Audio,
}

impl BookFormat {
    #[must_use]
    pub const fn is_audio(self) -> bool {
        matches!(self, Self::Audio)
    }

    /// Unit of `total_quantity` for this format.
    #[must_use]
    pub const fn unit(self) -> PaceUnit {
        match self {
            Self::Physical | Self::Ebook => PaceUnit::Pages,
            Self::Audio => PaceUnit::Minutes,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Physical => "physical",
            Self::Ebook => "ebook",
            Self::Audio => "audio",
        }
    }
}

impl fmt::Display for BookFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// PaceUnit
// ---------------------------------------------------------------------------

/// Unit a pace is expressed in, per day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum PaceUnit {
    #[serde(rename = "pages")]
    Pages,
    #[serde(rename = "min")]
    Minutes,
}

impl PaceUnit {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pages => "pages",
            Self::Minutes => "min",
        }
    }
}

impl fmt::Display for PaceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Feasibility
// ---------------------------------------------------------------------------

/// How achievable a required pace is relative to the user's average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Feasibility {
    Comfortable,
    Tight,
    NotFeasible,
}

impl Feasibility {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Comfortable => "comfortable",
            Self::Tight => "tight",
            Self::NotFeasible => "not_feasible",
        }
    }
}

impl fmt::Display for Feasibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// QuantityView
// ---------------------------------------------------------------------------

/// The representation a user edits progress in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QuantityView {
    #[default]
    Absolute,
    Percentage,
    Remaining,
}

impl QuantityView {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Absolute => "absolute",
            Self::Percentage => "percentage",
            Self::Remaining => "remaining",
        }
    }
}

impl fmt::Display for QuantityView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// QuickSelect
// ---------------------------------------------------------------------------

/// Preset offsets for picking a new due date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QuickSelect {
    OneWeek,
    TwoWeeks,
    ThirtyDays,
    EndOfNextMonth,
}

impl QuickSelect {
    pub const ALL: [Self; 4] = [
        Self::OneWeek,
        Self::TwoWeeks,
        Self::ThirtyDays,
        Self::EndOfNextMonth,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OneWeek => "one_week",
            Self::TwoWeeks => "two_weeks",
            Self::ThirtyDays => "thirty_days",
            Self::EndOfNextMonth => "end_of_next_month",
        }
    }
}

impl fmt::Display for QuickSelect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
