use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::BookFormat;

/// Historical average pace for one kind of consumption.
///
/// Pages per day for reading, minutes per day for listening.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct PaceData {
    pub average_pace: f64,
    pub is_reliable: bool,
}

impl PaceData {
    #[must_use]
    pub const fn new(average_pace: f64, is_reliable: bool) -> Self {
        Self {
            average_pace,
            is_reliable,
        }
    }
}

/// Reading and listening pace, passed explicitly into every calculation.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct PaceSnapshot {
    pub reading: PaceData,
    pub listening: PaceData,
}

impl PaceSnapshot {
    #[must_use]
    pub const fn new(reading: PaceData, listening: PaceData) -> Self {
        Self { reading, listening }
    }

    /// The pace that applies to a book of `format`.
    #[must_use]
    pub const fn for_format(&self, format: BookFormat) -> PaceData {
        if format.is_audio() {
            self.listening
        } else {
            self.reading
        }
    }
}
