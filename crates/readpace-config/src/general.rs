//! General application configuration.

use readpace_core::enums::{BookFormat, QuantityView};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Format assumed when a command does not name one.
    #[serde(default)]
    pub default_format: BookFormat,

    /// View progress is entered in by default.
    #[serde(default)]
    pub default_view: QuantityView,
}
