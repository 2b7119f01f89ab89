//! Value objects the engine computes over.
//!
//! Each entity mirrors a row (or row group) owned by the persistence
//! collaborator. The engine never stores them; callers pass them in for every
//! computation. All structs derive `Serialize`, `Deserialize`, and `JsonSchema`
//! for JSON roundtrip and schema validation.

mod deadline;
mod pace;
mod progress;
mod status;

pub use deadline::Deadline;
pub use pace::{PaceData, PaceSnapshot};
pub use progress::{ProgressEvent, ProgressLog};
pub use status::{StatusEvent, StatusLog};
