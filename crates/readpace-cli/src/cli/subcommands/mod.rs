mod duration;
mod progress;
mod status;

pub use duration::DurationCommands;
pub use progress::ProgressCommands;
pub use status::StatusCommands;
