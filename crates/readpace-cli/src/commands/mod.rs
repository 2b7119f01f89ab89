pub mod dispatch;
pub mod duration;
pub mod impact;
pub mod pace;
pub mod progress;
pub mod quick_select;
pub mod shared;
pub mod status;
