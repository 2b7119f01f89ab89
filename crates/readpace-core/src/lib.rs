//! # readpace-core
//!
//! Deadline lifecycle and pace-feasibility engine for readpace.
//!
//! This crate is a pure, synchronous computation layer. It holds no state
//! between calls and performs no I/O; callers supply deadlines, event history
//! and pace data, and persist whatever the engine returns.
//!
//! - Duration parsing and canonical `Xh Ym` formatting
//! - Progress entry in absolute, percentage and remaining views
//! - Status enums with state machine transitions
//! - Date-change impact and feasibility classification
//! - Pace aggregation from progress history
//! - Completion workflow (status change plus progress top-up)

pub mod duration;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod history;
pub mod lifecycle;
pub mod pace;
pub mod quantity;
pub mod transition;

pub use duration::{format_duration, parse_duration};
pub use errors::{CoreError, QuantityInputError};
pub use pace::{compute_impact, feasibility_config, quick_select_date};
pub use quantity::{display_quantity, reconcile_quantity};
pub use transition::{request_transition, validate_transition};
