//! Prelude module for common re-exports.
//!
//! Consumers can do `use lift_common::prelude::*;` and get the most
//! important types without listing individual paths.

// ─── Logging ────────────────────────────────────────────────────────
pub use crate::config::LogLevel;

// ─── Configuration ──────────────────────────────────────────────────
pub use crate::config::{ConfigError, ConfigLoader, SharedConfig};

// ─── Building Constants ─────────────────────────────────────────────
pub use crate::consts::{DEFAULT_ELEVATOR_COUNT, DEFAULT_FLOOR_COUNT, MAX_ELEVATORS, MAX_FLOORS};

// ─── Shared Types ───────────────────────────────────────────────────
pub use crate::types::{Direction, ElevatorId, ElevatorStatus, FloorNumber};
