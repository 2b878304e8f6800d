//! Building-wide constants for the lift workspace.
//!
//! Single source of truth for numeric limits and default paths.

/// Maximum number of floors a building may declare.
pub const MAX_FLOORS: u32 = 256;

/// Maximum number of elevators in one bank.
pub const MAX_ELEVATORS: u32 = 64;

/// Floor count used when no configuration is given.
pub const DEFAULT_FLOOR_COUNT: u32 = 5;

/// Elevator count used when no configuration is given.
pub const DEFAULT_ELEVATOR_COUNT: u32 = 2;

/// Default configuration file path.
pub const DEFAULT_CONFIG_PATH: &str = "config/lift.toml";
