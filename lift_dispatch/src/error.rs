//! Error types for dispatch operations.
//!
//! Every error here is local and non-fatal: a rejected request leaves the
//! controller exactly as it was. A hall call with no eligible elevator is not
//! an error at all; it surfaces as
//! [`DispatchOutcome::NoElevatorAvailable`](crate::controller::DispatchOutcome).

use lift_common::config::ConfigError;
use lift_common::types::{ElevatorId, FloorNumber};
use thiserror::Error;

/// Errors raised when building a controller or enqueueing a request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// Requested floor is outside `[0, floor_count)`.
    #[error("Floor {floor} out of range (building has {floor_count} floors)")]
    FloorOutOfRange {
        /// Requested floor
        floor: FloorNumber,
        /// Number of floors in the building
        floor_count: u32,
    },

    /// No elevator with this id exists in the bank.
    #[error("Unknown elevator: {0}")]
    UnknownElevator(ElevatorId),

    /// Hall calls must go up or down.
    #[error("Hall calls must be UP or DOWN")]
    InvalidDirection,

    /// A building needs at least one floor.
    #[error("Building must have at least one floor")]
    NoFloors,

    /// Floor count above the supported maximum.
    #[error("Too many floors: {0}")]
    TooManyFloors(u32),

    /// Elevator count above the supported maximum.
    #[error("Too many elevators: {0}")]
    TooManyElevators(u32),

    /// Configuration could not be loaded or validated.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type for dispatch operations.
pub type DispatchResult<T> = Result<T, DispatchError>;
