//! Shared state and identifier types.
//!
//! Enums use `#[repr(u8)]` for a compact layout and lowercase serde names so
//! they read naturally in TOML configuration and JSON snapshots.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Zero-based floor number. Unique within a building.
pub type FloorNumber = u32;

/// Travel direction of an elevator, or the direction of a hall call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Direction {
    /// Travelling towards higher floors.
    Up = 0,
    /// Travelling towards lower floors.
    Down = 1,
    /// Not travelling.
    #[default]
    Idle = 2,
}

impl Direction {
    /// Direction of travel needed to get from `from` to `to`.
    ///
    /// Returns `Idle` when both floors are the same.
    #[inline]
    pub const fn toward(from: FloorNumber, to: FloorNumber) -> Self {
        if to > from {
            Self::Up
        } else if to < from {
            Self::Down
        } else {
            Self::Idle
        }
    }

    /// `true` for `Up` and `Down`.
    #[inline]
    pub const fn is_travel(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }

    #[inline]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Up),
            1 => Some(Self::Down),
            2 => Some(Self::Idle),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Up => "UP",
            Self::Down => "DOWN",
            Self::Idle => "IDLE",
        })
    }
}

/// Motion status of a single elevator.
///
/// `Moving` is only observable while a dispatch is executing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum ElevatorStatus {
    /// Stationary at a floor.
    #[default]
    Idle = 0,
    /// In transit between floors.
    Moving = 1,
}

impl fmt::Display for ElevatorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Idle => "IDLE",
            Self::Moving => "MOVING",
        })
    }
}

/// Identity of an elevator within its bank.
///
/// Ids are 1-based and assigned in fleet order when the bank is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElevatorId(pub u32);

impl ElevatorId {
    /// Id for the elevator at zero-based fleet position `index`.
    #[inline]
    pub const fn from_index(index: usize) -> Self {
        Self(index as u32 + 1)
    }

    /// Zero-based fleet position. `None` for the invalid id 0.
    #[inline]
    pub const fn index(self) -> Option<usize> {
        match self.0 {
            0 => None,
            n => Some(n as usize - 1),
        }
    }
}

impl fmt::Display for ElevatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{}", self.0)
    }
}
