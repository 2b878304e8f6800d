//! Call sources: hall panels on each floor and cab panels inside each elevator.
//!
//! Panels never hold a pointer to the controller. Pressing a button records
//! the press and hands back the [`DispatchTask`] that the controller enqueues,
//! so the controller stays the only owner of the queue.

use std::ops::Range;

use bitflags::bitflags;
use lift_common::types::{Direction, ElevatorId, FloorNumber};
use tracing::debug;

use crate::controller::DispatchTask;
use crate::error::{DispatchError, DispatchResult};

bitflags! {
    /// Hall call buttons that have been pressed on a floor.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct HallCall: u8 {
        const UP   = 0x01;
        const DOWN = 0x02;
    }
}

impl HallCall {
    /// Flag for a hall call direction. `None` for `Direction::Idle`.
    #[inline]
    pub const fn from_direction(direction: Direction) -> Option<Self> {
        match direction {
            Direction::Up => Some(Self::UP),
            Direction::Down => Some(Self::DOWN),
            Direction::Idle => None,
        }
    }
}

/// Up/down call panel mounted on one floor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HallPanel {
    floor: FloorNumber,
    pressed: HallCall,
}

impl HallPanel {
    pub const fn new(floor: FloorNumber) -> Self {
        Self {
            floor,
            pressed: HallCall::empty(),
        }
    }

    #[inline]
    pub const fn floor(&self) -> FloorNumber {
        self.floor
    }

    /// Press the UP button and produce the external request for this floor.
    pub fn press_up(&mut self) -> DispatchTask {
        self.press(Direction::Up)
    }

    /// Press the DOWN button and produce the external request for this floor.
    pub fn press_down(&mut self) -> DispatchTask {
        self.press(Direction::Down)
    }

    fn press(&mut self, direction: Direction) -> DispatchTask {
        if let Some(flag) = HallCall::from_direction(direction) {
            self.pressed.insert(flag);
        }
        debug!(floor = self.floor, %direction, "hall call pressed");
        DispatchTask::External {
            floor: self.floor,
            direction,
        }
    }

    #[inline]
    pub const fn is_up_pressed(&self) -> bool {
        self.pressed.contains(HallCall::UP)
    }

    #[inline]
    pub const fn is_down_pressed(&self) -> bool {
        self.pressed.contains(HallCall::DOWN)
    }

    /// Currently lit buttons.
    #[inline]
    pub const fn pressed(&self) -> HallCall {
        self.pressed
    }

    /// Turn off the button for `direction` once a car has answered it.
    pub fn clear(&mut self, direction: Direction) {
        if let Some(flag) = HallCall::from_direction(direction) {
            self.pressed.remove(flag);
        }
    }
}

/// Destination panel inside one elevator car.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CabPanel {
    elevator: ElevatorId,
    buttons: Range<FloorNumber>,
    shown_floor: FloorNumber,
    shown_direction: Direction,
}

impl CabPanel {
    /// Panel for `elevator` with one button per floor in `0..floor_count`.
    pub const fn new(elevator: ElevatorId, floor_count: u32) -> Self {
        Self {
            elevator,
            buttons: 0..floor_count,
            shown_floor: 0,
            shown_direction: Direction::Idle,
        }
    }

    #[inline]
    pub const fn elevator(&self) -> ElevatorId {
        self.elevator
    }

    /// Floors this panel has a button for.
    pub fn buttons(&self) -> impl Iterator<Item = FloorNumber> + '_ {
        self.buttons.clone()
    }

    /// Press the button for `floor`, producing an internal request for the
    /// owning elevator.
    ///
    /// # Errors
    ///
    /// `FloorOutOfRange` when the panel has no button for `floor`.
    pub fn request_floor(&self, floor: FloorNumber) -> DispatchResult<DispatchTask> {
        if !self.buttons.contains(&floor) {
            return Err(DispatchError::FloorOutOfRange {
                floor,
                floor_count: self.buttons.end,
            });
        }
        debug!(elevator = %self.elevator, floor, "cab call pressed");
        Ok(DispatchTask::Internal {
            elevator: self.elevator,
            floor,
        })
    }

    /// Update the floor indicator.
    pub fn display(&mut self, floor: FloorNumber, direction: Direction) {
        self.shown_floor = floor;
        self.shown_direction = direction;
        debug!(elevator = %self.elevator, floor, %direction, "cab display");
    }

    /// Floor and direction currently shown on the indicator.
    #[inline]
    pub const fn shown(&self) -> (FloorNumber, Direction) {
        (self.shown_floor, self.shown_direction)
    }
}

// ─── Tests ──────────────────────────────────────────────────────────
