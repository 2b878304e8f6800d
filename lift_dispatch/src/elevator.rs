//! Elevator motion state machine.
//!
//! Two states, two events:
//!
//! | From     | Event                | To       | Effect                                   |
//! |----------|----------------------|----------|------------------------------------------|
//! | `Idle`   | `Depart { target }`  | `Moving` | direction := toward(current, target)     |
//! | `Moving` | `Arrive`             | `Idle`   | floor := target, direction := Idle, trips += 1 |
//!
//! Every other pair is rejected and leaves the car untouched. Transit is
//! instantaneous, so `Moving` is never observable outside a single
//! [`Elevator::move_to_floor`] call.

use lift_common::types::{Direction, ElevatorId, ElevatorStatus, FloorNumber};
use serde::Serialize;
use tracing::{debug, info};

use crate::panel::CabPanel;

/// Event that drives the elevator state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionEvent {
    /// Leave the current floor for `target`.
    Depart { target: FloorNumber },
    /// Reached the departure target.
    Arrive,
}

/// Result of an elevator transition attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionResult {
    /// Transition succeeded — new status.
    Ok(ElevatorStatus),
    /// Transition rejected — reason.
    Rejected(&'static str),
}

/// One car in the bank.
#[derive(Debug, Clone)]
pub struct Elevator {
    id: ElevatorId,
    status: ElevatorStatus,
    direction: Direction,
    current_floor: FloorNumber,
    target: Option<FloorNumber>,
    trips: u64,
    cab_panel: CabPanel,
}

impl Elevator {
    /// New car, idle at floor 0, with a cab panel for `floor_count` floors.
    pub const fn new(id: ElevatorId, floor_count: u32) -> Self {
        Self {
            id,
            status: ElevatorStatus::Idle,
            direction: Direction::Idle,
            current_floor: 0,
            target: None,
            trips: 0,
            cab_panel: CabPanel::new(id, floor_count),
        }
    }

    #[inline]
    pub const fn id(&self) -> ElevatorId {
        self.id
    }

    #[inline]
    pub const fn status(&self) -> ElevatorStatus {
        self.status
    }

    #[inline]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    #[inline]
    pub const fn current_floor(&self) -> FloorNumber {
        self.current_floor
    }

    /// Number of completed trips.
    #[inline]
    pub const fn trips(&self) -> u64 {
        self.trips
    }

    #[inline]
    pub const fn cab_panel(&self) -> &CabPanel {
        &self.cab_panel
    }

    /// Whether the car is idle or already heading in `direction`.
    #[inline]
    pub fn can_serve(&self, direction: Direction) -> bool {
        self.status == ElevatorStatus::Idle || self.direction == direction
    }

    /// Distance in floors from the car to `floor`.
    #[inline]
    pub const fn distance_to(&self, floor: FloorNumber) -> u32 {
        self.current_floor.abs_diff(floor)
    }

    /// Attempt a transition given an event.
    pub(crate) fn handle_event(&mut self, event: MotionEvent) -> TransitionResult {
        use ElevatorStatus::*;
        use MotionEvent::*;

        match (self.status, event) {
            (Idle, Depart { target }) => {
                self.direction = Direction::toward(self.current_floor, target);
                self.target = Some(target);
                self.status = Moving;
            }
            (Moving, Arrive) => {
                if let Some(target) = self.target.take() {
                    self.current_floor = target;
                }
                self.direction = Direction::Idle;
                self.status = Idle;
                self.trips += 1;
            }
            (Idle, Arrive) => return TransitionResult::Rejected("Idle: not travelling"),
            (Moving, Depart { .. }) => {
                return TransitionResult::Rejected("Moving: already travelling");
            }
        }

        TransitionResult::Ok(self.status)
    }

    /// Travel to `floor` and update the cab display.
    ///
    /// The floor is not range-checked here; the controller validates every
    /// request before it reaches a car.
    pub fn move_to_floor(&mut self, floor: FloorNumber) {
        info!(elevator = %self.id, from = self.current_floor, to = floor, "moving");
        let depart = self.handle_event(MotionEvent::Depart { target: floor });
        debug_assert!(matches!(depart, TransitionResult::Ok(_)), "{depart:?}");
        let arrive = self.handle_event(MotionEvent::Arrive);
        debug_assert!(matches!(arrive, TransitionResult::Ok(_)), "{arrive:?}");
        self.cab_panel.display(self.current_floor, self.direction);
    }

    pub fn open_door(&self) {
        debug!(elevator = %self.id, floor = self.current_floor, "door opened");
    }

    pub fn close_door(&self) {
        debug!(elevator = %self.id, floor = self.current_floor, "door closed");
    }

    /// Read-only view for display and serialization.
    pub fn snapshot(&self) -> ElevatorSnapshot {
        ElevatorSnapshot {
            id: self.id,
            status: self.status,
            direction: self.direction,
            current_floor: self.current_floor,
            trips: self.trips,
        }
    }
}

/// Serializable view of one elevator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ElevatorSnapshot {
    pub id: ElevatorId,
    pub status: ElevatorStatus,
    pub direction: Direction,
    pub current_floor: FloorNumber,
    pub trips: u64,
}

// ─── Tests ──────────────────────────────────────────────────────────
