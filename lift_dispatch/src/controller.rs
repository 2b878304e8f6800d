//! Dispatch controller: owns the bank, the floors and the request queue.
//!
//! The controller is built explicitly by its caller and passed around by
//! reference. Call panels hand it [`DispatchTask`] values; nothing happens
//! until [`DispatchController::process_requests`] drains the queue in FIFO
//! order.
//!
//! Requests are validated when they are enqueued, so a drain never sees an
//! out-of-range floor or an unknown car.

use std::collections::VecDeque;

use lift_common::consts::{MAX_ELEVATORS, MAX_FLOORS};
use lift_common::types::{Direction, ElevatorId, FloorNumber};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::BuildingConfig;
use crate::elevator::{Elevator, ElevatorSnapshot};
use crate::error::{DispatchError, DispatchResult};
use crate::floor::{Floor, FloorSnapshot};
use crate::strategy::DispatchStrategy;

/// A queued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "origin", rename_all = "lowercase")]
pub enum DispatchTask {
    /// Hall call: the strategy chooses the car.
    External {
        floor: FloorNumber,
        direction: Direction,
    },
    /// Cab call: always served by the car it came from.
    Internal {
        elevator: ElevatorId,
        floor: FloorNumber,
    },
}

/// What happened to one task during a drain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DispatchOutcome {
    /// A car travelled to the floor and cycled its doors.
    Served {
        task: DispatchTask,
        elevator: ElevatorId,
    },
    /// No car was eligible; the hall call was dropped.
    NoElevatorAvailable {
        floor: FloorNumber,
        direction: Direction,
    },
}

impl DispatchTask {
    /// Floor the task targets.
    #[inline]
    pub const fn floor(&self) -> FloorNumber {
        match self {
            Self::External { floor, .. } | Self::Internal { floor, .. } => *floor,
        }
    }
}

impl DispatchOutcome {
    /// Floor the outcome refers to.
    #[inline]
    pub const fn floor(&self) -> FloorNumber {
        match self {
            Self::Served { task, .. } => task.floor(),
            Self::NoElevatorAvailable { floor, .. } => *floor,
        }
    }

    /// Car that served the task, if any.
    #[inline]
    pub const fn elevator(&self) -> Option<ElevatorId> {
        match self {
            Self::Served { elevator, .. } => Some(*elevator),
            Self::NoElevatorAvailable { .. } => None,
        }
    }
}

/// Read-only view of the whole building.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FleetSnapshot {
    pub strategy: &'static str,
    pub pending: usize,
    pub elevators: Vec<ElevatorSnapshot>,
    pub floors: Vec<FloorSnapshot>,
}

/// Coordination point for one building's elevator bank.
#[derive(Debug)]
pub struct DispatchController {
    floors: Vec<Floor>,
    elevators: Vec<Elevator>,
    strategy: Box<dyn DispatchStrategy>,
    queue: VecDeque<DispatchTask>,
}

impl DispatchController {
    /// Build a bank of `elevator_count` cars, idle at floor 0, serving floors
    /// `0..floor_count`.
    ///
    /// # Errors
    ///
    /// - `NoFloors` if `floor_count` is 0
    /// - `TooManyFloors` / `TooManyElevators` above the workspace limits
    pub fn new(
        floor_count: u32,
        elevator_count: u32,
        strategy: Box<dyn DispatchStrategy>,
    ) -> DispatchResult<Self> {
        if floor_count == 0 {
            return Err(DispatchError::NoFloors);
        }
        if floor_count > MAX_FLOORS {
            return Err(DispatchError::TooManyFloors(floor_count));
        }
        if elevator_count > MAX_ELEVATORS {
            return Err(DispatchError::TooManyElevators(elevator_count));
        }

        let floors = (0..floor_count).map(Floor::new).collect();
        let elevators = (0..elevator_count as usize)
            .map(|i| Elevator::new(ElevatorId::from_index(i), floor_count))
            .collect();

        info!(
            floors = floor_count,
            elevators = elevator_count,
            strategy = strategy.name(),
            "dispatch controller initialized"
        );

        Ok(Self {
            floors,
            elevators,
            strategy,
            queue: VecDeque::new(),
        })
    }

    /// Build from a validated building configuration.
    pub fn from_config(config: &BuildingConfig) -> DispatchResult<Self> {
        config.validate()?;
        Self::new(
            config.floors,
            config.elevators,
            config.strategy.build(config.floors),
        )
    }

    /// Replace the active strategy. Applies to tasks drained from now on.
    pub fn set_strategy(&mut self, strategy: Box<dyn DispatchStrategy>) {
        info!(from = self.strategy.name(), to = strategy.name(), "strategy changed");
        self.strategy = strategy;
    }

    #[inline]
    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    // ─── Enqueue ────────────────────────────────────────────────────

    /// Enqueue a hall call for `floor` in `direction`.
    ///
    /// # Errors
    ///
    /// - `FloorOutOfRange` if the building has no such floor
    /// - `InvalidDirection` for `Direction::Idle`
    pub fn request_elevator(
        &mut self,
        floor: FloorNumber,
        direction: Direction,
    ) -> DispatchResult<()> {
        self.check_floor(floor)?;
        if !direction.is_travel() {
            return Err(DispatchError::InvalidDirection);
        }
        self.enqueue(DispatchTask::External { floor, direction });
        Ok(())
    }

    /// Enqueue a cab call: `elevator` goes to `floor`, no strategy involved.
    ///
    /// # Errors
    ///
    /// - `UnknownElevator` if the bank has no such car
    /// - `FloorOutOfRange` if the building has no such floor
    pub fn queue_internal_request(
        &mut self,
        elevator: ElevatorId,
        floor: FloorNumber,
    ) -> DispatchResult<()> {
        self.elevator_index(elevator)?;
        self.check_floor(floor)?;
        self.enqueue(DispatchTask::Internal { elevator, floor });
        Ok(())
    }

    /// Press UP on the hall panel of `floor`.
    pub fn press_up(&mut self, floor: FloorNumber) -> DispatchResult<()> {
        let task = self.floor_mut(floor)?.hall_panel_mut().press_up();
        self.enqueue(task);
        Ok(())
    }

    /// Press DOWN on the hall panel of `floor`.
    pub fn press_down(&mut self, floor: FloorNumber) -> DispatchResult<()> {
        let task = self.floor_mut(floor)?.hall_panel_mut().press_down();
        self.enqueue(task);
        Ok(())
    }

    /// Press the `floor` button inside `elevator`.
    pub fn request_floor(&mut self, elevator: ElevatorId, floor: FloorNumber) -> DispatchResult<()> {
        let idx = self.elevator_index(elevator)?;
        let task = self.elevators[idx].cab_panel().request_floor(floor)?;
        self.enqueue(task);
        Ok(())
    }

    fn enqueue(&mut self, task: DispatchTask) {
        debug!(?task, pending = self.queue.len() + 1, "request queued");
        self.queue.push_back(task);
    }

    // ─── Drain ──────────────────────────────────────────────────────

    /// Serve every queued task in arrival order until the queue is empty.
    ///
    /// Each hall call consults the strategy on its own, against the fleet as
    /// left by the previous task; there is no look-ahead or batching.
    pub fn process_requests(&mut self) -> Vec<DispatchOutcome> {
        let mut outcomes = Vec::with_capacity(self.queue.len());
        while let Some(task) = self.queue.pop_front() {
            outcomes.push(self.dispatch(task));
        }
        outcomes
    }

    fn dispatch(&mut self, task: DispatchTask) -> DispatchOutcome {
        match task {
            DispatchTask::External { floor, direction } => {
                let Some(id) = self
                    .strategy
                    .select_elevator(&self.elevators, floor, direction)
                else {
                    warn!(floor, %direction, "no elevator available, request dropped");
                    return DispatchOutcome::NoElevatorAvailable { floor, direction };
                };
                if !self.serve(id, floor) {
                    warn!(elevator = %id, floor, %direction, strategy = self.strategy.name(),
                        "strategy chose a car outside the bank, request dropped");
                    return DispatchOutcome::NoElevatorAvailable { floor, direction };
                }
                info!(elevator = %id, floor, %direction, strategy = self.strategy.name(), "dispatch");
                if let Some(f) = self.floors.get_mut(floor as usize) {
                    f.hall_panel_mut().clear(direction);
                }
                DispatchOutcome::Served { task, elevator: id }
            }
            DispatchTask::Internal { elevator, floor } => {
                info!(%elevator, floor, "internal request");
                let served = self.serve(elevator, floor);
                debug_assert!(served, "cab call for {elevator} passed enqueue checks");
                DispatchOutcome::Served { task, elevator }
            }
        }
    }

    /// Returns `false` when `id` names no car in the bank.
    fn serve(&mut self, id: ElevatorId, floor: FloorNumber) -> bool {
        let Some(car) = self.elevators.iter_mut().find(|e| e.id() == id) else {
            return false;
        };
        car.move_to_floor(floor);
        car.open_door();
        car.close_door();
        true
    }

    // ─── Accessors ──────────────────────────────────────────────────

    #[inline]
    pub fn floors(&self) -> &[Floor] {
        &self.floors
    }

    #[inline]
    pub fn elevators(&self) -> &[Elevator] {
        &self.elevators
    }

    #[inline]
    pub fn floor(&self, floor: FloorNumber) -> Option<&Floor> {
        self.floors.get(floor as usize)
    }

    pub fn elevator(&self, id: ElevatorId) -> Option<&Elevator> {
        id.index().and_then(|i| self.elevators.get(i))
    }

    #[inline]
    pub fn floor_count(&self) -> u32 {
        self.floors.len() as u32
    }

    /// Number of tasks waiting for the next drain.
    #[inline]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Queued tasks in the order they will be served.
    pub fn queued(&self) -> impl Iterator<Item = &DispatchTask> {
        self.queue.iter()
    }

    pub fn snapshot(&self) -> FleetSnapshot {
        FleetSnapshot {
            strategy: self.strategy.name(),
            pending: self.queue.len(),
            elevators: self.elevators.iter().map(Elevator::snapshot).collect(),
            floors: self.floors.iter().map(Floor::snapshot).collect(),
        }
    }

    fn check_floor(&self, floor: FloorNumber) -> DispatchResult<()> {
        if floor < self.floor_count() {
            Ok(())
        } else {
            Err(DispatchError::FloorOutOfRange {
                floor,
                floor_count: self.floor_count(),
            })
        }
    }

    fn floor_mut(&mut self, floor: FloorNumber) -> DispatchResult<&mut Floor> {
        let floor_count = self.floor_count();
        self.floors
            .get_mut(floor as usize)
            .ok_or(DispatchError::FloorOutOfRange { floor, floor_count })
    }

    fn elevator_index(&self, id: ElevatorId) -> DispatchResult<usize> {
        id.index()
            .filter(|&i| i < self.elevators.len())
            .ok_or(DispatchError::UnknownElevator(id))
    }
}

// ─── Tests ──────────────────────────────────────────────────────────
