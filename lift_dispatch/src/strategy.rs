//! Pluggable dispatch strategies.
//!
//! A strategy looks at the fleet and picks the car that answers a hall call.
//! Strategies are stateless and hold no references into the fleet, so the
//! controller can swap them between drains.
//!
//! ## Eligibility
//!
//! All bundled strategies share one eligibility rule: a car qualifies when it
//! is idle or already travelling in the requested direction
//! ([`Elevator::can_serve`]). Ties always go to the car that comes first in
//! fleet order.

use std::fmt::Debug;

use lift_common::types::{Direction, ElevatorId, FloorNumber};
use serde::{Deserialize, Serialize};

use crate::elevator::Elevator;

/// Policy that selects an elevator for a hall call.
pub trait DispatchStrategy: Debug + Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Pick the car that should serve `floor` in `direction`.
    ///
    /// Returns `None` if the fleet is empty or no car is eligible. Must not
    /// mutate any fleet state.
    fn select_elevator(
        &self,
        fleet: &[Elevator],
        floor: FloorNumber,
        direction: Direction,
    ) -> Option<ElevatorId>;
}

/// Nearest eligible car; first in fleet order on ties.
///
/// Greedy: it ignores queued work and never batches calls into one trip.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectionalStrategy;

impl DispatchStrategy for DirectionalStrategy {
    fn name(&self) -> &'static str {
        "directional"
    }

    fn select_elevator(
        &self,
        fleet: &[Elevator],
        floor: FloorNumber,
        direction: Direction,
    ) -> Option<ElevatorId> {
        fleet
            .iter()
            .filter(|e| e.can_serve(direction))
            .min_by_key(|e| e.distance_to(floor))
            .map(Elevator::id)
    }
}

/// Eligible car with the fewest completed trips, then the nearest.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadBalancedStrategy;

impl DispatchStrategy for LoadBalancedStrategy {
    fn name(&self) -> &'static str {
        "load_balanced"
    }

    fn select_elevator(
        &self,
        fleet: &[Elevator],
        floor: FloorNumber,
        direction: Direction,
    ) -> Option<ElevatorId> {
        fleet
            .iter()
            .filter(|e| e.can_serve(direction))
            .min_by_key(|e| (e.trips(), e.distance_to(floor)))
            .map(Elevator::id)
    }
}

/// Each car owns a contiguous band of floors.
///
/// With `n` cars and `f` floors, car `i` owns floors
/// `[i * ceil(f / n), (i + 1) * ceil(f / n))`. The owner answers if eligible;
/// otherwise the call falls back to [`DirectionalStrategy`].
#[derive(Debug, Clone, Copy)]
pub struct ZonedStrategy {
    floor_count: u32,
}

impl ZonedStrategy {
    pub const fn new(floor_count: u32) -> Self {
        Self { floor_count }
    }

    /// Fleet index of the car owning `floor` in a fleet of `fleet_len` cars.
    pub fn zone_owner(&self, floor: FloorNumber, fleet_len: usize) -> Option<usize> {
        if fleet_len == 0 || self.floor_count == 0 {
            return None;
        }
        let zone_size = self.floor_count.div_ceil(fleet_len as u32).max(1);
        Some(((floor / zone_size) as usize).min(fleet_len - 1))
    }
}

impl DispatchStrategy for ZonedStrategy {
    fn name(&self) -> &'static str {
        "zoned"
    }

    fn select_elevator(
        &self,
        fleet: &[Elevator],
        floor: FloorNumber,
        direction: Direction,
    ) -> Option<ElevatorId> {
        self.zone_owner(floor, fleet.len())
            .map(|idx| &fleet[idx])
            .filter(|owner| owner.can_serve(direction))
            .map(Elevator::id)
            .or_else(|| DirectionalStrategy.select_elevator(fleet, floor, direction))
    }
}

/// Strategy selector used by configuration and the command line.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum StrategyKind {
    #[default]
    Directional,
    LoadBalanced,
    Zoned,
}

impl StrategyKind {
    /// Instantiate the strategy for a building with `floor_count` floors.
    pub fn build(self, floor_count: u32) -> Box<dyn DispatchStrategy> {
        match self {
            Self::Directional => Box::new(DirectionalStrategy),
            Self::LoadBalanced => Box::new(LoadBalancedStrategy),
            Self::Zoned => Box::new(ZonedStrategy::new(floor_count)),
        }
    }
}

// ─── Tests ──────────────────────────────────────────────────────────
