//! Property tests for the drain loop.
//!
//! Fleets are placed at random floors through cab calls, then probed with
//! random hall and cab calls.

use lift_common::types::{Direction, ElevatorId, ElevatorStatus};
use proptest::prelude::*;

use lift_dispatch::controller::{DispatchController, DispatchOutcome, DispatchTask};
use lift_dispatch::strategy::StrategyKind;

const FLOORS: u32 = 12;

/// Bank with one car per entry of `start`, parked on those floors.
fn parked_bank(start: &[u32], kind: StrategyKind) -> DispatchController {
    let mut bank = DispatchController::new(FLOORS, start.len() as u32, kind.build(FLOORS)).unwrap();
    for (i, &floor) in start.iter().enumerate() {
        bank.queue_internal_request(ElevatorId::from_index(i), floor)
            .unwrap();
    }
    bank.process_requests();
    bank
}

fn strategy_kind() -> impl Strategy<Value = StrategyKind> {
    prop_oneof![
        Just(StrategyKind::Directional),
        Just(StrategyKind::LoadBalanced),
        Just(StrategyKind::Zoned),
    ]
}

fn hall_direction() -> impl Strategy<Value = Direction> {
    prop_oneof![Just(Direction::Up), Just(Direction::Down)]
}

proptest! {
    #[test]
    fn hall_call_moves_one_car_to_the_floor(
        start in prop::collection::vec(0..FLOORS, 1..6),
        floor in 0..FLOORS,
        direction in hall_direction(),
        kind in strategy_kind(),
    ) {
        let mut bank = parked_bank(&start, kind);
        bank.request_elevator(floor, direction).unwrap();
        let outcomes = bank.process_requests();

        prop_assert_eq!(outcomes.len(), 1);
        let chosen = outcomes[0].elevator().expect("idle fleet always has a candidate");
        for (i, car) in bank.elevators().iter().enumerate() {
            prop_assert_eq!(car.status(), ElevatorStatus::Idle);
            if car.id() == chosen {
                prop_assert_eq!(car.current_floor(), floor);
            } else {
                prop_assert_eq!(car.current_floor(), start[i]);
            }
        }
    }

    #[test]
    fn cab_call_always_lands_its_own_car(
        start in prop::collection::vec(0..FLOORS, 1..6),
        pick in any::<prop::sample::Index>(),
        floor in 0..FLOORS,
    ) {
        let mut bank = parked_bank(&start, StrategyKind::Directional);
        let id = ElevatorId::from_index(pick.index(start.len()));
        bank.queue_internal_request(id, floor).unwrap();
        bank.process_requests();
        prop_assert_eq!(bank.elevator(id).unwrap().current_floor(), floor);
    }

    #[test]
    fn drain_serves_in_arrival_order(
        stops in prop::collection::vec(0..FLOORS, 1..20),
    ) {
        let mut bank = parked_bank(&[0], StrategyKind::Directional);
        for &floor in &stops {
            bank.queue_internal_request(ElevatorId(1), floor).unwrap();
        }
        let served: Vec<_> = bank.process_requests().iter().map(DispatchOutcome::floor).collect();
        prop_assert_eq!(&served, &stops);
        prop_assert_eq!(bank.elevator(ElevatorId(1)).unwrap().current_floor(), *stops.last().unwrap());
        prop_assert_eq!(bank.pending(), 0);
    }

    #[test]
    fn mixed_queue_drains_fifo(
        calls in prop::collection::vec((0..FLOORS, any::<bool>(), any::<bool>()), 1..20),
    ) {
        let mut bank = parked_bank(&[0, 0, 0], StrategyKind::Directional);
        let mut expected = Vec::new();
        for &(floor, is_cab, up) in &calls {
            let task = if is_cab {
                DispatchTask::Internal { elevator: ElevatorId(2), floor }
            } else {
                let direction = if up { Direction::Up } else { Direction::Down };
                DispatchTask::External { floor, direction }
            };
            match task {
                DispatchTask::Internal { elevator, floor } => {
                    bank.request_floor(elevator, floor).unwrap()
                }
                DispatchTask::External { floor, direction } => {
                    bank.request_elevator(floor, direction).unwrap()
                }
            }
            expected.push(task);
        }

        let drained: Vec<_> = bank
            .process_requests()
            .into_iter()
            .map(|o| match o {
                DispatchOutcome::Served { task, .. } => task,
                DispatchOutcome::NoElevatorAvailable { floor, direction } => {
                    DispatchTask::External { floor, direction }
                }
            })
            .collect();
        prop_assert_eq!(drained, expected);
    }

    #[test]
    fn out_of_range_never_enqueues(
        floor in FLOORS..FLOORS * 4,
        direction in hall_direction(),
    ) {
        let mut bank = parked_bank(&[0, 3], StrategyKind::Directional);
        prop_assert!(bank.request_elevator(floor, direction).is_err());
        prop_assert!(bank.queue_internal_request(ElevatorId(1), floor).is_err());
        prop_assert_eq!(bank.pending(), 0);
    }
}
