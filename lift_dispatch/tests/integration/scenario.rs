//! Integration test: end-to-end call scenarios.
//!
//! Validates: hall calls → strategy selection → car motion, cab calls
//! bypassing the strategy, the stock demonstration, and out-of-range
//! rejection.

use lift_common::types::{Direction, ElevatorId, ElevatorStatus};

use lift_dispatch::config::ScenarioStep;
use lift_dispatch::controller::{DispatchController, DispatchOutcome};
use lift_dispatch::error::DispatchError;
use lift_dispatch::strategy::{DirectionalStrategy, StrategyKind, ZonedStrategy};

// ── Helpers ─────────────────────────────────────────────────────────

fn five_floor_bank() -> DispatchController {
    DispatchController::new(5, 2, Box::new(DirectionalStrategy)).unwrap()
}

fn floors_of(controller: &DispatchController) -> Vec<u32> {
    controller
        .elevators()
        .iter()
        .map(|e| e.current_floor())
        .collect()
}

// ── Tests ───────────────────────────────────────────────────────────

#[test]
fn hall_call_then_cab_call() {
    let mut bank = five_floor_bank();

    bank.request_elevator(3, Direction::Up).unwrap();
    bank.process_requests();
    assert_eq!(
        bank.elevators()
            .iter()
            .filter(|e| e.current_floor() == 3)
            .count(),
        1
    );

    bank.queue_internal_request(ElevatorId(2), 0).unwrap();
    bank.process_requests();
    assert_eq!(bank.elevator(ElevatorId(2)).unwrap().current_floor(), 0);
    assert!(
        bank.elevators()
            .iter()
            .all(|e| e.status() == ElevatorStatus::Idle)
    );
}

#[test]
fn cab_call_ignores_closer_cars() {
    let mut bank = five_floor_bank();
    bank.queue_internal_request(ElevatorId(1), 4).unwrap();
    bank.process_requests();

    // Car 1 sits on 4, car 2 on 0. Car 2's own request for 4 still goes to car 2.
    bank.request_floor(ElevatorId(2), 4).unwrap();
    let outcomes = bank.process_requests();
    assert_eq!(outcomes[0].elevator(), Some(ElevatorId(2)));
    assert_eq!(floors_of(&bank), vec![4, 4]);
}

#[test]
fn out_of_range_floor_is_rejected_not_accepted() {
    let mut bank = five_floor_bank();
    let err = bank.request_elevator(10, Direction::Up).unwrap_err();
    assert_eq!(
        err,
        DispatchError::FloorOutOfRange {
            floor: 10,
            floor_count: 5
        }
    );
    assert!(bank.process_requests().is_empty());
    assert_eq!(floors_of(&bank), vec![0, 0]);
}

#[test]
fn stock_demo_replays_deterministically() {
    let mut bank = five_floor_bank();
    let mut outcomes = Vec::new();
    for step in ScenarioStep::demo() {
        outcomes.extend(step.apply(&mut bank).unwrap());
    }

    let served_by: Vec<_> = outcomes.iter().filter_map(DispatchOutcome::elevator).collect();
    let (e1, e2) = (ElevatorId(1), ElevatorId(2));
    assert_eq!(served_by, vec![e1, e1, e1, e2, e2, e1, e2, e1, e2]);
    assert_eq!(floors_of(&bank), vec![1, 0]);
    assert_eq!(bank.elevator(e1).unwrap().trips(), 5);
    assert_eq!(bank.elevator(e2).unwrap().trips(), 4);

    for floor in bank.floors() {
        assert!(!floor.hall_panel().is_up_pressed(), "floor {}", floor.number());
        assert!(!floor.hall_panel().is_down_pressed(), "floor {}", floor.number());
    }
}

#[test]
fn strategy_swap_between_drains() {
    let mut bank = DispatchController::new(10, 2, StrategyKind::Directional.build(10)).unwrap();
    bank.queue_internal_request(ElevatorId(2), 9).unwrap();
    bank.process_requests();

    // Directional: car 1 on 0 is nearest to floor 2.
    bank.request_elevator(2, Direction::Up).unwrap();
    assert_eq!(bank.process_requests()[0].elevator(), Some(ElevatorId(1)));

    // Zoned: floor 7 belongs to car 2 even though car 1 is eligible too.
    bank.set_strategy(Box::new(ZonedStrategy::new(10)));
    bank.request_elevator(7, Direction::Down).unwrap();
    assert_eq!(bank.process_requests()[0].elevator(), Some(ElevatorId(2)));
    assert_eq!(bank.strategy_name(), "zoned");
}

#[test]
fn carless_bank_reports_every_hall_call() {
    let mut bank = DispatchController::new(3, 0, Box::new(DirectionalStrategy)).unwrap();
    bank.press_up(0).unwrap();
    bank.press_down(2).unwrap();

    let outcomes = bank.process_requests();
    assert_eq!(
        outcomes,
        vec![
            DispatchOutcome::NoElevatorAvailable {
                floor: 0,
                direction: Direction::Up
            },
            DispatchOutcome::NoElevatorAvailable {
                floor: 2,
                direction: Direction::Down
            },
        ]
    );
    assert_eq!(bank.pending(), 0);
    assert!(bank.floor(0).unwrap().hall_panel().is_up_pressed());
}
