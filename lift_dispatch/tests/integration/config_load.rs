//! Integration test: configuration file → controller → scenario replay.

use std::fs;

use lift_common::config::{ConfigError, LogLevel};
use lift_common::types::ElevatorId;
use tempfile::TempDir;

use lift_dispatch::config::load_config;
use lift_dispatch::controller::DispatchController;
use lift_dispatch::error::DispatchError;
use lift_dispatch::strategy::StrategyKind;

const LIFT_TOML: &str = r#"
[shared]
service_name = "tower-test"
log_level = "warn"

[building]
floors = 6
elevators = 3
strategy = "zoned"

[[scenario]]
kind = "hall"
floor = 5
direction = "down"

[[scenario]]
kind = "cab"
elevator = 1
floor = 3

[[scenario]]
kind = "drain"
"#;

#[test]
fn config_file_builds_controller_and_replays() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("lift.toml");
    fs::write(&path, LIFT_TOML).unwrap();

    let config = load_config(&path).unwrap();
    assert_eq!(config.shared.service_name, "tower-test");
    assert_eq!(config.shared.log_level, LogLevel::Warn);
    assert_eq!(config.building.strategy, StrategyKind::Zoned);

    let mut bank = DispatchController::from_config(&config.building).unwrap();
    assert_eq!(bank.floor_count(), 6);
    assert_eq!(bank.elevators().len(), 3);
    assert_eq!(bank.strategy_name(), "zoned");

    let mut outcomes = Vec::new();
    for step in &config.scenario {
        outcomes.extend(step.apply(&mut bank).unwrap());
    }

    // Zones of two floors each: floor 5 belongs to car 3.
    assert_eq!(outcomes[0].elevator(), Some(ElevatorId(3)));
    assert_eq!(bank.elevator(ElevatorId(3)).unwrap().current_floor(), 5);
    assert_eq!(bank.elevator(ElevatorId(1)).unwrap().current_floor(), 3);
}

#[test]
fn bundled_sample_config_is_valid() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("config/lift.toml");
    let config = load_config(&path).unwrap();
    assert_eq!(config.building.floors, 5);
    assert!(!config.scenario.is_empty());
}

#[test]
fn missing_config_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let err = load_config(&dir.path().join("absent.toml")).unwrap_err();
    assert_eq!(err, ConfigError::FileNotFound);
}

#[test]
fn invalid_building_surfaces_through_controller() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("lift.toml");
    fs::write(&path, "[building]\nfloors = 0\n").unwrap();

    assert!(matches!(
        load_config(&path),
        Err(ConfigError::ValidationError(_))
    ));

    let building = lift_dispatch::config::BuildingConfig {
        floors: 0,
        ..Default::default()
    };
    assert!(matches!(
        DispatchController::from_config(&building),
        Err(DispatchError::Config(ConfigError::ValidationError(_)))
    ));
}
