//! TOML configuration for a dispatch run.
//!
//! ```toml
//! [shared]
//! service_name = "tower-a"
//! log_level = "debug"
//!
//! [building]
//! floors = 5
//! elevators = 2
//! strategy = "directional"
//!
//! [[scenario]]
//! kind = "hall"
//! floor = 1
//! direction = "up"
//!
//! [[scenario]]
//! kind = "cab"
//! elevator = 1
//! floor = 4
//!
//! [[scenario]]
//! kind = "drain"
//! ```
//!
//! Every section is optional. Validation checks building bounds and that
//! every scenario step names a floor and a car that exist.

use std::path::Path;

use lift_common::config::{ConfigError, ConfigLoader, SharedConfig};
use lift_common::consts::{DEFAULT_ELEVATOR_COUNT, DEFAULT_FLOOR_COUNT, MAX_ELEVATORS, MAX_FLOORS};
use lift_common::types::{Direction, ElevatorId, FloorNumber};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::controller::{DispatchController, DispatchOutcome};
use crate::error::DispatchResult;
use crate::strategy::StrategyKind;

/// Shape of the building and the strategy that serves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct BuildingConfig {
    pub floors: u32,
    pub elevators: u32,
    pub strategy: StrategyKind,
}

impl Default for BuildingConfig {
    fn default() -> Self {
        Self {
            floors: DEFAULT_FLOOR_COUNT,
            elevators: DEFAULT_ELEVATOR_COUNT,
            strategy: StrategyKind::default(),
        }
    }
}

impl BuildingConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_FLOORS).contains(&self.floors) {
            return Err(ConfigError::ValidationError(format!(
                "floors must be in [1, {MAX_FLOORS}], got {}",
                self.floors
            )));
        }
        if !(1..=MAX_ELEVATORS).contains(&self.elevators) {
            return Err(ConfigError::ValidationError(format!(
                "elevators must be in [1, {MAX_ELEVATORS}], got {}",
                self.elevators
            )));
        }
        Ok(())
    }
}

/// One scripted input, replayed in file order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ScenarioStep {
    /// Press a hall button.
    Hall {
        floor: FloorNumber,
        direction: Direction,
    },
    /// Press a destination button inside a car.
    Cab {
        elevator: ElevatorId,
        floor: FloorNumber,
    },
    /// Serve everything queued so far.
    Drain,
}

impl ScenarioStep {
    /// Feed this step to `controller`.
    ///
    /// Returns the drain outcomes for `Drain`, an empty list otherwise.
    pub fn apply(&self, controller: &mut DispatchController) -> DispatchResult<Vec<DispatchOutcome>> {
        match *self {
            Self::Hall {
                floor,
                direction: Direction::Up,
            } => controller.press_up(floor)?,
            Self::Hall {
                floor,
                direction: Direction::Down,
            } => controller.press_down(floor)?,
            Self::Hall { floor, direction } => controller.request_elevator(floor, direction)?,
            Self::Cab { elevator, floor } => controller.request_floor(elevator, floor)?,
            Self::Drain => return Ok(controller.process_requests()),
        }
        Ok(Vec::new())
    }

    /// The stock demonstration: a morning rush on a five-floor, two-car bank.
    pub fn demo() -> Vec<Self> {
        use Direction::{Down, Up};

        vec![
            Self::Hall { floor: 1, direction: Up },
            Self::Cab { elevator: ElevatorId(1), floor: 4 },
            Self::Hall { floor: 4, direction: Down },
            Self::Hall { floor: 1, direction: Up },
            Self::Hall { floor: 0, direction: Up },
            Self::Hall { floor: 3, direction: Down },
            Self::Cab { elevator: ElevatorId(2), floor: 2 },
            Self::Cab { elevator: ElevatorId(1), floor: 1 },
            Self::Cab { elevator: ElevatorId(2), floor: 0 },
            Self::Drain,
        ]
    }

    /// The demonstration cut down to what `building` can run.
    ///
    /// Calls naming a car or floor the building lacks are skipped.
    pub fn demo_for(building: &BuildingConfig) -> Vec<Self> {
        Self::demo()
            .into_iter()
            .enumerate()
            .filter(|(index, step)| match step.check(building, *index) {
                Ok(()) => true,
                Err(e) => {
                    warn!(error = %e, "demo step skipped");
                    false
                }
            })
            .map(|(_, step)| step)
            .collect()
    }

    fn check(&self, building: &BuildingConfig, index: usize) -> Result<(), ConfigError> {
        let floor = match *self {
            Self::Hall { floor, direction } => {
                if !direction.is_travel() {
                    return Err(ConfigError::ValidationError(format!(
                        "scenario[{index}]: hall call direction must be up or down"
                    )));
                }
                floor
            }
            Self::Cab { elevator, floor } => {
                if !(1..=building.elevators).contains(&elevator.0) {
                    return Err(ConfigError::ValidationError(format!(
                        "scenario[{index}]: unknown elevator {elevator}"
                    )));
                }
                floor
            }
            Self::Drain => return Ok(()),
        };
        if floor >= building.floors {
            return Err(ConfigError::ValidationError(format!(
                "scenario[{index}]: floor {floor} out of range (building has {} floors)",
                building.floors
            )));
        }
        Ok(())
    }
}

/// Complete configuration file for the `lift_dispatch` binary.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DispatchConfig {
    #[serde(default)]
    pub shared: SharedConfig,
    #[serde(default)]
    pub building: BuildingConfig,
    #[serde(default)]
    pub scenario: Vec<ScenarioStep>,
}

impl DispatchConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.shared.validate()?;
        self.building.validate()?;
        for (index, step) in self.scenario.iter().enumerate() {
            step.check(&self.building, index)?;
        }
        Ok(())
    }

    /// Render as TOML (used by `--print-config`).
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError(e.to_string()))
    }
}

/// Load and validate a configuration file.
pub fn load_config(path: &Path) -> Result<DispatchConfig, ConfigError> {
    let config = DispatchConfig::load(path)?;
    config.validate()?;
    Ok(config)
}

/// Parse and validate an in-memory configuration document.
pub fn load_config_from_str(content: &str) -> Result<DispatchConfig, ConfigError> {
    let config = DispatchConfig::from_toml_str(content)?;
    config.validate()?;
    Ok(config)
}

// ─── Tests ──────────────────────────────────────────────────────────
