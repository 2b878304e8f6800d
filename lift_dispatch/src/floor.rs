//! Building floor with its hall call panel.

use lift_common::types::FloorNumber;
use serde::Serialize;

use crate::panel::HallPanel;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Floor {
    number: FloorNumber,
    hall_panel: HallPanel,
}

impl Floor {
    pub const fn new(number: FloorNumber) -> Self {
        Self {
            number,
            hall_panel: HallPanel::new(number),
        }
    }

    #[inline]
    pub const fn number(&self) -> FloorNumber {
        self.number
    }

    #[inline]
    pub const fn hall_panel(&self) -> &HallPanel {
        &self.hall_panel
    }

    /// Mutable panel access is crate-private: only the controller presses or
    /// clears hall buttons.
    #[inline]
    pub(crate) fn hall_panel_mut(&mut self) -> &mut HallPanel {
        &mut self.hall_panel
    }

    pub fn snapshot(&self) -> FloorSnapshot {
        FloorSnapshot {
            number: self.number,
            up_pressed: self.hall_panel.is_up_pressed(),
            down_pressed: self.hall_panel.is_down_pressed(),
        }
    }
}

/// Serializable view of one floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FloorSnapshot {
    pub number: FloorNumber,
    pub up_pressed: bool,
    pub down_pressed: bool,
}
