// Settings module
// Drag-and-drop configuration read from the host scheduler

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::grid::{CellUnit, ViewType};

/// Configuration flags the drag engine reads. Immutable for the lifetime of a
/// drag session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DndConfig {
    /// When false, drags never start and the grid is a plain view.
    pub drag_and_drop_enabled: bool,
    /// Global gate on drops; per-event `movable` can only narrow it.
    pub movable: bool,
    /// Move events by the exact delta the pointer travelled instead of
    /// snapping their date to the hovered cell.
    pub relative_move: bool,
    /// Allow a moved event to change resource rows.
    pub cross_resource_move: bool,
    pub cell_unit: CellUnit,
    pub view_type: ViewType,
}

impl Default for DndConfig {
    fn default() -> Self {
        Self {
            drag_and_drop_enabled: true,
            movable: true,
            relative_move: true,
            cross_resource_move: true,
            cell_unit: CellUnit::Day,
            view_type: ViewType::Week,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("day view requires hour cells, got {0:?}")]
    DayViewNeedsHourCells(CellUnit),
    #[error("hour cells are not supported in {0:?} view")]
    HourCellsUnsupported(ViewType),
    #[error("configuration cannot change while a drag is in progress")]
    LockedDuringDrag,
}

impl DndConfig {
    /// Reject view/cell combinations the grid cannot render
    pub fn validate(&self) -> Result<(), ConfigError> {
        match (self.view_type, self.cell_unit) {
            (ViewType::Day, CellUnit::Hour) | (ViewType::Week, CellUnit::Hour) => Ok(()),
            (ViewType::Day, unit) => Err(ConfigError::DayViewNeedsHourCells(unit)),
            (view, CellUnit::Hour) => Err(ConfigError::HourCellsUnsupported(view)),
            _ => Ok(()),
        }
    }

    pub fn with_view(mut self, view_type: ViewType, cell_unit: CellUnit) -> Self {
        self.view_type = view_type;
        self.cell_unit = cell_unit;
        self
    }
}
