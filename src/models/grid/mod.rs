// Grid module
// Time-grid header cells and the resource rows that own them

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One column of the scheduler header: a contiguous time span.
///
/// Cells may have irregular widths in time (a month view mixes 28..31 day
/// months), but on screen every cell occupies the same pixel width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCell {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl GridCell {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }
}

/// A resource row ("slot"), the vertical drop-target axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceRow {
    pub slot_id: String,
    pub slot_name: String,
    /// Aggregate/summary rows never accept drops
    #[serde(default)]
    pub group_only: bool,
    pub cells: Vec<GridCell>,
}

impl ResourceRow {
    pub fn new(slot_id: impl Into<String>, slot_name: impl Into<String>, cells: Vec<GridCell>) -> Self {
        Self {
            slot_id: slot_id.into(),
            slot_name: slot_name.into(),
            group_only: false,
            cells,
        }
    }

    /// Mark this row as a group-only summary row
    pub fn group_only(mut self) -> Self {
        self.group_only = true;
        self
    }

    /// Cell at `index`, or `None` when the index falls outside the header
    pub fn cell(&self, index: i64) -> Option<&GridCell> {
        usize::try_from(index).ok().and_then(|i| self.cells.get(i))
    }
}

/// Granularity of one header cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CellUnit {
    Hour,
    #[default]
    Day,
    Week,
    Month,
    Year,
}

impl CellUnit {
    /// Returns true for cells that stand for whole calendar days or more
    pub fn is_coarse(&self) -> bool {
        !matches!(self, CellUnit::Hour)
    }
}

/// Scheduler view types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ViewType {
    Day,
    #[default]
    Week,
    Month,
    Quarter,
    Year,
    Custom,
}
