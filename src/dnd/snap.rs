//! End-time snapping per grid granularity.
//!
//! Both the hover path and the drop path derive a cell's end through
//! [`effective_end`]; they must never disagree.

use chrono::NaiveDateTime;

use crate::models::grid::{CellUnit, GridCell};
use crate::utils::date::end_of_day;

/// Effective end of `cell`.
///
/// Hour cells keep their own end. Coarser cells stand for whole days, so the
/// end becomes 23:59:59 on the cell's start date regardless of `cell.end`.
pub fn effective_end(cell: &GridCell, unit: CellUnit) -> NaiveDateTime {
    if unit.is_coarse() {
        end_of_day(cell.start)
    } else {
        cell.end
    }
}

/// `(start, effective end)` of a cell
pub fn snapped_span(cell: &GridCell, unit: CellUnit) -> (NaiveDateTime, NaiveDateTime) {
    (cell.start, effective_end(cell, unit))
}
