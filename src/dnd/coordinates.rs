//! Pixel offset to grid cell mapping.
//!
//! Every header cell has the same on-screen width, so the horizontal pointer
//! offset from the drag container's origin divides directly into a cell index.
//! Only the x axis matters: rows are separate drop targets.

use egui::Pos2;

use crate::models::grid::{GridCell, ResourceRow};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoordinateMapper {
    origin: Pos2,
    cell_width: f32,
}

impl CoordinateMapper {
    pub fn new(origin: Pos2, cell_width: f32) -> Self {
        Self { origin, cell_width }
    }

    /// `floor((pointer.x - origin.x) / cell_width)`.
    ///
    /// Returns `None` when the host reports a non-positive or non-finite cell
    /// width, which would otherwise produce a meaningless index.
    pub fn cell_index(&self, pointer: Pos2) -> Option<i64> {
        if !self.cell_width.is_finite() || self.cell_width <= 0.0 {
            return None;
        }
        let index = ((pointer.x - self.origin.x) / self.cell_width).floor();
        index.is_finite().then_some(index as i64)
    }

    /// Cell under `pointer` in `row`.
    ///
    /// `None` means "no cell this tick": either the drag primitive had no
    /// pointer offset or the index falls outside the row's header.
    pub fn resolve<'a>(&self, pointer: Option<Pos2>, row: &'a ResourceRow) -> Option<&'a GridCell> {
        let index = self.cell_index(pointer?)?;
        let cell = row.cell(index);
        if cell.is_none() {
            log::trace!(
                "pointer index {} outside row {} ({} cells)",
                index,
                row.slot_id,
                row.cells.len()
            );
        }
        cell
    }
}
