//! Seams between the drag engine and its host.
//!
//! The engine never talks to a UI toolkit directly: the drag primitive and the
//! scheduler grid are both queried through these traits, and every query may
//! come back empty.

use egui::Pos2;

use crate::models::event::{DragItem, DragKind, DraggableEvent};

/// Pointer state reported by the host's drag primitive
#[cfg_attr(test, mockall::automock)]
pub trait DragMonitor {
    /// Pointer position when the drag started
    fn initial_client_offset(&self) -> Option<Pos2>;
    /// Live pointer position; absent for synthetic events during drag end
    fn client_offset(&self) -> Option<Pos2>;
    fn item(&self) -> Option<DragItem>;
    fn item_kind(&self) -> Option<DragKind>;
}

/// Layout and lookups owned by the scheduler grid
#[cfg_attr(test, mockall::automock)]
pub trait SchedulerHost {
    /// Screen position of the event container's top-left corner
    fn container_origin(&self) -> Pos2;
    /// Uniform on-screen width of one header cell
    fn cell_width(&self) -> f32;
    /// True while an independent resize gesture is in progress
    fn is_resizing(&self) -> bool;
    /// Slot that currently owns `event`, which may differ from `event.slot_id`
    fn event_slot_id(&self, event: &DraggableEvent) -> String;
    fn slot_name(&self, slot_id: &str) -> Option<String>;
}
