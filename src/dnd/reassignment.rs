//! Which resource slot a hover or drop targets.

use crate::dnd::host::SchedulerHost;
use crate::models::event::DragItem;
use crate::models::grid::ResourceRow;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlotTarget {
    pub slot_id: String,
    /// `None` when the owning slot cannot be found in the resource list
    pub slot_name: Option<String>,
}

/// Resolve the target slot for `item` dropped over `row`.
///
/// New events and cross-resource moves take the row under the pointer. When
/// cross-resource moves are disabled an existing event stays in the slot
/// that currently owns it, whatever row the pointer is over.
pub fn resolve_target<H>(
    item: &DragItem,
    row: &ResourceRow,
    cross_resource_move: bool,
    host: &H,
) -> SlotTarget
where
    H: SchedulerHost + ?Sized,
{
    match item {
        DragItem::Event(event) if !cross_resource_move => {
            let slot_id = host.event_slot_id(event);
            let slot_name = host.slot_name(&slot_id);
            SlotTarget { slot_id, slot_name }
        }
        _ => SlotTarget {
            slot_id: row.slot_id.clone(),
            slot_name: Some(row.slot_name.clone()),
        },
    }
}
