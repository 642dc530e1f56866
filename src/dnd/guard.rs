//! Gate evaluated before any drop is accepted.

use crate::dnd::events::RejectReason;
use crate::models::event::DragItem;
use crate::models::grid::ResourceRow;
use crate::models::settings::DndConfig;

/// Check whether `item` may be dropped on `row`, naming the first failing rule.
///
/// Drops are refused while the host is resizing so two mutating gestures
/// never overlap.
pub fn check_drop(
    config: &DndConfig,
    row: &ResourceRow,
    host_is_resizing: bool,
    item: &DragItem,
) -> Result<(), RejectReason> {
    if host_is_resizing {
        return Err(RejectReason::HostResizing);
    }
    if !config.movable {
        return Err(RejectReason::NotMovable);
    }
    if row.group_only {
        return Err(RejectReason::GroupOnlyRow);
    }
    if item.movable() == Some(false) {
        return Err(RejectReason::EventLocked);
    }
    Ok(())
}

pub fn can_drop(config: &DndConfig, row: &ResourceRow, host_is_resizing: bool, item: &DragItem) -> bool {
    check_drop(config, row, host_is_resizing, item).is_ok()
}
