//! New start/end for an existing event being dragged.

use chrono::NaiveDateTime;

use crate::models::event::DraggableEvent;
use crate::models::grid::{GridCell, ViewType};
use crate::models::settings::DndConfig;
use crate::utils::date::with_date_of;

/// Where `event` lands when the pointer is over `current`.
///
/// * relative move: shift by the distance between the grab cell and the
///   current cell, so the grab offset inside the event is preserved.
/// * otherwise, outside day view: keep the event's time of day and take the
///   date of the current cell.
/// * otherwise (day view): start at the current cell's own start.
///
/// The duration is always preserved. Returns `None` for a relative move whose
/// grab cell was never resolved, or when the new span would leave the
/// representable calendar; callers skip the tick.
pub fn resolve_move(
    event: &DraggableEvent,
    grab: Option<&GridCell>,
    current: &GridCell,
    config: &DndConfig,
) -> Option<(NaiveDateTime, NaiveDateTime)> {
    let start = if config.relative_move {
        let grab = grab?;
        event
            .start
            .checked_add_signed(current.start - grab.start)?
    } else if config.view_type != ViewType::Day {
        with_date_of(event.start, current.start)
    } else {
        current.start
    };

    let end = start.checked_add_signed(event.duration())?;
    Some((start, end))
}
