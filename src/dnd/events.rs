//! Typed messages the drag engine emits to its host.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::models::event::{DragItem, DragKind};

/// What a hover or drop would do to the schedule
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum MoveAction {
    New,
    Move,
}

impl MoveAction {
    pub fn for_kind(kind: DragKind) -> Self {
        match kind {
            DragKind::NewEvent => MoveAction::New,
            DragKind::MoveEvent => MoveAction::Move,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MoveAction::New => "New",
            MoveAction::Move => "Move",
        }
    }
}

/// Transient placement computed on a hover tick.
///
/// Advisory only: hosts typically mirror it into preview state. Repeating the
/// same pointer position yields an identical update.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HoverUpdate {
    pub slot_id: String,
    pub slot_name: Option<String>,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub action: MoveAction,
    pub kind: DragKind,
    pub item: DragItem,
}

/// Final placement handed to the host when a drop is accepted.
///
/// `start`/`end` are the snapped span of the drop cell. For existing-event
/// drags `initial_start`/`initial_end` are the snapped span of the cell the
/// event was grabbed from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DropResult {
    pub slot_id: String,
    pub slot_name: Option<String>,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub initial_start: Option<NaiveDateTime>,
    pub initial_end: Option<NaiveDateTime>,
    pub kind: DragKind,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum RejectReason {
    /// Global `movable` flag is off
    NotMovable,
    GroupOnlyRow,
    HostResizing,
    /// The dragged event opted out with `movable = false`
    EventLocked,
    /// No pointer offset, or the pointer is outside the row's cells
    NoTargetCell,
    NoActiveDrag,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum SessionEvent {
    HoverResolved(HoverUpdate),
    DropResolved(DropResult),
    DropRejected(RejectReason),
}

/// Receiver for everything a drag session reports
pub trait SessionEventHandler {
    fn on_session_event(&mut self, event: &SessionEvent);
}

impl<F> SessionEventHandler for F
where
    F: FnMut(&SessionEvent),
{
    fn on_session_event(&mut self, event: &SessionEvent) {
        self(event)
    }
}
