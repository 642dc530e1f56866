//! Drag-and-drop engine for the scheduler time grid.
//!
//! Pointer events flow one way: [`coordinates`] turns an offset into a cell,
//! [`snap`], [`move_semantics`] and [`reassignment`] turn the cell into a
//! placement, and [`session`] reports it to the host. [`guard`] is consulted
//! on its own before any drop is accepted.

pub mod coordinates;
pub mod events;
pub mod guard;
pub mod host;
pub mod move_semantics;
pub mod reassignment;
pub mod session;
pub mod snap;
pub mod sources;

pub use coordinates::CoordinateMapper;
pub use events::{
    DropResult, HoverUpdate, MoveAction, RejectReason, SessionEvent, SessionEventHandler,
};
pub use host::{DragMonitor, SchedulerHost};
pub use session::{DragPhase, DragSession, DragSessionController, DropOutcome};
pub use sources::{SourceDescriptor, SourceRegistry};
