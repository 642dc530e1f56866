//! Drag session lifecycle.
//!
//! `Idle -> Dragging -> {Committed, Cancelled}`. A terminal phase stays
//! observable until the next drag begins or [`DragSessionController::reset`]
//! is called; the session data itself is dropped as soon as the gesture ends.
//!
//! Every handler runs synchronously to completion and keeps no counters, so
//! replaying the same hover produces the same [`HoverUpdate`].

use chrono::NaiveDateTime;
use egui::Pos2;

use super::coordinates::CoordinateMapper;
use super::events::{
    DropResult, HoverUpdate, MoveAction, RejectReason, SessionEvent, SessionEventHandler,
};
use super::guard::check_drop;
use super::host::{DragMonitor, SchedulerHost};
use super::move_semantics::resolve_move;
use super::reassignment::resolve_target;
use super::snap::snapped_span;
use super::sources::SourceRegistry;
use crate::models::event::{DragItem, DragKind};
use crate::models::grid::{GridCell, ResourceRow};
use crate::models::settings::{ConfigError, DndConfig};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragPhase {
    Idle,
    Dragging,
    Committed,
    Cancelled,
}

/// State of one drag gesture
#[derive(Clone, Debug, PartialEq)]
pub struct DragSession {
    pub kind: DragKind,
    pub item: DragItem,
    /// Pointer position at drag start
    pub grab_offset: Option<Pos2>,
    /// Cell under the pointer at drag start; only captured for existing events
    pub initial_cell: Option<GridCell>,
    /// Row under the pointer on the latest hover, resolved or not
    pub hovered_slot_id: Option<String>,
    /// Row the pointer was last resolved over
    pub current_slot_id: Option<String>,
    /// Always a cell of `current_slot_id`'s row when set
    pub current_cell: Option<GridCell>,
}

/// How a drop ended
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DropOutcome {
    Committed(DropResult),
    Cancelled(RejectReason),
}

pub struct DragSessionController {
    config: DndConfig,
    sources: SourceRegistry,
    phase: DragPhase,
    session: Option<DragSession>,
}

impl DragSessionController {
    pub fn new(config: DndConfig, sources: SourceRegistry) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            sources,
            phase: DragPhase::Idle,
            session: None,
        })
    }

    pub fn config(&self) -> &DndConfig {
        &self.config
    }

    pub fn sources(&self) -> &SourceRegistry {
        &self.sources
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// True while the active drag's pointer is over `row`
    pub fn is_over(&self, row: &ResourceRow) -> bool {
        self.session
            .as_ref()
            .and_then(|session| session.hovered_slot_id.as_deref())
            .is_some_and(|slot_id| slot_id == row.slot_id)
    }

    /// Replace the configuration. Refused while a drag is in progress.
    pub fn set_config(&mut self, config: DndConfig) -> Result<(), ConfigError> {
        if self.phase == DragPhase::Dragging {
            log::warn!("Ignoring configuration change during an active drag");
            return Err(ConfigError::LockedDuringDrag);
        }
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Start a session from the drag primitive's drag-start.
    ///
    /// `row` is the row the drag started in; for existing events its header
    /// resolves the grab cell from the *initial* pointer offset, once.
    pub fn begin_drag<M, H>(&mut self, monitor: &M, host: &H, row: &ResourceRow) -> bool
    where
        M: DragMonitor + ?Sized,
        H: SchedulerHost + ?Sized,
    {
        if !self.config.drag_and_drop_enabled {
            log::debug!("Drag and drop disabled, ignoring drag start");
            return false;
        }
        if self.phase == DragPhase::Dragging {
            log::warn!("Drag already in progress, ignoring second drag start");
            return false;
        }

        let (Some(kind), Some(item)) = (monitor.item_kind(), monitor.item()) else {
            log::debug!("Drag start without item, ignoring");
            return false;
        };
        if item.kind() != kind {
            log::warn!("Drag item {:?} does not match declared kind {:?}", item.kind(), kind);
            return false;
        }
        if !self.sources.accepts(kind) {
            log::warn!("No drag source registered for {:?}", kind);
            return false;
        }

        let grab_offset = monitor.initial_client_offset();
        let initial_cell = match kind {
            DragKind::MoveEvent => mapper(host).resolve(grab_offset, row).copied(),
            DragKind::NewEvent => None,
        };

        log::debug!(
            "Drag started: {:?} from slot {} (grab cell {:?})",
            kind,
            row.slot_id,
            initial_cell.map(|cell| cell.start)
        );

        self.session = Some(DragSession {
            kind,
            item,
            grab_offset,
            initial_cell,
            hovered_slot_id: None,
            current_slot_id: None,
            current_cell: None,
        });
        self.phase = DragPhase::Dragging;
        true
    }

    /// Resolve one hover tick over `row`.
    ///
    /// Always records `row` as the hovered row. Returns `None` and keeps the
    /// previous cell when nothing could be resolved this tick.
    pub fn hover<M, H, E>(
        &mut self,
        monitor: &M,
        host: &H,
        row: &ResourceRow,
        handler: &mut E,
    ) -> Option<HoverUpdate>
    where
        M: DragMonitor + ?Sized,
        H: SchedulerHost + ?Sized,
        E: SessionEventHandler + ?Sized,
    {
        let config = self.config;
        let session = self.session.as_mut()?;
        if session.hovered_slot_id.as_deref() != Some(row.slot_id.as_str()) {
            session.hovered_slot_id = Some(row.slot_id.clone());
        }

        let Some(cell) = mapper(host).resolve(monitor.client_offset(), row).copied() else {
            log::trace!("Hover over {} resolved no cell, skipping tick", row.slot_id);
            return None;
        };

        let (start, end) = match &session.item {
            DragItem::Event(event) => {
                let Some(span) = resolve_move(event, session.initial_cell.as_ref(), &cell, &config)
                else {
                    log::trace!("Move of {} unresolved over {}, skipping tick", event.id, row.slot_id);
                    return None;
                };
                span
            }
            DragItem::NewEvent(_) => snapped_span(&cell, config.cell_unit),
        };
        let target = resolve_target(&session.item, row, config.cross_resource_move, host);

        session.current_slot_id = Some(row.slot_id.clone());
        session.current_cell = Some(cell);

        let update = HoverUpdate {
            slot_id: target.slot_id,
            slot_name: target.slot_name,
            start,
            end,
            action: MoveAction::for_kind(session.kind),
            kind: session.kind,
            item: session.item.clone(),
        };
        log::trace!(
            "Hover {} -> {} {}..{}",
            update.action.as_str(),
            update.slot_id,
            update.start,
            update.end
        );

        handler.on_session_event(&SessionEvent::HoverResolved(update.clone()));
        Some(update)
    }

    /// Whether the active drag may currently drop on `row`
    pub fn can_drop<H>(&self, host: &H, row: &ResourceRow) -> bool
    where
        H: SchedulerHost + ?Sized,
    {
        self.session.as_ref().is_some_and(|session| {
            check_drop(&self.config, row, host.is_resizing(), &session.item).is_ok()
        })
    }

    /// Finish the drag over `row`, using the pointer offset at release.
    pub fn drop<M, H, E>(
        &mut self,
        monitor: &M,
        host: &H,
        row: &ResourceRow,
        handler: &mut E,
    ) -> DropOutcome
    where
        M: DragMonitor + ?Sized,
        H: SchedulerHost + ?Sized,
        E: SessionEventHandler + ?Sized,
    {
        let Some(session) = self.session.take() else {
            log::warn!("Drop without an active drag");
            return DropOutcome::Cancelled(RejectReason::NoActiveDrag);
        };

        let outcome = self
            .resolve_drop(&session, monitor, host, row)
            .map_or_else(DropOutcome::Cancelled, DropOutcome::Committed);

        match &outcome {
            DropOutcome::Committed(result) => {
                log::info!(
                    "Drop committed: {:?} to slot {} at {}..{}",
                    result.kind,
                    result.slot_id,
                    result.start,
                    result.end
                );
                self.phase = DragPhase::Committed;
                handler.on_session_event(&SessionEvent::DropResolved(result.clone()));
            }
            DropOutcome::Cancelled(reason) => {
                log::debug!("Drop on {} rejected: {:?}", row.slot_id, reason);
                self.phase = DragPhase::Cancelled;
                handler.on_session_event(&SessionEvent::DropRejected(*reason));
            }
        }
        outcome
    }

    fn resolve_drop<M, H>(
        &self,
        session: &DragSession,
        monitor: &M,
        host: &H,
        row: &ResourceRow,
    ) -> Result<DropResult, RejectReason>
    where
        M: DragMonitor + ?Sized,
        H: SchedulerHost + ?Sized,
    {
        check_drop(&self.config, row, host.is_resizing(), &session.item)?;

        let cell = mapper(host)
            .resolve(monitor.client_offset(), row)
            .ok_or(RejectReason::NoTargetCell)?;
        let (start, end) = snapped_span(cell, self.config.cell_unit);
        let target = resolve_target(&session.item, row, self.config.cross_resource_move, host);

        let (initial_start, initial_end) = match session.kind {
            DragKind::MoveEvent => split(
                session
                    .initial_cell
                    .map(|cell| snapped_span(&cell, self.config.cell_unit)),
            ),
            DragKind::NewEvent => (None, None),
        };

        Ok(DropResult {
            slot_id: target.slot_id,
            slot_name: target.slot_name,
            start,
            end,
            initial_start,
            initial_end,
            kind: session.kind,
        })
    }

    /// Abort the drag: released outside any target or aborted by the host
    pub fn cancel(&mut self) {
        if self.session.take().is_some() {
            log::debug!("Drag cancelled");
            self.phase = DragPhase::Cancelled;
        }
    }

    /// Return to `Idle` after a drag has finished
    pub fn reset(&mut self) {
        if self.phase != DragPhase::Dragging {
            self.phase = DragPhase::Idle;
        }
    }
}

impl Default for DragSessionController {
    fn default() -> Self {
        Self {
            config: DndConfig::default(),
            sources: SourceRegistry::default(),
            phase: DragPhase::Idle,
            session: None,
        }
    }
}

fn mapper<H: SchedulerHost + ?Sized>(host: &H) -> CoordinateMapper {
    CoordinateMapper::new(host.container_origin(), host.cell_width())
}

fn split(
    span: Option<(NaiveDateTime, NaiveDateTime)>,
) -> (Option<NaiveDateTime>, Option<NaiveDateTime>) {
    match span {
        Some((start, end)) => (Some(start), Some(end)),
        None => (None, None),
    }
}
