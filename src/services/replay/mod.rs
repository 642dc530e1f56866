// Replay service
// Runs a scripted drag gesture through the session controller

use std::cell::Cell;

use anyhow::{anyhow, Context, Result};
use egui::{pos2, Pos2};
use serde::Deserialize;

use crate::dnd::{
    DragMonitor, DragPhase, DragSessionController, SchedulerHost, SessionEvent, SourceRegistry,
};
use crate::models::event::{DragItem, DragKind, DraggableEvent};
use crate::models::grid::ResourceRow;
use crate::models::settings::DndConfig;

/// A drag gesture described as data.
///
/// Timestamps are quoted ISO strings, e.g. `"2024-03-01T09:00:00"`.
#[derive(Debug, Clone, Deserialize)]
pub struct ReplayScript {
    /// Falls back to the caller's configuration when absent
    #[serde(default)]
    pub config: Option<DndConfig>,
    pub grid: GridLayout,
    pub rows: Vec<ResourceRow>,
    pub item: DragItem,
    pub steps: Vec<ReplayStep>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GridLayout {
    #[serde(default)]
    pub origin: [f32; 2],
    pub cell_width: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepAction {
    Begin,
    Hover,
    Drop,
    Cancel,
    ResizeStart,
    ResizeEnd,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReplayStep {
    pub action: StepAction,
    /// Slot id of the row under the pointer
    #[serde(default)]
    pub row: Option<String>,
    /// Pointer x; absent means the drag primitive reported no offset
    #[serde(default)]
    pub x: Option<f32>,
    #[serde(default)]
    pub y: f32,
}

/// Everything a replay produced
#[derive(Debug, Clone, PartialEq)]
pub struct ReplayReport {
    pub events: Vec<SessionEvent>,
    pub final_phase: DragPhase,
}

impl ReplayScript {
    pub fn parse(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse replay script")
    }

    fn row(&self, step: &ReplayStep) -> Result<&ResourceRow> {
        let slot_id = step
            .row
            .as_deref()
            .ok_or_else(|| anyhow!("{:?} step needs a row", step.action))?;
        self.rows
            .iter()
            .find(|row| row.slot_id == slot_id)
            .ok_or_else(|| anyhow!("Unknown row {:?}", slot_id))
    }
}

struct ScriptMonitor {
    initial: Option<Pos2>,
    current: Option<Pos2>,
    item: DragItem,
}

impl DragMonitor for ScriptMonitor {
    fn initial_client_offset(&self) -> Option<Pos2> {
        self.initial
    }

    fn client_offset(&self) -> Option<Pos2> {
        self.current
    }

    fn item(&self) -> Option<DragItem> {
        Some(self.item.clone())
    }

    fn item_kind(&self) -> Option<DragKind> {
        Some(self.item.kind())
    }
}

struct ScriptHost<'a> {
    layout: &'a GridLayout,
    rows: &'a [ResourceRow],
    resizing: Cell<bool>,
}

impl SchedulerHost for ScriptHost<'_> {
    fn container_origin(&self) -> Pos2 {
        pos2(self.layout.origin[0], self.layout.origin[1])
    }

    fn cell_width(&self) -> f32 {
        self.layout.cell_width
    }

    fn is_resizing(&self) -> bool {
        self.resizing.get()
    }

    fn event_slot_id(&self, event: &DraggableEvent) -> String {
        event.slot_id.clone()
    }

    fn slot_name(&self, slot_id: &str) -> Option<String> {
        self.rows
            .iter()
            .find(|row| row.slot_id == slot_id)
            .map(|row| row.slot_name.clone())
    }
}

/// Play `script` and collect every emitted session event
pub fn run(script: &ReplayScript, fallback: DndConfig) -> Result<ReplayReport> {
    let config = script.config.unwrap_or(fallback);
    let mut controller = DragSessionController::new(config, SourceRegistry::default())
        .map_err(|e| anyhow!("Invalid settings: {}", e))?;
    let host = ScriptHost {
        layout: &script.grid,
        rows: &script.rows,
        resizing: Cell::new(false),
    };
    let mut monitor = ScriptMonitor {
        initial: None,
        current: None,
        item: script.item.clone(),
    };
    let mut events = Vec::new();
    let mut record = |event: &SessionEvent| events.push(event.clone());

    for (index, step) in script.steps.iter().enumerate() {
        let pointer = step.x.map(|x| pos2(x, step.y));
        monitor.current = pointer;
        match step.action {
            StepAction::Begin => {
                monitor.initial = pointer;
                let row = script.row(step)?;
                if !controller.begin_drag(&monitor, &host, row) {
                    log::warn!("Step {}: drag did not start", index);
                }
            }
            StepAction::Hover => {
                let row = script.row(step)?;
                controller.hover(&monitor, &host, row, &mut record);
            }
            StepAction::Drop => {
                let row = script.row(step)?;
                controller.drop(&monitor, &host, row, &mut record);
            }
            StepAction::Cancel => controller.cancel(),
            StepAction::ResizeStart => host.resizing.set(true),
            StepAction::ResizeEnd => host.resizing.set(false),
        }
    }

    let final_phase = controller.phase();
    Ok(ReplayReport {
        events,
        final_phase,
    })
}
