// Test fixtures - reusable test data
// Provides a fake host grid and drag primitive across all test files

#![allow(dead_code)]

use std::cell::Cell;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use egui::{pos2, Pos2};
use scheduler_dnd::dnd::{DragMonitor, SchedulerHost};
use scheduler_dnd::models::event::{DragItem, DragKind, DraggableEvent, NewEventAffordance};
use scheduler_dnd::models::grid::{GridCell, ResourceRow};

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Returns a March 2024 timestamp
    pub fn march(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    /// Returns 23:59:59 on the given March 2024 day
    pub fn march_end_of_day(day: u32) -> NaiveDateTime {
        march(day, 23, 59) + Duration::seconds(59)
    }
}

/// Sample rows for testing
pub mod rows {
    use super::*;

    /// One-hour cells from `first_hour` on March 1st
    pub fn hours(slot: &str, first_hour: u32, count: u32) -> ResourceRow {
        let cells = (first_hour..first_hour + count)
            .map(|h| GridCell::new(dates::march(1, h, 0), dates::march(1, h, 0) + Duration::hours(1)))
            .collect();
        ResourceRow::new(slot, format!("Resource {}", slot.to_uppercase()), cells)
    }

    /// One cell per day of March 2024
    pub fn march_days(slot: &str) -> ResourceRow {
        let cells = (1..=31)
            .map(|d| GridCell::new(dates::march(d, 0, 0), dates::march(d, 0, 0) + Duration::days(1)))
            .collect();
        ResourceRow::new(slot, format!("Resource {}", slot.to_uppercase()), cells)
    }
}

/// Sample drag items for testing
pub mod items {
    use super::*;

    pub fn new_event() -> DragItem {
        DragItem::NewEvent(NewEventAffordance {
            label: "New".to_string(),
        })
    }

    /// A two-hour meeting owned by `slot`
    pub fn meeting(slot: &str, day: u32, hour: u32) -> DragItem {
        let start = dates::march(day, hour, 0);
        DragItem::Event(
            DraggableEvent::builder()
                .id("meeting")
                .title("Planning")
                .slot_id(slot)
                .start(start)
                .end(start + Duration::hours(2))
                .build()
                .unwrap(),
        )
    }
}

/// Fake drag primitive whose pointer the test moves by hand
pub struct FakeMonitor {
    pub initial: Option<Pos2>,
    pub current: Option<Pos2>,
    pub item: DragItem,
}

impl FakeMonitor {
    pub fn grab(item: DragItem, x: f32) -> Self {
        Self {
            initial: Some(pos2(x, 20.0)),
            current: Some(pos2(x, 20.0)),
            item,
        }
    }

    pub fn move_to(&mut self, x: f32) {
        self.current = Some(pos2(x, 20.0));
    }

    pub fn lose_pointer(&mut self) {
        self.current = None;
    }
}

impl DragMonitor for FakeMonitor {
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

/// Fake scheduler grid: origin at (0, 0), 50px cells
pub struct FakeHost {
    pub origin: Pos2,
    pub cell_width: f32,
    pub resizing: Cell<bool>,
    pub rows: Vec<ResourceRow>,
}

impl FakeHost {
    pub fn new(rows: Vec<ResourceRow>) -> Self {
        Self {
            origin: pos2(0.0, 0.0),
            cell_width: 50.0,
            resizing: Cell::new(false),
            rows,
        }
    }

    pub fn row(&self, slot: &str) -> &ResourceRow {
        self.rows.iter().find(|row| row.slot_id == slot).unwrap()
    }
}

impl SchedulerHost for FakeHost {
    fn container_origin(&self) -> Pos2 {
        self.origin
    }

    fn cell_width(&self) -> f32 {
        self.cell_width
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
