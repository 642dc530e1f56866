// Event module
// Draggable scheduler events and the items a drag can carry

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// An existing scheduler event that can be dragged to a new slot or time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraggableEvent {
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// Resource the event is bound to
    pub slot_id: String,
    /// Per-event override of the global `movable` flag; unset means movable
    #[serde(default)]
    pub movable: Option<bool>,
    #[serde(default)]
    pub clickable1: Option<bool>,
    #[serde(default)]
    pub clickable2: Option<bool>,
}

impl DraggableEvent {
    /// Create a new event with required fields
    ///
    /// # Arguments
    /// * `id` - Event identifier (required, non-empty)
    /// * `slot_id` - Owning resource slot
    /// * `start` - Event start time
    /// * `end` - Event end time
    ///
    /// # Returns
    /// Returns `Result<DraggableEvent, String>` with validation
    ///
    /// # Examples
    /// ```
    /// use scheduler_dnd::models::event::DraggableEvent;
    /// use chrono::NaiveDate;
    ///
    /// let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap().and_hms_opt(9, 0, 0).unwrap();
    /// let end = start + chrono::Duration::hours(2);
    /// let event = DraggableEvent::new("ev-1", "room-a", start, end).unwrap();
    /// assert_eq!(event.duration(), chrono::Duration::hours(2));
    /// ```
    pub fn new(
        id: impl Into<String>,
        slot_id: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Self, String> {
        let event = Self {
            id: id.into(),
            title: String::new(),
            start,
            end,
            slot_id: slot_id.into(),
            movable: None,
            clickable1: None,
            clickable2: None,
        };
        event.validate()?;
        Ok(event)
    }

    /// Create a builder for constructing events with optional fields
    pub fn builder() -> DraggableEventBuilder {
        DraggableEventBuilder::new()
    }

    /// Validate the event
    pub fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("Event id cannot be empty".to_string());
        }

        if self.end < self.start {
            return Err("Event end time must not be before start time".to_string());
        }

        Ok(())
    }

    /// Get the duration of the event
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Whether this event allows being dragged, ignoring global configuration
    pub fn is_movable(&self) -> bool {
        self.movable != Some(false)
    }

    /// Whether the popover's first action button applies to this event
    pub fn shows_primary_action(&self) -> bool {
        self.clickable1.unwrap_or(true)
    }

    /// Whether the popover's second action button applies to this event
    pub fn shows_secondary_action(&self) -> bool {
        self.clickable2.unwrap_or(true)
    }
}

/// Builder for creating events with optional fields
pub struct DraggableEventBuilder {
    id: Option<String>,
    title: String,
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
    slot_id: Option<String>,
    movable: Option<bool>,
    clickable1: Option<bool>,
    clickable2: Option<bool>,
}

impl DraggableEventBuilder {
    /// Create a new event builder
    pub fn new() -> Self {
        Self {
            id: None,
            title: String::new(),
            start: None,
            end: None,
            slot_id: None,
            movable: None,
            clickable1: None,
            clickable2: None,
        }
    }

    /// Set the event id
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the event title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the start time
    pub fn start(mut self, start: NaiveDateTime) -> Self {
        self.start = Some(start);
        self
    }

    /// Set the end time
    pub fn end(mut self, end: NaiveDateTime) -> Self {
        self.end = Some(end);
        self
    }

    /// Set the owning resource slot
    pub fn slot_id(mut self, slot_id: impl Into<String>) -> Self {
        self.slot_id = Some(slot_id.into());
        self
    }

    pub fn movable(mut self, movable: bool) -> Self {
        self.movable = Some(movable);
        self
    }

    pub fn clickable1(mut self, clickable: bool) -> Self {
        self.clickable1 = Some(clickable);
        self
    }

    pub fn clickable2(mut self, clickable: bool) -> Self {
        self.clickable2 = Some(clickable);
        self
    }

    /// Build the event
    pub fn build(self) -> Result<DraggableEvent, String> {
        let id = self.id.ok_or("Event id is required")?;
        let start = self.start.ok_or("Event start time is required")?;
        let end = self.end.ok_or("Event end time is required")?;
        let slot_id = self.slot_id.ok_or("Event slot is required")?;

        let event = DraggableEvent {
            id,
            title: self.title,
            start,
            end,
            slot_id,
            movable: self.movable,
            clickable1: self.clickable1,
            clickable2: self.clickable2,
        };

        event.validate()?;
        Ok(event)
    }
}

impl Default for DraggableEventBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The "create new event" handle the host renders on empty grid space
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEventAffordance {
    #[serde(default)]
    pub label: String,
}

/// Whether a drag creates a new event or relocates an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DragKind {
    NewEvent,
    MoveEvent,
}

impl DragKind {
    pub const ALL: [DragKind; 2] = [DragKind::NewEvent, DragKind::MoveEvent];

    pub(crate) fn index(self) -> usize {
        match self {
            DragKind::NewEvent => 0,
            DragKind::MoveEvent => 1,
        }
    }
}

/// Payload carried by an active drag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragItem {
    NewEvent(NewEventAffordance),
    Event(DraggableEvent),
}

impl DragItem {
    pub fn kind(&self) -> DragKind {
        match self {
            DragItem::NewEvent(_) => DragKind::NewEvent,
            DragItem::Event(_) => DragKind::MoveEvent,
        }
    }

    pub fn as_event(&self) -> Option<&DraggableEvent> {
        match self {
            DragItem::Event(event) => Some(event),
            DragItem::NewEvent(_) => None,
        }
    }

    /// Per-item movable flag; creation affordances never set one
    pub fn movable(&self) -> Option<bool> {
        self.as_event().and_then(|event| event.movable)
    }
}
