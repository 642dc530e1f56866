// Property-based tests for the drag engine
// Checks cell resolution and move arithmetic over random inputs

use chrono::{Duration, NaiveDate, NaiveDateTime};
use egui::pos2;
use proptest::prelude::*;
use scheduler_dnd::dnd::move_semantics::resolve_move;
use scheduler_dnd::dnd::CoordinateMapper;
use scheduler_dnd::models::event::DraggableEvent;
use scheduler_dnd::models::grid::{CellUnit, GridCell, ViewType};
use scheduler_dnd::models::settings::DndConfig;

fn base() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

fn day_cell(offset_days: i64) -> GridCell {
    let start = base() + Duration::days(offset_days);
    GridCell::new(start, start + Duration::days(1))
}

fn event(start_minutes: i64, duration_minutes: i64) -> DraggableEvent {
    let start = base() + Duration::minutes(start_minutes);
    DraggableEvent::new("ev", "slot", start, start + Duration::minutes(duration_minutes)).unwrap()
}

proptest! {
    /// Property: the cell index is floor((px - origin) / width) and stable across calls
    #[test]
    fn prop_cell_index_is_floor_of_offset(
        origin in -500.0f32..500.0,
        width in 1.0f32..200.0,
        cells in 0i32..100,
        fraction in 0.05f32..0.9,
    ) {
        let px = origin + (cells as f32 + fraction) * width;
        let mapper = CoordinateMapper::new(pos2(origin, 0.0), width);
        let expected = ((px - origin) / width).floor() as i64;

        let first = mapper.cell_index(pos2(px, 0.0));
        prop_assert_eq!(first, Some(expected));
        prop_assert_eq!(first, Some(cells as i64));
        prop_assert_eq!(first, mapper.cell_index(pos2(px, 0.0)));
    }

    /// Property: a move never changes the event's length
    #[test]
    fn prop_move_preserves_duration(
        start in 0i64..(60 * 24 * 30),
        duration in 0i64..(60 * 24 * 5),
        grab in 0i64..30,
        current in 0i64..30,
        relative in any::<bool>(),
        month_view in any::<bool>(),
    ) {
        let ev = event(start, duration);
        let view = if month_view {
            DndConfig::default().with_view(ViewType::Month, CellUnit::Day)
        } else {
            DndConfig::default().with_view(ViewType::Day, CellUnit::Hour)
        };
        let config = DndConfig { relative_move: relative, ..view };

        let (new_start, new_end) =
            resolve_move(&ev, Some(&day_cell(grab)), &day_cell(current), &config).unwrap();
        prop_assert_eq!(new_end - new_start, ev.duration());
    }

    /// Property: relative moves shift the start by exactly the pointer's cell delta
    #[test]
    fn prop_relative_move_offset_law(
        start in 0i64..(60 * 24 * 30),
        duration in 0i64..(60 * 24 * 5),
        grab in 0i64..30,
        current in 0i64..30,
    ) {
        let ev = event(start, duration);
        let (grab_cell, current_cell) = (day_cell(grab), day_cell(current));
        let delta = current_cell.start - grab_cell.start;

        let (new_start, _) =
            resolve_move(&ev, Some(&grab_cell), &current_cell, &DndConfig::default()).unwrap();
        prop_assert_eq!(new_start, ev.start + delta);
    }
}
