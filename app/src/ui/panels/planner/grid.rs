//! The interactive week grid: background lines and time labels, pointer
//! routing into the interaction state machine, drop resolution, the ghost
//! block and the current-time line.

use eframe::egui::{self, Align2, CornerRadius, FontId, Pos2, Rect, Sense, Stroke, Vec2};
use egui::epaint::StrokeKind;
use library::grid::GridGeometry;
use library::indicator::NowMarker;
use library::interaction::{DragOrigin, SelectionRange};
use library::model::block::{format_hour, TimeBlock};
use library::ScheduleService;

use super::blocks;
use crate::state::context::{DragPayload, PlannerContext};
use crate::ui::theme;

pub(crate) const DAY_COUNT: usize = 7;
pub(crate) const DAY_NAMES: [&str; DAY_COUNT] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
pub(crate) const TIME_GUTTER_WIDTH: f32 = 48.0;

// ── Pure layout helpers (testable without UI) ──

pub(crate) fn day_column_width(grid_width: f32) -> f32 {
    (grid_width - TIME_GUTTER_WIDTH) / DAY_COUNT as f32
}

/// Day column under an absolute x coordinate, clamped to the grid.
pub(crate) fn day_at_x(grid_left: f32, grid_width: f32, x: f32) -> usize {
    let column = (x - grid_left - TIME_GUTTER_WIDTH) / day_column_width(grid_width);
    column.floor().clamp(0.0, (DAY_COUNT - 1) as f32) as usize
}

pub(crate) fn column_rect(grid_rect: &Rect, day_index: usize) -> Rect {
    let width = day_column_width(grid_rect.width());
    Rect::from_min_size(
        Pos2::new(
            grid_rect.left() + TIME_GUTTER_WIDTH + day_index as f32 * width,
            grid_rect.top(),
        ),
        Vec2::new(width, grid_rect.height()),
    )
}

pub(crate) fn show_grid(
    ui: &mut egui::Ui,
    grid_rect: Rect,
    planner_context: &mut PlannerContext,
    schedule_service: &ScheduleService,
    geometry: &GridGeometry,
    now: &NowMarker,
) {
    draw_background(ui, &grid_rect, geometry);

    // Render from a snapshot; the store only mutates through the operations
    // triggered below.
    let blocks_snapshot = schedule_service.with_schedule(|s| s.blocks().to_vec());

    for day_index in 0..DAY_COUNT {
        let col_rect = column_rect(&grid_rect, day_index);
        let col_response = ui.interact(
            col_rect,
            ui.id().with(("day_column", day_index)),
            Sense::click_and_drag(),
        );

        let day_blocks: Vec<&TimeBlock> = blocks_snapshot
            .iter()
            .filter(|b| b.day_index == day_index)
            .collect();

        // Drop of an in-flight block or backlog item onto this column.
        if let Some(payload) = col_response.dnd_release_payload::<DragPayload>() {
            let pointer = col_response
                .interact_pointer_pos()
                .or_else(|| ui.input(|i| i.pointer.latest_pos()));
            if let Some(pos) = pointer {
                let hour = geometry.snapped_hour_at(pos.y - col_rect.top());
                match payload.origin {
                    DragOrigin::Schedule => {
                        schedule_service.move_block(&payload.id, day_index, hour)
                    }
                    DragOrigin::Backlog => {
                        schedule_service.schedule_backlog_item(&payload.id, day_index, hour)
                    }
                }
            }
            planner_context.interaction.reset();
        }

        // A press on empty column background starts a selection; a press on a
        // block never does.
        if col_response.drag_started()
            && planner_context.interaction.is_idle()
            && !egui::DragAndDrop::has_any_payload(ui.ctx())
        {
            if let Some(pos) = col_response.interact_pointer_pos() {
                let on_block = day_blocks
                    .iter()
                    .any(|b| blocks::block_rect(&col_rect, geometry, b).contains(pos));
                if !on_block {
                    planner_context
                        .interaction
                        .begin_selection(day_index, geometry.snapped_hour_at(pos.y - col_rect.top()));
                }
            }
        }

        // A plain click on empty background skips the live ghost and goes
        // straight to the dialog with the minimum quarter-hour range.
        if col_response.clicked() && planner_context.interaction.is_idle() {
            if let Some(pos) = col_response.interact_pointer_pos() {
                let on_block = day_blocks
                    .iter()
                    .any(|b| blocks::block_rect(&col_rect, geometry, b).contains(pos));
                if !on_block {
                    planner_context
                        .interaction
                        .begin_selection(day_index, geometry.snapped_hour_at(pos.y - col_rect.top()));
                    if let Some(pending) = planner_context.interaction.finish_selection() {
                        planner_context.create_dialog.open(pending);
                    }
                }
            }
        }

        for block in &day_blocks {
            blocks::show_block(
                ui,
                planner_context,
                schedule_service,
                geometry,
                &col_rect,
                block,
            );
        }

        if now.day_index == day_index
            && now.visible_within(geometry.day_start_hour, geometry.day_end_hour)
        {
            draw_now_line(ui, &col_rect, geometry, now);
        }
    }

    update_live_gestures(ui, &grid_rect, planner_context, schedule_service, geometry);

    if let Some(range) = planner_context.interaction.selection().cloned() {
        draw_ghost_block(ui, &grid_rect, geometry, &range);
    }
    draw_drag_preview(
        ui,
        &grid_rect,
        planner_context,
        &blocks_snapshot,
        schedule_service,
        geometry,
    );
}

/// Advance whichever gesture is live from the latest pointer state. Each
/// update recomputes absolute values from the gesture origin, so event order
/// cannot corrupt the result.
fn update_live_gestures(
    ui: &mut egui::Ui,
    grid_rect: &Rect,
    planner_context: &mut PlannerContext,
    schedule_service: &ScheduleService,
    geometry: &GridGeometry,
) {
    let pointer_pos = ui.input(|i| i.pointer.latest_pos());
    let released = ui.input(|i| i.pointer.primary_released());

    if planner_context.interaction.selection().is_some() {
        if let Some(pos) = pointer_pos {
            let day_index = day_at_x(grid_rect.left(), grid_rect.width(), pos.x);
            let hour = geometry.snapped_hour_at(pos.y - grid_rect.top());
            planner_context.interaction.update_selection(day_index, hour);
        }
        if released {
            if let Some(pending) = planner_context.interaction.finish_selection() {
                planner_context.create_dialog.open(pending);
            }
        }
    } else if let Some(session) = planner_context.interaction.resize_session().cloned() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::ResizeVertical);
        if let Some(pos) = pointer_pos {
            // Applied on every move tick so the block visibly grows/shrinks.
            if let Some(duration) = planner_context.interaction.resize_duration(pos.y, geometry) {
                schedule_service.resize_block(&session.block_id, duration);
            }
        }
        if released {
            planner_context.interaction.reset();
        }
    } else if planner_context.interaction.dragged().is_some() && released {
        // A drop over a column was already resolved there; a release anywhere
        // else just clears the in-flight id.
        planner_context.interaction.reset();
    }
}

fn draw_background(ui: &egui::Ui, grid_rect: &Rect, geometry: &GridGeometry) {
    let painter = ui.painter_at(*grid_rect);
    let base = ui.visuals().widgets.noninteractive.bg_stroke.color;
    let hour_stroke = Stroke::new(1.0, base.gamma_multiply(0.55));
    let half_hour_stroke = Stroke::new(1.0, base.gamma_multiply(0.25));

    let first_hour = geometry.day_start_hour.floor() as i32;
    let last_hour = geometry.day_end_hour.ceil() as i32;
    for h in first_hour..last_hour {
        let y = grid_rect.top() + geometry.hour_to_pixel_offset(h as f32);
        painter.line_segment(
            [
                Pos2::new(grid_rect.left() + TIME_GUTTER_WIDTH, y),
                Pos2::new(grid_rect.right(), y),
            ],
            hour_stroke,
        );
        let y_half = y + geometry.pixels_per_hour / 2.0;
        painter.line_segment(
            [
                Pos2::new(grid_rect.left() + TIME_GUTTER_WIDTH, y_half),
                Pos2::new(grid_rect.right(), y_half),
            ],
            half_hour_stroke,
        );
        painter.text(
            Pos2::new(grid_rect.left() + TIME_GUTTER_WIDTH - 6.0, y + 2.0),
            Align2::RIGHT_TOP,
            hour_label(h),
            FontId::monospace(10.0),
            ui.visuals().weak_text_color(),
        );
    }

    for day_index in 0..=DAY_COUNT {
        let x = grid_rect.left() + TIME_GUTTER_WIDTH
            + day_index as f32 * day_column_width(grid_rect.width());
        painter.line_segment(
            [
                Pos2::new(x, grid_rect.top()),
                Pos2::new(x, grid_rect.bottom()),
            ],
            half_hour_stroke,
        );
    }
}

/// Gutter label for an on-the-hour line, 12-hour clock.
fn hour_label(h: i32) -> String {
    let display = match h % 12 {
        0 => 12,
        other => other,
    };
    let meridiem = if (12..24).contains(&h) { "PM" } else { "AM" };
    format!("{display} {meridiem}")
}

fn draw_now_line(ui: &egui::Ui, col_rect: &Rect, geometry: &GridGeometry, now: &NowMarker) {
    let y = col_rect.top() + geometry.hour_to_pixel_offset(now.hour);
    let painter = ui.painter();
    painter.circle_filled(Pos2::new(col_rect.left() + 3.0, y), 3.0, theme::NOW_LINE);
    painter.line_segment(
        [
            Pos2::new(col_rect.left(), y),
            Pos2::new(col_rect.right(), y),
        ],
        Stroke::new(2.0, theme::NOW_LINE),
    );
}

/// Transient preview of an in-progress selection, shown on every day column
/// in the range. Never a stored entity.
fn draw_ghost_block(
    ui: &egui::Ui,
    grid_rect: &Rect,
    geometry: &GridGeometry,
    range: &SelectionRange,
) {
    let min_day = range.start_day_index.min(range.end_day_index);
    let max_day = range.start_day_index.max(range.end_day_index);
    let start_hour = range.start_hour.min(range.end_hour);
    let end_hour = range.start_hour.max(range.end_hour);
    let painter = ui.painter_at(*grid_rect);

    for day_index in min_day..=max_day {
        let col_rect = column_rect(grid_rect, day_index);
        let top = col_rect.top() + geometry.hour_to_pixel_offset(start_hour);
        let height = ((end_hour - start_hour) * geometry.pixels_per_hour).max(2.0);
        let rect = Rect::from_min_size(
            Pos2::new(col_rect.left() + 2.0, top),
            Vec2::new(col_rect.width() - 4.0, height),
        );
        painter.rect_filled(rect, CornerRadius::same(6), theme::ACCENT.gamma_multiply(0.2));
        painter.rect_stroke(
            rect,
            CornerRadius::same(6),
            Stroke::new(1.5, theme::ACCENT),
            StrokeKind::Inside,
        );
        if rect.height() >= 28.0 {
            painter.text(
                rect.center() - Vec2::new(0.0, 7.0),
                Align2::CENTER_CENTER,
                "New Block",
                FontId::proportional(11.0),
                theme::ACCENT,
            );
            painter.text(
                rect.center() + Vec2::new(0.0, 7.0),
                Align2::CENTER_CENTER,
                format!("{} - {}", format_hour(start_hour), format_hour(end_hour)),
                FontId::monospace(9.0),
                ui.visuals().weak_text_color(),
            );
        }
    }
}

/// Visual-only insertion preview while a block or backlog item is in flight.
fn draw_drag_preview(
    ui: &egui::Ui,
    grid_rect: &Rect,
    planner_context: &PlannerContext,
    blocks_snapshot: &[TimeBlock],
    schedule_service: &ScheduleService,
    geometry: &GridGeometry,
) {
    let Some(session) = planner_context.interaction.dragged() else {
        return;
    };
    let Some(pos) = ui.input(|i| i.pointer.latest_pos()) else {
        return;
    };
    if !grid_rect.contains(pos) || pos.x < grid_rect.left() + TIME_GUTTER_WIDTH {
        return;
    }

    let day_index = day_at_x(grid_rect.left(), grid_rect.width(), pos.x);
    let col_rect = column_rect(grid_rect, day_index);
    let hour = geometry.snapped_hour_at(pos.y - grid_rect.top());
    let duration = match session.origin {
        DragOrigin::Schedule => blocks_snapshot
            .iter()
            .find(|b| b.id == session.id)
            .map(|b| b.duration),
        DragOrigin::Backlog => schedule_service.with_schedule(|s| {
            s.backlog().iter().find(|i| i.id == session.id).map(|i| {
                if i.duration_minutes > 0.0 {
                    i.duration_minutes / 60.0
                } else {
                    1.0
                }
            })
        }),
    }
    .unwrap_or(1.0);

    let top = col_rect.top() + geometry.hour_to_pixel_offset(hour);
    let rect = Rect::from_min_size(
        Pos2::new(col_rect.left() + 2.0, top),
        Vec2::new(col_rect.width() - 4.0, duration * geometry.pixels_per_hour),
    );
    let painter = ui.painter_at(*grid_rect);
    painter.rect_stroke(
        rect,
        CornerRadius::same(6),
        Stroke::new(1.5, theme::ACCENT.gamma_multiply(0.8)),
        StrokeKind::Inside,
    );
    painter.text(
        Pos2::new(rect.left() + 4.0, top - 3.0),
        Align2::LEFT_BOTTOM,
        format_hour(hour),
        FontId::monospace(9.0),
        theme::ACCENT,
    );
}
