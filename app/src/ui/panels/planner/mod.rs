pub mod blocks;
pub mod grid;

use eframe::egui;
use egui_phosphor::regular as icons;
use library::grid::GridGeometry;
use library::indicator::NowMarker;
use library::ScheduleService;

use crate::state::context::{Destination, PlannerContext};
use crate::ui::theme;

/// Sticky header row: navigation and the backlog toggle. Day names live in
/// [`planner_panel`] so they share the grid's column basis.
pub(crate) fn header_bar(ui: &mut egui::Ui, planner_context: &mut PlannerContext) {
    ui.horizontal(|ui| {
        if ui
            .button(icons::ARROW_LEFT)
            .on_hover_text("Back to dashboard")
            .clicked()
        {
            planner_context.pending_navigation = Some(Destination::Dashboard);
        }
        let toggle_hint = if planner_context.sidebar_open {
            "Hide backlog"
        } else {
            "Show backlog"
        };
        if ui
            .selectable_label(planner_context.sidebar_open, icons::SQUARES_FOUR)
            .on_hover_text(toggle_hint)
            .clicked()
        {
            planner_context.sidebar_open = !planner_context.sidebar_open;
        }
    });
}

/// Day-name row above the scroll area, with the current day highlighted.
/// Each label is centered through [`grid::column_rect`] over the same width
/// the grid sees, so the names stay over their columns whatever the window
/// or sidebar does.
fn day_header_row(ui: &mut egui::Ui, now: &NowMarker) {
    let size = egui::vec2(ui.available_width(), 20.0);
    let (row_rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    let painter = ui.painter_at(row_rect);
    for (day_index, name) in grid::DAY_NAMES.iter().enumerate() {
        let cell = grid::column_rect(&row_rect, day_index);
        let color = if day_index == now.day_index {
            theme::ACCENT
        } else {
            ui.visuals().weak_text_color()
        };
        painter.text(
            cell.center(),
            egui::Align2::CENTER_CENTER,
            *name,
            egui::FontId::proportional(12.0),
            color,
        );
    }
    ui.separator();
}

/// Scrollable week grid. On the first frame the view jumps to one hour
/// before the current time, like opening a paper agenda at today.
pub(crate) fn planner_panel(
    ui: &mut egui::Ui,
    planner_context: &mut PlannerContext,
    schedule_service: &ScheduleService,
    geometry: &GridGeometry,
    now: &NowMarker,
) {
    day_header_row(ui, now);

    let mut scroll = egui::ScrollArea::vertical().auto_shrink([false; 2]);
    if !planner_context.scrolled_to_now {
        let offset = geometry.hour_to_pixel_offset(now.hour - 1.0).max(0.0);
        scroll = scroll.vertical_scroll_offset(offset);
        planner_context.scrolled_to_now = true;
    }
    scroll.show(ui, |ui| {
        let size = egui::vec2(ui.available_width(), geometry.grid_height());
        let (grid_rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
        grid::show_grid(
            ui,
            grid_rect,
            planner_context,
            schedule_service,
            geometry,
            now,
        );
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::{Pos2, Rect, Vec2};

    #[test]
    fn day_labels_sit_over_their_grid_columns() {
        // Header row and grid body at the same width; the label cells must
        // line up with the columns, not with sevenths of the full width.
        let width = 1280.0;
        let row = Rect::from_min_size(Pos2::ZERO, Vec2::new(width, 20.0));
        let body = Rect::from_min_size(Pos2::new(0.0, 20.0), Vec2::new(width, 1440.0));
        for day_index in 0..grid::DAY_COUNT {
            let cell = grid::column_rect(&row, day_index);
            let column = grid::column_rect(&body, day_index);
            assert_eq!(cell.center().x, column.center().x);
        }
        let first = grid::column_rect(&row, 0);
        assert_eq!(first.left(), grid::TIME_GUTTER_WIDTH);
        let naive_center = width / grid::DAY_COUNT as f32 / 2.0;
        assert!(
            (first.center().x - naive_center).abs() > 1.0,
            "first label must be pushed right of the time gutter"
        );
    }
}
