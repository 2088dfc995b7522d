//! Rendering and interaction for a single scheduled block: body drag source,
//! bottom-edge resize handle and hover delete affordance.

use eframe::egui::{self, Align2, CornerRadius, CursorIcon, FontId, Pos2, Rect, Sense, Stroke, Vec2};
use egui::epaint::StrokeKind;
use egui_phosphor::regular as icons;
use library::grid::GridGeometry;
use library::interaction::DragOrigin;
use library::model::block::{format_hour, TimeBlock};
use library::ScheduleService;

use crate::state::context::{DragPayload, PlannerContext};
use crate::ui::theme;

const RESIZE_HANDLE_HEIGHT: f32 = 6.0;
/// Below this pixel height only the title is shown, vertically centered.
const SMALL_BLOCK_HEIGHT: f32 = 40.0;

/// Screen rectangle of a block within its day column.
pub(super) fn block_rect(col_rect: &Rect, geometry: &GridGeometry, block: &TimeBlock) -> Rect {
    let top = col_rect.top() + geometry.hour_to_pixel_offset(block.start_hour);
    Rect::from_min_size(
        Pos2::new(col_rect.left() + 2.0, top),
        Vec2::new(
            col_rect.width() - 4.0,
            (block.duration * geometry.pixels_per_hour).max(4.0),
        ),
    )
}

pub(super) fn show_block(
    ui: &mut egui::Ui,
    planner_context: &mut PlannerContext,
    schedule_service: &ScheduleService,
    geometry: &GridGeometry,
    col_rect: &Rect,
    block: &TimeBlock,
) {
    let rect = block_rect(col_rect, geometry, block);
    let id = ui.id().with(("block", block.id.as_str()));
    let body = ui.interact(rect, id, Sense::click_and_drag());

    let resizing_this = planner_context
        .interaction
        .resize_session()
        .is_some_and(|s| s.block_id == block.id);

    let border = theme::category_border(block.category);
    let painter = ui.painter_at(rect.expand(1.0));
    painter.rect_filled(rect, CornerRadius::same(6), theme::category_fill(block.category));
    painter.rect_stroke(
        rect,
        CornerRadius::same(6),
        Stroke::new(if resizing_this { 2.0 } else { 1.0 }, border),
        StrokeKind::Inside,
    );

    let title_color = ui.visuals().strong_text_color();
    if rect.height() < SMALL_BLOCK_HEIGHT {
        painter.text(
            Pos2::new(rect.left() + 6.0, rect.center().y),
            Align2::LEFT_CENTER,
            &block.title,
            FontId::proportional(11.0),
            title_color,
        );
    } else {
        painter.text(
            rect.min + Vec2::new(6.0, 4.0),
            Align2::LEFT_TOP,
            &block.title,
            FontId::proportional(11.0),
            title_color,
        );
        if let Some(subtitle) = &block.subtitle {
            painter.text(
                rect.min + Vec2::new(6.0, 19.0),
                Align2::LEFT_TOP,
                subtitle,
                FontId::proportional(9.0),
                ui.visuals().weak_text_color(),
            );
        }
        painter.text(
            Pos2::new(rect.left() + 6.0, rect.bottom() - 5.0),
            Align2::LEFT_BOTTOM,
            format!(
                "{} - {}",
                format_hour(block.start_hour),
                format_hour(block.end_hour())
            ),
            FontId::monospace(9.0),
            ui.visuals().weak_text_color(),
        );
    }

    // Drag to move; whichever column sees the release resolves the drop.
    if body.drag_started() && planner_context.interaction.is_idle() {
        egui::DragAndDrop::set_payload(
            ui.ctx(),
            DragPayload {
                id: block.id.clone(),
                origin: DragOrigin::Schedule,
            },
        );
        planner_context
            .interaction
            .begin_drag(block.id.clone(), DragOrigin::Schedule);
    }
    if body.hovered() && planner_context.interaction.is_idle() {
        ui.ctx().set_cursor_icon(CursorIcon::Grab);
    }

    // The resize handle is added after the body so it wins the hit test; that
    // is what keeps a resize press from also reading as a drag start.
    let handle_rect = Rect::from_min_max(
        Pos2::new(rect.left(), rect.bottom() - RESIZE_HANDLE_HEIGHT),
        rect.max,
    );
    let handle = ui.interact(handle_rect, id.with("resize"), Sense::drag());
    if handle.hovered() || resizing_this {
        ui.ctx().set_cursor_icon(CursorIcon::ResizeVertical);
    }
    if handle.drag_started() {
        if let Some(pos) = handle.interact_pointer_pos() {
            planner_context
                .interaction
                .begin_resize(block.id.clone(), pos.y, block.duration);
        }
    }

    // Hover-only delete affordance in the top-right corner.
    if ui.rect_contains_pointer(rect) && planner_context.interaction.is_idle() {
        let delete_rect = Rect::from_center_size(
            Pos2::new(rect.right() - 10.0, rect.top() + 10.0),
            Vec2::splat(14.0),
        );
        let delete = ui.interact(delete_rect, id.with("delete"), Sense::click());
        let color = if delete.hovered() {
            ui.visuals().error_fg_color
        } else {
            ui.visuals().weak_text_color()
        };
        painter.text(
            delete_rect.center(),
            Align2::CENTER_CENTER,
            icons::X,
            FontId::proportional(10.0),
            color,
        );
        if delete.clicked() {
            schedule_service.delete_block(&block.id);
        }
    }
}
