//! Backlog side panel: unscheduled plan tasks, draggable onto the grid.

use eframe::egui;
use egui_phosphor::regular as icons;
use library::interaction::DragOrigin;
use library::model::block::BacklogItem;
use library::ScheduleService;

use crate::state::context::{DragPayload, PlannerContext};

pub(crate) fn backlog_panel(
    ctx: &egui::Context,
    planner_context: &mut PlannerContext,
    schedule_service: &ScheduleService,
) {
    egui::SidePanel::left("backlog_panel")
        .resizable(false)
        .default_width(260.0)
        .show_animated(ctx, planner_context.sidebar_open, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(format!("{} Backlog", icons::SQUARES_FOUR)).strong(),
                );
                let count = schedule_service.with_schedule(|s| s.backlog().len());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(egui::RichText::new(count.to_string()).weak());
                });
            });
            ui.label(egui::RichText::new("Drag to schedule").weak().small());
            ui.separator();

            let items = schedule_service.with_schedule(|s| s.backlog().to_vec());
            if items.is_empty() {
                ui.add_space(24.0);
                ui.vertical_centered(|ui| {
                    ui.label(egui::RichText::new(icons::CALENDAR_BLANK).size(20.0).weak());
                    ui.label(egui::RichText::new("All tasks scheduled.").weak());
                });
                return;
            }

            egui::ScrollArea::vertical()
                .auto_shrink([false, true])
                .show(ui, |ui| {
                    for item in &items {
                        backlog_card(ui, planner_context, item);
                        ui.add_space(6.0);
                    }
                });
        });
}

fn backlog_card(ui: &mut egui::Ui, planner_context: &mut PlannerContext, item: &BacklogItem) {
    let card = egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(8))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new(&item.title).strong().small());
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(&item.subtitle).weak().small());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(format!(
                            "{} {:.0}m",
                            icons::CLOCK,
                            item.duration_minutes
                        ))
                        .weak()
                        .small(),
                    );
                });
            });
        });

    let response = ui.interact(
        card.response.rect,
        ui.id().with(("backlog_item", item.id.as_str())),
        egui::Sense::drag(),
    );
    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::Grab);
    }
    if response.drag_started() && planner_context.interaction.is_idle() {
        egui::DragAndDrop::set_payload(
            ui.ctx(),
            DragPayload {
                id: item.id.clone(),
                origin: DragOrigin::Backlog,
            },
        );
        planner_context
            .interaction
            .begin_drag(item.id.clone(), DragOrigin::Backlog);
    }
}
