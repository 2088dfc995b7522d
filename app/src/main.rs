use eframe::egui;

mod app;
mod config;
mod state;
mod ui;
mod utils;

fn main() -> eframe::Result<()> {
    env_logger::init();
    eframe::run_native(
        "Weekly Planner",
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default().with_inner_size([1280.0, 720.0]),
            ..Default::default()
        },
        Box::new(|cc| Ok(Box::new(app::PlannerApp::new(cc)))),
    )
}
