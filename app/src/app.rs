use std::fs;
use std::path::Path;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use anyhow::Context as _;
use eframe::egui;
use library::indicator::NowMarker;
use library::model::block::{Category, TimeBlock};
use library::model::plan::{Milestone, Plan, PlanTask};
use library::model::schedule::Schedule;
use library::ScheduleService;
use log::{info, warn};

use crate::config::AppConfig;
use crate::state::context::PlannerContext;
use crate::ui::panels::{backlog, planner};
use crate::ui::theme;
use crate::utils;

pub struct PlannerApp {
    config: AppConfig,
    schedule_service: ScheduleService,
    planner_context: PlannerContext,
}

impl PlannerApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = AppConfig::load();
        theme::apply_theme(&cc.egui_ctx, &config);
        utils::setup_fonts(&cc.egui_ctx);

        let schedule = Arc::new(RwLock::new(Schedule::with_blocks(seed_blocks())));
        let schedule_service = ScheduleService::new(Arc::clone(&schedule));

        let plan = match config.plan_path.as_deref() {
            Some(path) => match load_plan_file(path) {
                Ok(plan) => plan,
                Err(err) => {
                    warn!("Falling back to sample plan: {err:#}");
                    sample_plan()
                }
            },
            None => sample_plan(),
        };
        schedule_service.load_plan(plan);

        cc.egui_ctx.request_repaint();
        Self {
            config,
            schedule_service,
            planner_context: PlannerContext::new(),
        }
    }
}

impl eframe::App for PlannerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // The now line only needs minute resolution; interactions repaint on
        // their own through input events.
        ctx.request_repaint_after(Duration::from_secs(60));

        let geometry = self.config.geometry();
        let now = NowMarker::now();

        egui::TopBottomPanel::top("planner_header").show(ctx, |ui| {
            planner::header_bar(ui, &mut self.planner_context);
        });

        backlog::backlog_panel(ctx, &mut self.planner_context, &self.schedule_service);

        egui::CentralPanel::default().show(ctx, |ui| {
            planner::planner_panel(
                ui,
                &mut self.planner_context,
                &self.schedule_service,
                &geometry,
                &now,
            );
        });

        if let Some(request) = self.planner_context.create_dialog.show(ctx) {
            self.schedule_service.create_blocks(
                &request.title,
                request.category,
                request.duration,
                request.start_day_index,
                request.end_day_index,
                request.start_hour,
            );
        }

        if let Some(destination) = self.planner_context.pending_navigation.take() {
            // Routing is owned by the surrounding shell; the planner only
            // reports the logical destination.
            info!("Navigation requested: {destination:?}");
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.config.save();
    }
}

fn load_plan_file(path: &Path) -> anyhow::Result<Plan> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading plan file {}", path.display()))?;
    Plan::from_json(&text).context("parsing plan JSON")
}

/// Blocks the week starts with, so the grid is not empty on first launch.
fn seed_blocks() -> Vec<TimeBlock> {
    vec![
        TimeBlock {
            id: "seed-1".to_string(),
            title: "Morning Routine".to_string(),
            subtitle: Some("Health".to_string()),
            day_index: 0,
            start_hour: 7.0,
            duration: 1.0,
            category: Category::Break,
        },
        TimeBlock {
            id: "seed-2".to_string(),
            title: "Deep Work".to_string(),
            subtitle: Some("Strategy Doc".to_string()),
            day_index: 0,
            start_hour: 9.0,
            duration: 2.0,
            category: Category::DeepWork,
        },
        TimeBlock {
            id: "seed-3".to_string(),
            title: "Team Sync".to_string(),
            subtitle: Some("Weekly Standup".to_string()),
            day_index: 1,
            start_hour: 11.0,
            duration: 1.0,
            category: Category::Meeting,
        },
    ]
}

/// Built-in demo plan used when no plan file is configured.
fn sample_plan() -> Plan {
    Plan {
        goal_title: "Become a Senior Full Stack Developer in 6 Months".to_string(),
        total_estimated_hours: 480.0,
        feasibility_score: 85.0,
        realism_assessment: "Ambitious but achievable with ~20 hours per week.".to_string(),
        milestones: vec![
            Milestone {
                id: "m-1".to_string(),
                title: "Advanced Frontend Mastery".to_string(),
                kpi: "Build 3 complex UI components with full test coverage".to_string(),
                estimated_hours: 120.0,
                tasks: vec![
                    PlanTask {
                        id: "t-1-1".to_string(),
                        title: "Deep Dive into Rendering Architecture".to_string(),
                        description: "Understand reconciliation and rendering optimization"
                            .to_string(),
                        duration_minutes: 240.0,
                    },
                    PlanTask {
                        id: "t-1-2".to_string(),
                        title: "Master Layout Systems".to_string(),
                        description: "Build a complex responsive layout clone".to_string(),
                        duration_minutes: 180.0,
                    },
                    PlanTask {
                        id: "t-1-3".to_string(),
                        title: "State Management Patterns".to_string(),
                        description: "Compare the mainstream state stores".to_string(),
                        duration_minutes: 300.0,
                    },
                ],
            },
            Milestone {
                id: "m-2".to_string(),
                title: "Backend Scalability & Architecture".to_string(),
                kpi: "Deploy a microservice capable of handling 1k RPS".to_string(),
                estimated_hours: 160.0,
                tasks: vec![
                    PlanTask {
                        id: "t-2-1".to_string(),
                        title: "Event Loop Internals".to_string(),
                        description: "Study non-blocking I/O in depth".to_string(),
                        duration_minutes: 240.0,
                    },
                    PlanTask {
                        id: "t-2-2".to_string(),
                        title: "Database Design & Normalization".to_string(),
                        description: "Design the schema for an e-commerce platform".to_string(),
                        duration_minutes: 360.0,
                    },
                    PlanTask {
                        id: "t-2-3".to_string(),
                        title: "Caching Strategies".to_string(),
                        description: "Implement caching for high-read endpoints".to_string(),
                        duration_minutes: 180.0,
                    },
                ],
            },
        ],
    }
}
