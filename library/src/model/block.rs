use serde::{Deserialize, Serialize};

/// Smallest allowed block span; also the snapping quantum expressed in hours.
pub const MIN_DURATION_HOURS: f32 = 0.25;

/// Subtitle stamped on blocks created by drag-selection rather than a plan.
pub const AD_HOC_SUBTITLE: &str = "Custom Block";

/// Display category of a block. Styling only, no scheduling effect.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    #[default]
    DeepWork,
    Meeting,
    Admin,
    Break,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::DeepWork,
        Category::Meeting,
        Category::Admin,
        Category::Break,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::DeepWork => "Deep Work",
            Category::Meeting => "Meeting",
            Category::Admin => "Admin",
            Category::Break => "Break",
        }
    }
}

/// A scheduled unit of work on the weekly grid.
///
/// `day_index` is Monday-based (0 = Mon, 6 = Sun) and addresses a day of the
/// displayed week, not an absolute date. `start_hour` and `duration` are
/// decimal hours quantized to quarter-hour steps. Overlapping blocks are
/// permitted and render independently.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimeBlock {
    pub id: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub day_index: usize,
    pub start_hour: f32,
    pub duration: f32,
    pub category: Category,
}

impl TimeBlock {
    pub fn end_hour(&self) -> f32 {
        self.start_hour + self.duration
    }
}

/// An unscheduled plan task awaiting placement on the grid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BacklogItem {
    pub id: String,
    pub title: String,
    /// Title of the milestone the task came from.
    pub subtitle: String,
    pub duration_minutes: f32,
    /// Back-reference only, never an ownership link.
    pub milestone_id: String,
}

/// Format a decimal hour as a 12-hour clock label, e.g. `9.5` → `9:30 AM`.
pub fn format_hour(decimal_hour: f32) -> String {
    let h = decimal_hour.floor() as i32;
    let m = ((decimal_hour - h as f32) * 60.0).round() as i32;
    let meridiem = if h >= 12 && h < 24 { "PM" } else { "AM" };
    let display_h = match h % 12 {
        0 => 12,
        other => other,
    };
    format!("{display_h}:{m:02} {meridiem}")
}
