pub mod block;
pub mod plan;
pub mod schedule;

pub use block::{format_hour, BacklogItem, Category, TimeBlock, AD_HOC_SUBTITLE, MIN_DURATION_HOURS};
pub use plan::{Milestone, Plan, PlanTask};
pub use schedule::Schedule;
