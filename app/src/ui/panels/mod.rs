pub mod backlog;
pub mod planner;
