pub mod error;
pub mod grid;
pub mod indicator;
pub mod interaction;
pub mod model;
pub mod service;

pub use error::PlannerError;
pub use service::schedule_service::ScheduleService;
