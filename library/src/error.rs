use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Plan error: {0}")]
    Plan(String),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
