use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("Invalid forecast horizon: {0} months (expected 1 to 24)")]
    InvalidHorizon(usize),
    #[error("Invalid project: {0}")]
    InvalidProject(String),
    #[error("Invalid month: {0}")]
    InvalidMonth(String),
}
