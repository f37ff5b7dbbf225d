//! Application errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("storage unavailable: {0}")]
    Storage(String),

    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("task {0} not found")]
    NotFound(u32),

    #[error("invalid input: {0}")]
    Validation(String),

    #[error(transparent)]
    Experiment(#[from] crate::experiment::ExperimentError),
}

pub type AppResult<T> = Result<T, AppError>;
