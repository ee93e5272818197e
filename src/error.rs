use thiserror::Error;

use crate::models::DiseaseState;

#[derive(Debug, Error)]
pub enum NutritionError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("{disease} requires supplemental input: {field}")]
    MissingSupplementalInput {
        disease: DiseaseState,
        field: &'static str,
    },

    #[error("Unsupported disease state: {0}")]
    UnsupportedDisease(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, NutritionError>;
