// Service Error Types
// Errors surfaced by the matrix service library

use thiserror::Error;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors that can occur while rendering a matrix
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to serialize YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
