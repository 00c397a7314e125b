use thiserror::Error;

/// Result type for cost mapping operations
pub type CostMappingResult<T> = Result<T, CostMappingError>;

/// Errors that can occur in the cost mapping domain
#[derive(Debug, Error)]
pub enum CostMappingError {
    /// Attribute filter pattern failed to compile
    #[error("Invalid filter pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<validator::ValidationErrors> for CostMappingError {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::InvalidInput(err.to_string())
    }
}
