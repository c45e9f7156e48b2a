//! Error taxonomy for the workspace.

/// Result alias used across all myclustering crates.
pub type ClusteringResult<T> = Result<T, ClusteringError>;

/// Errors produced by dataset validation, fitting, evaluation, and rendering.
#[derive(Debug, thiserror::Error)]
pub enum ClusteringError {
    #[error("dataset is empty")]
    EmptyDataset,

    #[error("dimension mismatch: expected {expected} features, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("non-finite value at row {row}, column {col}")]
    NonFiniteValue { row: usize, col: usize },

    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("estimator has not been fitted")]
    NotFitted,

    #[error("insufficient samples: required {required}, found {found}")]
    InsufficientSamples { required: usize, found: usize },

    #[error("render failed: {message}")]
    RenderError { message: String },

    #[error("config error: {message}")]
    ConfigError { message: String },
}

impl ClusteringError {
    /// Shorthand for `InvalidParameter` with a formatted reason.
    pub fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_name_the_offending_field() {
        let err = ClusteringError::DimensionMismatch {
            expected: 3,
            found: 2,
        };
        assert_eq!(
            err.to_string(),
            "dimension mismatch: expected 3 features, found 2"
        );

        let err = ClusteringError::invalid_parameter("eps", "must be positive");
        assert_eq!(err.to_string(), "invalid parameter eps: must be positive");
    }
}
