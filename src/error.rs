use thiserror::Error;

/// Errors raised by estimators and the supporting data/metric helpers.
///
/// Every failing operation returns one of these synchronously and leaves the
/// estimator's prior state untouched; there are no partial results.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EstimatorError {
    /// Empty input, or X and y disagree on the number of samples.
    #[error("{reason}")]
    InvalidInput { reason: String },

    /// Feature count at predict time differs from the fitted feature count.
    #[error("Number of features in X ({got}) doesn't match training data ({expected})")]
    DimensionMismatch { expected: usize, got: usize },

    /// `predict` was called before a successful `fit`.
    #[error("Model not fitted. Call fit() first.")]
    NotFitted,

    /// The normal equations have no unique solution (rank-deficient or
    /// collinear features, or fewer samples than unknowns).
    #[error("Matrix is singular or nearly singular")]
    SingularMatrix,
}

impl EstimatorError {
    pub(crate) fn invalid_input(reason: &str) -> Self {
        Self::InvalidInput {
            reason: reason.to_string(),
        }
    }
}
