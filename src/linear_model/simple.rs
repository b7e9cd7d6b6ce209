use crate::{EstimatorError, Vector};

/// Single-feature least squares in slope/intercept form.
///
/// Algebraically the same optimum as `ClosedFormEstimator` on a one-column
/// design matrix, computed from centered sums instead of a matrix solve.
#[derive(Clone, Debug)]
pub struct SimpleLinearRegression {
    pub slope: Option<f64>,
    pub intercept: Option<f64>,
}

impl SimpleLinearRegression {
    pub fn new() -> Self {
        Self {
            slope: None,
            intercept: None,
        }
    }

    pub fn fit(&mut self, x: &Vector, y: &Vector) -> Result<(), EstimatorError> {
        if x.is_empty() {
            return Err(EstimatorError::invalid_input(
                "X must have at least one sample",
            ));
        }
        if x.len() != y.len() {
            return Err(EstimatorError::invalid_input(
                "Number of samples in X and y must match",
            ));
        }

        let x_mean = x.mean().unwrap();
        let y_mean = y.mean().unwrap();

        let sxx = x.mapv(|v| (v - x_mean) * (v - x_mean)).sum();
        if sxx.abs() < 1e-10 {
            // zero-variance feature, same failure as a singular normal matrix
            return Err(EstimatorError::SingularMatrix);
        }

        let sxy = x
            .iter()
            .zip(y.iter())
            .map(|(&xi, &yi)| (xi - x_mean) * (yi - y_mean))
            .sum::<f64>();

        let slope = sxy / sxx;
        self.slope = Some(slope);
        self.intercept = Some(y_mean - slope * x_mean);
        Ok(())
    }

    pub fn predict(&self, x: &Vector) -> Result<Vector, EstimatorError> {
        let slope = self.slope.ok_or(EstimatorError::NotFitted)?;
        let intercept = self.intercept.ok_or(EstimatorError::NotFitted)?;

        Ok(x.mapv(|v| slope * v + intercept))
    }
}

impl Default for SimpleLinearRegression {
    fn default() -> Self {
        Self::new()
    }
}
