use crate::{Estimator, EstimatorError, Matrix, Vector};
use ndarray::s;

/// Exact least-squares fit via the normal equations.
///
/// `fit` solves `(XᵀX)W = Xᵀy` on the bias-augmented design matrix and keeps
/// the resulting weight vector. The solution is the unique minimizer of the
/// sum of squared residuals whenever the augmented matrix has full column
/// rank; otherwise `fit` fails with `SingularMatrix` and the previously
/// fitted weights (if any) are kept.
#[derive(Clone, Debug)]
pub struct ClosedFormEstimator {
    pub weights: Option<Vector>,
}

impl ClosedFormEstimator {
    pub fn new() -> Self {
        Self { weights: None }
    }

    pub fn fit(&mut self, x: &Matrix, y: &Vector) -> Result<(), EstimatorError> {
        if x.nrows() == 0 {
            return Err(EstimatorError::invalid_input(
                "X must have at least one sample",
            ));
        }
        if x.nrows() != y.len() {
            return Err(EstimatorError::invalid_input(
                "Number of samples in X and y must match",
            ));
        }

        let n_samples = x.nrows();
        let n_features = x.ncols();

        let mut x_aug = Matrix::ones((n_samples, n_features + 1));
        x_aug.slice_mut(s![.., 1..]).assign(x);

        let xt = x_aug.t();
        let xtx = xt.dot(&x_aug);
        let xty = xt.dot(y);

        let weights = self.solve_linear_system(&xtx, &xty)?;
        self.weights = Some(weights);
        Ok(())
    }

    pub fn predict(&self, x: &Matrix) -> Result<Vector, EstimatorError> {
        let weights = self.weights.as_ref().ok_or(EstimatorError::NotFitted)?;
        let n_features = weights.len() - 1;

        if x.ncols() != n_features {
            return Err(EstimatorError::DimensionMismatch {
                expected: n_features,
                got: x.ncols(),
            });
        }

        let coefficients = weights.slice(s![1..]);
        Ok(x.dot(&coefficients) + weights[0])
    }

    pub fn score(&self, x: &Matrix, y: &Vector) -> Result<f64, EstimatorError> {
        let y_pred = self.predict(x)?;
        crate::metrics::r2_score(y, &y_pred)
    }

    pub fn intercept(&self) -> Option<f64> {
        self.weights.as_ref().map(|w| w[0])
    }

    pub fn coefficients(&self) -> Option<Vector> {
        self.weights.as_ref().map(|w| w.slice(s![1..]).to_owned())
    }

    fn solve_linear_system(&self, a: &Matrix, b: &Vector) -> Result<Vector, EstimatorError> {
        let n = a.nrows();
        let mut aug = Matrix::zeros((n, n + 1));

        for i in 0..n {
            for j in 0..n {
                aug[(i, j)] = a[(i, j)];
            }
            aug[(i, n)] = b[i];
        }

        for i in 0..n {
            let mut max_row = i;
            for k in (i + 1)..n {
                if aug[(k, i)].abs() > aug[(max_row, i)].abs() {
                    max_row = k;
                }
            }

            if aug[(max_row, i)].abs() < 1e-10 {
                return Err(EstimatorError::SingularMatrix);
            }

            if max_row != i {
                for j in 0..=n {
                    let temp = aug[(i, j)];
                    aug[(i, j)] = aug[(max_row, j)];
                    aug[(max_row, j)] = temp;
                }
            }

            for k in (i + 1)..n {
                let factor = aug[(k, i)] / aug[(i, i)];
                for j in i..=n {
                    aug[(k, j)] -= factor * aug[(i, j)];
                }
            }
        }

        let mut x = Vector::zeros(n);
        for i in (0..n).rev() {
            x[i] = aug[(i, n)];
            for j in (i + 1)..n {
                x[i] -= aug[(i, j)] * x[j];
            }
            x[i] /= aug[(i, i)];
        }

        Ok(x)
    }
}

impl Default for ClosedFormEstimator {
    fn default() -> Self {
        Self::new()
    }
}

impl Estimator for ClosedFormEstimator {
    fn fit(&mut self, x: &Matrix, y: &Vector) -> Result<(), EstimatorError> {
        ClosedFormEstimator::fit(self, x, y)
    }

    fn predict(&self, x: &Matrix) -> Result<Vector, EstimatorError> {
        ClosedFormEstimator::predict(self, x)
    }

    fn weights(&self) -> Option<&Vector> {
        self.weights.as_ref()
    }
}
