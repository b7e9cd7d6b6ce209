use crate::{Estimator, EstimatorError, Matrix, Vector};
use ndarray::s;

/// Least-squares fit by full-batch gradient descent with an optional L2
/// penalty.
///
/// `fit` minimizes `C(W) = Σ(ŷᵢ - yᵢ)² + λ·ΣWⱼ²` (the penalty covers the
/// whole weight vector, intercept included) by running exactly `iterations`
/// steps of `W ← W - η·(2·Xᵀ(ŷ - y) + 2λW)` from the zero vector. There is
/// no stopping criterion and no divergence detection: choosing a learning
/// rate that is stable for the data scale is the caller's responsibility.
/// With a sufficiently small rate and enough iterations the weights approach
/// the unique minimizer of `C`.
#[derive(Clone, Debug)]
pub struct GradientDescentEstimator {
    pub weights: Option<Vector>,
    lambda: f64,
    learning_rate: f64,
    iterations: usize,
    cost_every: usize,
    cost_history: Vec<f64>,
}

impl GradientDescentEstimator {
    pub fn new() -> Self {
        Self {
            weights: None,
            lambda: 0.0,
            learning_rate: 0.01,
            iterations: 1000,
            cost_every: 0,
            cost_history: Vec::new(),
        }
    }

    pub fn lambda(mut self, lambda: f64) -> Self {
        if lambda < 0.0 {
            panic!("lambda must be non-negative, got {}", lambda);
        }
        self.lambda = lambda;
        self
    }

    pub fn learning_rate(mut self, learning_rate: f64) -> Self {
        if learning_rate <= 0.0 {
            panic!("learning_rate must be positive, got {}", learning_rate);
        }
        self.learning_rate = learning_rate;
        self
    }

    pub fn iterations(mut self, iterations: usize) -> Self {
        if iterations == 0 {
            panic!("iterations must be at least 1, got 0");
        }
        self.iterations = iterations;
        self
    }

    /// Record the cost at the start of every `cost_every`-th iteration
    /// (0 disables recording). Recording never changes the weight
    /// trajectory.
    pub fn cost_every(mut self, cost_every: usize) -> Self {
        self.cost_every = cost_every;
        self
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

        let mut weights = Vector::zeros(n_features + 1);
        let mut history = Vec::new();

        for iteration in 0..self.iterations {
            let predictions = x_aug.dot(&weights);
            let error = &predictions - y;

            if self.cost_every > 0 && iteration % self.cost_every == 0 {
                let cost = error.mapv(|e| e * e).sum()
                    + self.lambda * weights.mapv(|w| w * w).sum();
                history.push(cost);
            }

            let gradient =
                x_aug.t().dot(&error) * 2.0 + &weights * (2.0 * self.lambda);
            weights = &weights - &gradient * self.learning_rate;
        }

        self.weights = Some(weights);
        self.cost_history = history;
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

    /// Costs recorded during the most recent `fit`, empty when recording
    /// was disabled.
    pub fn cost_history(&self) -> &[f64] {
        &self.cost_history
    }
}

impl Default for GradientDescentEstimator {
    fn default() -> Self {
        Self::new()
    }
}

impl Estimator for GradientDescentEstimator {
    fn fit(&mut self, x: &Matrix, y: &Vector) -> Result<(), EstimatorError> {
        GradientDescentEstimator::fit(self, x, y)
    }

    fn predict(&self, x: &Matrix) -> Result<Vector, EstimatorError> {
        GradientDescentEstimator::predict(self, x)
    }

    fn weights(&self) -> Option<&Vector> {
        self.weights.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClosedFormEstimator;
    use ndarray::array;

    #[test]
    fn test_regularized_fit() {
        let x = array![[1.0], [2.0], [3.0], [4.0], [5.0]];
        let y = array![2.0, 4.0, 5.0, 4.0, 5.0];

        let mut model = GradientDescentEstimator::new()
            .lambda(0.1)
            .learning_rate(0.01)
            .iterations(10000);
        model.fit(&x, &y).unwrap();

        // optimum of the penalized cost: (XᵀX + λI)W = Xᵀy
        let weights = model.weights.as_ref().unwrap();
        assert!((weights[0] - 1.9996).abs() < 1e-3);
        assert!((weights[1] - 0.6535).abs() < 1e-3);
    }

    #[test]
    fn test_unregularized_matches_closed_form() {
        let x = array![[1.0], [2.0], [3.0], [4.0], [5.0]];
        let y = array![2.0, 4.0, 5.0, 4.0, 5.0];

        let mut gd = GradientDescentEstimator::new()
            .learning_rate(0.01)
            .iterations(20000);
        gd.fit(&x, &y).unwrap();

        let mut exact = ClosedFormEstimator::new();
        exact.fit(&x, &y).unwrap();

        let gd_weights = gd.weights.as_ref().unwrap();
        let exact_weights = exact.weights.as_ref().unwrap();
        for (a, b) in gd_weights.iter().zip(exact_weights.iter()) {
            assert!((a - b).abs() < 1e-4);
        }
    }

    #[test]
    fn test_lambda_shrinks_coefficients() {
        // centered data, so the intercept stays at zero and the slope
        // follows Σxy / (Σx² + λ)
        let x = array![[-2.0], [-1.0], [0.0], [1.0], [2.0]];
        let y = array![-4.0, -2.0, 0.0, 2.0, 4.0];

        let mut norms = Vec::new();
        for lambda in [0.0, 1.0, 5.0, 10.0] {
            let mut model = GradientDescentEstimator::new()
                .lambda(lambda)
                .learning_rate(0.01)
                .iterations(5000);
            model.fit(&x, &y).unwrap();

            let coeffs = model.coefficients().unwrap();
            norms.push(coeffs.mapv(|c| c * c).sum().sqrt());
        }

        for pair in norms.windows(2) {
            assert!(pair[1] < pair[0]);
        }
    }

    #[test]
    fn test_cost_history_cadence() {
        let x = array![[1.0], [2.0], [3.0], [4.0], [5.0]];
        let y = array![2.0, 4.0, 5.0, 4.0, 5.0];

        let mut model = GradientDescentEstimator::new()
            .learning_rate(0.005)
            .iterations(1000)
            .cost_every(100);
        model.fit(&x, &y).unwrap();

        let history = model.cost_history();
        assert_eq!(history.len(), 10);
        assert!(history[history.len() - 1] < history[0]);
    }

    #[test]
    fn test_cost_recording_disabled_by_default() {
        let x = array![[1.0], [2.0], [3.0]];
        let y = array![2.0, 4.0, 6.0];

        let mut model = GradientDescentEstimator::new();
        model.fit(&x, &y).unwrap();

        assert!(model.cost_history().is_empty());
    }

    #[test]
    fn test_recording_does_not_change_trajectory() {
        let x = array![[1.0], [2.0], [3.0], [4.0]];
        let y = array![3.0, 5.0, 7.0, 9.0];

        let mut silent = GradientDescentEstimator::new()
            .learning_rate(0.01)
            .iterations(2000);
        silent.fit(&x, &y).unwrap();

        let mut recorded = GradientDescentEstimator::new()
            .learning_rate(0.01)
            .iterations(2000)
            .cost_every(10);
        recorded.fit(&x, &y).unwrap();

        let a = silent.weights.as_ref().unwrap();
        let b = recorded.weights.as_ref().unwrap();
        for (wa, wb) in a.iter().zip(b.iter()) {
            assert_eq!(wa, wb);
        }
    }

    #[test]
    fn test_always_runs_all_iterations() {
        // already converged data still produces one cost sample per iteration
        let x = array![[1.0], [2.0]];
        let y = array![1.0, 2.0];

        let mut model = GradientDescentEstimator::new()
            .learning_rate(0.01)
            .iterations(100)
            .cost_every(1);
        model.fit(&x, &y).unwrap();

        assert_eq!(model.cost_history().len(), 100);
    }

    #[test]
    fn test_refit_replaces_history_and_weights() {
        let x = array![[1.0], [2.0], [3.0]];

        let mut model = GradientDescentEstimator::new()
            .learning_rate(0.01)
            .iterations(1000)
            .cost_every(100);
        model.fit(&x, &array![2.0, 4.0, 6.0]).unwrap();
        let first = model.weights.as_ref().unwrap().clone();

        model.fit(&x, &array![5.0, 7.0, 9.0]).unwrap();
        assert_eq!(model.cost_history().len(), 10);
        let second = model.weights.as_ref().unwrap();
        // intercept moves from near 0 to near 3
        assert!((first[0] - second[0]).abs() > 1.0);
    }

    #[test]
    fn test_predict_without_fit() {
        let model = GradientDescentEstimator::new();
        let err = model.predict(&array![[1.0], [2.0]]).unwrap_err();
        assert!(matches!(err, EstimatorError::NotFitted));
    }

    #[test]
    fn test_sample_count_mismatch() {
        let x = array![[1.0], [2.0]];
        let y = array![1.0, 2.0, 3.0];

        let mut model = GradientDescentEstimator::new();
        let err = model.fit(&x, &y).unwrap_err();
        assert!(matches!(err, EstimatorError::InvalidInput { .. }));
    }

    #[test]
    fn test_empty_input() {
        let x = Matrix::zeros((0, 2));
        let y = Vector::zeros(0);

        let mut model = GradientDescentEstimator::new();
        let err = model.fit(&x, &y).unwrap_err();
        assert!(matches!(err, EstimatorError::InvalidInput { .. }));
    }

    #[test]
    fn test_predict_dimension_mismatch() {
        let x = array![[1.0], [2.0], [3.0]];
        let y = array![2.0, 4.0, 6.0];

        let mut model = GradientDescentEstimator::new();
        model.fit(&x, &y).unwrap();

        let err = model.predict(&array![[1.0, 2.0]]).unwrap_err();
        assert!(matches!(err, EstimatorError::DimensionMismatch { .. }));
    }

    #[test]
    fn test_invalid_lambda() {
        std::panic::catch_unwind(|| {
            GradientDescentEstimator::new().lambda(-1.0);
        })
        .expect_err("Should panic on negative lambda");
    }

    #[test]
    fn test_invalid_learning_rate() {
        std::panic::catch_unwind(|| {
            GradientDescentEstimator::new().learning_rate(0.0);
        })
        .expect_err("Should panic on non-positive learning rate");
    }

    #[test]
    fn test_invalid_iterations() {
        std::panic::catch_unwind(|| {
            GradientDescentEstimator::new().iterations(0);
        })
        .expect_err("Should panic on zero iterations");
    }
}
