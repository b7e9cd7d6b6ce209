use crate::{EstimatorError, Matrix, Vector};
use ndarray::s;

/// A feature matrix paired with an index-aligned target vector.
#[derive(Clone, Debug)]
pub struct Dataset {
    pub features: Matrix,
    pub targets: Vector,
}

impl Dataset {
    pub fn new(features: Matrix, targets: Vector) -> Result<Self, EstimatorError> {
        if features.nrows() != targets.len() {
            return Err(EstimatorError::invalid_input(
                "Number of samples in features and targets must match",
            ));
        }

        Ok(Self { features, targets })
    }

    pub fn n_samples(&self) -> usize {
        self.features.nrows()
    }

    pub fn n_features(&self) -> usize {
        self.features.ncols()
    }

    pub fn train_test_split(&self, test_size: f64) -> Result<(Self, Self), EstimatorError> {
        if test_size <= 0.0 || test_size >= 1.0 {
            return Err(EstimatorError::invalid_input(
                "test_size must be between 0 and 1",
            ));
        }

        let n_samples = self.n_samples();
        let n_test = (n_samples as f64 * test_size).round() as usize;
        let n_train = n_samples - n_test;

        let train = Dataset::new(
            self.features.slice(s![..n_train, ..]).to_owned(),
            self.targets.slice(s![..n_train]).to_owned(),
        )?;
        let test = Dataset::new(
            self.features.slice(s![n_train.., ..]).to_owned(),
            self.targets.slice(s![n_train..]).to_owned(),
        )?;

        Ok((train, test))
    }
}
