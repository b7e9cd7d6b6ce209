//! Least-squares linear models over `ndarray` data.

pub use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

pub mod dataset;
pub mod error;
pub mod linear_model;
pub mod metrics;

pub use dataset::Dataset;
pub use error::EstimatorError;
pub use linear_model::{
    ClosedFormEstimator, Estimator, GradientDescentEstimator, SimpleLinearRegression,
};

pub type Vector = Array1<f64>;
pub type Matrix = Array2<f64>;
