use linfit::{ClosedFormEstimator, SimpleLinearRegression};
use ndarray::array;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Closed-Form Linear Regression ===\n");

    // Single feature, fit in both the scalar and the matrix form
    let x_scalar = array![1.0, 2.0, 3.0, 4.0, 5.0];
    let y = array![2.0, 4.0, 5.0, 4.0, 5.0];

    let mut scalar = SimpleLinearRegression::new();
    scalar.fit(&x_scalar, &y)?;
    println!(
        "Scalar form:  slope = {:.4}, intercept = {:.4}",
        scalar.slope.unwrap(),
        scalar.intercept.unwrap()
    );

    let x_matrix = array![[1.0], [2.0], [3.0], [4.0], [5.0]];
    let mut matrix = ClosedFormEstimator::new();
    matrix.fit(&x_matrix, &y)?;
    let weights = matrix.weights.as_ref().unwrap();
    println!(
        "Matrix form:  slope = {:.4}, intercept = {:.4}",
        weights[1], weights[0]
    );

    let predictions = matrix.predict(&x_matrix)?;
    println!("\nPredictions on the training inputs:");
    for (xi, pred) in x_scalar.iter().zip(predictions.iter()) {
        println!("  x = {:.1}  ->  {:.2}", xi, pred);
    }

    // Two features, exactly determined system
    println!("\n=== Multivariate Fit ===\n");
    let x = array![[2.0, 2.0], [4.0, 5.0], [7.0, 8.0]];
    let y = array![9.0, 17.0, 26.0];

    let mut model = ClosedFormEstimator::new();
    model.fit(&x, &y)?;

    let weights = model.weights.as_ref().unwrap();
    println!(
        "Weights: intercept = {:.4}, coefficients = [{:.4}, {:.4}]",
        weights[0], weights[1], weights[2]
    );

    let new_inputs = array![[10.0, 11.0], [13.0, 14.0]];
    let predictions = model.predict(&new_inputs)?;
    println!("predict([[10, 11], [13, 14]]) = [{:.1}, {:.1}]", predictions[0], predictions[1]);

    println!("\nTrain R^2: {:.4}", model.score(&x, &y)?);

    Ok(())
}
