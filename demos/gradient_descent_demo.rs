use linfit::{Dataset, Estimator, GradientDescentEstimator};
use ndarray::{Array1, Array2};
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::Normal;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Gradient-Descent Linear Regression ===\n");

    // Synthetic data: y = 4 + 2.5*x1 - 1.5*x2 + noise
    let n_samples = 50;
    let x = Array2::random((n_samples, 2), Normal::new(0.0, 1.0)?);
    let noise = Array1::random(n_samples, Normal::new(0.0, 0.5)?);
    let y = 4.0 + 2.5 * &x.column(0) - 1.5 * &x.column(1) + noise;

    let dataset = Dataset::new(x, y)?;
    let (train, test) = dataset.train_test_split(0.2)?;
    println!(
        "Training samples: {}, test samples: {}\n",
        train.n_samples(),
        test.n_samples()
    );

    // Regularization path: watch the coefficients shrink as lambda grows
    println!("{:<10} {:>12} {:>12} {:>12} {:>10}", "Lambda", "Intercept", "Coef 1", "Coef 2", "Test R²");
    println!("{}", "-".repeat(60));

    for lambda in [0.0, 0.1, 1.0, 10.0, 100.0] {
        let mut model = GradientDescentEstimator::new()
            .lambda(lambda)
            .learning_rate(0.005)
            .iterations(20000);
        model.fit(&train.features, &train.targets)?;

        let weights = model.weights.as_ref().unwrap();
        let test_score = model.score(&test.features, &test.targets)?;
        println!(
            "{:<10.1} {:>12.4} {:>12.4} {:>12.4} {:>10.4}",
            lambda, weights[0], weights[1], weights[2], test_score
        );
    }

    // Cost trace for a single unregularized run
    println!("\nCost every 2000 iterations (lambda = 0):");
    let mut model = GradientDescentEstimator::new()
        .learning_rate(0.005)
        .iterations(20000)
        .cost_every(2000);
    model.fit(&train.features, &train.targets)?;

    for (i, cost) in model.cost_history().iter().enumerate() {
        println!("  iteration {:>6}: cost = {:.4}", i * 2000, cost);
    }

    // The fitted model can be used behind the strategy trait
    let model: Box<dyn Estimator> = Box::new(model);
    let predictions = model.predict(&test.features)?;
    println!("\nFirst test predictions: {:.3}, {:.3}", predictions[0], predictions[1]);

    Ok(())
}
