use crate::{EstimatorError, Vector};

pub fn mean_squared_error(y_true: &Vector, y_pred: &Vector) -> Result<f64, EstimatorError> {
    check_lengths(y_true, y_pred)?;

    let diff = y_true - y_pred;
    Ok(diff.mapv(|v| v * v).mean().unwrap())
}

pub fn mean_absolute_error(y_true: &Vector, y_pred: &Vector) -> Result<f64, EstimatorError> {
    check_lengths(y_true, y_pred)?;

    let diff = y_true - y_pred;
    Ok(diff.mapv(|v| v.abs()).mean().unwrap())
}

pub fn r2_score(y_true: &Vector, y_pred: &Vector) -> Result<f64, EstimatorError> {
    check_lengths(y_true, y_pred)?;

    let y_mean = y_true.mean().unwrap();
    let ss_res = (y_true - y_pred).mapv(|v| v * v).sum();
    let ss_tot = y_true.mapv(|v| (v - y_mean) * (v - y_mean)).sum();

    if ss_tot == 0.0 {
        return Ok(1.0); // perfect prediction of a constant target
    }

    Ok(1.0 - ss_res / ss_tot)
}

fn check_lengths(y_true: &Vector, y_pred: &Vector) -> Result<(), EstimatorError> {
    if y_true.is_empty() {
        return Err(EstimatorError::invalid_input(
            "y_true must have at least one value",
        ));
    }
    if y_true.len() != y_pred.len() {
        return Err(EstimatorError::invalid_input(
            "y_true and y_pred must have the same length",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_mean_squared_error() {
        let y_true = array![1.0, 2.0, 3.0];
        let y_pred = array![1.0, 2.0, 3.0];

        let mse = mean_squared_error(&y_true, &y_pred).unwrap();
        assert!((mse - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_mean_absolute_error() {
        let y_true = array![1.0, 2.0, 3.0];
        let y_pred = array![2.0, 2.0, 2.0];

        let mae = mean_absolute_error(&y_true, &y_pred).unwrap();
        assert!((mae - 2.0 / 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_r2_score() {
        let y_true = array![1.0, 2.0, 3.0, 4.0];
        let y_pred = array![1.0, 2.0, 3.0, 4.0];

        let r2 = r2_score(&y_true, &y_pred).unwrap();
        assert!((r2 - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_r2_score_imperfect() {
        let y_true = array![1.0, 2.0, 3.0, 4.0];
        let y_pred = array![1.1, 1.9, 3.2, 3.8];

        let r2 = r2_score(&y_true, &y_pred).unwrap();
        assert!(r2 > 0.9 && r2 < 1.0);
    }

    #[test]
    fn test_length_mismatch() {
        let y_true = array![1.0, 2.0];
        let y_pred = array![1.0, 2.0, 3.0];

        let err = mean_squared_error(&y_true, &y_pred).unwrap_err();
        assert!(matches!(err, EstimatorError::InvalidInput { .. }));
    }
}
