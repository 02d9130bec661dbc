pub struct MseLoss;

impl MseLoss {
    /// Scalar MSE: mean((predicted - expected)²)
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        debug_assert!(!predicted.is_empty(), "MSE of an empty prediction");
        debug_assert_eq!(predicted.len(), expected.len(), "prediction/target length mismatch");
        let n = predicted.len() as f64;
        predicted.iter().zip(expected.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>() / n
    }

    /// Error signal handed to `Network::backward`: target - actual.
    ///
    /// Adding `dx * err * mu` to each weight with this sign descends the
    /// squared error.
    pub fn error_signal(target: f64, actual: f64) -> f64 {
        target - actual
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loss_is_mean_of_squares() {
        assert_eq!(MseLoss::loss(&[1.0, 0.0], &[0.0, 0.0]), 0.5);
        assert_eq!(MseLoss::loss(&[0.25], &[0.25]), 0.0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "empty prediction")]
    fn empty_prediction_panics_in_debug() {
        MseLoss::loss(&[], &[]);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "length mismatch")]
    fn mismatched_lengths_panic_in_debug() {
        MseLoss::loss(&[0.5, 0.5], &[1.0]);
    }

    #[test]
    fn error_signal_sign() {
        assert!(MseLoss::error_signal(1.0, 0.2) > 0.0);
        assert!(MseLoss::error_signal(0.0, 0.2) < 0.0);
    }
}
