/// Logistic activation `1 / (1 + e^-x)`.
#[inline]
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Derivative of the sigmoid, expressed in terms of its own output `y`.
///
/// Backward only ever sees post-activation values, so there is no need to
/// keep the pre-activation sums around.
#[inline]
pub fn sigmoid_slope(y: f64) -> f64 {
    y * (1.0 - y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sigmoid_basic_values() {
        assert!((sigmoid(0.0) - 0.5).abs() < 1e-12);
        assert!(sigmoid(10.0) > 0.9999);
        assert!(sigmoid(-10.0) < 0.0001);
        assert!((sigmoid(2.0) + sigmoid(-2.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn slope_matches_numeric_derivative() {
        for &x in &[-3.0, -0.5, 0.0, 0.7, 2.5] {
            let h = 1e-6;
            let numeric = (sigmoid(x + h) - sigmoid(x - h)) / (2.0 * h);
            assert!((sigmoid_slope(sigmoid(x)) - numeric).abs() < 1e-8);
        }
    }

    #[test]
    fn slope_peaks_at_half() {
        assert_eq!(sigmoid_slope(0.5), 0.25);
        assert_eq!(sigmoid_slope(0.0), 0.0);
        assert_eq!(sigmoid_slope(1.0), 0.0);
    }
}
