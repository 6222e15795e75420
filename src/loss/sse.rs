pub struct SseLoss;

impl SseLoss {
    /// Scalar SSE: sum((predicted - expected)²)
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        assert_eq!(
            predicted.len(),
            expected.len(),
            "expected output length must match the output layer size"
        );
        predicted.iter().zip(expected.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum()
    }
}
