/// Clamps a connection parameter into `[0, 1]`.
///
/// Values above 1 become 1. Everything else outside the range, including
/// NaN and both infinities below 1, becomes 0. Raw results of the analytic
/// inversion are always stored through this function.
pub fn normalize(value: f64) -> f64 {
    if (0.0..=1.0).contains(&value) {
        value
    } else if value > 1.0 {
        1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn keeps_values_in_range() {
        assert_eq!(normalize(0.0), 0.0);
        assert_eq!(normalize(0.5), 0.5);
        assert_eq!(normalize(1.0), 1.0);
    }

    #[test]
    fn clamps_out_of_range_and_non_finite() {
        assert_eq!(normalize(1.5), 1.0);
        assert_eq!(normalize(f64::INFINITY), 1.0);
        assert_eq!(normalize(-0.1), 0.0);
        assert_eq!(normalize(f64::NEG_INFINITY), 0.0);
        assert_eq!(normalize(f64::NAN), 0.0);
    }

    proptest! {
        #[test]
        fn result_is_always_in_unit_interval(x in any::<f64>()) {
            let y = normalize(x);
            prop_assert!((0.0..=1.0).contains(&y));
            if (0.0..=1.0).contains(&x) {
                prop_assert_eq!(x, y);
            }
        }
    }
}
