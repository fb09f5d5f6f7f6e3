//! Fill-preserving rescaling
//!
//! When a resource's capacity changes, the user's fill fraction is carried
//! over rather than the absolute amount.

use crate::engine::capacity::round2;

/// New amount for a resource whose capacity changed from `old_max` to
/// `new_max`.
///
/// When the prior fraction is not finite (zero capacity, 0/0), the container
/// is treated as full - the initialization case for freshly created
/// resources. Otherwise the fraction is preserved and the result rounded to
/// 2 decimals; a bounded fraction keeps the result inside
/// `[0, new_max]`.
pub fn rescale_amount(old_max: f64, old_amount: f64, new_max: f64) -> f64 {
    let fraction = old_amount / old_max;
    if fraction.is_finite() {
        round2(new_max * fraction)
    } else {
        new_max
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_fill_fraction_preserved() {
        assert_eq!(rescale_amount(100.0, 50.0, 200.0), 100.0);
        assert_eq!(rescale_amount(200.0, 50.0, 100.0), 25.0);
    }

    #[test]
    fn test_zero_capacity_initializes_full() {
        assert_eq!(rescale_amount(0.0, 0.0, 50.0), 50.0);
        assert_eq!(rescale_amount(0.0, 10.0, 50.0), 50.0);
    }

    #[test]
    fn test_empty_stays_empty() {
        assert_eq!(rescale_amount(100.0, 0.0, 250.0), 0.0);
    }

    #[test]
    fn test_result_rounded() {
        // 1/3 of 100 -> 33.333... -> 33.33
        assert_eq!(rescale_amount(300.0, 100.0, 100.0), 33.33);
    }

    proptest! {
        #[test]
        fn fraction_preserved_within_rounding(old_max in 0.01f64..100_000.0,
                                              frac in 0.0f64..=1.0,
                                              new_max in 0.01f64..100_000.0) {
            let old_amount = old_max * frac;
            let new_amount = rescale_amount(old_max, old_amount, new_max);
            // Rounding to 2 decimals moves the amount by at most 0.005.
            prop_assert!((new_amount - new_max * frac).abs() <= 0.005);
        }

        #[test]
        fn result_bounded_by_capacity(old_max in 0.01f64..100_000.0,
                                      frac in 0.0f64..=1.0,
                                      new_max in 0.01f64..100_000.0) {
            let new_amount = rescale_amount(old_max, old_max * frac, new_max);
            prop_assert!(new_amount >= 0.0);
            prop_assert!(new_amount <= round2(new_max));
        }
    }
}
