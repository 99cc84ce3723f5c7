//! Scale raw values into bar-length units.

use crate::core::config::Scale;

/// `(min, max)` of the finite values, `None` when there are none.
#[must_use]
pub fn extrema(values: &[f64]) -> Option<(f64, f64)> {
    let (mut low, mut high) = (f64::INFINITY, f64::NEG_INFINITY);
    for &v in values {
        low = low.min(v);
        high = high.max(v);
    }
    (low.is_finite() && high.is_finite()).then_some((low, high))
}

/// Max-driven scaling: the largest value gets `width` ticks.
#[inline]
#[must_use]
pub fn normalize(values: &[f64], width: usize) -> Vec<f64> {
    normalize_with(values, width, Scale::Max)
}

/// Map `values` onto `width` ticks; output is the same length and order.
///
/// * All values equal (one element, all zero, ...) → returned unchanged.
/// * [`Scale::Max`] multiplies by `width / max`. A negative max flips the
///   sign of every bar; a zero max over negative values gives all zeros.
/// * [`Scale::Range`] maps `min..=max` onto `0..=width`.
///
/// The result is not clamped.
#[must_use]
pub fn normalize_with(values: &[f64], width: usize, scale: Scale) -> Vec<f64> {
    let Some((min_v, max_v)) = extrema(values) else {
        return values.to_vec();
    };
    if min_v == max_v {
        return values.to_vec();
    }

    #[allow(clippy::cast_precision_loss)]
    let width = width as f64;
    match scale {
        Scale::Max => {
            if max_v == 0.0 {
                return vec![0.0; values.len()];
            }
            let factor = width / max_v;
            values.iter().map(|v| v * factor).collect()
        }
        Scale::Range => {
            let factor = width / (max_v - min_v);
            values.iter().map(|v| (v - min_v) * factor).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scales_by_max() {
        assert_eq!(normalize(&[1.0, 2.0, 3.0, 4.0], 50), [12.5, 25.0, 37.5, 50.0]);
    }

    #[test]
    fn degenerate_series_is_untouched() {
        assert_eq!(normalize(&[5.0, 5.0, 5.0], 50), [5.0, 5.0, 5.0]);
        assert_eq!(normalize(&[0.0, 0.0], 50), [0.0, 0.0]);
        assert_eq!(normalize(&[7.0], 50), [7.0]);
        assert!(normalize(&[], 50).is_empty());
    }

    #[test]
    fn negative_max_flips_bars() {
        // factor = 10 / -1
        assert_eq!(normalize(&[-2.0, -1.0], 10), [20.0, 10.0]);
    }

    #[test]
    fn zero_max_over_negatives() {
        assert_eq!(normalize(&[-3.0, 0.0], 10), [0.0, 0.0]);
    }

    #[test]
    fn range_scale_spans_min_to_max() {
        assert_eq!(
            normalize_with(&[10.0, 15.0, 20.0], 10, Scale::Range),
            [0.0, 5.0, 10.0]
        );
        assert_eq!(
            normalize_with(&[-4.0, 0.0, 4.0], 8, Scale::Range),
            [0.0, 4.0, 8.0]
        );
    }

    #[test]
    fn extrema_of_mixed_values() {
        assert_eq!(extrema(&[3.0, -1.0, 8.0]), Some((-1.0, 8.0)));
        assert_eq!(extrema(&[]), None);
    }
}
