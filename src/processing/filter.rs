//! Threshold filtering with string transformation.

use crate::types::Numeric;

/// Keeps values strictly greater than `threshold` and renders each as an upper-cased string.
///
/// Output order matches input order; values at or below the threshold are dropped.
/// The comparison is exact for integers of any width (see [`Numeric::exceeds`]).
/// The string form is the value's `Display` output, upper-cased in a single pass
/// (so `inf` becomes `INF`).
pub fn filter_and_transform<T: Numeric>(data: &[T], threshold: f64) -> Vec<String> {
    data.iter()
        .filter(|v| v.exceeds(threshold))
        .map(|v| v.to_string().to_uppercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::filter_and_transform;

    #[test]
    fn keeps_values_above_threshold_in_order() {
        assert_eq!(filter_and_transform(&[1, 5, 10], 4.0), vec!["5", "10"]);
        assert_eq!(filter_and_transform(&[10, 1, 5], 4.0), vec!["10", "5"]);
    }

    #[test]
    fn threshold_is_exclusive() {
        assert_eq!(filter_and_transform(&[3, 4, 5], 4.0), vec!["5"]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(filter_and_transform::<i64>(&[], 0.0).is_empty());
        assert!(filter_and_transform::<f64>(&[], f64::NEG_INFINITY).is_empty());
    }

    #[test]
    fn float_display_is_upper_cased() {
        let out = filter_and_transform(&[2.5, f64::INFINITY, -1.0], 0.0);
        assert_eq!(out, vec!["2.5", "INF"]);
    }

    #[test]
    fn large_integers_compare_exactly_against_threshold() {
        let big = 1_i64 << 53;
        assert_eq!(
            filter_and_transform(&[big, big + 1], big as f64),
            vec!["9007199254740993"]
        );
        assert_eq!(filter_and_transform(&[u64::MAX], 1.0e19), vec![u64::MAX.to_string()]);
    }

    #[test]
    fn fractional_threshold_against_integers() {
        assert_eq!(filter_and_transform(&[-3, -2, 0, 2, 3], -2.5), vec!["-2", "0", "2", "3"]);
        assert_eq!(filter_and_transform(&[2_u8, 3], 2.5), vec!["3"]);
    }

    #[test]
    fn nothing_passes_an_infinite_threshold() {
        assert!(filter_and_transform(&[1.0, 1e300], f64::INFINITY).is_empty());
    }
}
