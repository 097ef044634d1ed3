//! Mean, median, and mode over numeric slices.
//!
//! Each function returns `None` for empty input instead of dividing by zero.
//! None of them mutate the caller's data.

use std::collections::HashMap;

use num_traits::AsPrimitive;

use crate::types::{Median, Numeric, Statistics};

/// Arithmetic mean. O(n).
///
/// Integers are summed exactly before the single division into `f64`.
pub fn mean<T: Numeric>(data: &[T]) -> Option<f64> {
    T::mean_of(data)
}

/// Median of `data`. O(n log n).
///
/// Sorts a copy. For an odd count this is the middle element itself; for an even count it
/// is the mean of the two central elements.
pub fn median<T: Numeric>(data: &[T]) -> Option<Median<T>> {
    if data.is_empty() {
        return None;
    }

    let mut sorted = data.to_vec();
    sorted.sort_unstable_by(|a, b| a.cmp_total(b));

    let n = sorted.len();
    let mid = n / 2;
    if n % 2 == 1 {
        Some(Median::Exact(sorted[mid]))
    } else {
        let lo: f64 = sorted[mid - 1].as_();
        let hi: f64 = sorted[mid].as_();
        Some(Median::Midpoint((lo + hi) / 2.0))
    }
}

/// Most frequent value in `data`. O(n).
///
/// Builds an occurrence table in one pass, then walks `data` again in input order,
/// querying only the table. Among values tied at the highest count, the one whose first
/// occurrence comes earliest wins.
pub fn mode<T: Numeric>(data: &[T]) -> Option<T> {
    let mut counts: HashMap<T::Key, usize> = HashMap::with_capacity(data.len());
    for v in data {
        *counts.entry(v.count_key()).or_insert(0) += 1;
    }

    let mut best: Option<(T, usize)> = None;
    for v in data {
        let count = counts.get(&v.count_key()).copied().unwrap_or(0);
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((*v, count)),
        }
    }

    best.map(|(v, _)| v)
}

/// Computes mean, median, and mode together.
///
/// Returns [`Statistics::empty`] for empty input.
pub fn calculate_statistics<T: Numeric>(data: &[T]) -> Statistics<T> {
    match (mean(data), median(data), mode(data)) {
        (Some(mean), Some(median), Some(mode)) => Statistics::new(mean, median, mode),
        _ => Statistics::empty(),
    }
}
