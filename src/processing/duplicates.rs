//! Duplicate detection over slices.

use std::collections::HashSet;
use std::hash::Hash;

/// Returns the set of values that occur two or more times in `items`.
///
/// Single pass with two hash sets: `seen` holds values observed so far and `duplicates`
/// collects values observed again. Runs in O(n) time and O(n) extra space.
pub fn find_duplicates<T>(items: &[T]) -> HashSet<T>
where
    T: Hash + Eq + Clone,
{
    let mut seen = HashSet::with_capacity(items.len());
    let mut duplicates = HashSet::new();

    for item in items {
        if seen.contains(item) {
            duplicates.insert(item.clone());
        } else {
            seen.insert(item);
        }
    }

    duplicates
}

/// Like [`find_duplicates`], but compares elements through a derived hashable key.
///
/// Use this for element types that are not `Hash` themselves, such as floats. The output
/// holds one representative per duplicated key, ordered by the position of that key's
/// second occurrence.
pub fn find_duplicates_by<T, K, F>(items: &[T], mut key: F) -> Vec<T>
where
    T: Clone,
    K: Hash + Eq,
    F: FnMut(&T) -> K,
{
    let mut seen = HashSet::with_capacity(items.len());
    let mut duplicates = HashSet::new();
    let mut out = Vec::new();

    for item in items {
        let k = key(item);
        if seen.contains(&k) {
            if duplicates.insert(k) {
                out.push(item.clone());
            }
        } else {
            seen.insert(k);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::{find_duplicates, find_duplicates_by};
    use ordered_float::OrderedFloat;
    use std::collections::HashSet;

    #[test]
    fn empty_input_has_no_duplicates() {
        assert!(find_duplicates::<i32>(&[]).is_empty());
    }

    #[test]
    fn each_repeated_value_is_reported_once() {
        let out = find_duplicates(&[1, 2, 2, 3, 3, 3]);
        assert_eq!(out, HashSet::from([2, 3]));
    }

    #[test]
    fn unique_values_are_not_reported() {
        assert!(find_duplicates(&["a", "b", "c"]).is_empty());
    }

    #[test]
    fn works_for_owned_strings() {
        let items = vec!["x".to_string(), "y".to_string(), "x".to_string()];
        assert_eq!(find_duplicates(&items), HashSet::from(["x".to_string()]));
    }

    #[test]
    fn keyed_variant_handles_floats_in_second_occurrence_order() {
        let data = [1.5, 2.0, 3.0, 2.0, 1.5, 1.5, 3.0];
        let out = find_duplicates_by(&data, |v| OrderedFloat(*v));
        assert_eq!(out, vec![2.0, 1.5, 3.0]);
    }

    #[test]
    fn keyed_variant_can_group_by_derived_key() {
        let words = ["apple", "avocado", "banana", "cherry", "blueberry"];
        let out = find_duplicates_by(&words, |w| w.chars().next());
        assert_eq!(out, vec!["avocado", "blueberry"]);
    }
}
