//! Core data model types for analysis.
//!
//! Input data is a plain slice of [`Numeric`] values. Results are the fixed-shape
//! [`Statistics`] record and the per-run [`AnalysisReport`] map.

use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use num_traits::AsPrimitive;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// A totally-ordered numeric element that can be counted, averaged, and stringified.
///
/// Implemented for every primitive integer type plus `f32` and `f64`.
///
/// Floats are counted through [`OrderedFloat`], so `-0.0` and `0.0` share a key and all
/// NaNs share a key. NaN input is otherwise outside the contract: it sorts after every
/// other value in [`Numeric::cmp_total`] and never exceeds a threshold.
///
/// Integers are never rounded through `f64` where the result must be exact: threshold
/// comparison uses [`Numeric::exceeds`] and the mean sums in a 128-bit accumulator.
pub trait Numeric: AsPrimitive<f64> + PartialOrd + fmt::Display + fmt::Debug {
    /// Hashable stand-in used for frequency counting and duplicate detection.
    type Key: Hash + Eq;

    /// Returns the counting key for this value.
    fn count_key(self) -> Self::Key;

    /// Total order used when sorting for the median.
    fn cmp_total(&self, other: &Self) -> Ordering;

    /// Exact `self > threshold`. A NaN threshold is never exceeded.
    fn exceeds(self, threshold: f64) -> bool;

    /// Arithmetic mean of `values`, or `None` when empty.
    fn mean_of(values: &[Self]) -> Option<f64>;
}

macro_rules! impl_numeric_int {
    ($($t:ty => $acc:ty),* $(,)?) => {
        $(
            impl Numeric for $t {
                type Key = $t;

                fn count_key(self) -> Self::Key {
                    self
                }

                fn cmp_total(&self, other: &Self) -> Ordering {
                    Ord::cmp(self, other)
                }

                fn exceeds(self, threshold: f64) -> bool {
                    if threshold.is_nan() {
                        return false;
                    }
                    // For an integer x, x > t holds exactly when x > floor(t).
                    let floor = threshold.floor();
                    if floor < <$t>::MIN as f64 {
                        return true;
                    }
                    if floor >= <$t>::MAX as f64 {
                        return false;
                    }
                    // floor is integral and in [MIN, MAX), so the cast is exact.
                    self > floor as $t
                }

                fn mean_of(values: &[Self]) -> Option<f64> {
                    if values.is_empty() {
                        return None;
                    }
                    let n = values.len() as f64;
                    let exact = values
                        .iter()
                        .try_fold(0 as $acc, |acc, v| acc.checked_add(*v as $acc));
                    Some(match exact {
                        Some(sum) => sum as f64 / n,
                        None => values.iter().map(|v| *v as f64).sum::<f64>() / n,
                    })
                }
            }
        )*
    };
}

macro_rules! impl_numeric_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl Numeric for $t {
                type Key = OrderedFloat<$t>;

                fn count_key(self) -> Self::Key {
                    OrderedFloat(self)
                }

                fn cmp_total(&self, other: &Self) -> Ordering {
                    <$t>::total_cmp(self, other)
                }

                fn exceeds(self, threshold: f64) -> bool {
                    self as f64 > threshold
                }

                fn mean_of(values: &[Self]) -> Option<f64> {
                    if values.is_empty() {
                        return None;
                    }
                    let sum: f64 = values.iter().map(|v| *v as f64).sum();
                    Some(sum / values.len() as f64)
                }
            }
        )*
    };
}

impl_numeric_int!(
    i8 => i128, i16 => i128, i32 => i128, i64 => i128, i128 => i128, isize => i128,
    u8 => u128, u16 => u128, u32 => u128, u64 => u128, u128 => u128, usize => u128,
);
impl_numeric_float!(f32, f64);

/// Median of a numeric sequence.
///
/// An odd count yields the middle element itself; an even count yields the mean of the
/// two central elements. Serializes as a bare number either way.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Median<T> {
    /// The middle element of an odd-length sequence.
    Exact(T),
    /// Mean of the two central elements of an even-length sequence.
    Midpoint(f64),
}

impl<T: Numeric> Median<T> {
    /// The median as `f64`; rounds integers beyond 2^53.
    pub fn to_f64(self) -> f64 {
        match self {
            Median::Exact(v) => v.as_(),
            Median::Midpoint(m) => m,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Median<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Median::Exact(v) => fmt::Display::fmt(v, f),
            Median::Midpoint(m) => fmt::Display::fmt(m, f),
        }
    }
}

/// Summary statistics of a numeric sequence.
///
/// Either all three fields are present or all three are absent; the absent form is
/// produced for empty input only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Statistics<T> {
    mean: Option<f64>,
    median: Option<Median<T>>,
    mode: Option<T>,
}

impl<T> Statistics<T> {
    /// Statistics of a non-empty sequence.
    pub fn new(mean: f64, median: Median<T>, mode: T) -> Self {
        Self {
            mean: Some(mean),
            median: Some(median),
            mode: Some(mode),
        }
    }

    /// The all-absent result for an empty sequence.
    pub fn empty() -> Self {
        Self {
            mean: None,
            median: None,
            mode: None,
        }
    }

    /// `true` when computed over an empty sequence.
    pub fn is_empty(&self) -> bool {
        self.mean.is_none()
    }

    /// Arithmetic mean.
    pub fn mean(&self) -> Option<f64> {
        self.mean
    }

    /// Middle value (or mean of the two middle values for an even count).
    pub fn median(&self) -> Option<&Median<T>> {
        self.median.as_ref()
    }

    /// Most frequent value; ties resolve to the value seen first.
    pub fn mode(&self) -> Option<&T> {
        self.mode.as_ref()
    }
}

/// An analytical operation selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// `"duplicates"`: values occurring two or more times.
    Duplicates,
    /// `"statistics"`: mean, median, and mode.
    Statistics,
    /// `"filter"`: values above the dataset mean, stringified and upper-cased.
    Filter,
}

impl Operation {
    /// All operations, in their canonical order.
    pub const ALL: [Operation; 3] = [Operation::Duplicates, Operation::Statistics, Operation::Filter];

    /// The name used to request this operation.
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Duplicates => "duplicates",
            Operation::Statistics => "statistics",
            Operation::Filter => "filter",
        }
    }

    /// The key under which this operation's output appears in an [`AnalysisReport`].
    ///
    /// Only `filter` differs from its request name: its output key is `"filtered"`.
    pub fn result_key(self) -> &'static str {
        match self {
            Operation::Filter => "filtered",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "duplicates" => Ok(Operation::Duplicates),
            "statistics" => Ok(Operation::Statistics),
            "filter" => Ok(Operation::Filter),
            other => Err(AnalysisError::UnknownOperation {
                name: other.to_string(),
            }),
        }
    }
}

/// Results of one orchestrated run, keyed by operation.
///
/// Only requested operations are populated. Serializes to a JSON object holding exactly
/// the populated keys (`duplicates`, `statistics`, `filtered`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    duplicates: Option<Vec<T>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    statistics: Option<Statistics<T>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    filtered: Option<Vec<String>>,
    #[serde(skip)]
    order: Vec<Operation>,
}

impl<T> AnalysisReport<T> {
    pub(crate) fn new() -> Self {
        Self {
            duplicates: None,
            statistics: None,
            filtered: None,
            order: Vec::new(),
        }
    }

    pub(crate) fn set_duplicates(&mut self, values: Vec<T>) {
        self.record(Operation::Duplicates);
        self.duplicates = Some(values);
    }

    pub(crate) fn set_statistics(&mut self, stats: Statistics<T>) {
        self.record(Operation::Statistics);
        self.statistics = Some(stats);
    }

    pub(crate) fn set_filtered(&mut self, values: Vec<String>) {
        self.record(Operation::Filter);
        self.filtered = Some(values);
    }

    fn record(&mut self, op: Operation) {
        if !self.order.contains(&op) {
            self.order.push(op);
        }
    }

    /// Duplicated values, if `duplicates` was requested.
    pub fn duplicates(&self) -> Option<&[T]> {
        self.duplicates.as_deref()
    }

    /// Summary statistics, if `statistics` was requested.
    pub fn statistics(&self) -> Option<&Statistics<T>> {
        self.statistics.as_ref()
    }

    /// Transformed values above the threshold, if `filter` was requested.
    pub fn filtered(&self) -> Option<&[String]> {
        self.filtered.as_deref()
    }

    /// Whether `op` produced output in this report.
    pub fn contains(&self, op: Operation) -> bool {
        self.order.contains(&op)
    }

    /// Operations that ran, in request order.
    pub fn operations(&self) -> &[Operation] {
        &self.order
    }

    /// Result keys that are present, in request order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.order.iter().map(|op| op.result_key())
    }

    /// Number of populated keys.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// `true` when no recognized operation was requested.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
