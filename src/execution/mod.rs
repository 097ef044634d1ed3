//! Orchestration of the analytical operations.
//!
//! This module sits "above" [`crate::processing`] and provides:
//!
//! - [`process_large_dataset`]: run a named subset of operations over one dataset
//! - [`AnalysisEngine`]: the configurable runner behind it, with options, observer hooks,
//!   and per-operation timing metrics
//!
//! Operation names are `"duplicates"`, `"statistics"` and `"filter"`. By default unknown
//! names are skipped, so callers can pass feature-flag style lists without validating them.

mod observer;

use std::sync::Arc;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::error::{AnalysisError, AnalysisResult};
use crate::processing::{calculate_statistics, filter_and_transform, find_duplicates_by};
use crate::types::{AnalysisReport, Numeric, Operation};

pub use observer::{
    AnalysisEvent, AnalysisMetrics, AnalysisMetricsSnapshot, AnalysisObserver,
    StdErrAnalysisObserver, TracingAnalysisObserver,
};

/// Where the `filter` operation takes its threshold from.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThresholdSource {
    /// The arithmetic mean of the dataset being analyzed.
    #[default]
    Mean,
    /// A caller-supplied constant.
    Fixed(f64),
}

/// Configuration for the [`AnalysisEngine`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisOptions {
    /// Threshold used by `filter`.
    pub threshold: ThresholdSource,
    /// Reject unknown operation names instead of skipping them.
    pub strict_operations: bool,
}

impl AnalysisOptions {
    /// Parse options from JSON, e.g. `{"threshold": {"fixed": 2.5}, "strict_operations": true}`.
    ///
    /// Missing fields take their default values.
    pub fn from_json_str(json: &str) -> AnalysisResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Mean of `data` used as the `filter` threshold.
///
/// Computed on its own rather than taken from a [`crate::types::Statistics`] result, with
/// the same empty-input guard: an empty dataset is an [`AnalysisError::EmptyDataset`]
/// error. Integers are summed exactly before dividing.
pub fn mean_threshold<T: Numeric>(data: &[T]) -> AnalysisResult<f64> {
    T::mean_of(data).ok_or(AnalysisError::EmptyDataset {
        operation: Operation::Filter.as_str(),
    })
}

/// `output_len` reported for a non-empty `statistics` result: mean, median and mode.
const STATISTICS_FIELDS: usize = 3;

/// Run the requested operations over `data` with default options.
///
/// Unknown operation names are ignored and repeated names run once. Requesting `filter`
/// on an empty dataset yields an empty `filtered` list.
///
/// ```rust
/// use rust_data_analysis::execution::process_large_dataset;
///
/// let report = process_large_dataset(&[1, 2, 2, 3], ["duplicates", "filter", "bogus"]);
/// assert_eq!(report.keys().collect::<Vec<_>>(), vec!["duplicates", "filtered"]);
/// assert_eq!(report.duplicates(), Some(&[2][..]));
/// assert_eq!(report.filtered(), Some(&["3".to_string()][..]));
/// ```
pub fn process_large_dataset<T, I, S>(data: &[T], operations: I) -> AnalysisReport<T>
where
    T: Numeric,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    AnalysisEngine::default().execute(data, Plan::lenient(operations))
}

/// Operations resolved from names, plus the names that were not recognized.
#[derive(Default)]
struct Plan {
    operations: Vec<Operation>,
    skipped: Vec<String>,
}

impl Plan {
    fn lenient<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut plan = Plan::default();
        for name in names {
            match name.as_ref().parse::<Operation>() {
                Ok(op) => plan.push(op),
                Err(_) => plan.skipped.push(name.as_ref().to_string()),
            }
        }
        plan
    }

    fn strict<I, S>(names: I) -> AnalysisResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut plan = Plan::default();
        for name in names {
            plan.push(name.as_ref().parse::<Operation>()?);
        }
        Ok(plan)
    }

    fn push(&mut self, op: Operation) {
        if !self.operations.contains(&op) {
            self.operations.push(op);
        }
    }
}

/// A configurable runner for the analytical operations.
///
/// Holds no per-dataset state; only the metrics handle changes between runs.
pub struct AnalysisEngine {
    opts: AnalysisOptions,
    observer: Option<Arc<dyn AnalysisObserver>>,
    metrics: Arc<AnalysisMetrics>,
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::new(AnalysisOptions::default())
    }
}

impl AnalysisEngine {
    /// Create a new engine with the given options.
    pub fn new(opts: AnalysisOptions) -> Self {
        Self {
            opts,
            observer: None,
            metrics: Arc::new(AnalysisMetrics::new()),
        }
    }

    /// Attach an observer for analysis events (metrics/logging).
    pub fn with_observer(mut self, observer: Arc<dyn AnalysisObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Options this engine was built with.
    pub fn options(&self) -> &AnalysisOptions {
        &self.opts
    }

    /// Get a handle to real-time analysis metrics.
    pub fn metrics(&self) -> Arc<AnalysisMetrics> {
        Arc::clone(&self.metrics)
    }

    /// Run the named operations over `data`.
    ///
    /// Fails only with [`AnalysisError::UnknownOperation`], and only when
    /// [`AnalysisOptions::strict_operations`] is set; nothing runs in that case.
    pub fn run<T, I, S>(&self, data: &[T], operations: I) -> AnalysisResult<AnalysisReport<T>>
    where
        T: Numeric,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let plan = if self.opts.strict_operations {
            Plan::strict(operations)?
        } else {
            Plan::lenient(operations)
        };
        Ok(self.execute(data, plan))
    }

    /// Run already-parsed operations over `data`. Repeated operations run once.
    pub fn run_operations<T: Numeric>(&self, data: &[T], operations: &[Operation]) -> AnalysisReport<T> {
        let mut plan = Plan::default();
        for op in operations {
            plan.push(*op);
        }
        self.execute(data, plan)
    }

    fn execute<T: Numeric>(&self, data: &[T], plan: Plan) -> AnalysisReport<T> {
        let start = Instant::now();
        self.metrics.begin_run();
        self.emit(AnalysisEvent::RunStarted { items: data.len() });

        for name in plan.skipped {
            debug!(operation = %name, "skipping unknown operation");
            self.metrics.on_operation_skipped();
            self.emit(AnalysisEvent::OperationSkipped { name });
        }

        let mut report = AnalysisReport::new();
        for op in plan.operations {
            self.emit(AnalysisEvent::OperationStarted { operation: op });
            let op_start = Instant::now();

            let output_len = match op {
                Operation::Duplicates => {
                    let values = find_duplicates_by(data, |v| v.count_key());
                    let n = values.len();
                    report.set_duplicates(values);
                    n
                }
                Operation::Statistics => {
                    let stats = calculate_statistics(data);
                    let n = if stats.is_empty() { 0 } else { STATISTICS_FIELDS };
                    report.set_statistics(stats);
                    n
                }
                Operation::Filter => {
                    let values = match self.threshold(data) {
                        Some(threshold) => filter_and_transform(data, threshold),
                        None => Vec::new(),
                    };
                    let n = values.len();
                    report.set_filtered(values);
                    n
                }
            };

            let elapsed = op_start.elapsed();
            trace!(operation = %op, ?elapsed, output_len, "operation complete");
            self.metrics.on_operation_finished(op, elapsed, data.len());
            self.emit(AnalysisEvent::OperationFinished {
                operation: op,
                elapsed,
                output_len,
            });
        }

        self.metrics.end_run(start.elapsed());
        self.emit(AnalysisEvent::RunFinished {
            elapsed: start.elapsed(),
            metrics: self.metrics.snapshot(),
        });

        report
    }

    fn threshold<T: Numeric>(&self, data: &[T]) -> Option<f64> {
        match self.opts.threshold {
            ThresholdSource::Fixed(t) => Some(t),
            ThresholdSource::Mean => match mean_threshold(data) {
                Ok(t) => Some(t),
                Err(err) => {
                    warn!(error = %err, "filter has no threshold; returning no values");
                    None
                }
            },
        }
    }

    fn emit(&self, event: AnalysisEvent) {
        if let Some(obs) = &self.observer {
            obs.on_event(&event);
        }
    }
}
