use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use crate::types::Operation;

/// Events emitted by the [`super::AnalysisEngine`] while it runs.
#[derive(Debug, Clone)]
pub enum AnalysisEvent {
    RunStarted { items: usize },
    OperationSkipped { name: String },
    OperationStarted { operation: Operation },
    OperationFinished {
        operation: Operation,
        elapsed: Duration,
        output_len: usize,
    },
    RunFinished {
        elapsed: Duration,
        metrics: AnalysisMetricsSnapshot,
    },
}

/// Observer hook for analysis events.
pub trait AnalysisObserver: Send + Sync {
    fn on_event(&self, event: &AnalysisEvent);
}

/// A simple stderr logger for analysis events.
#[derive(Default)]
pub struct StdErrAnalysisObserver;

impl AnalysisObserver for StdErrAnalysisObserver {
    fn on_event(&self, event: &AnalysisEvent) {
        eprintln!("{event:?}");
    }
}

/// Forwards analysis events to `tracing` at debug level (`RunFinished` at info).
#[derive(Default)]
pub struct TracingAnalysisObserver;

impl AnalysisObserver for TracingAnalysisObserver {
    fn on_event(&self, event: &AnalysisEvent) {
        match event {
            AnalysisEvent::RunStarted { items } => {
                tracing::debug!(items, "analysis run started");
            }
            AnalysisEvent::OperationSkipped { name } => {
                tracing::debug!(operation = %name, "operation skipped");
            }
            AnalysisEvent::OperationStarted { operation } => {
                tracing::debug!(%operation, "operation started");
            }
            AnalysisEvent::OperationFinished {
                operation,
                elapsed,
                output_len,
            } => {
                tracing::debug!(%operation, ?elapsed, output_len, "operation finished");
            }
            AnalysisEvent::RunFinished { elapsed, metrics } => {
                tracing::info!(?elapsed, %metrics, "analysis run finished");
            }
        }
    }
}

const NOT_RECORDED: u64 = u64::MAX;

fn duration_to_ns(d: Duration) -> u64 {
    d.as_nanos().min((NOT_RECORDED - 1) as u128) as u64
}

fn ns_to_duration(ns: u64) -> Option<Duration> {
    (ns != NOT_RECORDED).then(|| Duration::from_nanos(ns))
}

fn slot(op: Operation) -> usize {
    match op {
        Operation::Duplicates => 0,
        Operation::Statistics => 1,
        Operation::Filter => 2,
    }
}

/// Real-time metrics for an analysis run.
///
/// The engine updates these counters as it goes; callers can snapshot them at any time.
/// Counters reset at the start of every run.
pub struct AnalysisMetrics {
    run_id: AtomicU64,
    elapsed_ns: AtomicU64,
    operations_run: AtomicU64,
    operations_skipped: AtomicU64,
    items_processed: AtomicU64,
    operation_ns: [AtomicU64; 3],
}

impl AnalysisMetrics {
    pub fn new() -> Self {
        Self {
            run_id: AtomicU64::new(0),
            elapsed_ns: AtomicU64::new(NOT_RECORDED),
            operations_run: AtomicU64::new(0),
            operations_skipped: AtomicU64::new(0),
            items_processed: AtomicU64::new(0),
            operation_ns: std::array::from_fn(|_| AtomicU64::new(NOT_RECORDED)),
        }
    }

    pub fn begin_run(&self) {
        let _ = self.run_id.fetch_add(1, Ordering::SeqCst);
        self.elapsed_ns.store(NOT_RECORDED, Ordering::SeqCst);
        self.operations_run.store(0, Ordering::SeqCst);
        self.operations_skipped.store(0, Ordering::SeqCst);
        self.items_processed.store(0, Ordering::SeqCst);
        for ns in &self.operation_ns {
            ns.store(NOT_RECORDED, Ordering::SeqCst);
        }
    }

    pub fn end_run(&self, elapsed: Duration) {
        self.elapsed_ns.store(duration_to_ns(elapsed), Ordering::SeqCst);
    }

    pub fn on_operation_skipped(&self) {
        let _ = self.operations_skipped.fetch_add(1, Ordering::SeqCst);
    }

    pub fn on_operation_finished(&self, op: Operation, elapsed: Duration, items: usize) {
        let _ = self.operations_run.fetch_add(1, Ordering::SeqCst);
        let _ = self.items_processed.fetch_add(items as u64, Ordering::SeqCst);
        self.operation_ns[slot(op)].store(duration_to_ns(elapsed), Ordering::SeqCst);
    }

    pub fn snapshot(&self) -> AnalysisMetricsSnapshot {
        AnalysisMetricsSnapshot {
            run_id: self.run_id.load(Ordering::SeqCst),
            elapsed: ns_to_duration(self.elapsed_ns.load(Ordering::SeqCst)),
            operations_run: self.operations_run.load(Ordering::SeqCst),
            operations_skipped: self.operations_skipped.load(Ordering::SeqCst),
            items_processed: self.items_processed.load(Ordering::SeqCst),
            operation_elapsed: std::array::from_fn(|i| {
                ns_to_duration(self.operation_ns[i].load(Ordering::SeqCst))
            }),
        }
    }
}

impl Default for AnalysisMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable snapshot of [`AnalysisMetrics`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisMetricsSnapshot {
    pub run_id: u64,
    /// Wall time of the whole run; `None` while a run is in progress.
    pub elapsed: Option<Duration>,
    pub operations_run: u64,
    pub operations_skipped: u64,
    /// Input length summed over every operation that ran.
    pub items_processed: u64,
    operation_elapsed: [Option<Duration>; 3],
}

impl AnalysisMetricsSnapshot {
    /// Time spent in `op` during the run, if it ran.
    pub fn operation_elapsed(&self, op: Operation) -> Option<Duration> {
        self.operation_elapsed[slot(op)]
    }
}

impl fmt::Display for AnalysisMetricsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "run_id={}, operations={} (skipped {}), items_processed={}, elapsed={:?}",
            self.run_id,
            self.operations_run,
            self.operations_skipped,
            self.items_processed,
            self.elapsed
        )?;
        for op in Operation::ALL {
            if let Some(d) = self.operation_elapsed(op) {
                write!(f, ", {op}={d:?}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::AnalysisMetrics;
    use crate::types::Operation;
    use std::time::Duration;

    #[test]
    fn fresh_metrics_have_nothing_recorded() {
        let snap = AnalysisMetrics::new().snapshot();
        assert_eq!(snap.run_id, 0);
        assert_eq!(snap.elapsed, None);
        assert_eq!(snap.operation_elapsed(Operation::Filter), None);
    }

    #[test]
    fn begin_run_resets_counters() {
        let metrics = AnalysisMetrics::new();
        metrics.begin_run();
        metrics.on_operation_finished(Operation::Statistics, Duration::from_micros(3), 10);
        metrics.on_operation_skipped();
        metrics.end_run(Duration::from_micros(5));

        let snap = metrics.snapshot();
        assert_eq!(snap.run_id, 1);
        assert_eq!(snap.operations_run, 1);
        assert_eq!(snap.operations_skipped, 1);
        assert_eq!(snap.items_processed, 10);
        assert_eq!(snap.operation_elapsed(Operation::Statistics), Some(Duration::from_micros(3)));
        assert_eq!(snap.elapsed, Some(Duration::from_micros(5)));

        metrics.begin_run();
        let snap = metrics.snapshot();
        assert_eq!(snap.run_id, 2);
        assert_eq!(snap.operations_run, 0);
        assert_eq!(snap.items_processed, 0);
        assert_eq!(snap.operation_elapsed(Operation::Statistics), None);
        assert_eq!(snap.elapsed, None);
    }

    #[test]
    fn zero_duration_is_still_recorded() {
        let metrics = AnalysisMetrics::new();
        metrics.begin_run();
        metrics.on_operation_finished(Operation::Duplicates, Duration::ZERO, 0);
        assert_eq!(
            metrics.snapshot().operation_elapsed(Operation::Duplicates),
            Some(Duration::ZERO)
        );
    }

    #[test]
    fn display_lists_timed_operations() {
        let metrics = AnalysisMetrics::new();
        metrics.begin_run();
        metrics.on_operation_finished(Operation::Filter, Duration::from_millis(1), 4);
        let text = metrics.snapshot().to_string();
        assert!(text.contains("run_id=1"));
        assert!(text.contains("filter=1ms"));
        assert!(!text.contains("duplicates="));
    }
}
