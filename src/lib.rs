//! `rust-data-analysis` is a small library of analysis primitives over in-memory numeric
//! slices: duplicate detection, summary statistics (mean, median, mode), and a threshold
//! filter that renders surviving values as upper-cased strings.
//!
//! The primary entrypoint is [`execution::process_large_dataset`], which runs a named
//! subset of the operations and collects their outputs in an [`types::AnalysisReport`].
//! Every operation is also available on its own under [`processing`].
//!
//! ## Operations
//!
//! | name           | result key     | output                                             |
//! |----------------|----------------|----------------------------------------------------|
//! | `"duplicates"` | `"duplicates"` | values occurring two or more times, once each      |
//! | `"statistics"` | `"statistics"` | [`types::Statistics`]: mean, median, mode          |
//! | `"filter"`     | `"filtered"`   | values above the dataset mean, as upper-cased text |
//!
//! Unknown operation names are skipped unless
//! [`execution::AnalysisOptions::strict_operations`] is set.
//!
//! **Element types:** any primitive integer, `f32` or `f64` (see [`types::Numeric`]).
//!
//! **Empty input:** statistics over an empty slice are all absent, duplicates and
//! filter output are empty. Nothing divides by zero.
//!
//! **Median:** an odd count yields the middle element itself ([`types::Median::Exact`]),
//! an even count the mean of the central pair ([`types::Median::Midpoint`]).
//!
//! **Mode ties:** among values sharing the highest count, the one seen first wins.
//!
//! ## Quick example
//!
//! ```rust
//! use rust_data_analysis::execution::process_large_dataset;
//! use rust_data_analysis::types::Median;
//!
//! let data = [1, 1, 2, 2, 2, 3];
//! let report = process_large_dataset(&data, ["duplicates", "statistics", "filter"]);
//!
//! let mut dups = report.duplicates().unwrap().to_vec();
//! dups.sort();
//! assert_eq!(dups, vec![1, 2]);
//!
//! let stats = report.statistics().unwrap();
//! assert_eq!(stats.median(), Some(&Median::Midpoint(2.0)));
//! assert_eq!(stats.mode(), Some(&2));
//!
//! // mean is 1.833..., so 2, 2, 2, 3 pass the filter
//! assert_eq!(report.filtered().unwrap(), ["2", "2", "2", "3"]);
//! ```
//!
//! ## Observing a run
//!
//! ```rust
//! use std::sync::Arc;
//! use rust_data_analysis::execution::{AnalysisEngine, AnalysisOptions, TracingAnalysisObserver};
//! use rust_data_analysis::types::Operation;
//!
//! let engine = AnalysisEngine::new(AnalysisOptions::default())
//!     .with_observer(Arc::new(TracingAnalysisObserver));
//! let metrics = engine.metrics();
//!
//! let report = engine.run(&[3.5, 1.0, 3.5], ["statistics"]).unwrap();
//! assert!(report.contains(Operation::Statistics));
//!
//! let snap = metrics.snapshot();
//! assert_eq!(snap.operations_run, 1);
//! assert!(snap.operation_elapsed(Operation::Statistics).is_some());
//! ```
//!
//! ## Modules
//!
//! - [`processing`]: the stateless operations
//! - [`execution`]: orchestration, options, observers and metrics
//! - [`types`]: element trait and result types
//! - [`error`]: error type for the fallible entrypoints

pub mod error;
pub mod execution;
pub mod processing;
pub mod types;

pub use error::{AnalysisError, AnalysisResult};
pub use execution::process_large_dataset;
pub use processing::{calculate_statistics, filter_and_transform, find_duplicates};
