//! Stateless analytical operations over in-memory slices.
//!
//! Every function here is pure: it reads its input, never mutates it, and returns a
//! self-contained result. Calling one twice on the same data yields identical output.
//!
//! - [`find_duplicates()`] / [`find_duplicates_by()`]: values occurring two or more times
//! - [`mean()`], [`median()`], [`mode()`] and [`calculate_statistics()`]: summary statistics
//! - [`filter_and_transform()`]: threshold filter plus upper-cased string rendering
//!
//! ## Example
//!
//! ```rust
//! use rust_data_analysis::processing::{calculate_statistics, filter_and_transform, find_duplicates};
//! use rust_data_analysis::types::Median;
//! use std::collections::HashSet;
//!
//! let data = [1, 1, 2, 2, 2, 3];
//!
//! assert_eq!(find_duplicates(&data), HashSet::from([1, 2]));
//!
//! let stats = calculate_statistics(&data);
//! assert_eq!(stats.median(), Some(&Median::Midpoint(2.0)));
//! assert_eq!(stats.mode(), Some(&2));
//!
//! let threshold = stats.mean().unwrap();
//! assert_eq!(filter_and_transform(&data, threshold), vec!["2", "2", "2", "3"]);
//! ```

pub mod duplicates;
pub mod filter;
pub mod statistics;

pub use duplicates::{find_duplicates, find_duplicates_by};
pub use filter::filter_and_transform;
pub use statistics::{calculate_statistics, mean, median, mode};
