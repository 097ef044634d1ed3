use thiserror::Error;

/// Convenience result type for analysis operations.
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Error type returned by the fallible parts of the crate.
///
/// The analytical operations themselves are total: empty input yields an absent or empty
/// result. Errors only surface when parsing operation names, loading options, or when a
/// caller asks for a value that cannot be derived from an empty dataset.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The operation needs at least one element (e.g. a mean-derived threshold).
    #[error("empty dataset: '{operation}' needs at least one value")]
    EmptyDataset { operation: &'static str },

    /// An operation name is not one of `duplicates`, `statistics`, `filter`.
    #[error("unknown operation '{name}'")]
    UnknownOperation { name: String },

    /// [`crate::execution::AnalysisOptions`] could not be deserialized.
    #[error("invalid analysis options: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}
