//! Error types for the analysis pipeline.

use thiserror::Error;

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, HobartError>;

/// Errors surfaced by the pipeline and the CLI.
///
/// Computation itself never fails; every variant comes from loading input or
/// writing output.
#[derive(Debug, Error)]
pub enum HobartError {
    /// Fact document loading error
    #[error(transparent)]
    Data(#[from] hobart_data::DataError),

    /// Export error
    #[error(transparent)]
    Export(#[from] hobart_output::ExportError),

    /// Report error
    #[error(transparent)]
    Report(#[from] hobart_output::ReportError),

    /// Metric label not in the registry
    #[error("Unknown metric: {0}")]
    UnknownMetric(String),

    /// Sector benchmark file error
    #[error("Benchmark error: {0}")]
    Benchmark(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl HobartError {
    /// Returns true if the error means the input document is missing.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Data(e) if e.is_not_found())
    }
}
