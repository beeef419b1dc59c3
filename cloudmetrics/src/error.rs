//! Error types for configuring the exporter, talking to the backend, and exporting.

use thiserror::Error;

/// The options given to the exporter can not be used.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_batch_size must be between 1 and {max}, got {actual}")]
    BatchSize { actual: usize, max: usize },

    #[error("metric_prefix must not be empty")]
    EmptyMetricPrefix,
}

/// A call to the monitoring backend failed.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("rpc failed: {0}")]
    Rpc(#[from] tonic::Status),

    #[error("backend unavailable: {0}")]
    Unavailable(String),
}

/// Why an export did not succeed.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("no project id could be resolved; nothing was sent")]
    MissingProjectId,

    #[error("the exporter has been shut down")]
    Shutdown,

    #[error("{failed} of {attempted} batches failed to send; first failure: {first}")]
    Send {
        failed: usize,
        attempted: usize,
        first: TransportError,
    },
}

/// The outcome of an export. All failures resolve to a value, never a panic.
pub type ExportResult = Result<(), ExportError>;
