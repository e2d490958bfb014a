//! Error types shared by the store, service and API layers.

use std::time::Duration;

use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

/// Failures raised by repositories. Always surfaced to clients as a 500.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("store call exceeded deadline of {0:?}")]
    Timeout(Duration),

    /// Raised by non-SQL backends.
    #[error("{0}")]
    Backend(String),
}

/// Failures raised while bringing the schema up to date. Fatal at startup.
#[derive(Debug, Error)]
pub enum MigrationError {
    #[error("failed to acquire a migration connection: {0}")]
    Connect(#[source] sqlx::Error),

    #[error("failed to bootstrap metadata table: {0}")]
    Bootstrap(#[source] sqlx::Error),

    #[error("failed to read schema version: {0}")]
    ReadVersion(#[source] sqlx::Error),

    #[error("failed to apply migration {index}: {source}")]
    Apply {
        index: i32,
        #[source]
        source: sqlx::Error,
    },

    #[error("failed to record schema version {version}: {source}")]
    RecordVersion {
        version: i32,
        #[source]
        source: sqlx::Error,
    },
}
