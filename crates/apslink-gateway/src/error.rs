use thiserror::Error;

/// Error type for gateway operations.
///
/// The gateway neither classifies nor wraps remote failures: connectivity
/// problems, SQL errors, and constraint violations all arrive as the
/// [`sqlx::Error`] the driver raised, passed through unmodified. The only
/// locally produced failures are configuration mistakes caught before a pool
/// exists.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Database connection or query execution failed
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Specialized result type for gateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;
