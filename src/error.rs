//! Error types for the table truncator.
//!
//! Every failure surfaces to the Lambda runtime as an invocation error. The
//! variants only tell an operator which stage failed: resolving parameters,
//! reaching the database, or running the statement.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TruncateError {
    #[error("Configuration error: parameter '{parameter}': {message}")]
    Configuration { parameter: String, message: String },

    #[error("Connection failed: {message}")]
    Connection { message: String },

    #[error("Execution failed: {message}")]
    Execution {
        message: String,
        /// e.g., "42S02" for unknown table
        sql_state: Option<String>,
    },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },
}

impl TruncateError {
    /// Create a configuration error for a parameter-store entry.
    pub fn configuration(parameter: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Configuration {
            parameter: parameter.into(),
            message: message.into(),
        }
    }

    /// Create a connection error.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create an execution error with optional SQL state.
    pub fn execution(message: impl Into<String>, sql_state: Option<String>) -> Self {
        Self::Execution {
            message: message.into(),
            sql_state,
        }
    }

    /// Create an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Errors raised while establishing the connection are always connection
    /// errors, even when the server reports them (e.g. access denied).
    pub fn from_connect(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => Self::connection(db_err.message()),
            other => Self::connection(other.to_string()),
        }
    }

    /// SQL state of the failed statement, if the server reported one.
    pub fn sql_state(&self) -> Option<&str> {
        match self {
            Self::Execution { sql_state, .. } => sql_state.as_deref(),
            _ => None,
        }
    }

    /// Whether a caller could reasonably try again. Nothing here retries;
    /// this only classifies the failure for logs.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Connection { .. })
    }
}

/// Convert sqlx errors raised after the connection is open.
impl From<sqlx::Error> for TruncateError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => {
                let code = db_err.code().map(|c| c.to_string());
                TruncateError::execution(db_err.message(), code)
            }
            sqlx::Error::Configuration(msg) => TruncateError::connection(msg.to_string()),
            sqlx::Error::Io(io_err) => TruncateError::connection(format!("I/O error: {}", io_err)),
            sqlx::Error::Tls(tls_err) => {
                TruncateError::connection(format!("TLS error: {}", tls_err))
            }
            sqlx::Error::Protocol(msg) => {
                TruncateError::connection(format!("Protocol error: {}", msg))
            }
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
                TruncateError::connection(err.to_string())
            }
            sqlx::Error::WorkerCrashed => TruncateError::connection("Database worker crashed"),
            _ => TruncateError::execution(format!("Unknown database error: {}", err), None),
        }
    }
}

/// Result type alias for truncation operations.
pub type TruncateResult<T> = Result<T, TruncateError>;
