//! Invocation payload and result models.

use serde::{Deserialize, Serialize};

/// Status code reported for a committed truncation.
pub const STATUS_OK: u16 = 200;

/// Invocation input: `{"TableName": "orders"}`.
///
/// Unknown fields are ignored. The table name is taken exactly as supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TruncateRequest {
    #[serde(rename = "TableName")]
    pub table_name: String,
}

/// Invocation output: `{"statusCode": 200}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TruncateResponse {
    pub status_code: u16,
}

impl TruncateResponse {
    pub fn ok() -> Self {
        Self {
            status_code: STATUS_OK,
        }
    }
}

/// What a committed truncation reports back to the handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruncateOutcome {
    /// Fully qualified name as it appeared in the statement
    pub qualified_table: String,
    /// As reported by the server; MySQL reports 0 for TRUNCATE
    pub rows_affected: u64,
}
