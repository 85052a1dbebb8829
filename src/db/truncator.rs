//! Table truncation.
//!
//! Each call opens exactly one connection, runs one statement inside a
//! transaction and closes the connection again before returning, whether the
//! statement succeeded or not. Nothing is pooled or reused across calls.

use crate::db::statement::{qualified_table, truncate_statement};
use crate::error::{TruncateError, TruncateResult};
use crate::models::{ConnectionParams, TruncateOutcome};
use sqlx::{Connection, MySqlConnection};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Empties tables in a fixed schema.
#[derive(Debug, Clone)]
pub struct TableTruncator {
    schema: String,
}

impl TableTruncator {
    pub fn new(schema: impl Into<String>) -> Self {
        Self {
            schema: schema.into(),
        }
    }

    pub fn schema(&self) -> &str {
        &self.schema
    }

    /// The exact SQL that `truncate` would send for `table_name`.
    pub fn statement_for(&self, table_name: &str) -> String {
        truncate_statement(&self.schema, table_name)
    }

    /// Truncate `table_name` using a fresh connection built from `params`.
    ///
    /// Fails with `Connection` if the database cannot be reached or rejects
    /// the credentials, and with `Execution` if the statement or the commit
    /// fails. The connection is closed on both paths.
    pub async fn truncate(
        &self,
        table_name: &str,
        params: &ConnectionParams,
    ) -> TruncateResult<TruncateOutcome> {
        let sql = self.statement_for(table_name);
        let start = Instant::now();

        debug!(target_db = %params.masked_url(), "Connecting to database");
        let mut conn = MySqlConnection::connect_with(&params.connect_options())
            .await
            .map_err(TruncateError::from_connect)?;

        let result = execute_and_commit(&mut conn, &sql).await;

        if let Err(e) = conn.close().await {
            warn!(error = %e, "Failed to close database connection cleanly");
        }

        let rows_affected = result?;
        let qualified = qualified_table(&self.schema, table_name);

        info!(
            table = %qualified,
            rows_affected,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Truncation committed"
        );

        Ok(TruncateOutcome {
            qualified_table: qualified,
            rows_affected,
        })
    }
}

async fn execute_and_commit(conn: &mut MySqlConnection, sql: &str) -> TruncateResult<u64> {
    debug!(sql = %sql, "Executing truncate statement");

    let mut tx = conn.begin().await?;
    let result = sqlx::query(sql).execute(&mut *tx).await?;
    tx.commit().await?;

    Ok(result.rows_affected())
}
