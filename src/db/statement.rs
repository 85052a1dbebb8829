//! Truncate statement construction and optional guards.
//!
//! The table name comes straight from the invocation payload and is placed
//! into the SQL text as-is, after the back-quoted schema. Callers are trusted
//! unless a deployment turns on one of the guards below:
//! - an allow-list of table names, checked before anything else happens
//! - a parse check (sqlparser, MySQL dialect) that the generated text is
//!   exactly one TRUNCATE statement

use crate::config::Config;
use crate::error::{TruncateError, TruncateResult};
use sqlparser::ast::Statement;
use sqlparser::dialect::MySqlDialect;
use sqlparser::parser::Parser;

/// Build the statement that empties `schema`.`table`.
///
/// # Examples
///
/// ```
/// use table_truncator::db::truncate_statement;
///
/// assert_eq!(truncate_statement("aws", "orders"), "TRUNCATE TABLE `aws`.orders;");
/// ```
pub fn truncate_statement(schema: &str, table_name: &str) -> String {
    format!("TRUNCATE TABLE `{}`.{};", schema, table_name)
}

/// Qualified table name as it appears in the statement.
pub fn qualified_table(schema: &str, table_name: &str) -> String {
    format!("`{}`.{}", schema, table_name)
}

/// Deployment-selected checks applied to a table name before truncation.
///
/// Both checks are off by default.
#[derive(Debug, Clone, Default)]
pub struct StatementGuard {
    allowed_tables: Vec<String>,
    strict_statement: bool,
}

impl StatementGuard {
    pub fn new(allowed_tables: Vec<String>, strict_statement: bool) -> Self {
        let allowed_tables = allowed_tables
            .into_iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();
        Self {
            allowed_tables,
            strict_statement,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.allowed_tables.clone(), config.strict_statement)
    }

    /// Whether any check is enabled.
    pub fn is_enabled(&self) -> bool {
        !self.allowed_tables.is_empty() || self.strict_statement
    }

    /// Reject table names outside the allow-list. No-op when the list is empty.
    pub fn check_table(&self, table_name: &str) -> TruncateResult<()> {
        if self.allowed_tables.is_empty() || self.allowed_tables.iter().any(|t| t == table_name) {
            return Ok(());
        }
        Err(TruncateError::invalid_input(format!(
            "Table '{}' is not in the allowed table list",
            table_name
        )))
    }

    /// Reject statements that are not a single TRUNCATE. No-op unless strict.
    pub fn check_statement(&self, sql: &str) -> TruncateResult<()> {
        if !self.strict_statement {
            return Ok(());
        }
        check_single_truncate(sql)
    }
}

/// Parse `sql` and require exactly one TRUNCATE statement.
pub fn check_single_truncate(sql: &str) -> TruncateResult<()> {
    let dialect = MySqlDialect {};

    let statements = Parser::parse_sql(&dialect, sql).map_err(|e| {
        TruncateError::invalid_input(format!("Failed to parse truncate statement: {}", e))
    })?;

    match statements.as_slice() {
        [Statement::Truncate { .. }] => Ok(()),
        [] => Err(TruncateError::invalid_input("Empty SQL statement")),
        [_] => Err(TruncateError::invalid_input(
            "Generated SQL is not a TRUNCATE statement",
        )),
        _ => Err(TruncateError::invalid_input(format!(
            "Generated SQL contains {} statements, expected one TRUNCATE",
            statements.len()
        ))),
    }
}
