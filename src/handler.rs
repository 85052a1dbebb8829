//! Invocation handler.
//!
//! One invocation runs strictly in order: read the payload, resolve the
//! connection parameters, truncate, report 200. Any failure is returned as-is
//! and becomes an invocation error in the Lambda runtime.

use crate::config::Config;
use crate::db::{StatementGuard, TableTruncator};
use crate::error::{TruncateError, TruncateResult};
use crate::models::{TruncateRequest, TruncateResponse};
use crate::params::{ParameterNames, ParameterStore, resolve_connection_params};
use serde_json::Value as JsonValue;
use tracing::info;

/// Handles truncation invocations against one parameter store.
#[derive(Debug, Clone)]
pub struct InvocationHandler<S> {
    store: S,
    names: ParameterNames,
    truncator: TableTruncator,
    guard: StatementGuard,
}

impl<S: ParameterStore> InvocationHandler<S> {
    pub fn new(
        store: S,
        names: ParameterNames,
        truncator: TableTruncator,
        guard: StatementGuard,
    ) -> Self {
        Self {
            store,
            names,
            truncator,
            guard,
        }
    }

    /// Create a handler from the deployment configuration.
    pub fn from_config(store: S, config: &Config) -> Self {
        Self::new(
            store,
            config.parameter_names(),
            TableTruncator::new(config.schema.clone()),
            StatementGuard::from_config(config),
        )
    }

    /// Handle a raw invocation payload.
    pub async fn handle(&self, payload: JsonValue) -> TruncateResult<TruncateResponse> {
        let request: TruncateRequest = serde_json::from_value(payload)
            .map_err(|e| TruncateError::invalid_input(format!("Invalid payload: {}", e)))?;
        self.truncate(&request).await
    }

    /// Handle an already-parsed request.
    pub async fn truncate(&self, request: &TruncateRequest) -> TruncateResult<TruncateResponse> {
        let table_name = request.table_name.as_str();
        info!(
            table = %table_name,
            schema = %self.truncator.schema(),
            guarded = self.guard.is_enabled(),
            "Truncate requested"
        );

        self.guard.check_table(table_name)?;

        let params = resolve_connection_params(&self.store, &self.names).await?;
        info!(
            host = %params.host,
            port = params.port,
            database = %params.database,
            "Connection parameters resolved"
        );

        self.guard
            .check_statement(&self.truncator.statement_for(table_name))?;

        self.truncator.truncate(table_name, &params).await?;

        Ok(TruncateResponse::ok())
    }
}
