//! Parameter Store access.
//!
//! Connection parameters are never bundled with the function; they are looked
//! up once per invocation, in a fixed order, before any connection is opened.
//!
//! - `ssm`: AWS Systems Manager Parameter Store, with decryption
//! - `memory`: a fixed in-memory map, for tests and local runs

pub mod memory;
pub mod ssm;

use crate::error::{TruncateError, TruncateResult};
use crate::models::ConnectionParams;
use std::future::Future;
use tracing::debug;

pub use memory::StaticParameterStore;
pub use ssm::SsmParameterStore;

/// Source of configuration entries, looked up by name.
pub trait ParameterStore: Send + Sync {
    /// Fetch the decrypted value of one entry.
    ///
    /// A missing or inaccessible entry is a `TruncateError::Configuration`.
    fn get_parameter(&self, name: &str) -> impl Future<Output = TruncateResult<String>> + Send;
}

/// Names of the five entries that make up the connection parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterNames {
    pub database: String,
    pub host: String,
    pub port: String,
    pub username: String,
    pub password: String,
}

/// Resolve all connection parameters, stopping at the first failure.
pub async fn resolve_connection_params<S: ParameterStore>(
    store: &S,
    names: &ParameterNames,
) -> TruncateResult<ConnectionParams> {
    debug!(parameter = %names.database, "Resolving parameter");
    let database = store.get_parameter(&names.database).await?;
    debug!(parameter = %names.host, "Resolving parameter");
    let host = store.get_parameter(&names.host).await?;
    debug!(parameter = %names.port, "Resolving parameter");
    let port = parse_port(&names.port, &store.get_parameter(&names.port).await?)?;
    debug!(parameter = %names.username, "Resolving parameter");
    let username = store.get_parameter(&names.username).await?;
    debug!(parameter = %names.password, "Resolving parameter");
    let password = store.get_parameter(&names.password).await?;

    Ok(ConnectionParams {
        database,
        host,
        port,
        username,
        password,
    })
}

fn parse_port(parameter: &str, value: &str) -> TruncateResult<u16> {
    value.trim().parse::<u16>().map_err(|e| {
        TruncateError::configuration(parameter, format!("invalid port '{}': {}", value, e))
    })
}
