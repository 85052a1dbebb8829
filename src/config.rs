//! Configuration handling for the table truncator.
//!
//! The function takes no command line in Lambda, so every field is read from
//! its environment variable when the runtime starts the binary.

use crate::params::ParameterNames;
use clap::Parser;

pub const DEFAULT_SCHEMA: &str = "aws";
pub const DEFAULT_LOG_LEVEL: &str = "info";

// Parameter Store entry names
pub const DEFAULT_DATABASE_PARAM: &str = "mysql-staging-db-name";
pub const DEFAULT_HOST_PARAM: &str = "mysql-endpoint";
pub const DEFAULT_PORT_PARAM: &str = "mysql-port";
pub const DEFAULT_USERNAME_PARAM: &str = "mysql-username";
pub const DEFAULT_PASSWORD_PARAM: &str = "mysql-password";

/// Configuration for the table truncator.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "table-truncator",
    about = "Lambda function that truncates a MySQL table",
    version
)]
pub struct Config {
    /// Schema that holds the tables to truncate
    #[arg(long, default_value = DEFAULT_SCHEMA, env = "TRUNCATE_SCHEMA")]
    pub schema: String,

    /// Parameter Store entry holding the database name
    #[arg(long, default_value = DEFAULT_DATABASE_PARAM, env = "TRUNCATE_PARAM_DATABASE")]
    pub db_name_param: String,

    /// Parameter Store entry holding the database host
    #[arg(long, default_value = DEFAULT_HOST_PARAM, env = "TRUNCATE_PARAM_HOST")]
    pub host_param: String,

    /// Parameter Store entry holding the database port
    #[arg(long, default_value = DEFAULT_PORT_PARAM, env = "TRUNCATE_PARAM_PORT")]
    pub port_param: String,

    /// Parameter Store entry holding the database username
    #[arg(long, default_value = DEFAULT_USERNAME_PARAM, env = "TRUNCATE_PARAM_USERNAME")]
    pub username_param: String,

    /// Parameter Store entry holding the database password
    #[arg(long, default_value = DEFAULT_PASSWORD_PARAM, env = "TRUNCATE_PARAM_PASSWORD")]
    pub password_param: String,

    /// Tables that may be truncated. Empty means any table name is accepted.
    #[arg(
        long = "allowed-table",
        value_name = "TABLE",
        env = "TRUNCATE_ALLOWED_TABLES",
        value_delimiter = ','
    )]
    pub allowed_tables: Vec<String>,

    /// Parse the generated SQL and refuse anything but a single TRUNCATE
    #[arg(long, env = "TRUNCATE_STRICT_STATEMENT")]
    pub strict_statement: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = DEFAULT_LOG_LEVEL, env = "TRUNCATE_LOG_LEVEL")]
    pub log_level: String,

    /// Enable JSON logging format
    #[arg(long, env = "TRUNCATE_JSON_LOGS")]
    pub json_logs: bool,
}

impl Config {
    /// Parse configuration from the environment (and arguments, if any).
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Create a default configuration (useful for testing).
    pub fn default_config() -> Self {
        Self {
            schema: DEFAULT_SCHEMA.to_string(),
            db_name_param: DEFAULT_DATABASE_PARAM.to_string(),
            host_param: DEFAULT_HOST_PARAM.to_string(),
            port_param: DEFAULT_PORT_PARAM.to_string(),
            username_param: DEFAULT_USERNAME_PARAM.to_string(),
            password_param: DEFAULT_PASSWORD_PARAM.to_string(),
            allowed_tables: Vec::new(),
            strict_statement: false,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            json_logs: false,
        }
    }

    /// The five Parameter Store entries to resolve per invocation.
    pub fn parameter_names(&self) -> ParameterNames {
        ParameterNames {
            database: self.db_name_param.clone(),
            host: self.host_param.clone(),
            port: self.port_param.clone(),
            username: self.username_param.clone(),
            password: self.password_param.clone(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}
