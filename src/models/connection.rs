//! Connection-related data models.
//!
//! This module defines the parameters needed to open the MySQL connection.

use sqlx::mysql::MySqlConnectOptions;
use std::fmt;

/// Connection parameters resolved from the parameter store for one invocation.
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionParams {
    pub database: String,
    pub host: String,
    pub port: u16,
    pub username: String,
    /// Contains sensitive data - never log
    pub password: String,
}

impl ConnectionParams {
    /// Build the sqlx connect options for these parameters.
    pub fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.username)
            .password(&self.password)
            .database(&self.database)
    }

    /// Display-safe connection target (credentials masked).
    pub fn masked_url(&self) -> String {
        format!(
            "mysql://{}:****@{}:{}/{}",
            self.username, self.host, self.port, self.database
        )
    }
}

impl fmt::Debug for ConnectionParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionParams")
            .field("database", &self.database)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"****")
            .finish()
    }
}
