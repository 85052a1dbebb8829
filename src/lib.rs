//! Table Truncator Library
//!
//! This library implements a Lambda function that resolves MySQL connection
//! parameters from SSM Parameter Store and truncates one named table.

pub mod config;
pub mod db;
pub mod error;
pub mod handler;
pub mod models;
pub mod params;

pub use config::Config;
pub use error::TruncateError;
pub use handler::InvocationHandler;
