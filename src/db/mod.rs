//! Database layer.
//!
//! This module provides the pieces that touch MySQL:
//! - Building the truncate statement and the optional guards around it
//! - Opening the single per-invocation connection and running the statement

pub mod statement;
pub mod truncator;

pub use statement::{StatementGuard, truncate_statement};
pub use truncator::TableTruncator;
