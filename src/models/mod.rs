//! Data models for the table truncator.
//!
//! This module re-exports all model types used throughout the application.

pub mod connection;
pub mod request;

// Re-export commonly used types
pub use connection::ConnectionParams;
pub use request::{STATUS_OK, TruncateOutcome, TruncateRequest, TruncateResponse};
