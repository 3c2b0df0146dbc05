//! Error types for the service queue crate
//!
//! This module defines the error types used throughout the crate,
//! covering queue configuration and named-queue registry management.

use std::fmt;

/// Result type for service queue operations
pub type Result<T> = std::result::Result<T, Error>;

/// Service queue errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Rejected queue configuration (zero initial capacity, etc.)
    InvalidCapacity(String),

    /// Invalid queue or registry operation (duplicate name, etc.)
    InvalidQueue(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidCapacity(msg) => write!(f, "Invalid capacity: {}", msg),
            Error::InvalidQueue(msg) => write!(f, "Invalid queue: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
