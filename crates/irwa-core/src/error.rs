//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error type used throughout the toolkit. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! Every error is fatal to the current command — there is no retry or
//! partial-success path anywhere in the toolkit. Each variant carries
//! enough context (which file, which table, which key) for the operator
//! to fix the input and rerun.

use thiserror::Error;

/// Top-level error type for the RWA policy toolkit.
#[derive(Error, Debug)]
pub enum IrwaError {
    /// Missing or unusable configuration (env var, deployment artifact).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Malformed or placeholder-laden policy, invalid address or policy id.
    #[error("validation error: {0}")]
    Validation(String),

    /// A codec lookup missed: the key is in none of the code tables.
    #[error("unknown {table}: {key:?}")]
    UnknownIdentifier {
        /// The code table that was consulted.
        table: &'static str,
        /// The key that failed to resolve.
        key: String,
    },

    /// JSON serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
