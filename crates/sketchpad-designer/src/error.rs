//! Error types for the designer crate.
//!
//! Load-time failures of the persistence codec and precondition failures of
//! editing operations. Editing failures never escape the public controller
//! API; they are logged and the operation becomes a no-op.

use std::io;
use thiserror::Error;

/// Designer error type
#[derive(Error, Debug)]
pub enum DesignerError {
    /// A record carried a `type` discriminator with no registered builder
    #[error("Unknown shape type: {shape_type}")]
    UnknownShapeType {
        /// The unrecognized discriminator.
        shape_type: String,
    },

    /// A record was missing a required field or held an invalid value
    #[error("Malformed {shape_type} record: {reason}")]
    MalformedRecord {
        /// The discriminator of the offending record.
        shape_type: String,
        /// What was missing or invalid.
        reason: String,
    },

    /// An editing operation's precondition was not met
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Input was not valid JSON
    #[error("JSON error: {0}")]
    Json(#[source] serde_json::Error),
}

impl DesignerError {
    pub fn malformed(shape_type: impl Into<String>, reason: impl Into<String>) -> Self {
        DesignerError::MalformedRecord {
            shape_type: shape_type.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_operation(msg: impl Into<String>) -> Self {
        DesignerError::InvalidOperation(msg.into())
    }
}

impl From<serde_json::Error> for DesignerError {
    /// Structurally valid JSON with the wrong shape is a malformed record;
    /// anything else is a plain JSON failure.
    fn from(err: serde_json::Error) -> Self {
        match err.classify() {
            serde_json::error::Category::Data => DesignerError::malformed("record", err.to_string()),
            _ => DesignerError::Json(err),
        }
    }
}

/// Result type alias for designer operations.
pub type DesignerResult<T> = Result<T, DesignerError>;
