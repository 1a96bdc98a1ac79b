//! Error types for the printer.

use thiserror::Error;

/// Errors that can abort an emission.
///
/// No error is recovered locally: the AST is a trusted input, and a sink
/// failure leaves the already-emitted text as-is with no rollback.
#[derive(Debug, Error)]
pub enum PrintError {
    /// The output sink refused a write.
    #[error("output sink error: {0}")]
    Io(#[from] std::io::Error),

    /// A literal value could not be serialized to its JSON form.
    #[error("literal serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// A node violated a shape constraint the type system does not capture,
    /// e.g. a getter whose value is not a function expression.
    #[error("invalid node: {0}")]
    InvalidNode(String),
}
