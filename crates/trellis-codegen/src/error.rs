//! Error types for code generation.

use thiserror::Error;

/// Result type alias for codegen operations.
pub type Result<T> = std::result::Result<T, CodegenError>;

/// Errors that can occur during code generation.
///
/// The transformation functions themselves are total: a missing or
/// malformed visual attribute contributes nothing instead of raising.
/// The only failure produced inside this crate is the recoverable
/// formatting error, which the assembler downgrades to a warning.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Code formatting error.
    #[error("Code formatting error: {0}")]
    Formatting(String),
}
