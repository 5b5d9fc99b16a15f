//! Scanner error types.

/// Errors that can occur while scanning a header for enums.
#[derive(Debug, thiserror::Error)]
pub enum HeaderError {
    /// I/O error reading the header file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed enum declaration.
    #[error("syntax error at line {line}: {detail}")]
    Syntax { line: usize, detail: String },
}

/// Result type alias for scanner operations.
pub type Result<T> = std::result::Result<T, HeaderError>;
