//! Error types for pastewash.
//!
//! The text transforms themselves never fail. Everything here comes from the
//! environment around them: standard streams, the OS clipboard, and
//! configuration values.

/// Errors that can occur while reading input or writing output.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Standard input or output failed (including non-UTF-8 input).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The system clipboard could not be opened, read or written.
    #[error("Clipboard unavailable: {reason}")]
    ClipboardUnavailable { reason: String },

    /// A configuration value was present but malformed.
    #[error("Configuration error: {reason}")]
    Config { reason: String },
}

/// Result type for pastewash operations.
pub type Result<T> = std::result::Result<T, Error>;
