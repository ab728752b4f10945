//! Unified error types for chatsift.
//!
//! Only batch-level and configuration-level problems become a
//! [`ChatsiftError`]. Per-record anomalies (missing sender, missing text,
//! skipped sender) are counted in a
//! [`ProcessingSummary`](crate::core::processor::ProcessingSummary) instead and
//! never abort a run.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatsift operations.
///
/// # Example
///
/// ```rust
/// use chatsift::error::Result;
/// use chatsift::Message;
///
/// fn my_function() -> Result<Vec<Message>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatsiftError>;

/// The error type for all chatsift operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatsiftError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - An export file can't be read
    /// - The output directory can't be created
    /// - Disk is full (when writing output)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Failed to parse an input document.
    ///
    /// Contains the format being parsed, the underlying parse error,
    /// and optionally the file path.
    #[error("Failed to parse {format}{}: {source}", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    Parse {
        /// The format being parsed (e.g., "Telegram JSON", "YAML config")
        format: &'static str,
        /// The underlying parse error
        #[source]
        source: ParseErrorKind,
        /// The file path, if available
        path: Option<PathBuf>,
    },

    /// The document parsed, but doesn't have the expected structure.
    ///
    /// For example a Telegram export without a `messages` array.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The format that was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// The rule configuration is structurally valid YAML but semantically wrong.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of what's wrong
        message: String,
    },

    /// A required input file or directory does not exist.
    #[error("Input not found: {}", path.display())]
    MissingInput {
        /// The path that was expected to exist
        path: PathBuf,
    },

    /// The requested output format is recognized but not implemented.
    ///
    /// Raised before any output file is created.
    #[error("Output format {format} is not supported")]
    UnsupportedFormat {
        /// Display name of the rejected format
        format: &'static str,
    },

    /// JSON serialization/deserialization error without file context.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Kinds of parse errors that can occur.
#[derive(Debug, Error)]
pub enum ParseErrorKind {
    /// JSON parsing error
    #[error("{0}")]
    Json(#[from] serde_json::Error),
    /// YAML parsing error
    #[error("{0}")]
    Yaml(#[from] serde_yaml::Error),
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatsiftError {
    /// Creates a parse error for a Telegram export file.
    pub fn telegram_parse(source: serde_json::Error, path: Option<PathBuf>) -> Self {
        ChatsiftError::Parse {
            format: "Telegram JSON",
            source: ParseErrorKind::Json(source),
            path,
        }
    }

    /// Creates a parse error for the YAML rule configuration.
    pub fn config_parse(source: serde_yaml::Error, path: Option<PathBuf>) -> Self {
        ChatsiftError::Parse {
            format: "YAML config",
            source: ParseErrorKind::Yaml(source),
            path,
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatsiftError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Creates an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        ChatsiftError::InvalidConfig {
            message: message.into(),
        }
    }

    /// Creates a missing input error.
    pub fn missing_input(path: impl Into<PathBuf>) -> Self {
        ChatsiftError::MissingInput { path: path.into() }
    }

    /// Creates an unsupported output format error.
    pub fn unsupported_format(format: &'static str) -> Self {
        ChatsiftError::UnsupportedFormat { format }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatsiftError::Io(_))
    }

    /// Returns `true` if this is a parse error.
    pub fn is_parse(&self) -> bool {
        matches!(self, ChatsiftError::Parse { .. })
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatsiftError::InvalidFormat { .. })
    }

    /// Returns `true` if this is a configuration error (parse or semantic).
    pub fn is_config(&self) -> bool {
        match self {
            ChatsiftError::InvalidConfig { .. } => true,
            ChatsiftError::Parse { source, .. } => matches!(source, ParseErrorKind::Yaml(_)),
            _ => false,
        }
    }

    /// Returns `true` if the requested output format is unsupported.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, ChatsiftError::UnsupportedFormat { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================
