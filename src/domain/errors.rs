// SPDX-License-Identifier: Apache-2.0

//! Error types for the pipeline utility crate.
//!
//! This module defines the error types that can occur when reading, writing,
//! or transcoding pipeline files. All errors use `thiserror` for proper error
//! handling and conversion.

use thiserror::Error;

/// The main error type for pipeline utility operations.
///
/// This enum represents all possible failures of the file helpers: malformed
/// configuration text, unreadable binary artifacts, invalid base64 payloads,
/// and missing files. It is marked as `#[non_exhaustive]` to allow for future
/// additions without breaking backwards compatibility.
///
/// # Examples
///
/// ```
/// use pipekit::domain::errors::UtilError;
///
/// fn load_model() -> Result<Vec<f64>, UtilError> {
///     Err(UtilError::NotFound {
///         path: "artifacts/model.bin".to_string(),
///     })
/// }
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum UtilError {
    /// Configuration text or JSON is absent, malformed, or structurally wrong.
    #[error("Invalid format in '{path}': {message}")]
    Format {
        /// The file being parsed
        path: String,
        /// The error message
        message: String,
        /// The underlying parsing error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A binary artifact file is missing or unreadable by the codec.
    #[error("Corrupt or unreadable binary artifact '{path}': {message}")]
    Corruption {
        /// The artifact file
        path: String,
        /// The error message
        message: String,
        /// The underlying codec error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A base64 payload is not valid encoded data.
    #[error("Invalid base64 payload: {0}")]
    Encoding(#[from] base64::DecodeError),

    /// A referenced file does not exist where existence is required.
    #[error("File not found: {path}")]
    NotFound {
        /// The missing file
        path: String,
    },

    /// An I/O error occurred while reading or writing a file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl UtilError {
    /// Creates a Format error with path context and an underlying cause.
    pub fn format(
        path: impl Into<String>,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        UtilError::Format {
            path: path.into(),
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a Format error with path context and no underlying cause.
    pub fn format_msg(path: impl Into<String>, message: impl Into<String>) -> Self {
        UtilError::Format {
            path: path.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Creates a Corruption error with path context and an underlying cause.
    pub fn corruption(
        path: impl Into<String>,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        UtilError::Corruption {
            path: path.into(),
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a NotFound error for the given path.
    pub fn not_found(path: impl Into<String>) -> Self {
        UtilError::NotFound { path: path.into() }
    }
}

/// A specialized Result type for pipeline utility operations.
pub type Result<T> = std::result::Result<T, UtilError>;
