//! Error types for form rendering.
//!
//! This module defines the centralized error type [`DeformError`] and a type alias
//! [`Result`] used throughout the crate. Errors are implemented with `thiserror`.

use thiserror::Error;

/// The main error type for parsing and rendering form payloads.
///
/// Every variant is fatal to the render call that raised it. No builder retries
/// or skips a failing widget.
///
/// # Examples
///
/// ```
/// use deform::DeformError;
///
/// let err = DeformError::UnsupportedWidgetKind {
///     template_name: "django/forms/widgets/email.html".to_string(),
/// };
/// assert!(err.to_string().contains("email.html"));
/// ```
#[derive(Debug, Error)]
pub enum DeformError {
    /// The widget's `template_name` has no builder.
    ///
    /// Raised for unknown templates and for the known templates that have no
    /// builder yet (email, file, datetime, multiwidget, ...).
    #[error("Unsupported widget kind: {template_name}")]
    UnsupportedWidgetKind { template_name: String },

    /// The payload is missing an expected key or a value has the wrong shape.
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The page carries no JSON payload under the requested script id.
    #[error("Page error: {0}")]
    Page(String),
}

impl From<serde_json::Error> for DeformError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedInput(err.to_string())
    }
}

/// A specialized `Result` type for deform operations.
pub type Result<T> = std::result::Result<T, DeformError>;
