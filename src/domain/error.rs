//! Error types for cvforge.
//!
//! Store operations are total and never produce errors. [`CvforgeError`] only
//! covers the fallible edges of the crate: loading configuration and style
//! presets from disk, decoding the event stream, and terminal I/O.

use thiserror::Error;

/// The main error type for cvforge operations.
///
/// # Examples
///
/// ```
/// use cvforge::CvforgeError;
///
/// fn load_preset() -> Result<(), CvforgeError> {
///     Err(CvforgeError::Style("unknown key `colour`".to_string()))
/// }
/// ```
#[derive(Debug, Error)]
pub enum CvforgeError {
    /// Configuration file could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Style preset file could not be read or parsed.
    #[error("Style preset error: {0}")]
    Style(String),

    /// An event line was well-formed JSON but not a usable event.
    #[error("Event error: {0}")]
    Event(String),

    /// Filesystem or terminal I/O failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// An event line is not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized `Result` type for cvforge operations.
pub type Result<T> = std::result::Result<T, CvforgeError>;
