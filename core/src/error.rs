//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.

use derive_more::Display;

/// The Global Error Enum.
///
/// Shape irregularities inside a document (missing schema types, non-JSON
/// request bodies, colliding file names) never surface here; they degrade to
/// fallback output. Only structural failures abort a translation.
///
/// File-system failures belong to the caller that touches the disk.
#[derive(Debug, Display)]
pub enum AppError {
    /// The input text could not be decoded into an OpenAPI object tree.
    #[display("Failed to decode OpenAPI document: {_0}")]
    Decode(String),

    /// The document has no `paths` object at all.
    #[display("Invalid OpenAPI document: missing 'paths' object")]
    MissingPaths,
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;
