#![deny(missing_docs)]

//! # Request File Rendering
//!
//! - **schema**: Flattens a JSON Schema into a property listing.
//! - **operation**: Formats one `(method, path, operation)` as a request block.
//! - **paths**: Groups operations per path into one file and names the files.
//! - **naming**: File name derivation and collision handling.

pub mod naming;
pub mod operation;
pub mod paths;
pub mod schema;

pub use operation::{render_operation, OperationFormatter};
pub use paths::{render_document, render_paths};
pub use schema::{render_schema, SchemaWalker};

/// Variable name used in the `host:` header when none is configured.
pub const DEFAULT_HOST_VARIABLE: &str = "HTTP_HOST";

/// How file names are derived from path templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileLayout {
    /// One flat directory; the file is named after the last path segment.
    #[default]
    Flat,
    /// Path segments become directories (`/v2/customers` -> `v2/customers.http`).
    Nested,
}

/// Rendering configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Name inside `host: {{...}}`.
    pub host_variable: String,
    /// Emit `# Query` and `# Parameters` comment sections.
    pub parameter_comments: bool,
    /// File naming strategy.
    pub layout: FileLayout,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            host_variable: DEFAULT_HOST_VARIABLE.to_string(),
            parameter_comments: false,
            layout: FileLayout::Flat,
        }
    }
}

/// The rendered request file of one path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRequest {
    /// The path template the file was rendered from (e.g. `/customers/{id}`).
    pub path: String,
    /// Relative file name, including the `.http` extension.
    pub file_name: String,
    /// The request blocks of every operation, separated by a blank line.
    pub content: String,
}
