#![deny(missing_docs)]

//! # oas2http Core
//!
//! Translates an OpenAPI document into `.http` request files, one per path.
//!
//! ```
//! use oas2http_core::{parse_openapi_document, render_document};
//!
//! let doc = parse_openapi_document(r#"{"paths":{"/ping":{"get":{"responses":{}}}}}"#).unwrap();
//! let files = render_document(&doc).unwrap();
//! assert_eq!(files["ping.http"], "GET /ping\nhost: {{HTTP_HOST}}");
//! ```

/// Shared error types.
pub mod error;

/// OpenAPI (OAS) decoding and shim types.
pub mod oas;

/// Request file rendering.
pub mod render;

pub use error::{AppError, AppResult};
pub use oas::{parse_openapi_document, HttpMethod, ShimOpenApi, ShimOperation, ShimSchema};
pub use render::{
    render_document, render_operation, render_paths, render_schema, FileLayout, OperationFormatter,
    RenderOptions, RenderedRequest, SchemaWalker,
};
