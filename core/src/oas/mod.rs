#![deny(missing_docs)]

//! # OpenAPI Parsing Module
//!
//! - **models**: Typed vocabulary (methods, parameter locations).
//! - **shims**: Ordered deserialization layer for the consumed document subset.
//! - **ref_utils**: Local `$ref` resolution against `components`.
//! - **document**: JSON/YAML decoding entry point.

pub mod document;
pub mod models;
pub mod ref_utils;
pub mod shims;

pub use document::parse_openapi_document;
pub use models::{HttpMethod, ParamSource};
pub use shims::{
    ShimComponents, ShimMediaType, ShimOpenApi, ShimOperation, ShimParameter, ShimPathItem,
    ShimPaths, ShimRequestBody, ShimSchema, ShimSchemaType,
};
