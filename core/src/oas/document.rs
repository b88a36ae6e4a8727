#![deny(missing_docs)]

//! # OpenAPI Document Decoding
//!
//! Decodes raw JSON or YAML text into the shim object tree. Text that looks like
//! a JSON object goes through `serde_json` first (YAML rejects tab indentation,
//! which is common in JSON files) and falls back to `serde_yaml` for flow-style
//! YAML such as `{paths: {}}`. Everything else goes through `serde_yaml`.

use crate::error::{AppError, AppResult};
use crate::oas::shims::ShimOpenApi;

/// Decodes an OpenAPI document from JSON or YAML text.
///
/// Only decoding failures are reported here; a missing `paths` object is
/// detected by the translator so callers holding an already-built tree get the
/// same behavior.
pub fn parse_openapi_document(content: &str) -> AppResult<ShimOpenApi> {
    let document: ShimOpenApi = if content.trim_start().starts_with('{') {
        match serde_json::from_str(content) {
            Ok(document) => document,
            Err(json_err) => {
                tracing::debug!(error = %json_err, "not JSON, retrying as flow-style YAML");
                serde_yaml::from_str(content).map_err(|yaml_err| {
                    AppError::Decode(format!("{} (as YAML: {})", json_err, yaml_err))
                })?
            }
        }
    } else {
        serde_yaml::from_str(content).map_err(|e| AppError::Decode(e.to_string()))?
    };

    match (&document.openapi, &document.swagger) {
        (Some(version), _) => tracing::debug!(version = %version, "decoded OpenAPI document"),
        (None, Some(version)) => tracing::debug!(version = %version, "decoded Swagger document"),
        (None, None) => tracing::debug!("decoded document without a version field"),
    }

    Ok(document)
}
