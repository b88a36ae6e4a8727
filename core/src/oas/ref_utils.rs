#![deny(missing_docs)]

//! # Reference Utilities
//!
//! Shared helpers for resolving local `$ref` targets (`#/components/{section}/{name}`).
//!
//! External documents are never fetched; a reference that does not point into
//! the current document's `components` is reported as unresolved.

use crate::oas::shims::{ShimComponents, ShimParameter, ShimRequestBody, ShimSchema};
use percent_encoding::percent_decode_str;

/// Extracts a component name from a `$ref` if it points to `#/components/{section}/{name}`.
///
/// Returns `None` if the reference is not local to the current document.
pub(crate) fn extract_component_name(ref_str: &str, section: &str) -> Option<String> {
    let pointer = ref_str.strip_prefix('#')?.trim_start_matches('/');
    let segments: Vec<&str> = pointer.split('/').collect();

    if segments.len() != 3 {
        return None;
    }
    if segments[0] != "components" || segments[1] != section {
        return None;
    }

    let name = decode_pointer_segment(segments[2]);
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

/// Human-readable name of a reference target: its last decoded pointer segment.
///
/// e.g. `#/components/schemas/Customer` -> `Customer`
pub(crate) fn reference_name(ref_str: &str) -> String {
    let last = ref_str
        .rsplit(['/', '#'])
        .find(|segment| !segment.is_empty())
        .unwrap_or(ref_str);
    decode_pointer_segment(last)
}

/// Decodes a JSON Pointer segment (handles `~1` and `~0`).
pub(crate) fn decode_pointer_segment(segment: &str) -> String {
    let decoded = segment.replace("~1", "/").replace("~0", "~");
    percent_decode_str(&decoded)
        .decode_utf8_lossy()
        .into_owned()
}

impl ShimComponents {
    /// Looks up `#/components/schemas/{name}`.
    pub fn schema(&self, ref_str: &str) -> Option<&ShimSchema> {
        let name = extract_component_name(ref_str, "schemas")?;
        self.schemas.get(&name)
    }

    /// Looks up `#/components/requestBodies/{name}`.
    pub fn request_body(&self, ref_str: &str) -> Option<&ShimRequestBody> {
        let name = extract_component_name(ref_str, "requestBodies")?;
        self.request_bodies.get(&name)
    }

    /// Looks up `#/components/parameters/{name}`.
    pub fn parameter(&self, ref_str: &str) -> Option<&ShimParameter> {
        let name = extract_component_name(ref_str, "parameters")?;
        self.parameters.get(&name)
    }
}
