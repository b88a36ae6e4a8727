#![deny(missing_docs)]

//! # Operation Formatter
//!
//! Formats a single operation as a request block:
//!
//! ```text
//! # Body
//! #  - name?: String
//! #
//! POST /customers
//! host: {{HTTP_HOST}}
//! Content-Type: application/json
//! ```
//!
//! Only the shape of the body is documented; no payload is emitted.

use crate::oas::models::{HttpMethod, ParamSource};
use crate::oas::shims::{
    ShimComponents, ShimMediaType, ShimOperation, ShimParameter, ShimRequestBody,
};
use crate::render::schema::{SchemaWalker, FALLBACK_LABEL};
use crate::render::RenderOptions;
use std::collections::HashSet;

/// The only media type whose schema is documented.
pub const JSON_MEDIA_TYPE: &str = "application/json";

/// Formats an operation with default options and no `$ref` resolution.
pub fn render_operation(method: HttpMethod, path: &str, operation: &ShimOperation) -> String {
    OperationFormatter::new(&RenderOptions::default(), None).render(method, path, operation, &[])
}

/// Formats operations of one document.
#[derive(Debug, Clone, Copy)]
pub struct OperationFormatter<'a> {
    options: &'a RenderOptions,
    components: Option<&'a ShimComponents>,
    walker: SchemaWalker<'a>,
}

impl<'a> OperationFormatter<'a> {
    /// Creates a formatter; `components` enables `$ref` resolution.
    pub fn new(options: &'a RenderOptions, components: Option<&'a ShimComponents>) -> Self {
        Self {
            options,
            components,
            walker: SchemaWalker::new(components),
        }
    }

    /// Renders the request block for `method path`.
    ///
    /// `shared_parameters` are the Path Item level parameters; operation
    /// parameters with the same name and location take precedence.
    pub fn render(
        &self,
        method: HttpMethod,
        path: &str,
        operation: &'a ShimOperation,
        shared_parameters: &'a [ShimParameter],
    ) -> String {
        let mut output = Vec::new();

        if self.options.parameter_comments {
            let parameters = self.parameter_lines(operation, shared_parameters);
            for (source, title) in [(ParamSource::Query, "Query"), (ParamSource::Path, "Parameters")] {
                let lines: Vec<String> = parameters
                    .iter()
                    .filter(|(s, _)| *s == source)
                    .map(|(_, line)| line.clone())
                    .collect();
                if !lines.is_empty() {
                    output.push(comment_section(title, &lines));
                }
            }
        }

        let json_body = self.json_body(method, path, operation);
        if let Some(schema) = json_body.and_then(|media| media.schema.as_ref()) {
            let lines = self.walker.render(schema);
            if !lines.is_empty() {
                output.push(comment_section("Body", &lines));
            }
        }

        output.push(format!("{} {}", method, path));
        output.push(format!("host: {{{{{}}}}}", self.options.host_variable));
        if json_body.is_some() {
            output.push(format!("Content-Type: {}", JSON_MEDIA_TYPE));
        }

        if operation.responses.is_empty() {
            tracing::debug!(%method, path, "operation declares no responses");
        }

        output.join("\n")
    }

    /// The `application/json` entry of the request body, if any.
    fn json_body(
        &self,
        method: HttpMethod,
        path: &str,
        operation: &'a ShimOperation,
    ) -> Option<&'a ShimMediaType> {
        let body = self.resolve_body(operation.request_body.as_ref()?)?;

        let media = body.content.get(JSON_MEDIA_TYPE).or_else(|| {
            body.content
                .iter()
                .find(|(media_type, _)| is_json_media_type(media_type))
                .map(|(_, media)| media)
        });

        if media.is_none() {
            tracing::debug!(
                %method,
                path,
                media_types = ?body.content.keys().collect::<Vec<_>>(),
                "request body has no application/json content; skipping body section"
            );
        }
        media
    }

    fn resolve_body(&self, body: &'a ShimRequestBody) -> Option<&'a ShimRequestBody> {
        let Some(reference) = body.reference.as_deref() else {
            return Some(body);
        };
        let resolved = self.components.and_then(|c| c.request_body(reference));
        if resolved.is_none() {
            tracing::debug!(reference, "unresolved request body reference");
        }
        resolved
    }

    fn resolve_parameter(&self, parameter: &'a ShimParameter) -> Option<&'a ShimParameter> {
        let Some(reference) = parameter.reference.as_deref() else {
            return Some(parameter);
        };
        let resolved = self.components.and_then(|c| c.parameter(reference));
        if resolved.is_none() {
            tracing::debug!(reference, "unresolved parameter reference");
        }
        resolved
    }

    /// Formatted `name[?]: Type` lines of path and query parameters.
    fn parameter_lines(
        &self,
        operation: &'a ShimOperation,
        shared_parameters: &'a [ShimParameter],
    ) -> Vec<(ParamSource, String)> {
        let mut seen = HashSet::new();
        let mut lines = Vec::new();

        // Operation parameters first so they override path-level ones.
        for parameter in operation.parameters.iter().chain(shared_parameters) {
            let Some(parameter) = self.resolve_parameter(parameter) else {
                continue;
            };
            let Some(source) = ParamSource::from_location(&parameter.location) else {
                continue;
            };
            if !matches!(source, ParamSource::Path | ParamSource::Query) {
                continue;
            }
            if !seen.insert((parameter.name.as_str(), source)) {
                continue;
            }

            let marker = if parameter.required == Some(true) { "" } else { "?" };
            let label = parameter
                .schema
                .as_ref()
                .map(|schema| self.walker.label(schema))
                .unwrap_or_else(|| FALLBACK_LABEL.to_string());
            lines.push((source, format!("{}{}: {}", parameter.name, marker, label)));
        }

        lines
    }
}

/// Matches `application/json` with optional parameters (e.g. `; charset=utf-8`).
fn is_json_media_type(media_type: &str) -> bool {
    media_type
        .split(';')
        .next()
        .is_some_and(|essence| essence.trim().eq_ignore_ascii_case(JSON_MEDIA_TYPE))
}

/// Builds a comment section. Leading indentation of a line is kept before its bullet.
fn comment_section(title: &str, lines: &[String]) -> String {
    let mut section = format!("# {}\n", title);
    for line in lines {
        let text = line.trim_start();
        let indent = &line[..line.len() - text.len()];
        section.push_str(&format!("#  {}- {}\n", indent, text));
    }
    section.push('#');
    section
}
