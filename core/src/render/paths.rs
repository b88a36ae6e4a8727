#![deny(missing_docs)]

//! # Path Translator
//!
//! Produces one request file per path: the request blocks of every operation
//! declared under the path, in declaration order, separated by a blank line.

use crate::error::{AppError, AppResult};
use crate::oas::shims::ShimOpenApi;
use crate::render::naming::{derive_file_stem, FileNames, FILE_EXTENSION};
use crate::render::operation::OperationFormatter;
use crate::render::{RenderOptions, RenderedRequest};
use indexmap::IndexMap;

/// Renders every path of `document` with the given options.
///
/// Paths without operations produce no file. Fails with
/// [`AppError::MissingPaths`] if the document has no `paths` object; no partial
/// output is returned in that case.
pub fn render_paths(
    document: &ShimOpenApi,
    options: &RenderOptions,
) -> AppResult<Vec<RenderedRequest>> {
    let paths = document.paths.as_ref().ok_or(AppError::MissingPaths)?;
    let formatter = OperationFormatter::new(options, document.components.as_ref());
    let mut file_names = FileNames::default();
    let mut rendered = Vec::with_capacity(paths.items.len());

    for (path, item) in &paths.items {
        if item.operations.is_empty() {
            tracing::debug!(path = %path, "path declares no operations; skipping");
            continue;
        }

        let blocks: Vec<String> = item
            .operations
            .iter()
            .map(|(method, operation)| formatter.render(*method, path, operation, &item.parameters))
            .collect();

        let stem = derive_file_stem(path, options.layout);
        let file_name = file_names.claim(&stem);
        if file_name != format!("{stem}.{FILE_EXTENSION}") {
            tracing::warn!(
                path = %path,
                file_name = %file_name,
                "file name already used by another path; using suffixed name"
            );
        }

        rendered.push(RenderedRequest {
            path: path.clone(),
            file_name,
            content: blocks.join("\n\n"),
        });
    }

    Ok(rendered)
}

/// Renders `document` with default options into a mapping of file name to content.
pub fn render_document(document: &ShimOpenApi) -> AppResult<IndexMap<String, String>> {
    let rendered = render_paths(document, &RenderOptions::default())?;
    Ok(rendered
        .into_iter()
        .map(|request| (request.file_name, request.content))
        .collect())
}
