#![deny(missing_docs)]

//! # Naming Utilities
//!
//! Helper functions for deriving request file names from OpenAPI path templates.

use crate::render::FileLayout;
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Stem used when a path has no literal segment (e.g. `/` or `/{id}`).
pub const DEFAULT_FILE_STEM: &str = "index";

/// Extension of every generated request file.
pub const FILE_EXTENSION: &str = "http";

/// Returns true for template segments such as `{id}` or `{id}.json`.
fn is_template_segment(segment: &str) -> bool {
    static TEMPLATE_RE: OnceLock<Regex> = OnceLock::new();
    let template_re = TEMPLATE_RE.get_or_init(|| Regex::new(r"^\{[^}]*\}").expect("Invalid regex"));
    template_re.is_match(segment)
}

/// Replaces characters that are unsafe in file names with `_`.
fn sanitize_segment(segment: &str) -> String {
    segment
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Derives the file stem (no extension) for a path template.
///
/// Template segments are skipped, so `/customers/{id}` -> `customers`.
/// With [`FileLayout::Nested`] every literal segment is kept as a directory:
/// `/v2/customers/{id}/orders` -> `v2/customers/orders`.
pub fn derive_file_stem(path: &str, layout: FileLayout) -> String {
    let segments: Vec<String> = path
        .split('/')
        .filter(|segment| !segment.is_empty() && !is_template_segment(segment))
        .map(sanitize_segment)
        // `.` and `..` would escape the output directory.
        .filter(|segment| !segment.chars().all(|c| c == '.'))
        .collect();

    let stem = match layout {
        FileLayout::Flat => segments.last().cloned(),
        FileLayout::Nested => (!segments.is_empty()).then(|| segments.join("/")),
    };

    stem.unwrap_or_else(|| DEFAULT_FILE_STEM.to_string())
}

/// Hands out unique file names in claim order.
///
/// The first claim of a stem gets `{stem}.http`; later claims get `{stem}_2.http`,
/// `{stem}_3.http`, ... skipping names that are already taken. Names are compared
/// case-insensitively so the output is safe on case-insensitive file systems.
#[derive(Debug, Default)]
pub struct FileNames {
    taken: HashSet<String>,
}

impl FileNames {
    /// Reserves and returns a unique file name for `stem`.
    pub fn claim(&mut self, stem: &str) -> String {
        let mut candidate = format!("{stem}.{FILE_EXTENSION}");
        let mut counter = 1;

        while self.taken.contains(&candidate.to_lowercase()) {
            counter += 1;
            candidate = format!("{stem}_{counter}.{FILE_EXTENSION}");
        }

        self.taken.insert(candidate.to_lowercase());
        candidate
    }
}
