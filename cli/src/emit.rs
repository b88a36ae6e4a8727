#![deny(missing_docs)]

//! # Emit Command
//!
//! Reads an OpenAPI document, renders it, and writes one `.http` file per path
//! into the output directory.

use std::fs;
use std::path::{Path, PathBuf};

use oas2http_core::render::DEFAULT_HOST_VARIABLE;
use oas2http_core::{parse_openapi_document, render_paths, FileLayout, RenderOptions};

use crate::error::{CliError, CliResult};

/// Arguments for generating request files.
#[derive(clap::Args, Debug, Clone)]
pub struct EmitArgs {
    /// Path to the OpenAPI document (JSON or YAML).
    #[clap(long, short)]
    pub schema: PathBuf,

    /// Directory the request files are written to. Created if missing.
    #[clap(long, short)]
    pub output: PathBuf,

    /// Remove the existing contents of a non-empty output directory first.
    #[clap(long)]
    pub clean: bool,

    /// Mirror path segments as directories (`/v2/users` -> `v2/users.http`).
    #[clap(long)]
    pub nested: bool,

    /// Document query and path parameters in comment sections.
    #[clap(long)]
    pub parameters: bool,

    /// Variable name used in the `host: {{...}}` header.
    #[clap(long, env = "OAS2HTTP_HOST_VARIABLE", default_value = DEFAULT_HOST_VARIABLE)]
    pub host_variable: String,
}

impl EmitArgs {
    /// Maps the flags onto core render options.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            host_variable: self.host_variable.clone(),
            parameter_comments: self.parameters,
            layout: if self.nested {
                FileLayout::Nested
            } else {
                FileLayout::Flat
            },
        }
    }
}

/// Executes the generation and returns the written file paths.
///
/// The document is fully rendered before the output directory is touched, so a
/// failing translation leaves the directory unchanged.
pub fn execute(args: &EmitArgs) -> CliResult<Vec<PathBuf>> {
    if !args.schema.exists() {
        return Err(CliError::General(format!(
            "OpenAPI file not found: {:?}",
            args.schema
        )));
    }

    // 1. Read & decode
    let content = fs::read_to_string(&args.schema)?;
    let document = parse_openapi_document(&content)?;

    // 2. Render
    let rendered = render_paths(&document, &args.render_options())?;

    // 3. Write
    prepare_output_dir(&args.output, args.clean)?;

    let mut written = Vec::with_capacity(rendered.len());
    for request in rendered {
        let target = args.output.join(&request.file_name);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&target, request.content)?;
        tracing::info!(path = %request.path, file = %target.display(), "wrote request file");
        written.push(target);
    }

    tracing::info!(
        count = written.len(),
        output = %args.output.display(),
        "generated request files"
    );
    Ok(written)
}

/// Ensures `dir` exists and is empty.
fn prepare_output_dir(dir: &Path, clean: bool) -> CliResult<()> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
        return Ok(());
    }
    if !dir.is_dir() {
        return Err(CliError::General(format!(
            "Output path is not a directory: {:?}",
            dir
        )));
    }
    if fs::read_dir(dir)?.next().is_none() {
        return Ok(());
    }
    if !clean {
        return Err(CliError::General(format!(
            "Output directory {:?} is not empty; pass --clean to remove its contents",
            dir
        )));
    }

    tracing::warn!(output = %dir.display(), "removing existing contents of output directory");
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            fs::remove_dir_all(&path)?;
        } else {
            fs::remove_file(&path)?;
        }
    }
    Ok(())
}
