#![deny(missing_docs)]

//! # oas2http CLI
//!
//! Generates `.http` request files (one per API path) from an OpenAPI document.
//!
//! ```text
//! oas2http --schema openapi.yaml --output requests/
//! ```

use clap::Parser;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::CliResult;

mod emit;
mod error;

#[derive(Parser, Debug)]
#[clap(author, version, about = "OpenAPI to .http request files")]
struct Cli {
    #[clap(flatten)]
    emit: emit::EmitArgs,

    /// Increase log verbosity (-v debug, -vv trace). `RUST_LOG` takes precedence.
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    emit::execute(&cli.emit)?;

    Ok(())
}

fn init_tracing(verbose: u8) {
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "info".to_string(),
            1 => "debug".to_string(),
            _ => "trace".to_string(),
        },
    };
    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}
