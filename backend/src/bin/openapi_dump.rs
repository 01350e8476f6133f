//! Print the OpenAPI document as JSON.

use std::io::Write;

use clap::Parser;
use color_eyre::eyre::{Context, Result};
use dinos::ApiDoc;
use utoipa::OpenApi;

/// Command-line options for the dump.
#[derive(Debug, Parser)]
#[command(name = "openapi-dump", about = "Print the animal registry OpenAPI document")]
struct Cli {
    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let doc = ApiDoc::openapi();
    let json = if cli.pretty {
        doc.to_pretty_json()
    } else {
        doc.to_json()
    }
    .wrap_err("serialise OpenAPI document")?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}").wrap_err("write OpenAPI document")?;
    Ok(())
}
