//! Print the OpenAPI document as JSON.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use users_api::ApiDoc;
use utoipa::OpenApi;

/// Command-line flags for the dump tool.
#[derive(Debug, Parser)]
#[command(name = "openapi-dump", about = "Print the users API OpenAPI document")]
struct Cli {
    /// Emit indented JSON.
    #[arg(long)]
    pretty: bool,
}

fn render(pretty: bool) -> Result<String, serde_json::Error> {
    let doc = ApiDoc::openapi();
    if pretty {
        doc.to_pretty_json()
    } else {
        doc.to_json()
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let rendered = match render(cli.pretty) {
        Ok(json) => json,
        Err(err) => {
            eprintln!("failed to serialise OpenAPI document: {err}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(err) = writeln!(io::stdout().lock(), "{rendered}") {
        eprintln!("failed to write OpenAPI document: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
