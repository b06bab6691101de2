//! Rule Schema CLI
//!
//! Command-line interface for annotating field documents with JSON Schema
//! constraints.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use rule_schema::{annotate_document, load_document, TranslateOptions};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rule-schema")]
#[command(about = "Translate field validation rules into JSON Schema keywords")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Annotate every field in a document and print the resulting fragments
    Translate {
        /// Field document (JSON)
        document: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,

        /// Skip rules that cannot be expressed for their field instead of failing
        #[arg(long)]
        skip_unsupported: bool,
    },
}

fn main() -> ExitCode {
    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Translate {
            document,
            output,
            pretty,
            skip_unsupported,
        } => run_translate(&document, output, pretty, skip_unsupported),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(code) => ExitCode::from(code),
    }
}

fn run_translate(
    document: &Path,
    output: Option<PathBuf>,
    pretty: bool,
    skip_unsupported: bool,
) -> Result<(), u8> {
    let doc = load_document(document).map_err(|e| {
        eprintln!("Error: {}", e);
        e.exit_code() as u8
    })?;

    let options = TranslateOptions::new().skip_unsupported(skip_unsupported);
    let annotated = annotate_document(&doc, &options).map_err(|e| {
        eprintln!("Error: {}", e);
        e.exit_code() as u8
    })?;

    let fragments = serde_json::Value::Object(annotated.fragments);
    let json_output = if pretty {
        serde_json::to_string_pretty(&fragments)
    } else {
        serde_json::to_string(&fragments)
    }
    .map_err(|e| {
        eprintln!("Error serializing output: {}", e);
        2u8
    })?;

    match output {
        Some(path) => {
            std::fs::write(&path, &json_output).map_err(|e| {
                eprintln!("Error writing to {}: {}", path.display(), e);
                3u8
            })?;
        }
        None => {
            println!("{}", json_output);
        }
    }

    Ok(())
}
