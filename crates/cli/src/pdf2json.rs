//! pdf2json - Convert a PDF into a structured JSON document.
//!
//! Reconstructs pages of paragraphs, tables and charts, each tagged with
//! the section and sub-section headings it falls under, and writes the
//! result as indented JSON. Nothing is written unless the whole document
//! parses.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use estrato_core::backend::StreamTableEngine;
use estrato_core::high_level::{ParseOptions, parse_file_with_engine};
use estrato_core::layout::RoleConfig;
use estrato_core::model::to_json_pretty;
use estrato_core::source::TableEngine;
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Convert a PDF into structured JSON (paragraphs, tables, charts).
#[derive(Parser, Debug)]
#[command(name = "pdf2json")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the input PDF
    input_pdf: PathBuf,

    /// Path to the output JSON file
    output_json: PathBuf,

    /// Dominant glyph size, in points, at which a line becomes a section
    /// heading
    #[arg(long, default_value = "14.0")]
    section_size: f64,

    /// Dominant glyph size, in points, at which a line becomes a
    /// sub-section heading
    #[arg(long, default_value = "12.0")]
    subsection_size: f64,

    /// Disable the stream table engine and rely on the extractor's native
    /// detection only
    #[arg(long)]
    no_stream: bool,
}

fn main() {
    init_tracing();

    if let Err(err) = run() {
        error!(error = %err, "conversion failed");
        for cause in err.chain().skip(1) {
            error!(cause = %cause, "caused by");
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    let options = ParseOptions {
        roles: RoleConfig {
            section_min_size: args.section_size,
            subsection_min_size: args.subsection_size,
        },
        ..ParseOptions::default()
    };

    let engine = StreamTableEngine::new();
    let engine: Option<&dyn TableEngine> = if args.no_stream { None } else { Some(&engine) };

    println!("Parsing '{}'...", args.input_pdf.display());
    let document = parse_file_with_engine(&args.input_pdf, engine, &options)
        .with_context(|| format!("failed to parse '{}'", args.input_pdf.display()))?;

    let json = to_json_pretty(&document).context("failed to serialize document")?;
    fs::write(&args.output_json, json)
        .with_context(|| format!("failed to write '{}'", args.output_json.display()))?;
    println!(
        "Extracted content saved to '{}'",
        args.output_json.display()
    );

    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
