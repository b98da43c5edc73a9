//! dtcg-inspect
//!
//! Reports what the pipeline sees in a token file before any format is
//! chosen: detected schema dialect, the parsed token list, and any
//! consistency warnings, useful for debugging a document that isn't
//! producing the output you expect.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use dtcg_compiler::options::ParseOptions;
use dtcg_compiler::{detector, parser, validate};

#[derive(Parser)]
#[command(name = "dtcg-inspect")]
#[command(about = "Show detected schema, parsed tokens, and consistency warnings for a file")]
struct Cli {
    /// Input token file (JSON or YAML).
    input: PathBuf,

    /// Draft-only group marker keys (e.g. `_`, `@`, `DEFAULT`), repeatable.
    #[arg(long = "group-marker")]
    group_markers: Vec<String>,

    /// Print only the detected schema version.
    #[arg(long)]
    schema_only: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let bytes = std::fs::read(&cli.input)
        .with_context(|| format!("reading {}", cli.input.display()))?;
    let file_path = cli.input.to_string_lossy().into_owned();

    let doc = parser::parse_to_document(&bytes, Some(&file_path))?;
    let version = detector::detect(&doc, None);

    if cli.schema_only {
        println!("{version}");
        return Ok(());
    }

    println!("schema: {version}");

    let parse_opts = ParseOptions {
        group_markers: cli.group_markers.clone(),
        schema_version: Some(version),
        skip_positions: false,
        skip_sort: false,
        ..ParseOptions::default()
    };
    let tokens = parser::parse(&bytes, &parse_opts, Some(&file_path))?;

    println!("tokens: {}", tokens.len());
    for t in &tokens {
        let value = t.value.as_deref().unwrap_or("<structured>");
        println!("  {} ({}) = {value}  [{}:{}]", t.name, t.token_type, t.line, t.column);
    }

    let warnings = validate::validate(&doc, version, &cli.group_markers);
    if !warnings.is_empty() {
        println!("warnings:");
        for w in &warnings {
            tracing::warn!(path = %w.path, message = %w.message, "consistency warning");
            println!("  {} ({}): {} -- {}", w.path, version, w.message, w.suggestion);
        }
    }

    Ok(())
}
