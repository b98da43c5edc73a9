//! dtcg-convert
//!
//! Drives the full pipeline: parse, resolve group extensions, resolve
//! aliases, emit, over a single input file. A minimal stand-in for a
//! shell's `convert` subcommand; this binary hardcodes the handful of
//! flags needed to exercise the library end to end.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use dtcg_compiler::options::{Format, FormatOptions, ParseOptions};
use dtcg_compiler::version::Version;
use dtcg_compiler::{extends, format, parser, resolve};

#[derive(Parser)]
#[command(name = "dtcg-convert")]
#[command(about = "Parse, resolve, and emit a DTCG token document")]
struct Cli {
    /// Input token file (JSON or YAML).
    input: PathBuf,

    /// Output file; stdout when omitted.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format.
    #[arg(short, long, default_value = "dtcg")]
    format: String,

    /// Force a schema dialect instead of auto-detecting.
    #[arg(long)]
    schema: Option<String>,

    /// CSS-variable / identifier prefix.
    #[arg(long)]
    prefix: Option<String>,

    /// Emit a flat map instead of a nested tree (dtcg/json formats).
    #[arg(long)]
    flatten: bool,

    /// Delimiter used to join path segments in flat output.
    #[arg(long, default_value = "-")]
    delimiter: String,

    /// Draft-only group marker keys (e.g. `_`, `@`, `DEFAULT`), repeatable.
    #[arg(long = "group-marker")]
    group_markers: Vec<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let bytes = std::fs::read(&cli.input)
        .with_context(|| format!("reading {}", cli.input.display()))?;
    let file_path = cli.input.to_string_lossy().into_owned();

    let schema_version = cli
        .schema
        .as_deref()
        .map(|s| Version::parse_label(s).ok_or_else(|| anyhow::anyhow!("unknown schema version {s:?}")))
        .transpose()?;

    let parse_opts = ParseOptions {
        prefix: cli.prefix.clone(),
        group_markers: cli.group_markers,
        schema_version,
        skip_positions: true,
        skip_sort: false,
    };

    let tokens = parser::parse(&bytes, &parse_opts, Some(&file_path))?;
    tracing::debug!(count = tokens.len(), "parsed tokens");

    let mut tokens = extends::resolve_group_extensions(tokens, &bytes)?;

    let default_version = schema_version.unwrap_or(Version::Draft);
    if let Err(e) = resolve::resolve_aliases(&mut tokens, default_version) {
        tracing::warn!(error = %e, "alias resolution failed");
        return Err(e.into());
    }

    let format = parse_format(&cli.format)?;
    let mut format_opts = FormatOptions {
        format,
        flatten: cli.flatten,
        delimiter: cli.delimiter,
        prefix: cli.prefix,
        ..FormatOptions::default()
    };
    if let Some(v) = schema_version {
        format_opts.input_schema = v;
        format_opts.output_schema = v;
    }

    let bytes = format::format_tokens(&tokens, &format_opts)?;

    match cli.output {
        Some(path) => {
            std::fs::write(&path, &bytes).with_context(|| format!("writing {}", path.display()))?;
        }
        None => {
            use std::io::Write;
            std::io::stdout().write_all(&bytes)?;
        }
    }
    Ok(())
}

fn parse_format(s: &str) -> Result<Format> {
    Ok(match s {
        "dtcg" => Format::Dtcg,
        "json" => Format::Json,
        "android" => Format::Android,
        "swift" => Format::Swift,
        "js" => Format::Js,
        "scss" => Format::Scss,
        "css" => Format::Css,
        "snippets" => Format::Snippets,
        other => anyhow::bail!("unknown format {other:?} (expected one of dtcg, json, android, swift, js, scss, css, snippets)"),
    })
}
