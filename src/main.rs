//! luadoc-scraper — extract the Lua API from generated HTML documentation.
//!
//! `luadoc-scraper docs/html` prints an overview; `-f json` dumps the whole
//! snapshot for completion generators.

use anyhow::{Context, Result};
use clap::Parser;
use luadoc_scraper::render;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "luadoc-scraper",
    about = "Extract classes, namespaces and enums from the Lua API HTML docs"
)]
struct Cli {
    /// Root directory of the generated documentation
    doc_path: PathBuf,

    /// Output format: summary (default), json
    #[arg(short = 'f', long, default_value = "summary")]
    format: String,

    /// Write to this file instead of stdout
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Log every parsed page
    #[arg(short = 'v', long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short = 'q', long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let renderer = render::create_renderer(&cli.format)?;
    let api = luadoc_scraper::scrape(&cli.doc_path)
        .with_context(|| format!("failed to scrape {}", cli.doc_path.display()))?;
    let output = renderer.render(&api)?;

    match cli.output {
        Some(ref path) => fs::write(path, &output)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => print!("{}", output),
    }
    Ok(())
}

fn init_tracing(quiet: bool, verbose: bool) -> Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("LUADOC_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
