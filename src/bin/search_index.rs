use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use sitedoc::{config::Config, pipeline::write_search_index};

/// Generate search_index.json for the rendered user manual.
#[derive(Parser)]
#[command(name = "search_index")]
struct Cli {
    /// Directory holding the manual's HTML pages (defaults to SITEDOC_MANUAL_DIR)
    #[arg(short, long)]
    manual_dir: Option<PathBuf>,
    /// File name of the index written into the manual directory
    #[arg(long)]
    index_file: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if let Some(dir) = cli.manual_dir {
        config = config.with_manual_dir(dir)?;
    }
    if let Some(name) = cli.index_file {
        config = config.with_index_file_name(name)?;
    }

    let summary = write_search_index(&config).with_context(|| {
        format!(
            "failed to generate search index for {}",
            config.manual_dir().display()
        )
    })?;

    println!("Generated search index with {} pages.", summary.pages);
    println!("Search index saved to: {}", summary.output.display());
    if !summary.skipped.is_empty() {
        println!("Skipped {} page(s): {}", summary.skipped.len(), summary.skipped.join(", "));
    }
    Ok(())
}
