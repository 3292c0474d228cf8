use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use sitedoc::{config::Config, pipeline::convert_post};

/// Convert an exported WordPress post to a Quarto markdown document.
#[derive(Parser)]
#[command(name = "convert_post")]
struct Cli {
    /// Exported WordPress HTML page
    input: PathBuf,
    /// Markdown file to write (overwritten if present)
    output: PathBuf,
    /// Author written into the frontmatter
    #[arg(long)]
    author: Option<String>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    if !cli.input.exists() {
        eprintln!("Error: Input file {} does not exist", cli.input.display());
        return ExitCode::FAILURE;
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error converting {}: {:#}", cli.input.display(), err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut config = Config::from_env()?;
    if let Some(author) = &cli.author {
        config = config.with_author(author.as_str())?;
    }

    let today = Local::now().date_naive();
    let converted = convert_post(&cli.input, &cli.output, &config, today)?;

    println!(
        "Successfully converted {} to {}",
        cli.input.display(),
        converted.output.display()
    );
    println!("Title: {}", converted.title);
    println!("Date: {}", converted.date);
    Ok(())
}
