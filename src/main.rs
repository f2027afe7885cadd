use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use wordrun::ExportFormat;
use wordrun::config::Config;
use wordrun::document::{load_document, search_document};
use wordrun::export::export_document;

#[derive(Parser)]
#[command(name = "wordrun")]
#[command(about = "Extract paragraph text and inline formatting from .docx files")]
#[command(version)]
struct Cli {
    /// Input .docx file
    #[arg(required_unless_present = "init_config")]
    file: Option<PathBuf>,

    /// Output format (defaults to the configured format)
    #[arg(short, long, value_enum)]
    export: Option<ExportFormat>,

    /// Print paragraphs matching a case-insensitive query instead of exporting
    #[arg(short, long)]
    search: Option<String>,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write the default configuration file and exit
    #[arg(long)]
    init_config: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    if cli.init_config {
        match Config::init_default()? {
            Some(path) => println!("Wrote default configuration to {}", path.display()),
            None => anyhow::bail!("No configuration directory available on this system"),
        }
        return Ok(());
    }

    let Some(file) = cli.file else {
        anyhow::bail!("No input file given");
    };

    let config = Config::load().context("Failed to load configuration")?;
    let document = load_document(&file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let output = match &cli.search {
        Some(query) => search_document(&document, query)
            .iter()
            .map(|result| format!("{}: {}", result.paragraph_index, result.text))
            .collect::<Vec<_>>()
            .join("\n"),
        None => {
            let format = cli.export.as_ref().unwrap_or(&config.export.format);
            export_document(&document, format, &config.export)?
        }
    };

    match cli.output {
        Some(path) => std::fs::write(&path, output)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => println!("{output}"),
    }

    Ok(())
}
