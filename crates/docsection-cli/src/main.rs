//! docsection CLI - Main entry point

use anyhow::{Context, Result};
use clap::Parser;
use docsection::{SectionsConfig, SectionsTransform, TreeTransform, override_meta};
use docsection_tree::{Document, MetaValue, outline};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "docsection")]
#[command(version)]
#[command(about = "Wrap headings and the content that follows them in nested sections", long_about = None)]
struct Cli {
    /// Input JSON document (defaults to stdin)
    input: Option<PathBuf>,

    /// Write output to FILE (defaults to stdout)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// YAML file with section options
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Metadata value (KEY:VALUE), overrides the document's front matter
    #[arg(short = 'M', long = "metadata", value_parser = parse_metadata)]
    metadata: Vec<(String, String)>,

    /// Print an indented outline instead of JSON
    #[arg(long)]
    outline: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "docsection=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => SectionsConfig::default(),
    };

    let mut doc = read_document(cli.input.as_deref())?;
    for (key, value) in &cli.metadata {
        override_meta(&mut doc.meta, key, MetaValue::String(value.clone()));
    }

    let transform = SectionsTransform::new(config);
    transform
        .transform(&mut doc)
        .with_context(|| format!("{} transform failed", transform.name()))?;

    let rendered = if cli.outline {
        outline(&doc.root)
    } else {
        serde_json::to_string_pretty(&doc).context("Failed to serialize document")?
    };
    write_output(cli.output.as_deref(), &rendered)
}

fn load_config(path: &Path) -> Result<SectionsConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    if text.trim().is_empty() {
        return Ok(SectionsConfig::default());
    }
    serde_yaml::from_str(&text).with_context(|| format!("Invalid config {}", path.display()))
}

fn read_document(input: Option<&Path>) -> Result<Document> {
    let (text, origin) = match input {
        Some(path) => (
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?,
            path.display().to_string(),
        ),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            (text, "<stdin>".to_string())
        }
    };
    tracing::debug!(input = %origin, bytes = text.len(), "Read document");
    serde_json::from_str(&text).with_context(|| format!("Invalid document JSON in {}", origin))
}

fn write_output(output: Option<&Path>, rendered: &str) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, format!("{}\n", rendered))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(output = %path.display(), "Wrote document");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", rendered).context("Failed to write stdout")?;
        }
    }
    Ok(())
}

fn parse_metadata(arg: &str) -> std::result::Result<(String, String), String> {
    match arg.split_once(':') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(format!("expected KEY:VALUE, got {:?}", arg)),
    }
}
