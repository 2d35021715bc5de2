use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use ci_docgen::{build_document, parse_dsl, render_document, DslFormat, RenderConfig};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Yaml,
    Json,
    Toml,
}

impl From<FormatArg> for DslFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Yaml => DslFormat::Yaml,
            FormatArg::Json => DslFormat::Json,
            FormatArg::Toml => DslFormat::Toml,
        }
    }
}

/// Generate Markdown documentation from a CI pipeline configuration.
#[derive(Debug, Parser)]
#[command(name = "ci-docgen", version)]
struct Cli {
    /// Pipeline configuration file
    #[arg(short, long)]
    input: PathBuf,
    /// Output file; stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Input format; guessed from the file extension when omitted
    #[arg(long, value_enum)]
    format: Option<FormatArg>,
    /// TOML file with rendering options
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            RenderConfig::from_toml_str(&content)
                .with_context(|| format!("loading config {}", path.display()))?
        }
        None => RenderConfig::default(),
    };

    let format = cli
        .format
        .map(DslFormat::from)
        .unwrap_or_else(|| DslFormat::from_path(&cli.input));
    let content = fs::read_to_string(&cli.input)
        .with_context(|| format!("reading {}", cli.input.display()))?;
    let root = parse_dsl(&content, format)
        .with_context(|| format!("decoding {}", cli.input.display()))?;
    let document = build_document(&root)
        .with_context(|| format!("validating {}", cli.input.display()))?;
    tracing::info!(
        input = %cli.input.display(),
        stages = document.stages.len(),
        jobs = document.job_count(),
        "pipeline loaded"
    );

    let markdown = render_document(&document, &config);
    match &cli.output {
        Some(path) => {
            fs::write(path, &markdown).with_context(|| format!("writing {}", path.display()))?;
            tracing::info!(output = %path.display(), bytes = markdown.len(), "documentation written");
        }
        None => print!("{}", markdown),
    }
    Ok(())
}
