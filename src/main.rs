use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use verbatim::{MatchConfig, Matcher, VerbatimConfig};

/// Check whether a text is a near-verbatim excerpt of a reference text.
#[derive(Parser, Debug)]
#[command(name = "verbatim", version, about)]
struct Cli {
    /// File holding the text under suspicion
    #[arg(long)]
    input: PathBuf,

    /// File holding the reference text
    #[arg(long)]
    reference: PathBuf,

    /// YAML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Pretty-print the JSON result
    #[arg(long)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let match_config = match &cli.config {
        Some(path) => {
            VerbatimConfig::from_file(path)
                .with_context(|| format!("loading {}", path.display()))?
                .matcher
        }
        None => MatchConfig::default(),
    };
    let matcher = Matcher::new(match_config)?;

    let input = fs::read_to_string(&cli.input)
        .with_context(|| format!("reading {}", cli.input.display()))?;
    let reference = fs::read_to_string(&cli.reference)
        .with_context(|| format!("reading {}", cli.reference.display()))?;

    let result = matcher.analyze(&input, &reference);
    let json = if cli.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{json}");

    Ok(())
}
