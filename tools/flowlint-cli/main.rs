use clap::{Parser, ValueEnum};
use flowlint::prelude::*;
use std::fs;
use std::process::ExitCode;
use std::time::Instant;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Checks a flowchart exported by the editor and prints its quality report
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the flowchart JSON file ({ "nodes": [...], "connections": [...] })
    flow_path: String,

    /// Optional JSON file overriding the scoring weights
    #[arg(short, long)]
    weights: Option<String>,

    /// Treat an unknown node type as a known one, e.g. `--alias inicio=start`
    #[arg(short, long = "alias", value_parser = parse_alias)]
    aliases: Vec<(String, NodeType)>,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Exit with a failure status when the score is below this value
    #[arg(long)]
    fail_under: Option<u8>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(score) if meets_threshold(score, cli.fail_under) => ExitCode::SUCCESS,
        Ok(score) => {
            eprintln!(
                "Score {} is below the required {}",
                score,
                cli.fail_under.unwrap_or_default()
            );
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("\nError: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<u8> {
    let load_start = Instant::now();
    let flow_json = fs::read_to_string(&cli.flow_path)
        .map_err(|e| format!("Failed to read flowchart file '{}': {}", cli.flow_path, e))?;
    let flow = FlowDefinition::from_json(&flow_json)?;
    debug!(
        nodes = flow.nodes.len(),
        connections = flow.connections.len(),
        elapsed = ?load_start.elapsed(),
        "flowchart loaded"
    );

    let mut builder = Analyzer::builder();
    if let Some(path) = &cli.weights {
        let weights_json = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read weights file '{}': {}", path, e))?;
        let weights: SeverityWeights = serde_json::from_str(&weights_json)?;
        builder = builder.with_weights(weights);
    }
    for (alias, target) in &cli.aliases {
        builder = builder.with_type_alias(alias, target.clone());
    }
    let analyzer = builder.try_build()?;

    let analyze_start = Instant::now();
    let analysis = analyzer.analyze_flow(&flow);
    info!(score = analysis.score, elapsed = ?analyze_start.elapsed(), "analysis complete");

    match cli.format {
        OutputFormat::Text => print!("{}", ReportFormatter::format(&analysis)),
        OutputFormat::Json => println!("{}", analysis.to_json()?),
    }

    Ok(analysis.score)
}

/// A score equal to the threshold passes.
fn meets_threshold(score: u8, fail_under: Option<u8>) -> bool {
    fail_under.is_none_or(|threshold| score >= threshold)
}

fn parse_alias(raw: &str) -> std::result::Result<(String, NodeType), String> {
    let (alias, target) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected ALIAS=TYPE, got '{}'", raw))?;
    match NodeType::from(target) {
        NodeType::Other(other) => Err(format!(
            "'{}' is not a node type (expected start, process, decision or end)",
            other
        )),
        known => Ok((alias.to_string(), known)),
    }
}
