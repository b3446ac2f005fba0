use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;

use acme_bench::chart;
use acme_bench::errors::BenchError;
use acme_bench::report::{Console, Reporter};

#[derive(Parser)]
#[command(name = "bench-graph", version, about = "Render benchmark results as an SVG bar chart")]
struct Cli {
    /// Results JSON written by bench-run
    input: PathBuf,

    /// SVG file to create
    output: PathBuf,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut console = Console;

    let data = chart::parse_results(&cli.input, &mut console);
    let summary: Vec<String> = data
        .entries
        .iter()
        .map(|(name, value)| format!("{}: {}", name, value))
        .collect();
    console.info(&format!("Parsed results: {{{}}}", summary.join(", ")));
    console.info(&format!(
        "Parsed stats: {{{}}}",
        chart::subtitle(&data.stats).unwrap_or_default()
    ));

    if data.is_empty() {
        return Err(BenchError::NoResults.into());
    }

    chart::write_svg(&data, &cli.output)?;
    console.success(&format!("Generated {}", cli.output.display()));

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        Console.error(&err.to_string());
        process::exit(1);
    }
}
