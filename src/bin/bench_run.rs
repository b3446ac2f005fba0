use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;

use acme_bench::config::{Overrides, RunnerConfig};
use acme_bench::errors::BenchError;
use acme_bench::report::{Console, Reporter};
use acme_bench::runner;
use acme_bench::types::{ResultSet, Stats};

#[derive(Parser)]
#[command(name = "bench-run", version, about = "Time repeated runs of a compiled binary")]
struct Cli {
    /// Number of benchmark runs
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    runs: Option<u64>,

    /// Workspace root the binary and output paths are relative to [default: current directory]
    #[arg(long)]
    workspace: Option<PathBuf>,

    /// Target executable, relative to the workspace root
    #[arg(long)]
    binary: Option<PathBuf>,

    /// Results file, relative to the workspace root
    #[arg(long)]
    output: Option<PathBuf>,

    /// Label for the measurement
    #[arg(long)]
    name: Option<String>,

    /// TOML config file [default: <workspace>/bench.toml]
    #[arg(long)]
    config: Option<PathBuf>,

    /// Arguments passed through to the target
    #[arg(last = true)]
    args: Vec<String>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let workspace_root = match cli.workspace {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    let overrides = Overrides {
        binary: cli.binary,
        args: (!cli.args.is_empty()).then_some(cli.args),
        build_command: None,
        name: cli.name,
        runs: cli.runs.map(|r| r as usize),
        output: cli.output,
    };
    let config = RunnerConfig::resolve(workspace_root, cli.config.as_deref(), overrides)?;

    let mut console = Console;
    runner::ensure_built(&config, &mut console);

    print!("{}", runner::format_banner());

    let binary = config.binary_path();
    let measurement = runner::benchmark(
        &config.name,
        config.runs,
        || runner::invoke(&binary, &config.args),
        &mut console,
    )
    .ok_or(BenchError::InvalidRuns)?;

    let mut stats = Stats::new();
    stats.insert("runs".to_string(), serde_json::json!(config.runs));
    let results = ResultSet {
        results: vec![measurement],
        stats,
    };

    print!("{}", runner::format_table(&results.results));

    let output = config.output_path();
    results.write_to(&output)?;
    console.success(&format!("Results saved to {}", output.display()));

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        Console.error(&err.to_string());
        process::exit(1);
    }
}
