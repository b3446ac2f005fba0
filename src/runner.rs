use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};
use std::time::Instant;

use crate::config::RunnerConfig;
use crate::report::Reporter;
use crate::stats;
use crate::types::Measurement;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildOutcome {
    AlreadyPresent,
    Built,
    BuildFailed,
    Skipped,
}

/// Run the build command if the target binary is missing.
///
/// A failed build is only reported; measurement goes ahead either way.
pub fn ensure_built(config: &RunnerConfig, reporter: &mut dyn Reporter) -> BuildOutcome {
    if config.binary_path().exists() {
        return BuildOutcome::AlreadyPresent;
    }

    let Some((program, args)) = config.build_command.split_first() else {
        reporter.warning(&format!(
            "{} not found and no build command configured",
            config.binary_path().display()
        ));
        return BuildOutcome::Skipped;
    };

    reporter.info("Building release binary...");
    let status = Command::new(program)
        .args(args)
        .current_dir(&config.workspace_root)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match status {
        Ok(s) if s.success() => BuildOutcome::Built,
        Ok(s) => {
            reporter.warning(&format!("Build command exited with {}", s));
            BuildOutcome::BuildFailed
        }
        Err(e) => {
            reporter.warning(&format!("Could not run build command '{}': {}", program, e));
            BuildOutcome::BuildFailed
        }
    }
}

/// Run the target with its output discarded. `None` when it could not be spawned.
pub fn invoke(program: &Path, args: &[String]) -> Option<ExitStatus> {
    Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .ok()
}

/// Time `runs` sequential calls of `f`, in milliseconds.
pub fn collect_samples<T>(runs: usize, mut f: impl FnMut() -> T) -> Vec<f64> {
    let mut times = Vec::with_capacity(runs);
    for _ in 0..runs {
        let start = Instant::now();
        let _ = f();
        times.push(start.elapsed().as_secs_f64() * 1000.0);
    }
    times
}

/// Time `f` and aggregate the samples. `None` when `runs` is zero.
pub fn benchmark<T>(
    name: &str,
    runs: usize,
    f: impl FnMut() -> T,
    reporter: &mut dyn Reporter,
) -> Option<Measurement> {
    if runs == 0 {
        return None;
    }
    reporter.info(&format!("Benchmarking: {} ({} runs)", name, runs));
    let times = collect_samples(runs, f);
    stats::summarize(name, &times)
}

pub fn format_banner() -> String {
    let rule = "=".repeat(60);
    format!("\n{}\n{}BENCHMARK RESULTS\n{}\n\n", rule, " ".repeat(20), rule)
}

/// Fixed-width results table, two decimals per column.
pub fn format_table(results: &[Measurement]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<25} {:>10} {:>10} {:>10} {:>10}\n",
        "Method", "Avg(ms)", "Median(ms)", "Min(ms)", "Max(ms)"
    ));
    out.push_str(&"-".repeat(65));
    out.push('\n');
    for m in results {
        out.push_str(&format!(
            "{:<25} {:>10.2} {:>10.2} {:>10.2} {:>10.2}\n",
            m.name, m.avg, m.median, m.min, m.max
        ));
    }
    out.push_str(&"=".repeat(60));
    out.push_str("\n\n");
    out
}
