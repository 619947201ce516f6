mod loader;
mod report;
mod timer;

use anyhow::Result;
use clap::Parser;
use imu_common::init_tracer;
use imu_window_stats::{ExecutionStrategy, VariancePolicy, WindowIndexer, WindowMapper, WindowSpec};
use report::{Report, ReportFormat, RunSettings};
use std::{num::NonZeroUsize, path::PathBuf};
use timer::TimerSuite;
use tracing::{debug, info, level_filters::LevelFilter, warn};

// cargo run --bin imu-analyser -- --file recording.csv --window-length 200 --stride 100

#[derive(Debug, Parser)]
#[clap(author, version, about)]
struct Cli {
    /// CSV recording with a header row and columns t_ms, clip_id, ax, ay, az, gx, gy, gz, label
    #[clap(long, env)]
    file: PathBuf,

    /// Number of samples in each window
    #[clap(long, env, default_value = "200")]
    window_length: NonZeroUsize,

    /// Number of samples between the starts of consecutive windows
    #[clap(long, env, default_value = "100")]
    stride: NonZeroUsize,

    /// Either "sequential" or "parallel"
    #[clap(long, env, default_value = "parallel")]
    strategy: ExecutionStrategy,

    /// Worker threads used by the parallel strategy, if not set one thread per logical CPU is used
    #[clap(long, env)]
    threads: Option<NonZeroUsize>,

    /// Either "clamp" or "unclamped", controls how negative variance residue is handled
    #[clap(long, env, default_value = "clamp")]
    variance_policy: VariancePolicy,

    /// Ordinal of the window whose metrics are printed in the text report
    #[clap(long, env, default_value = "0")]
    report_window: usize,

    /// Either "text" or "json"
    #[clap(long, env, default_value = "text")]
    format: ReportFormat,

    /// Log level used when RUST_LOG is not set
    #[clap(long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let tracer = init_tracer!(args.log_level)?;
    let _root = tracer.root_span().entered();
    debug!("{args:?}");

    let threads = configure_workers(args.strategy, args.threads)?;

    let mut timers = TimerSuite::default();
    timers.full.record();

    let samples = timers.load.time(|| loader::load_samples(&args.file))?;
    info!(num_samples = samples.len(), "Recording loaded");

    let spec = WindowSpec::new(args.window_length, args.stride);
    let indexer = WindowIndexer::new(samples.len(), spec)?;

    let mapper = WindowMapper::new(spec, args.variance_policy, args.strategy);
    let windows = timers
        .compute
        .time(|| mapper.map_indexed(&indexer, &samples))?;
    info!(num_windows = windows.len(), threads, "Windows computed");

    timers.full.end();

    let settings = RunSettings {
        strategy: args.strategy.to_string(),
        threads,
        variance_policy: args.variance_policy.to_string(),
    };
    Report::new(
        &args.file,
        &indexer,
        settings,
        timers.timings(),
        args.report_window,
        &windows,
    )?
    .write(args.format, &mut std::io::stdout().lock())?;
    Ok(())
}

/// Sizes the global rayon pool for the parallel strategy.
/// Returns the number of threads the windows will be computed on.
fn configure_workers(
    strategy: ExecutionStrategy,
    threads: Option<NonZeroUsize>,
) -> Result<usize> {
    match strategy {
        ExecutionStrategy::Sequential => {
            if let Some(threads) = threads {
                warn!(
                    threads = threads.get(),
                    "--threads is ignored by the sequential strategy"
                );
            }
            Ok(1)
        }
        ExecutionStrategy::Parallel => {
            if let Some(threads) = threads {
                rayon::ThreadPoolBuilder::new()
                    .num_threads(threads.get())
                    .build_global()?;
            }
            Ok(rayon::current_num_threads())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_ignores_threads() {
        let threads = configure_workers(ExecutionStrategy::Sequential, NonZeroUsize::new(4));
        assert_eq!(threads.unwrap(), 1);
        assert_eq!(configure_workers(ExecutionStrategy::Sequential, None).unwrap(), 1);
    }

    #[test]
    fn flag_defaults() {
        let cli = Cli::try_parse_from(["imu-analyser", "--file", "a.csv", "--format", "json"]);
        let cli = cli.unwrap();
        assert_eq!(cli.format, ReportFormat::Json);
        assert_eq!(cli.strategy, ExecutionStrategy::Parallel);
        assert_eq!(cli.variance_policy, VariancePolicy::Clamp);
    }
}
