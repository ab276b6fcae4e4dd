//! Command-line entry point for the sampler latency benchmark.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use dgauss_bench::output::{json, plot, terminal};
use dgauss_bench::{Config, Harness, Result};

/// Benchmark discrete Gaussian samplers across a privacy-parameter sweep.
///
/// With no arguments this reproduces the canonical experiment: epsilon
/// swept over 0.01, 0.03, ..., 4.99 at delta = 1e-5, 1100 draws per
/// variant per scale with the first 100 discarded, plot and JSON report
/// written to the current directory.
#[derive(Parser, Debug)]
#[command(name = "dgauss-bench", version, about)]
struct Args {
    /// Directory to write the plot and JSON report into.
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    /// Draws per sampler variant per scale value.
    #[arg(long, default_value_t = 1100)]
    draws: usize,

    /// Leading draws discarded as warm-up.
    #[arg(long, default_value_t = 100)]
    warmup: usize,

    /// Privacy parameter delta, fixed across the sweep.
    #[arg(long, default_value_t = 1e-5)]
    delta: f64,

    /// First swept epsilon, in hundredths.
    #[arg(long, default_value_t = 1)]
    eps_start: u32,

    /// Exclusive end of the epsilon sweep, in hundredths.
    #[arg(long, default_value_t = 500)]
    eps_end: u32,

    /// Step between swept epsilons, in hundredths.
    #[arg(long, default_value_t = 2)]
    eps_step: u32,

    /// Deterministic seed for the sampler RNG streams.
    #[arg(long)]
    seed: Option<u64>,

    /// Single-point smoke run at epsilon = 0.5 instead of the full sweep.
    #[arg(long)]
    quick: bool,

    /// Skip the JSON report.
    #[arg(long)]
    no_json: bool,
}

impl Args {
    fn config(&self) -> Config {
        let mut config = if self.quick {
            Config::single_point(50)
        } else {
            Config {
                epsilon_start_hundredths: self.eps_start,
                epsilon_end_hundredths: self.eps_end,
                epsilon_step_hundredths: self.eps_step,
                ..Config::default()
            }
        };
        config.draws = self.draws;
        config.warmup = self.warmup;
        config.delta = self.delta;
        config.seed = self.seed;
        config
    }
}

fn main() {
    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("{} {err}", "error:".red().bold());
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let harness = Harness::new(args.config());
    let total = harness.config().point_count() as u64;

    let bar = ProgressBar::new(total);
    bar.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-"),
    );

    let report = harness.run_with_progress(|done, _| bar.set_position(done as u64))?;
    bar.finish_and_clear();

    println!("{}", terminal::format_sigmas(&report));

    let plot_path = plot::render_to_dir(&report, &args.output)?;
    println!("plot written to {}", plot_path.display().to_string().bold());

    if !args.no_json {
        let json_path = plot_path.with_extension("json");
        json::write_report(&report, &json_path)?;
        println!("report written to {}", json_path.display());
    }

    println!();
    println!("{}", terminal::format_summary(&report));
    Ok(())
}
