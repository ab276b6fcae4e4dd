//! # dgauss-bench
//!
//! Wall-clock latency benchmarks for discrete Gaussian noise samplers.
//!
//! Three independently implemented samplers of the discrete Gaussian
//! distribution are timed draw by draw across a sweep of noise scales,
//! where each scale is the smallest sigma satisfying an (epsilon, delta)
//! differential-privacy budget:
//! - an exact integer-arithmetic sampler parameterised by sigma,
//! - an exact integer-arithmetic sampler parameterised by sigma-squared,
//! - the mechanism's own floating-point rejection sampler.
//!
//! The output is a latency plot (mean line plus a half-standard-deviation
//! band per variant, against sigma) and a JSON report.
//!
//! ## Quick Start
//!
//! ```ignore
//! use dgauss_bench::{Config, Harness};
//!
//! let report = Harness::new(Config::default()).run()?;
//! println!("{}", dgauss_bench::output::terminal::format_summary(&report));
//! dgauss_bench::output::plot::render_to_dir(&report, std::path::Path::new("."))?;
//! ```

#![warn(clippy::all)]

mod config;
mod error;
mod harness;
mod mechanism;
mod sweep;

pub mod measurement;
pub mod output;
pub mod samplers;
pub mod statistics;

pub use config::Config;
pub use error::{Error, Result};
pub use harness::{BenchReport, Harness, PointResult, VariantStats};
pub use mechanism::GaussianDiscrete;
pub use sweep::{sweep_points, SweepPoint};

/// Run a full benchmark with default configuration.
///
/// # Errors
///
/// Propagates any scale-derivation or sampler-construction failure.
pub fn run() -> Result<BenchReport> {
    Harness::new(Config::default()).run()
}
