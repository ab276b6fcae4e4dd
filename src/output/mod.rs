//! Report output: terminal summary, JSON artifact, latency plot.

pub mod json;
pub mod plot;
pub mod terminal;
