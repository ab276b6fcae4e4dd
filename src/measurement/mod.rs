//! Timing measurement: wall-clock timer and per-draw collection.

mod collector;
mod timer;

pub use collector::Collector;
pub use timer::{black_box, Timer};
