//! Benchmark harness.
//!
//! Runs the selected strategies over a list of board sizes, wraps every
//! invocation in timing and memory instrumentation, and aggregates the
//! statistics records into per-strategy summaries. Formatting, plotting
//! and persistence of the results are left to the caller.

mod config;
mod runner;
mod summary;

pub use config::{HarnessConfig, TimeoutPolicy};
pub use runner::{BenchmarkReport, Harness, RunRecord};
pub use summary::StrategySummary;
