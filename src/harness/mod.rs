//! Benchmark collaborators for the index-vs-hash comparison experiment.
//!
//! The core tree is a library; this module holds everything the comparison
//! experiment needs around it:
//! - [`Workload`] - reproducible random key sequences
//! - [`MemorySampler`] / [`measure_phase`] - elapsed microseconds and process
//!   RSS per phase
//! - [`ReportRow`] / [`write_csv`] - CSV emission
//! - [`run_experiment`] - drives both engines through the phases
//!
//! Everything here is behind the `benchmarks` feature so the core crate
//! stays free of workload, CLI, and process-metrics dependencies.

mod experiment;
mod measure;
mod report;
mod workload;

pub use experiment::{run_experiment, ExperimentConfig, PHASES};
pub use measure::{measure_phase, MemorySampler, PhaseMeasurement};
pub use report::{write_csv, ReportRow};
pub use workload::Workload;
