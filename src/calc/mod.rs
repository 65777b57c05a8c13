//! Calculators and the tooling around them.
//!
//! This module provides:
//! - [`Calculator`] - The STD and DBZ drivers and their batch reports
//! - [`generate_equations`] - Seeded random equation sets
//! - [`run_experiment`] - Timed comparison of both calculators
//! - File helpers for equations, results and configuration

pub mod config;
pub mod driver;
pub mod generate;
pub mod bench;
pub mod io;

pub use config::{ExperimentConfig, GeneratorConfig};
pub use driver::{Calculator, StdCalculator, DbzCalculator, Outcome, BatchReport, solve, run_batch, ERR_MARKER};
pub use generate::{generate_equation, generate_equations, create_rng};
pub use bench::{benchmark, run_experiment, write_csv, csv_lines, BenchmarkRun, ModeStats, SimulationRow};
pub use io::{load_equations, read_equations, save_lines, write_lines, load_config, IoError};
