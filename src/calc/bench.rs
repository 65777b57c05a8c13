//! Timed batch runs and the multi-simulation experiment.
//!
//! Each simulation generates a fresh equation set of fixed length and runs
//! it through both calculators, recording wall-clock time, throughput and
//! output size per mode.

use std::path::Path;
use std::time::{Duration, Instant};
use serde::{Serialize, Deserialize};
use tracing::info;
use crate::calc::{generate_equations, run_batch, BatchReport, ExperimentConfig, IoError};
use crate::expr::Mode;

/// One timed batch.
#[derive(Debug, Clone)]
pub struct BenchmarkRun {
    pub report: BatchReport,
    pub elapsed: Duration,
}

impl BenchmarkRun {
    /// Completed operations per second, given the operator count of each equation.
    pub fn ops_per_second(&self, ops_per_equation: usize) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            (self.report.equations_completed * ops_per_equation) as f64 / secs
        } else {
            0.0
        }
    }

    /// Completed equations per second.
    pub fn equations_per_second(&self) -> f64 {
        self.ops_per_second(1)
    }

    /// Size in bytes of the newline-joined result output.
    pub fn output_bytes(&self) -> usize {
        self.report.output_text().len()
    }
}

/// Run a batch under `mode` and time it.
pub fn benchmark<S: AsRef<str> + Sync>(mode: Mode, equations: &[S], parallel: bool) -> BenchmarkRun {
    let start = Instant::now();
    let report = run_batch(mode, equations, parallel);
    let elapsed = start.elapsed();
    BenchmarkRun { report, elapsed }
}

/// Equations containing at least one division operator.
pub fn count_equations_with_division<S: AsRef<str>>(equations: &[S]) -> usize {
    equations
        .iter()
        .filter(|eq| eq.as_ref().split_whitespace().any(|t| t == "/"))
        .count()
}

/// Total division operators across all equations.
pub fn count_division_ops<S: AsRef<str>>(equations: &[S]) -> usize {
    equations
        .iter()
        .map(|eq| eq.as_ref().split_whitespace().filter(|t| *t == "/").count())
        .sum()
}

/// Per-mode measurements within one simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModeStats {
    pub time_s: f64,
    pub ops_per_s: f64,
    pub output_bytes: usize,
    pub equations_completed: usize,
    pub dbz_count: usize,
}

impl ModeStats {
    fn from_run(run: &BenchmarkRun, ops_per_equation: usize) -> Self {
        Self {
            time_s: run.elapsed.as_secs_f64(),
            ops_per_s: run.ops_per_second(ops_per_equation).round(),
            output_bytes: run.output_bytes(),
            equations_completed: run.report.equations_completed,
            dbz_count: run.report.dbz_count,
        }
    }
}

/// One row of the experiment table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRow {
    pub simulation: usize,
    pub length: usize,
    pub ops_per_equation: usize,
    pub equations_with_division: usize,
    pub division_ops: usize,
    pub std: ModeStats,
    pub dbz: ModeStats,
}

/// Run every simulation described by `config`.
pub fn run_experiment(config: &ExperimentConfig) -> Vec<SimulationRow> {
    let mut rows = Vec::with_capacity(config.simulations);

    for sim in 1..=config.simulations {
        let generator = config.generator_for(sim);
        let length = generator.min_length;
        let ops_per_equation = length.saturating_sub(1) / 2;
        let equations = generate_equations(&generator);

        let std_run = benchmark(Mode::Std, &equations, config.parallel);
        let dbz_run = benchmark(Mode::Dbz, &equations, config.parallel);

        let row = SimulationRow {
            simulation: sim,
            length,
            ops_per_equation,
            equations_with_division: count_equations_with_division(&equations),
            division_ops: count_division_ops(&equations),
            std: ModeStats::from_run(&std_run, ops_per_equation),
            dbz: ModeStats::from_run(&dbz_run, ops_per_equation),
        };

        info!(
            simulation = sim,
            length,
            std_completed = row.std.equations_completed,
            std_time_s = row.std.time_s,
            dbz_completed = row.dbz.equations_completed,
            dbz_time_s = row.dbz.time_s,
            "simulation finished"
        );

        rows.push(row);
    }

    rows
}

/// CSV header, in column order.
pub const CSV_HEADER: [&str; 15] = [
    "Simulation",
    "Length_L",
    "Ops_per_eq",
    "N_eq_with_DBZ",
    "Total_DBZ_ops",
    "STD_output_bytes",
    "STD_time_s",
    "STD_ops_per_s",
    "STD_eq_completed",
    "STD_dbz_count",
    "DBZ_output_bytes",
    "DBZ_time_s",
    "DBZ_ops_per_s",
    "DBZ_eq_completed",
    "DBZ_dbz_count",
];

/// Render rows as CSV (header plus one line per row).
pub fn csv_lines(rows: &[SimulationRow]) -> Vec<String> {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(CSV_HEADER.join(","));
    for r in rows {
        lines.push(format!(
            "{},{},{},{},{},{},{:.6},{},{},{},{},{:.6},{},{},{}",
            r.simulation,
            r.length,
            r.ops_per_equation,
            r.equations_with_division,
            r.division_ops,
            r.std.output_bytes,
            r.std.time_s,
            r.std.ops_per_s,
            r.std.equations_completed,
            r.std.dbz_count,
            r.dbz.output_bytes,
            r.dbz.time_s,
            r.dbz.ops_per_s,
            r.dbz.equations_completed,
            r.dbz.dbz_count,
        ));
    }
    lines
}

/// Write the experiment table to a CSV file.
pub fn write_csv<P: AsRef<Path>>(path: P, rows: &[SimulationRow]) -> Result<(), IoError> {
    crate::calc::save_lines(path, &csv_lines(rows))
}
