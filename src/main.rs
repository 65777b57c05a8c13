//! SSCN Calculator - CLI Entry Point
//!
//! Commands:
//! - `sscn-calc eval <equation>` - Evaluate one equation
//! - `sscn-calc run <file>` - Evaluate a file of equations
//! - `sscn-calc generate` - Generate random equations
//! - `sscn-calc experiment` - Benchmark STD against DBZ
//! - `sscn-calc test` - Built-in self-test

use clap::{Parser, Subcommand};
use sscn::Mode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "sscn-calc")]
#[command(author = "Yigit")]
#[command(version = "0.1.0")]
#[command(about = "A division-by-zero calculator for semi-structured complex numbers")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a single equation
    Eval {
        /// Infix equation, e.g. "1,0,0 + 2,0,0 * 3,0,0"
        equation: String,
        /// Division-by-zero policy
        #[arg(short, long, value_enum, default_value_t = Mode::Std)]
        mode: Mode,
        /// Also print the postfix form
        #[arg(short, long)]
        postfix: bool,
    },
    /// Evaluate every equation in a file (one per line)
    Run {
        /// Path to the equations file
        equations: String,
        /// Division-by-zero policy
        #[arg(short, long, value_enum, default_value_t = Mode::Std)]
        mode: Mode,
        /// Write results to this file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
        /// Print a benchmark summary to stderr
        #[arg(short, long)]
        summary: bool,
        /// Evaluate equations in parallel
        #[arg(long)]
        parallel: bool,
    },
    /// Generate random equations
    Generate {
        /// Number of equations
        #[arg(short = 'n', long, default_value = "20000")]
        count: usize,
        /// Minimum operand component value
        #[arg(long, default_value = "-1", allow_hyphen_values = true)]
        min_val: i64,
        /// Maximum operand component value
        #[arg(long, default_value = "1", allow_hyphen_values = true)]
        max_val: i64,
        /// Minimum equation length in tokens
        #[arg(long, default_value = "3")]
        min_len: usize,
        /// Maximum equation length in tokens
        #[arg(long, default_value = "203")]
        max_len: usize,
        /// RNG seed
        #[arg(long, default_value = "42")]
        seed: u64,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Run the multi-simulation STD vs DBZ benchmark
    Experiment {
        /// JSON configuration file
        #[arg(short, long)]
        config: Option<String>,
        /// Number of simulations
        #[arg(long)]
        sims: Option<usize>,
        /// Equations per simulation
        #[arg(long)]
        eq_per_sim: Option<usize>,
        /// Base RNG seed
        #[arg(long)]
        seed: Option<u64>,
        /// Evaluate batches in parallel
        #[arg(long)]
        parallel: bool,
        /// Output CSV file
        #[arg(short, long, default_value = "results.csv")]
        output: String,
    },
    /// Run the built-in self-test
    Test,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Eval { equation, mode, postfix }) => {
            eval_equation(&equation, mode, postfix);
        }
        Some(Commands::Run { equations, mode, output, summary, parallel }) => {
            run_file(&equations, mode, output, summary, parallel);
        }
        Some(Commands::Generate { count, min_val, max_val, min_len, max_len, seed, output }) => {
            let config = sscn::calc::GeneratorConfig {
                count,
                min_value: min_val,
                max_value: max_val,
                min_length: min_len,
                max_length: max_len,
                seed,
            };
            generate(&config, output);
        }
        Some(Commands::Experiment { config, sims, eq_per_sim, seed, parallel, output }) => {
            experiment(config, sims, eq_per_sim, seed, parallel, &output);
        }
        Some(Commands::Test) => {
            run_self_test();
        }
        None => {
            println!("SSCN Calculator v0.1.0");
            println!("Semi-structured complex number arithmetic with division by zero");
            println!();
            println!("Use --help for available commands");
            println!();
            demo();
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}

fn eval_equation(equation: &str, mode: Mode, show_postfix: bool) {
    use sscn::infix_to_postfix;
    use sscn::expr::postfix_strings;

    if show_postfix {
        match infix_to_postfix(equation) {
            Ok(postfix) => println!("Postfix: {}", postfix_strings(&postfix).join(" ")),
            Err(e) => {
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }
        }
    }

    println!("{}", sscn::solve(mode, equation));
}

fn run_file(path: &str, mode: Mode, output: Option<String>, summary: bool, parallel: bool) {
    use sscn::calc::{benchmark, load_equations, save_lines};

    let equations = match load_equations(path) {
        Ok(eqs) => eqs,
        Err(e) => {
            eprintln!("❌ Failed to read equations: {}", e);
            std::process::exit(1);
        }
    };

    let run = benchmark(mode, &equations, parallel);
    let output_text = run.report.output_text();

    match &output {
        Some(out_path) => {
            if let Err(e) = save_lines(out_path, &run.report.results()) {
                eprintln!("❌ Failed to write results: {}", e);
                std::process::exit(1);
            }
        }
        None => print!("{}", output_text),
    }

    if summary || output.is_some() {
        let report = &run.report;
        eprintln!();
        eprintln!("━━━ {} Calculator Summary ━━━", mode);
        eprintln!("  Equations submitted   : {}", report.len());
        eprintln!("  Equations completed   : {}", report.equations_completed);
        match mode {
            Mode::Std => eprintln!("  DBZ aborts (ERR)      : {}", report.dbz_count),
            Mode::Dbz => eprintln!("  DBZ substitutions     : {}", report.dbz_count),
        }
        eprintln!("  Processing time (s)   : {:.6}", run.elapsed.as_secs_f64());
        eprintln!("  Equations/sec         : {:.0}", run.equations_per_second());
        if let Some(out_path) = &output {
            eprintln!("  Output size (bytes)   : {}", output_text.len());
            eprintln!("✓ Saved to {}", out_path);
        }
    }
}

fn generate(config: &sscn::calc::GeneratorConfig, output: Option<String>) {
    use sscn::calc::{generate_equations, save_lines};

    let equations = generate_equations(config);

    match output {
        Some(path) => {
            if let Err(e) = save_lines(&path, &equations) {
                eprintln!("❌ Failed to write equations: {}", e);
                std::process::exit(1);
            }
            eprintln!("✓ Wrote {} equations to {}", equations.len(), path);
        }
        None => {
            for eq in &equations {
                println!("{}", eq);
            }
        }
    }
}

fn experiment(
    config_path: Option<String>,
    sims: Option<usize>,
    eq_per_sim: Option<usize>,
    seed: Option<u64>,
    parallel: bool,
    output: &str,
) {
    use sscn::calc::{load_config, run_experiment, write_csv, ExperimentConfig};

    let mut config = match config_path {
        Some(path) => match load_config(&path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("❌ Failed to load config: {}", e);
                std::process::exit(1);
            }
        },
        None => ExperimentConfig::default(),
    };
    if let Some(n) = sims {
        config.simulations = n;
    }
    if let Some(n) = eq_per_sim {
        config.equations_per_simulation = n;
    }
    if let Some(s) = seed {
        config.seed = s;
    }
    config.parallel |= parallel;

    println!("{}", "=".repeat(72));
    println!("  Semi-structured Complex Number Calculator Benchmark");
    println!(
        "  Simulations: {}  |  Equations/sim: {}  |  Seed: {}",
        config.simulations, config.equations_per_simulation, config.seed
    );
    println!("{}", "=".repeat(72));
    println!();

    let rows = run_experiment(&config);

    println!(
        "{:>3} {:>5} {:>8} {:>10} {:>12} {:>8} {:>10} {:>12}",
        "Sim", "L", "STD_done", "STD_t(s)", "STD_ops/s", "DBZ_done", "DBZ_t(s)", "DBZ_ops/s"
    );
    println!("{}", "-".repeat(75));
    for r in &rows {
        println!(
            "{:3} {:5} {:8} {:10.4} {:12.0} {:8} {:10.4} {:12.0}",
            r.simulation,
            r.length,
            r.std.equations_completed,
            r.std.time_s,
            r.std.ops_per_s,
            r.dbz.equations_completed,
            r.dbz.time_s,
            r.dbz.ops_per_s,
        );
    }

    if rows.is_empty() {
        return;
    }
    if let Err(e) = write_csv(output, &rows) {
        eprintln!("❌ Failed to write CSV: {}", e);
        std::process::exit(1);
    }
    println!();
    println!("✓ Results written to: {}", output);
}

fn demo() {
    use sscn::{infix_to_postfix, solve};
    use sscn::expr::postfix_strings;

    println!("━━━ Demo ━━━");
    println!();

    for equation in ["1,0,0 + 2,0,0 * 3,0,0", "1,1,0 / 0,1,1", "1,0,0 / 0,0,0"] {
        let postfix = infix_to_postfix(equation)
            .map(|p| postfix_strings(&p).join(" "))
            .unwrap_or_else(|e| e.to_string());
        println!("  {}", equation);
        println!("    postfix: {}", postfix);
        println!("    STD:     {}", solve(Mode::Std, equation));
        println!("    DBZ:     {}", solve(Mode::Dbz, equation));
        println!();
    }
}

fn run_self_test() {
    use sscn::{Triple, infix_to_postfix, solve, run_batch};
    use sscn::algebra::{add, subtract, multiply, divide_std, divide_dbz, inverse};
    use sscn::expr::postfix_strings;

    println!("━━━ SSCN Calculator Self-Test ━━━");
    println!();

    let mut passed = 0;
    let mut failed = 0;

    // Test 1: Subtraction undone by addition
    print!("Add/subtract round trip... ");
    let p = Triple::new(1.5, -2.0, 3.25);
    let q = Triple::new(-0.5, 4.0, 1.0);
    if add(subtract(p, q), q).approx_eq(&p, 1e-12) { println!("✓"); passed += 1; }
    else { println!("✗"); failed += 1; }

    // Test 2: Degenerate-angle multiplication
    print!("(1,0,0) × (2,0,0) = (-2, ~0, 0)... ");
    let r = multiply(Triple::new(1.0, 0.0, 0.0), Triple::new(2.0, 0.0, 0.0));
    if r.approx_eq(&Triple::new(-2.0, 0.0, 0.0), 1e-12) {
        println!("✓");
        passed += 1;
    } else {
        println!("✗ (got {:?})", r);
        failed += 1;
    }

    // Test 3: STD division by zero
    print!("STD division by zero fails... ");
    if divide_std(p, Triple::ZERO).is_err() { println!("✓"); passed += 1; }
    else { println!("✗"); failed += 1; }

    // Test 4: DBZ totalization
    print!("DBZ division by zero divides by p... ");
    let ok = inverse(Triple::UNSTRUCTURED_UNIT)
        .map(|inv| divide_dbz(p, Triple::ZERO) == multiply(p, inv))
        .unwrap_or(false);
    if ok { println!("✓"); passed += 1; }
    else { println!("✗"); failed += 1; }

    // Test 5: Postfix conversion
    print!("Postfix conversion... ");
    let postfix = infix_to_postfix("1,0,0 + 2,0,0 * 3,0,0")
        .map(|p| postfix_strings(&p))
        .unwrap_or_default();
    if postfix == ["1,0,0", "2,0,0", "3,0,0", "*", "+"] {
        println!("✓");
        passed += 1;
    } else {
        println!("✗ (got {:?})", postfix);
        failed += 1;
    }

    // Test 6: Operand order
    print!("Subtraction operand order... ");
    let result = solve(Mode::Std, "5,0,0 - 2,0,0").to_string();
    if result == "3,0,0" {
        println!("✓");
        passed += 1;
    } else {
        println!("✗ (got {}, expected 3,0,0)", result);
        failed += 1;
    }

    // Test 7: End-to-end STD vs DBZ
    print!("1,0,0 / 0,0,0 under STD and DBZ... ");
    let std_result = solve(Mode::Std, "1,0,0 / 0,0,0").to_string();
    let dbz_result = solve(Mode::Dbz, "1,0,0 / 0,0,0").to_string();
    if std_result == "ERR" && !dbz_result.starts_with("ERR") {
        println!("✓");
        passed += 1;
    } else {
        println!("✗ (STD {}, DBZ {})", std_result, dbz_result);
        failed += 1;
    }

    // Test 8: Batch order
    print!("Batch order preservation... ");
    let batch = ["1,0,0 + 1,0,0", "0,0,1 / 0,0,0", "2,0,0 - 5,0,0"];
    let results = run_batch(Mode::Std, &batch, true).results();
    if results == ["2,0,0", "ERR", "-3,0,0"] {
        println!("✓");
        passed += 1;
    } else {
        println!("✗ (got {:?})", results);
        failed += 1;
    }

    println!();
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Results: {} passed, {} failed", passed, failed);

    if failed == 0 {
        println!("✓ All tests passed!");
    } else {
        std::process::exit(1);
    }
}
