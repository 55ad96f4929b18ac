//! Gaussian elimination front end
//!
//! Reads a matrix as a flat row-major list of numbers and either solves the
//! augmented system or reduces a plain matrix to row-echelon form.
//!
//! Usage:
//!     cargo run --bin gauss-elim -- 5 0 2 0 1 0 2 2 3 2 -2 4 -3 0 1 -7 6 1 -6 -5 6
//!     cargo run --bin gauss-elim -- --no-pivot --precision 4 3 2 1 5 1 3 10

use clap::{Parser, ValueEnum};
use math_gauss::{
    GaussConfig, LogTracer, NoTrace, PivotSearch, Precision, SubstitutionPolicy, Tracer,
    format_matrix, format_solution, matrix_from_row_major, solve_traced,
};
use std::process;

#[derive(Parser, Debug)]
#[command(
    name = "gauss-elim",
    about = "Solve a linear system by Gaussian elimination with optional partial pivoting"
)]
struct Cli {
    /// Number of columns (including the right-hand side for an augmented matrix)
    cols: usize,

    /// Matrix entries in row-major order
    #[arg(allow_negative_numbers = true, required = true)]
    values: Vec<f64>,

    /// Disable partial pivoting
    #[arg(long)]
    no_pivot: bool,

    /// Treat the input as a plain matrix (no right-hand side, no substitution)
    #[arg(long)]
    no_aug: bool,

    /// Significant digits kept after every operation (-1 = exact)
    #[arg(long, allow_negative_numbers = true)]
    precision: Option<i32>,

    /// Pivot search used on an exact-zero pivot
    #[arg(long, value_enum)]
    pivot_search: Option<PivotSearchChoice>,

    /// Fail instead of assigning free variables
    #[arg(long)]
    strict: bool,

    /// JSON configuration file; command-line flags override its values
    #[arg(long)]
    config: Option<String>,

    /// Log every pivot swap, elimination and substitution step
    #[arg(long)]
    trace: bool,

    /// Decimals used when printing
    #[arg(long, default_value_t = 4)]
    decimals: usize,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum PivotSearchChoice {
    SignedMaximum,
    Magnitude,
}

impl From<PivotSearchChoice> for PivotSearch {
    fn from(choice: PivotSearchChoice) -> Self {
        match choice {
            PivotSearchChoice::SignedMaximum => PivotSearch::SignedMaximum,
            PivotSearchChoice::Magnitude => PivotSearch::Magnitude,
        }
    }
}

fn build_config(args: &Cli) -> anyhow::Result<GaussConfig> {
    let mut config = match &args.config {
        Some(path) => GaussConfig::from_file(path)?,
        None => GaussConfig::default(),
    };

    if args.no_pivot {
        config.pivoting = false;
    }
    if args.no_aug {
        config.augmented = false;
    }
    if let Some(digits) = args.precision {
        config.precision = Precision::from_digits(digits)?;
    }
    if let Some(choice) = args.pivot_search {
        config.pivot_search = choice.into();
    }
    if args.strict {
        config.substitution = SubstitutionPolicy::Strict;
    }

    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let default_filter = if args.trace { "trace" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
    let config = build_config(&args)?;

    let mut a = matrix_from_row_major(args.cols, &args.values)?;
    let (m, n) = a.dim();

    println!("******* Gaussian Elimination ******");
    println!("Number of columns = {}, Number of rows = {}", n, m);
    println!(
        "Pivoting = {}, augmented = {}, precision = {}",
        config.pivoting, config.augmented, config.precision
    );
    print!("{}", format_matrix(&a, args.decimals));

    let mut log_tracer = LogTracer {
        decimals: args.decimals,
    };
    let mut no_trace = NoTrace;
    let tracer: &mut dyn Tracer<f64> = if args.trace {
        &mut log_tracer
    } else {
        &mut no_trace
    };

    match solve_traced(&mut a, &config, tracer) {
        Ok(Some(solution)) => {
            println!();
            print!("{}", format_solution(&solution, args.decimals));
            if !solution.free_variables().is_empty() {
                let free: Vec<String> = solution
                    .free_variables()
                    .iter()
                    .map(|j| format!("x[{}]", j))
                    .collect();
                println!("Free variables set to 1: {}", free.join(", "));
            }
        }
        Ok(None) => {
            println!("\nRow-echelon form");
            print!("{}", format_matrix(&a, args.decimals));
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(e.status_code());
        }
    }

    Ok(())
}
