//! Precision sweep
//!
//! Builds one random augmented system and, for each digit budget, rounds its
//! entries to that many significant digits and solves it with and without
//! partial pivoting under the same budget.
//!
//! Usage:
//!     cargo run --bin precision-sweep
//!     cargo run --bin precision-sweep -- --size 3 --min-digits 2 --max-digits 8 --seed 42

use clap::Parser;
use math_gauss::{GaussConfig, Precision, format_solution, round_to_digits, solve};
use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Parser, Debug)]
#[command(
    name = "precision-sweep",
    about = "Compare pivoted and unpivoted elimination across precision budgets"
)]
struct Cli {
    /// Number of unknowns
    #[arg(long, default_value_t = 2)]
    size: usize,

    /// Smallest number of significant digits
    #[arg(long, default_value_t = 3)]
    min_digits: u32,

    /// Largest number of significant digits
    #[arg(long, default_value_t = 6)]
    max_digits: u32,

    /// Optional random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,
}

fn run(label: &str, mut a: Array2<f64>, config: &GaussConfig) {
    match solve(&mut a, config) {
        Ok(Some(solution)) => {
            println!("\nOutput {}", label);
            print!("{}", format_solution(&solution, 6));
        }
        Ok(None) => {}
        Err(e) => println!("\nOutput {}: {}", label, e),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Cli::parse();
    if args.size == 0 {
        anyhow::bail!("--size must be at least 1");
    }
    if args.min_digits == 0 || args.min_digits > args.max_digits {
        anyhow::bail!(
            "Digit range requires 1 <= min <= max; got min={}, max={}",
            args.min_digits,
            args.max_digits
        );
    }

    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    let mut rng = StdRng::seed_from_u64(seed);
    log::info!("precision-sweep: seed = {}", seed);

    let n = args.size;
    let m = Array2::from_shape_fn((n, n + 1), |_| rng.random_range(-10.0..10.0));

    for digits in args.min_digits..=args.max_digits {
        println!("\n=== {} significant digits ===", digits);
        let a = m.mapv(|v| round_to_digits(v, digits));
        let config = GaussConfig::default().with_precision(Precision::Digits(digits));

        run("with pivoting", a.clone(), &config);
        run("without pivoting", a, &config.clone().with_pivoting(false));
    }

    Ok(())
}
