//! Timing harness for Gaussian elimination
//!
//! For growing system sizes, builds a random augmented matrix and times forward
//! elimination and back-substitution separately. Output is CSV on stdout:
//! `n,elim,subs` with times in microseconds.
//!
//! Usage:
//!     cargo run --release --bin measure-gauss-elim > timings.csv
//!     cargo run --release --bin measure-gauss-elim -- --max-size 200 --seed 7

use clap::Parser;
use math_gauss::{GaussConfig, NoTrace, Solution, back_substitute_into, eliminate};
use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(
    name = "measure-gauss-elim",
    about = "Measure elimination and substitution time for growing system sizes"
)]
struct Cli {
    /// Largest system size
    #[arg(long, default_value_t = 1000)]
    max_size: usize,

    /// Disable partial pivoting
    #[arg(long)]
    no_pivot: bool,

    /// Optional random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,
}

/// Sizes 5, 10, ..., 95 then 100, 150, ... up to `max`
fn sizes(max: usize) -> Vec<usize> {
    let mut out = Vec::new();
    let mut n = 5;
    while n <= max {
        out.push(n);
        n += if n < 100 { 5 } else { 50 };
    }
    out
}

fn random_system(n: usize, rng: &mut StdRng) -> Array2<f64> {
    Array2::from_shape_fn((n, n + 1), |_| rng.random_range(0..100) as f64)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Cli::parse();
    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    let mut rng = StdRng::seed_from_u64(seed);
    log::info!("measure-gauss-elim: seed = {}", seed);

    let config = GaussConfig::default().with_pivoting(!args.no_pivot);

    println!("n,elim,subs");
    for n in sizes(args.max_size) {
        let mut a = random_system(n, &mut rng);

        let begin = Instant::now();
        eliminate(&mut a, &config)?;
        let elim_us = begin.elapsed().as_micros();

        let mut solution = Solution::new(n);
        let begin = Instant::now();
        let result = back_substitute_into(&a, &mut solution, &config, &mut NoTrace);
        let subs_us = begin.elapsed().as_micros();

        if let Err(e) = result {
            log::warn!("n = {}: {}", n, e);
        }

        println!("{},{},{}", n, elim_us, subs_us);
    }

    Ok(())
}
