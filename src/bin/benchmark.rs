//! Throughput benchmark: random soups advanced and then fully rewound

use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use rayon::prelude::*;
use sparse_life::{LifeEngine, presets};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "benchmark")]
#[command(about = "Advance random soups, rewind them, and report timings", long_about = None)]
struct Args {
    /// Generations to advance per soup
    #[arg(short, long, default_value = "200")]
    generations: u32,

    /// Independent soups per size, run in parallel
    #[arg(short = 'n', long, default_value = "8")]
    soups: u64,

    /// Soup side lengths
    #[arg(short = 'S', long, value_delimiter = ',', default_value = "32,64,128")]
    sizes: Vec<i64>,

    /// Probability of each soup cell starting alive
    #[arg(short, long, default_value = "0.35")]
    density: f64,

    /// Base RNG seed; soup i uses seed + i
    #[arg(long, default_value = "42")]
    seed: u64,
}

struct SoupResult {
    advance_ms: f64,
    rewind_ms: f64,
    final_population: usize,
    restored: bool,
}

fn run_soup(size: i64, seed: u64, args: &Args) -> SoupResult {
    let mut rng = StdRng::seed_from_u64(seed);
    let soup = presets::random_soup(&mut rng, size, size, args.density);

    let mut engine = LifeEngine::new();
    soup.place_on(&mut engine, 0, 0);
    let initial = engine.grid().clone();

    let start = Instant::now();
    for _ in 0..args.generations {
        engine.next_generation();
    }
    let advance_ms = start.elapsed().as_secs_f64() * 1000.0;
    let final_population = engine.population();

    let start = Instant::now();
    while engine.can_rewind() {
        engine.previous_generation();
    }
    let rewind_ms = start.elapsed().as_secs_f64() * 1000.0;

    SoupResult {
        advance_ms,
        rewind_ms,
        final_population,
        restored: engine.generation() == 0 && engine.grid() == &initial,
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    info!(?args, "starting benchmark");

    println!("=== Sparse Life Benchmark ===\n");
    println!(
        "{:>10} {:>8} {:>14} {:>14} {:>12}",
        "Size", "Soups", "Advance ms/gen", "Rewind ms/gen", "Avg pop"
    );
    println!("{:-<62}", "");

    let generations = f64::from(args.generations.max(1));
    let mut all_restored = true;

    for &size in &args.sizes {
        let results: Vec<SoupResult> = (0..args.soups)
            .into_par_iter()
            .map(|i| run_soup(size, args.seed.wrapping_add(i), &args))
            .collect();

        let count = results.len().max(1) as f64;
        let advance = results.iter().map(|r| r.advance_ms).sum::<f64>() / count / generations;
        let rewind = results.iter().map(|r| r.rewind_ms).sum::<f64>() / count / generations;
        let population = results.iter().map(|r| r.final_population).sum::<usize>() as f64 / count;

        let failed = results.iter().filter(|r| !r.restored).count();
        if failed > 0 {
            error!(size, failed, "rewind did not restore the initial soup");
            all_restored = false;
        }

        println!(
            "{:>10} {:>8} {:>14.4} {:>14.4} {:>12.1}",
            format!("{}x{}", size, size),
            results.len(),
            advance,
            rewind,
            population
        );
    }

    if all_restored {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
