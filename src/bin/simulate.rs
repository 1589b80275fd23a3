//! Stay-vs-switch experiment driver.
//!
//! Runs N Monty Hall trials, prints the per-strategy win/lose proportion
//! table, and optionally writes artifacts:
//!   - `proportions.json` — counts + full-precision rates per strategy
//!   - `trials.csv` — the raw 2N-record batch (strategy,outcome) in trial order

use std::fs;
use std::io::Write;

use monty::env_config::init_rayon_threads_lenient;
use monty::simulation::{aggregate_proportions, format_table, save_proportions, simulate_batch_timed};
use monty::types::TrialResult;

struct Args {
    num_trials: usize,
    seed: u64,
    output: Option<String>,
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut num_trials = 100usize;
    let mut seed = 42u64;
    let mut output: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--trials" => {
                i += 1;
                if i < args.len() {
                    num_trials = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --trials value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--seed" => {
                i += 1;
                if i < args.len() {
                    seed = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --seed value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--output" => {
                i += 1;
                if i < args.len() {
                    output = Some(args[i].clone());
                }
            }
            "--help" | "-h" => {
                println!("Usage: simulate [--trials N] [--seed S] [--output DIR]");
                println!();
                println!("Monty Hall stay-vs-switch experiment.");
                println!("  --trials N    Trials to run (default: 100)");
                println!("  --seed S      RNG seed (default: 42)");
                println!("  --output DIR  Write JSON/CSV results to DIR");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                std::process::exit(1);
            }
        }
        i += 1;
    }

    Args {
        num_trials,
        seed,
        output,
    }
}

fn write_trials_csv(results: &[TrialResult], path: &str) {
    let mut f = std::io::BufWriter::new(fs::File::create(path).unwrap_or_else(|e| {
        eprintln!("Failed to create {}: {}", path, e);
        std::process::exit(1);
    }));
    writeln!(f, "strategy,outcome").unwrap();
    for r in results {
        writeln!(f, "{},{}", r.strategy.name(), r.outcome.name()).unwrap();
    }
}

fn main() {
    let args = parse_args();
    let num_threads = init_rayon_threads_lenient();

    println!("═══════════════════════════════════════════════════════");
    println!("  Monty Hall: stay vs switch");
    println!("═══════════════════════════════════════════════════════");
    println!("  Trials:  {:>10}", args.num_trials);
    println!("  Seed:    {:>10}", args.seed);
    println!("  Threads: {:>10}", num_threads);
    if let Some(ref dir) = args.output {
        println!("  Output:  {}", dir);
    }
    println!();

    let summary = simulate_batch_timed(args.num_trials, args.seed).unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1);
    });

    let table = aggregate_proportions(&summary.results, summary.num_trials, summary.seed);
    print!("{}", format_table(&table));
    println!();
    println!(
        "  {} trials ({} results) in {:.1} ms",
        summary.num_trials,
        summary.results.len(),
        summary.elapsed.as_secs_f64() * 1000.0
    );

    if let Some(ref output_dir) = args.output {
        fs::create_dir_all(output_dir).unwrap_or_else(|e| {
            eprintln!("Failed to create output directory: {}", e);
            std::process::exit(1);
        });

        let json_path = format!("{}/proportions.json", output_dir);
        save_proportions(&table, &json_path);
        println!("  Wrote {}", json_path);

        let csv_path = format!("{}/trials.csv", output_dir);
        write_trials_csv(&summary.results, &csv_path);
        println!("  Wrote {}", csv_path);
    }
}
