use std::time::Instant;

use gridmeet::constants::{point_label, DEFAULT_GRID_SIZE, DEFAULT_SEED, DEFAULT_TRIALS};
use gridmeet::env_config;
use gridmeet::simulation::{build_report, run_analysis, run_trial_with_seed, save_report};

struct Args {
    grid_size: usize,
    trials: usize,
    seed: u64,
    output: Option<String>,
    single: bool,
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut parsed = Args {
        grid_size: DEFAULT_GRID_SIZE,
        trials: DEFAULT_TRIALS,
        seed: DEFAULT_SEED,
        output: None,
        single: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--grid-size" => {
                i += 1;
                if i < args.len() {
                    parsed.grid_size = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --grid-size value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--trials" => {
                i += 1;
                if i < args.len() {
                    parsed.trials = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --trials value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--seed" => {
                i += 1;
                if i < args.len() {
                    parsed.seed = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --seed value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--output" => {
                i += 1;
                if i < args.len() {
                    parsed.output = Some(args[i].clone());
                }
            }
            "--single" => {
                parsed.single = true;
            }
            "--help" | "-h" => {
                println!(
                    "Usage: gridmeet-simulate [--grid-size N] [--trials T] [--seed S] [--output DIR] [--single]"
                );
                println!();
                println!("Options:");
                println!(
                    "  --grid-size N  Grid dimension (default: {})",
                    DEFAULT_GRID_SIZE
                );
                println!(
                    "  --trials T     Number of trials (default: {})",
                    DEFAULT_TRIALS
                );
                println!("  --seed S       RNG seed (default: {})", DEFAULT_SEED);
                println!("  --output DIR   Write the analysis report JSON to DIR");
                println!("  --single       Run one trial and print the round-by-round trace");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!(
                    "Usage: gridmeet-simulate [--grid-size N] [--trials T] [--seed S] [--output DIR] [--single]"
                );
                std::process::exit(1);
            }
        }
        i += 1;
    }

    parsed
}

fn run_single(grid_size: usize, seed: u64) {
    let trial = match run_trial_with_seed(grid_size, seed) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    println!("Single trial ({}×{} grid, seed {})", grid_size, grid_size, seed);
    for (round, (near, far)) in trial.near_path.iter().zip(&trial.far_path).enumerate() {
        let tag = if round == 0 {
            "Start ".to_string()
        } else {
            format!("Step {}", round)
        };
        println!(
            "  {}  near ({}, {})   far ({}, {})   distance {}",
            tag,
            near.x,
            near.y,
            far.x,
            far.y,
            near.distance(far)
        );
    }
    println!();

    match trial.meeting_point_index() {
        Some(i) => {
            let p = trial.near_final();
            println!(
                "Meeting at point {} ({}, {}) after {} steps",
                point_label(i),
                p.x,
                p.y,
                trial.steps_taken
            );
        }
        None => {
            let near = trial.near_final();
            let far = trial.far_final();
            println!(
                "No meeting: near ended at ({}, {}), far at ({}, {})",
                near.x, near.y, far.x, far.y
            );
        }
    }
}

fn main() {
    let args = parse_args();

    if args.single {
        run_single(args.grid_size, args.seed);
        return;
    }

    println!(
        "Grid Meeting Simulation ({}×{}, {} trials)",
        args.grid_size, args.grid_size, args.trials
    );
    env_config::init_rayon_threads();
    println!();

    let start = Instant::now();
    let agg = match run_analysis(args.grid_size, args.trials, args.seed) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    let elapsed = start.elapsed();

    let per_trial_ns = elapsed.as_secs_f64() * 1e9 / args.trials as f64;
    let throughput = args.trials as f64 / elapsed.as_secs_f64();
    println!("  Elapsed:     {:.1} ms", elapsed.as_secs_f64() * 1000.0);
    println!("  Per trial:   {:.0} ns", per_trial_ns);
    println!("  Throughput:  {:.0} trials/sec", throughput);
    println!();

    let report = build_report(&agg);

    println!("Results:");
    println!(
        "  Meetings:    {} / {}",
        report.meeting_count, report.trials
    );
    println!("  Empirical:   {:.4}", report.empirical_probability);
    println!(
        "  Exact:       {:.4}  (C(2n-2,n-1) / 4^(n-1))",
        report.exact_probability
    );
    println!(
        "  1/n model:   {:.4}",
        report.theoretical_probability
    );
    println!(
        "  Std error:   {:.4}  (z = {:+.2}, |z| < 3.0 expected)",
        report.std_error, report.z_score
    );
    if report.z_score.abs() > 3.5 {
        eprintln!(
            "WARNING: empirical probability deviates from the exact value by {:.1} standard errors — possible bug!",
            report.z_score.abs()
        );
    }
    println!();

    println!("Meeting points:");
    for p in &report.points {
        println!(
            "  {:<4} ({},{})  {:>9}   {:>5.1}%  (expected {:>5.1}%)",
            p.label,
            p.x,
            p.y,
            p.count,
            p.share * 100.0,
            p.expected_share * 100.0
        );
    }

    if let Some(ref output_dir) = args.output {
        let path = format!("{}/analysis_report.json", output_dir);
        save_report(&report, &path);
        println!();
        println!("  Report saved: {}", path);
    }
}
