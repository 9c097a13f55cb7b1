use std::{
    fs::File,
    io::{self, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};
use mergebench::{
    fmt_open_err, path_str,
    format::{format_measurement, format_time, report_header},
    harness, Algorithm, BenchError, Measurement, SequenceGenerator, Suite,
};
use clap::Parser;
use colored::*;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Algorithm name or index, see --list.
    #[arg(required_unless_present = "list")]
    algorithm: Option<Algorithm>,
    /// Suite file; the built-in suite is used when absent.
    #[arg(long)]
    suite: Option<PathBuf>,
    #[arg(long)]
    seed: Option<u64>,
    /// Only run benchmarks with this label. May be repeated.
    #[arg(long)]
    only: Vec<String>,
    /// Write measurements as json.
    #[arg(long)]
    out: Option<PathBuf>,
    #[arg(long, action)]
    list: bool,
    // Ignore --bench provided by cargo.
    #[arg(long, action)]
    bench: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cfg!(debug_assertions) {
        println!("{}", "warning: running in debug mode".yellow().bold());
    }

    if cli.list {
        for algorithm in Algorithm::ALL {
            println!("{}: {}", algorithm.index(), algorithm);
        }
        return ExitCode::SUCCESS;
    }

    match bench_suite(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let msg = format!("error: {}", e);
            eprintln!("{}", msg.red().bold());
            ExitCode::FAILURE
        }
    }
}

fn bench_suite(cli: &Cli) -> Result<(), BenchError> {
    let algorithm = cli.algorithm
        .ok_or_else(|| BenchError::Suite("no algorithm given".to_string()))?;

    let mut suite = match &cli.suite {
        Some(path) => Suite::from_file(path)?,
        None => Suite::builtin()?,
    };
    suite.retain_labels(&cli.only);

    if suite.benchmark.is_empty() {
        return Err(BenchError::Suite("no benchmark matches found".to_string()));
    }

    let seed = cli.seed.unwrap_or_else(rand::random);
    println!("{} {}", "seed".bold(), seed);
    let mut generator = SequenceGenerator::new(seed);

    println!("{}", report_header().bold());

    let mut results: Vec<Measurement> = Vec::with_capacity(suite.benchmark.len());
    let mut outcome = Ok(());

    for config in &suite.benchmark {
        // Printed once the inputs exist, so the pause that follows is the
        // timed run.
        let run = harness::run_benchmark_observed(&mut generator, config, algorithm,
            |config| println!("{}", config.to_string().green().bold()));

        match run {
            Ok(measurement) => {
                println!("{}", format_measurement(&measurement));
                println!("csum:{}  total {}\n",
                    measurement.checksum, format_time(measurement.elapsed));
                let _ = io::stdout().flush();
                results.push(measurement);
            }
            Err(e) => {
                outcome = Err(e);
                break;
            }
        }
    }

    if let Some(out) = &cli.out {
        write_results(&results, out)?;
    }

    outcome
}

fn write_results(results: &[Measurement], path: &Path) -> Result<(), BenchError> {
    let results_file = File::options()
        .write(true).create(true).truncate(true)
        .open(path)
        .map_err(|e| BenchError::Output(fmt_open_err(e, path)))?;

    serde_json::to_writer_pretty(results_file, results)
        .map_err(|e| BenchError::Output(format!(
            "failed to write {}: {}",
            path_str(path), e
        )))?;

    Ok(())
}
