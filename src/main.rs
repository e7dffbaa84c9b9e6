use clap::Parser;
use fib_bench::{run_benchmarks, BenchConfig, FibUtil};
use log::error;
use std::process;

#[derive(Debug, Parser)]
#[clap(name = "fib-bench")]
#[clap(about = "Times four Fibonacci implementations and prints the average cost per call", long_about = None)]
struct Cli {
    /// Fibonacci index computed by every variant
    #[clap(short, long, default_value_t = BenchConfig::default().n)]
    n: usize,

    /// Number of calls per variant
    #[clap(short, long, default_value_t = BenchConfig::default().iterations)]
    iterations: u32,
}

fn setup_log() {
    env_logger::init();
}

fn run(cli: Cli) -> fib_bench::Result<()> {
    println!("Fibonacci({}) = {}", 10, FibUtil::fib_iterative(10));

    let config = BenchConfig {
        n: cli.n,
        iterations: cli.iterations,
    };
    let report = run_benchmarks(&config)?;
    print!("{}", report);
    Ok(())
}

fn main() {
    setup_log();
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        error!("{}", e);
        process::exit(1);
    }
}
