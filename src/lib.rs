mod bench;
mod error;
mod fib;

pub use bench::{bench_variant, run_benchmarks, BenchConfig, BenchResult, Report, Variant};
pub use error::{Error, Result};
pub use fib::FibUtil;
