use crate::error::{Error, Result};
use crate::fib::FibUtil;
use log::{debug, info, warn};
use num_bigint::BigUint;
use std::fmt;
use std::hint::black_box;
use std::time::{Duration, Instant};

const DEFAULT_N: usize = 20;
const DEFAULT_ITERATIONS: u32 = 1000;
const WARMUP_CALLS: u32 = 100;
const SLOW_RECURSION_N: usize = 35;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Recursive,
    RecursiveMemoized,
    Iterative,
    IterativeWithHistory,
}

impl Variant {
    pub const ALL: [Variant; 4] = [
        Variant::Recursive,
        Variant::RecursiveMemoized,
        Variant::Iterative,
        Variant::IterativeWithHistory,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Variant::Recursive => "Fib Rec",
            Variant::RecursiveMemoized => "Fib Rec Memo",
            Variant::Iterative => "Fib Loop",
            Variant::IterativeWithHistory => "Fib Loop Memory",
        }
    }

    pub fn compute(self, n: usize) -> BigUint {
        match self {
            Variant::Recursive => FibUtil::fib_recursive(n),
            Variant::RecursiveMemoized => FibUtil::fib_recursive_memoized(n),
            Variant::Iterative => FibUtil::fib_iterative(n),
            Variant::IterativeWithHistory => FibUtil::fib_iterative_with_history(n),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchConfig {
    pub n: usize,
    pub iterations: u32,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            n: DEFAULT_N,
            iterations: DEFAULT_ITERATIONS,
        }
    }
}

impl BenchConfig {
    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(Error::ZeroIterations);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BenchResult {
    pub variant: Variant,
    pub iterations: u32,
    /// Sum of the timed calls, warmup excluded.
    pub total: Duration,
    /// Fastest single call.
    pub min: Duration,
}

impl BenchResult {
    pub fn avg_nanos(&self) -> f64 {
        self.total.as_nanos() as f64 / f64::from(self.iterations)
    }
}

#[derive(Debug, Clone)]
pub struct Report {
    pub n: usize,
    pub results: Vec<BenchResult>,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "Benchmark Results (n={}):", self.n)?;
        writeln!(f, "{}", "-".repeat(78))?;
        for result in &self.results {
            writeln!(
                f,
                "{:<25} {:>12.2} ns/iter (min: {:>9} ns) {:>9} iters",
                result.variant.name(),
                result.avg_nanos(),
                result.min.as_nanos(),
                result.iterations
            )?;
        }
        Ok(())
    }
}

/// Warms `compute` up, then times each of `config.iterations` calls and
/// checks every result against `expected`.
fn measure<F>(
    name: &'static str,
    config: &BenchConfig,
    expected: &BigUint,
    mut compute: F,
) -> Result<(Duration, Duration)>
where
    F: FnMut(usize) -> BigUint,
{
    for _ in 0..WARMUP_CALLS {
        black_box(compute(black_box(config.n)));
    }

    let mut total = Duration::ZERO;
    let mut min = Duration::MAX;
    for _ in 0..config.iterations {
        let start = Instant::now();
        let result = black_box(compute(black_box(config.n)));
        let elapsed = start.elapsed();

        if result != *expected {
            return Err(Error::IncorrectResult { name, n: config.n });
        }

        total += elapsed;
        min = min.min(elapsed);
    }

    Ok((total, min))
}

/// Times `config.iterations` calls of `variant` after a warmup pass.
///
/// Every result is checked against [`FibUtil::fib_iterative`].
pub fn bench_variant(variant: Variant, config: &BenchConfig) -> Result<BenchResult> {
    config.validate()?;

    if variant == Variant::Recursive && config.n > SLOW_RECURSION_N {
        warn!(
            "n={} is above {}, {} will take a long time",
            config.n, SLOW_RECURSION_N, variant
        );
    }

    info!(
        "Benchmarking {} (n={}, {} iterations)",
        variant, config.n, config.iterations
    );

    let expected = FibUtil::fib_iterative(config.n);
    let (total, min) = measure(variant.name(), config, &expected, |n| variant.compute(n))?;

    let result = BenchResult {
        variant,
        iterations: config.iterations,
        total,
        min,
    };
    debug!(
        "{} took {:.2} ns/iter (min {} ns)",
        variant,
        result.avg_nanos(),
        min.as_nanos()
    );
    Ok(result)
}

pub fn run_benchmarks(config: &BenchConfig) -> Result<Report> {
    let results = Variant::ALL
        .iter()
        .map(|&variant| bench_variant(variant, config))
        .collect::<Result<Vec<_>>>()?;

    Ok(Report {
        n: config.n,
        results,
    })
}
