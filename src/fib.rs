use num_bigint::BigUint;
use num_traits::{One, Zero};
use std::collections::HashMap;

/// Four ways of computing the nth Fibonacci number, F(0) = 0 and F(1) = 1.
///
/// Every variant returns the same exact value; they only differ in time and
/// space complexity.
pub struct FibUtil;

impl FibUtil {
    /// Naive recursion, exponential in `n`.
    pub fn fib_recursive(n: usize) -> BigUint {
        if n < 2 {
            BigUint::from(n)
        } else {
            Self::fib_recursive(n - 1) + Self::fib_recursive(n - 2)
        }
    }

    /// Top-down recursion with a fresh cache, linear in `n`.
    ///
    /// Recursion depth grows with `n`, so this is only practical for small
    /// indices; large ones overflow the stack.
    pub fn fib_recursive_memoized(n: usize) -> BigUint {
        let mut cache = HashMap::new();
        Self::fib_recursive_memoized_with_cache(n, &mut cache)
    }

    /// Same as [`FibUtil::fib_recursive_memoized`] but threads a caller-owned
    /// cache. After the call the cache holds F(k) for every `2 <= k <= n`.
    ///
    /// Only practical for small `n`, see [`FibUtil::fib_recursive_memoized`].
    pub fn fib_recursive_memoized_with_cache(
        n: usize,
        cache: &mut HashMap<usize, BigUint>,
    ) -> BigUint {
        if n < 2 {
            return BigUint::from(n);
        }

        if let Some(result) = cache.get(&n) {
            return result.clone();
        }

        let result = Self::fib_recursive_memoized_with_cache(n - 1, cache)
            + Self::fib_recursive_memoized_with_cache(n - 2, cache);
        cache.insert(n, result.clone());
        result
    }

    /// Loop keeping only the last two values.
    pub fn fib_iterative(n: usize) -> BigUint {
        if n < 2 {
            return BigUint::from(n);
        }

        let mut a = BigUint::zero();
        let mut b = BigUint::one();

        for _ in 2..=n {
            let next = &a + &b;
            a = std::mem::replace(&mut b, next);
        }
        b
    }

    /// Loop storing the whole sequence up to `n`.
    pub fn fib_iterative_with_history(n: usize) -> BigUint {
        if n < 2 {
            return BigUint::from(n);
        }

        let mut history = vec![BigUint::zero(); n + 1];
        history[1] = BigUint::one();

        for i in 2..=n {
            history[i] = &history[i - 1] + &history[i - 2];
        }
        std::mem::take(&mut history[n])
    }
}

#[cfg(test)]
mod fib_test {
    use crate::fib::BigUint;
    use crate::fib::FibUtil;
    use crate::fib::HashMap;
    use rand::Rng;

    const VARIANTS: [(&str, fn(usize) -> BigUint); 4] = [
        ("recursive", FibUtil::fib_recursive),
        ("recursive memoized", FibUtil::fib_recursive_memoized),
        ("iterative", FibUtil::fib_iterative),
        ("iterative with history", FibUtil::fib_iterative_with_history),
    ];

    #[test]
    fn test_known_values() {
        let known: [(usize, u64); 4] = [(0, 0), (1, 1), (10, 55), (20, 6765)];

        for (name, fib) in VARIANTS {
            for (n, expected) in known {
                assert_eq!(
                    fib(n),
                    BigUint::from(expected),
                    "{} returned a wrong value for n={}",
                    name,
                    n
                );
            }
        }
    }

    #[test]
    fn test_all_variants_agree() {
        // Set parameters
        const MAX_N: usize = 30;

        for n in 0..=MAX_N {
            let expected = FibUtil::fib_iterative(n);
            for (name, fib) in VARIANTS {
                assert_eq!(fib(n), expected, "{} disagrees for n={}", name, n);
            }
        }
    }

    #[test]
    fn test_iterative_variants_agree_random() {
        // Set parameters
        const SAMPLES: usize = 50;
        const MAX_N: usize = 2000;

        let mut rng = rand::thread_rng();
        for _ in 0..SAMPLES {
            let n = rng.gen_range(0..=MAX_N);
            assert_eq!(
                FibUtil::fib_iterative(n),
                FibUtil::fib_iterative_with_history(n),
                "Iterative variants disagree for n={}",
                n
            );
        }
    }

    #[test]
    fn test_memoized_agrees_random() {
        // Set parameters
        const SAMPLES: usize = 20;
        const MAX_N: usize = 500;

        let mut rng = rand::thread_rng();
        for _ in 0..SAMPLES {
            let n = rng.gen_range(0..=MAX_N);
            assert_eq!(
                FibUtil::fib_recursive_memoized(n),
                FibUtil::fib_iterative(n),
                "Memoized variant disagrees for n={}",
                n
            );
        }
    }

    #[test]
    fn test_beyond_u64() {
        // F(93) is the largest value that fits in a u64
        let f93 = FibUtil::fib_iterative(93);
        assert_eq!(f93, BigUint::from(12_200_160_415_121_876_738u64));

        let f100 = FibUtil::fib_iterative_with_history(100);
        assert_eq!(f100.to_string(), "354224848179261915075");
        assert_eq!(FibUtil::fib_recursive_memoized(100), f100);
    }

    #[test]
    fn test_memoized_fills_cache() {
        // Set parameters
        const N: usize = 15;

        let mut cache = HashMap::new();
        let result = FibUtil::fib_recursive_memoized_with_cache(N, &mut cache);

        assert_eq!(result, BigUint::from(610u32));
        assert_eq!(cache.len(), N - 1, "Cache should hold F(2)..=F(N)");
        for k in 2..=N {
            assert_eq!(
                cache.get(&k),
                Some(&FibUtil::fib_iterative(k)),
                "Cache entry for {} is wrong",
                k
            );
        }
    }

    #[test]
    fn test_memoized_reuses_cache() {
        let mut cache = HashMap::new();
        cache.insert(5, BigUint::from(1000u32));

        // A poisoned entry is returned as is, proving the cache is consulted
        let result = FibUtil::fib_recursive_memoized_with_cache(5, &mut cache);
        assert_eq!(result, BigUint::from(1000u32));
        assert_eq!(cache.len(), 1, "No new entries expected");
    }

    #[test]
    fn test_memoized_moderate_depth() {
        // Set parameters
        const N: usize = 1000;

        // Recursion depth equals N, which still fits the default test thread stack
        assert_eq!(
            FibUtil::fib_recursive_memoized(N),
            FibUtil::fib_iterative(N),
            "Memoized variant disagrees for n={}",
            N
        );
    }
}
